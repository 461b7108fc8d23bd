//! CLI for the urlt URL template engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use urlt_core::config;
use urlt_core::ValidationMode;

use commands::{run_canon, run_format, run_split};

/// Top-level CLI for the urlt URL template engine.
#[derive(Debug, Parser)]
#[command(name = "urlt")]
#[command(about = "urlt: resolve placeholders in URL templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// CLI-facing validation mode (maps onto the engine's mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Fail,
    Warn,
    Ignore,
}

impl From<ModeArg> for ValidationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Fail => ValidationMode::Fail,
            ModeArg::Warn => ValidationMode::Warn,
            ModeArg::Ignore => ValidationMode::Ignore,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve placeholders in a URL template and print the result.
    Format {
        /// Template, e.g. "/users/{id}" or "https://h/api/:version/x".
        template: String,

        /// Path parameter binding, key=value. Repeatable.
        #[arg(short = 'p', long = "path-param", value_name = "KEY=VALUE")]
        path_params: Vec<String>,

        /// Matrix parameter binding, key=value. Repeatable.
        #[arg(short = 'm', long = "matrix-param", value_name = "KEY=VALUE")]
        matrix_params: Vec<String>,

        /// Query parameter binding, key=value. Repeatable.
        #[arg(short = 'q', long = "query-param", value_name = "KEY=VALUE")]
        query_params: Vec<String>,

        /// Fragment parameter binding, key=value. Repeatable.
        #[arg(short = 'f', long = "fragment-param", value_name = "KEY=VALUE")]
        fragment_params: Vec<String>,

        /// Binding visible in all four namespaces (legacy shared map).
        #[arg(long = "shared", value_name = "KEY=VALUE")]
        shared_params: Vec<String>,

        /// Override the configured validation mode.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Split a URL into its authority prefix and token.
    Split {
        /// URL to split.
        url: String,
    },

    /// Print the canonical form of a path/query/fragment token.
    Canon {
        /// Token, e.g. "///a//b?x=1&x=2#f".
        token: String,

        /// Root path prefix to strip and re-attach (overrides config).
        #[arg(long, value_name = "PREFIX")]
        root: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Format {
                template,
                path_params,
                matrix_params,
                query_params,
                fragment_params,
                shared_params,
                mode,
            } => {
                let mode = mode.map(ValidationMode::from).unwrap_or(cfg.validation_mode);
                run_format(
                    &template,
                    &path_params,
                    &matrix_params,
                    &query_params,
                    &fragment_params,
                    &shared_params,
                    mode,
                )?;
            }
            CliCommand::Split { url } => run_split(&url),
            CliCommand::Canon { token, root } => {
                let root = root.or(cfg.root_path).unwrap_or_default();
                run_canon(&root, &token)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
