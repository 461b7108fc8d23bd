//! `urlt format <template>` – resolve placeholders and print the URL.

use anyhow::Result;
use urlt_core::pattern::RegexEngine;
use urlt_core::{UrlTemplateFormatter, ValidationMode};

use super::bindings;

#[allow(clippy::too_many_arguments)]
pub fn run_format(
    template: &str,
    path_params: &[String],
    matrix_params: &[String],
    query_params: &[String],
    fragment_params: &[String],
    shared_params: &[String],
    mode: ValidationMode,
) -> Result<()> {
    let formatter = UrlTemplateFormatter::new(
        Box::new(RegexEngine),
        mode,
        bindings(shared_params, path_params)?,
        bindings(shared_params, matrix_params)?,
        bindings(shared_params, query_params)?,
        bindings(shared_params, fragment_params)?,
    );
    let url = formatter.format_url(template)?;
    println!("{url}");
    Ok(())
}
