//! Subcommand implementations.

mod canon;
mod format;
mod split;

pub use canon::run_canon;
pub use format::run_format;
pub use split::run_split;

use anyhow::{bail, Result};
use urlt_core::{param_map, ParamMap};

/// Parses repeated `key=value` bindings into a shared namespace map,
/// seeding it with `shared` bindings first so explicit ones win.
pub(super) fn bindings(shared: &[String], own: &[String]) -> Result<ParamMap> {
    let map = param_map(Vec::<(String, String)>::new());
    {
        let mut m = map.borrow_mut();
        for pair in shared.iter().chain(own) {
            let Some((key, value)) = pair.split_once('=') else {
                bail!("invalid binding `{pair}`: expected key=value");
            };
            m.insert(key.to_string(), value.to_string());
        }
    }
    Ok(map)
}
