//! `urlt canon <token>` – print the canonical form of a token.

use anyhow::Result;
use urlt_core::CanonicalPath;

pub fn run_canon(root: &str, token: &str) -> Result<()> {
    let canonical = CanonicalPath::parse(root, token)?;
    println!("{}", canonical.value());
    Ok(())
}
