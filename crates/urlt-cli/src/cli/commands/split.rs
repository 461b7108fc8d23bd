//! `urlt split <url>` – show the authority/token split.

use urlt_core::split;

pub fn run_split(url: &str) {
    let s = split(url);
    println!("prefix: {}", s.authority_prefix);
    println!("token:  {}", s.token);
}
