//! Authority/token splitting.
//!
//! Separates a URL into the untouched authority prefix (scheme + host + port,
//! userinfo stripped) and the token (path + query + fragment) that the
//! template engine is allowed to rewrite.

/// Result of splitting a URL. Transient: produced and consumed within one
/// `format_url` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Scheme + `//` + host[:port], or empty when the input has no authority.
    pub authority_prefix: String,
    /// Everything after the authority; the only region placeholders may
    /// appear in. Equals the whole input when there is no authority.
    pub token: String,
}

/// Splits `url` into `(authority_prefix, token)`.
///
/// Inputs without `//` after the scheme (`mailto:`, `data:`, relative paths)
/// and inputs with an empty host (`///a`) have no authority: the prefix is
/// empty and the entire input becomes the token. Userinfo is discarded from
/// the prefix, even when it contains embedded `:`. IPv6 literal hosts and
/// non-ASCII hosts round-trip unchanged.
pub fn split(url: &str) -> Split {
    let (scheme, rest) = match scheme_prefix(url) {
        Some((s, r)) => (s, r),
        None => ("", url),
    };

    let after_slashes = match rest.strip_prefix("//") {
        Some(a) => a,
        None => return no_authority(url),
    };

    // Authority extends to the first path/query/fragment delimiter.
    let end = after_slashes
        .find(['/', '?', '#'])
        .unwrap_or(after_slashes.len());
    let authority = &after_slashes[..end];
    let token = &after_slashes[end..];

    // Userinfo may itself contain `:`; everything up to the last `@` goes.
    let host_port = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };

    if host_port.is_empty() {
        return no_authority(url);
    }

    Split {
        authority_prefix: format!("{scheme}//{host_port}"),
        token: token.to_string(),
    }
}

fn no_authority(url: &str) -> Split {
    Split {
        authority_prefix: String::new(),
        token: url.to_string(),
    }
}

/// Splits a leading `scheme:` off `url`, returning `(scheme_with_colon, rest)`.
/// A scheme is a letter followed by letters, digits, `+`, `-`, or `.`.
fn scheme_prefix(url: &str) -> Option<(&str, &str)> {
    let colon = url.find(':')?;
    let scheme = &url[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((&url[..=colon], &url[colon + 1..]))
}
