//! Path and final-segment extraction from a URL string.
//!
//! Works on the text exactly as typed: no normalization, no percent-encoding
//! or decoding, so spaces, non-ASCII and `\` survive into the filename.

/// Splits off a leading `scheme:` if the text before the first `:` is a
/// valid URL scheme (letter, then letters, digits, `+`, `-` or `.`).
fn strip_scheme(url: &str) -> &str {
    let Some((scheme, rest)) = url.split_once(':') else {
        return url;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        rest
    } else {
        url
    }
}

/// Returns the raw path component of `url`.
///
/// Query and fragment are cut first, then the scheme, then a `//authority`
/// prefix. Input without a scheme or authority is treated as a bare path.
pub fn url_path(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let rest = strip_scheme(&url[..end]);
    match rest.strip_prefix("//") {
        Some(authority_and_path) => match authority_and_path.find('/') {
            Some(i) => &authority_and_path[i..],
            None => "",
        },
        None => rest,
    }
}

/// Returns the text after the last `/` of the URL path (may be empty).
pub fn last_path_segment(url: &str) -> &str {
    let path = url_path(url);
    match path.rsplit_once('/') {
        Some((_, last)) => last,
        None => path,
    }
}
