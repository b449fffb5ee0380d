//! URL classification helpers.
//!
//! None of these fail: anything that cannot be parsed is simply "not a URL".

use url::{Host, Url};

/// Schemes that make an input a URL on their own.
const URL_SCHEMES: &[&str] = &[
    "http",
    "https",
    "file",
    "ftp",
    "about",
    "chrome",
    "chrome-extension",
    "data",
    "view-source",
];

/// Schemes of pages rendered by the browser itself.
const INTERNAL_SCHEMES: &[&str] = &["about", "chrome", "chrome-extension", "view-source"];

/// Whether the user input should be navigated to rather than searched for.
pub fn is_url(input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() || input.contains(char::is_whitespace) {
        return false;
    }

    if let Ok(url) = Url::parse(input) {
        if URL_SCHEMES.contains(&url.scheme()) {
            return true;
        }
    }

    match Url::parse(&format!("http://{}", input)) {
        Ok(url) => match url.host() {
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
            Some(Host::Domain(domain)) => domain == "localhost" || has_plausible_tld(domain),
            None => false,
        },
        Err(_) => false,
    }
}

fn has_plausible_tld(domain: &str) -> bool {
    match domain.trim_end_matches('.').rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty()
                && (tld.starts_with("xn--")
                    || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())))
        }
        None => false,
    }
}

/// Literal `http://` or `https://` prefix. Scheme-only forms such as
/// `http:weather` do not count.
pub fn is_http_or_https(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// True for `about:`, `chrome:` and similar browser-internal pages.
pub fn is_internal_url(location: &str) -> bool {
    Url::parse(location)
        .map(|url| INTERNAL_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false)
}
