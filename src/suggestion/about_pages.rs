//! Static set of internal `about:` pages.

/// Every internal page the browser knows about.
pub const ABOUT_PAGES: &[&str] = &[
    "about:about",
    "about:adblock",
    "about:autofill",
    "about:blank",
    "about:bookmarks",
    "about:brave",
    "about:certerror",
    "about:contributors",
    "about:downloads",
    "about:error",
    "about:extensions",
    "about:flash",
    "about:history",
    "about:newtab",
    "about:passwords",
    "about:preferences",
    "about:safebrowsing",
    "about:styles",
    "about:welcome",
];

/// Pages that only make sense as the target of a redirect.
const NON_NAVIGABLE: &[&str] = &[
    "about:blank",
    "about:certerror",
    "about:error",
    "about:flash",
    "about:newtab",
    "about:safebrowsing",
];

/// Whether the user may type `location` and land on it.
pub fn is_navigable_about_page(location: &str) -> bool {
    let page = location
        .split(['#', '?'])
        .next()
        .unwrap_or(location);
    page.starts_with("about:") && !NON_NAVIGABLE.contains(&page)
}

pub fn navigable_about_pages() -> Vec<String> {
    ABOUT_PAGES
        .iter()
        .filter(|page| is_navigable_about_page(page))
        .map(|page| page.to_string())
        .collect()
}
