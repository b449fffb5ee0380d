//! Per-source sort functions.
//!
//! Both comparators are total preorders built from a sort key, so they are
//! safe to hand to the stable `sort_by`; ties keep their input order.

use std::cmp::Ordering;

use super::url_util::is_http_or_https;

/// Orders candidate hosts for the top-site source.
///
/// Hosts containing `user_input_host` come first, and a match at position 0
/// beats a later one. Remaining ties go to `rank_of` (lower is more
/// popular, known beats unknown). `www.` is ignored on both sides.
pub fn domain_comparator<'a, R>(
    user_input_host: &'a str,
    rank_of: R,
) -> impl Fn(&str, &str) -> Ordering + 'a
where
    R: Fn(&str) -> Option<u32> + 'a,
{
    move |host1, host2| {
        let key = |host: &str| {
            let host = host.replacen("www.", "", 1);
            let pos = host.find(user_input_host);
            let rank = rank_of(&host);
            (
                pos.is_none(),
                pos.map_or(false, |p| p != 0),
                rank.is_none(),
                rank.unwrap_or(u32::MAX),
            )
        };
        key(host1).cmp(&key(host2))
    }
}

/// Orders remote search suggestions: plain phrases before raw `http(s)`
/// links, unless the user is typing a URL themselves.
pub fn search_suggestion_comparator(user_input: &str) -> impl Fn(&str, &str) -> Ordering + '_ {
    let literal_url = user_input.starts_with("http");
    move |s1, s2| {
        if literal_url {
            return Ordering::Equal;
        }
        is_http_or_https(s1).cmp(&is_http_or_https(s2))
    }
}
