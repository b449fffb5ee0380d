//! Property-based tests for the domain and search-suggestion comparators.

use std::cmp::Ordering;

use urlbar_suggest::suggestion::comparators::{domain_comparator, search_suggestion_comparator};
use urlbar_suggest::suggestion::top_sites::TopSites;
use proptest::prelude::*;

/// Names avoid 'w' so `www.` only ever appears as a leading label.
fn arb_host() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("www.")],
        "[a-v]{1,8}",
        prop_oneof![Just(".com"), Just(".net"), Just(".org")],
    )
        .prop_map(|(www, name, tld)| format!("{www}{name}{tld}"))
}

fn arb_suggestion() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}( [a-z]{1,8}){0,2}",
        "[a-z]{1,8}".prop_map(|s| format!("https://{s}.com/")),
        "[a-z]{1,8}".prop_map(|s| format!("http://{s}.org")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn domain_comparator_is_antisymmetric(input in "[a-v]{1,4}", a in arb_host(), b in arb_host()) {
        let sites = TopSites::builtin();
        let cmp = domain_comparator(&input, |h| sites.rank_of(h));
        prop_assert_eq!(cmp(&a, &b), cmp(&b, &a).reverse());
    }

    #[test]
    fn containing_hosts_sort_first(input in "[a-v]{1,3}", mut hosts in prop::collection::vec(arb_host(), 1..12)) {
        let sites = TopSites::builtin();
        let cmp = domain_comparator(&input, |h| sites.rank_of(h));
        hosts.sort_by(|a, b| cmp(a, b));

        let contains: Vec<bool> = hosts
            .iter()
            .map(|h| h.trim_start_matches("www.").contains(input.as_str()))
            .collect();
        let first_miss = contains.iter().position(|c| !c).unwrap_or(contains.len());
        prop_assert!(contains[first_miss..].iter().all(|c| !c), "{:?}", hosts);
    }

    #[test]
    fn url_like_input_never_reorders(rest in "[a-z:/.]{0,10}", a in arb_suggestion(), b in arb_suggestion()) {
        let input = format!("http{rest}");
        let cmp = search_suggestion_comparator(&input);
        prop_assert_eq!(cmp(&a, &b), Ordering::Equal);
    }

    #[test]
    fn links_sink_below_text_and_order_is_stable(
        input in "[a-g]{1,6}",
        mut list in prop::collection::vec(arb_suggestion(), 0..12),
    ) {
        let original = list.clone();
        let cmp = search_suggestion_comparator(&input);
        list.sort_by(|a, b| cmp(a, b));

        let is_link = |s: &String| s.starts_with("http://") || s.starts_with("https://");
        let text: Vec<_> = original.iter().filter(|s| !is_link(s)).cloned().collect();
        let links: Vec<_> = original.iter().filter(|s| is_link(s)).cloned().collect();
        let expected: Vec<String> = text.into_iter().chain(links).collect();
        prop_assert_eq!(list, expected);
    }
}
