#![allow(dead_code)]

use proptest::prelude::*;

/// Strategy for generating page kinds, biased towards the two well-known ones
pub fn kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("route".to_string()),
        3 => Just("option".to_string()),
        1 => "[a-z]{1,8}",
    ]
}

/// Strategy for generating page names, including dotted and composite names
pub fn page_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,15}",
        "[a-z]{1,6}\\.[a-z]{1,6}",
        "[a-z]{1,6}\\+[a-z]{1,6}",
    ]
}

/// Strategy for picking one of a fixed set of template identifiers
pub fn template_strategy(identifiers: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(identifiers).prop_map(str::to_string)
}

/// Strategy for generating sequences of `(kind, name, template)` registrations
pub fn registrations_strategy(
    identifiers: &'static [&'static str],
) -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec(
        (kind_strategy(), page_name_strategy(), template_strategy(identifiers)),
        1..40,
    )
}
