//! Proptest strategies for command-line input.

use proptest::prelude::*;

/// A plain positional argument: never starts with `-`
pub fn positional_arg() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9_.-]{0,15}"
}

/// Positional argument lists of any length except one
pub fn wrong_arity_args() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        Just(Vec::new()),
        prop::collection::vec(positional_arg(), 2..5),
    ]
}

/// Confirmation answers that are neither `y` nor `yes` in any case
pub fn declining_answer() -> impl Strategy<Value = String> {
    ".{0,8}".prop_filter("must not be an affirmative answer", |answer| {
        let answer = answer.trim().to_ascii_lowercase();
        answer != "y" && answer != "yes"
    })
}

/// `y` or `yes` with arbitrary letter case
pub fn affirmative_answer() -> impl Strategy<Value = String> {
    prop_oneof![Just("y"), Just("yes")].prop_flat_map(|word| {
        prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
            word.chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
    })
}
