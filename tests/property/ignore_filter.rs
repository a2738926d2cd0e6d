//! Property-based tests for the ignore filter

use multicat::ignore::BUILTIN_DEFAULTS;
use multicat::{should_ignore, IgnoreSet};
use proptest::prelude::*;
use std::path::PathBuf;

/// Components that are never built-in ignore names
fn plain_component() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}(\\.[a-z]{1,3})?"
        .prop_filter("not an ignored name", |s| !BUILTIN_DEFAULTS.contains(&s.as_str()))
}

/// A path made of plain components is never ignored
#[test]
fn test_plain_paths_never_ignored() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(plain_component(), 1..6), |components| {
            let path: PathBuf = components.iter().collect();
            prop_assert!(!should_ignore(&path));
            Ok(())
        })
        .unwrap();
}

/// Inserting any ignored name at any position makes the path ignored
#[test]
fn test_ignored_component_anywhere() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec(plain_component(), 0..5),
                prop::sample::select(BUILTIN_DEFAULTS),
                any::<prop::sample::Index>(),
            ),
            |(mut components, ignored, index)| {
                let position = index.index(components.len() + 1);
                components.insert(position, ignored.to_string());
                let path: PathBuf = components.iter().collect();
                prop_assert!(should_ignore(&path));
                Ok(())
            },
        )
        .unwrap();
}

/// A custom set flags a path exactly when some component is in the set
#[test]
fn test_custom_set_matches_component_membership() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec("[a-c]{1,2}", 1..6),
                prop::collection::vec("[a-c]{1,2}", 0..3),
            ),
            |(components, names)| {
                let set = IgnoreSet::from_names(names.iter().cloned());
                let path: PathBuf = components.iter().collect();
                let expected = components.iter().any(|c| names.contains(c));
                prop_assert_eq!(set.should_ignore(&path), expected);
                Ok(())
            },
        )
        .unwrap();
}
