//! Merger integration harness.
//!
//! # What this covers
//!
//! - **Pass-through**: empty call fields return the context sequence
//!   untouched; merging nothing twice is a no-op.
//! - **Override**: call-site fields replace same-named context fields in
//!   place, keeping the original position.
//! - **Duplicate call keys**: when the call sequence repeats a name, the
//!   last occurrence wins.
//! - **Invariants under proptest**: no duplicate names in the output, context
//!   names keep their positions, every call name carries its final value.
//!
//! # What this does NOT cover
//!
//! - Normalization of raw arguments (see `normalization_harness`)
//! - Context accumulation (see `context_harness`)

mod common;
use common::*;

use kvlog::{merge, Field};
use pretty_assertions::assert_eq;
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Pass-through
// ---------------------------------------------------------------------------

/// Empty call fields return the context sequence unchanged.
#[test]
fn empty_call_fields_are_a_noop() {
    let context = vec![field("k1", "v1"), field("k2", "v2")];
    assert_eq!(merge(context.clone(), vec![]), context);
}

/// Merging an empty call sequence twice in a row changes nothing.
#[test]
fn repeated_empty_merge_is_idempotent() {
    let context = vec![field("k", "v")];
    let once = merge(context.clone(), vec![]);
    let twice = merge(once.clone(), vec![]);
    assert_eq!(twice, context);
}

/// An empty context yields exactly the call fields.
#[test]
fn empty_context_yields_call_fields() {
    let call = vec![field("a", 1), field("b", 2)];
    assert_eq!(merge(vec![], call.clone()), call);
}

// ---------------------------------------------------------------------------
// Override semantics
// ---------------------------------------------------------------------------

/// A call field with a context name replaces the value, nothing else.
#[test]
fn single_key_override() {
    assert_eq!(
        merge(vec![field("k", "old")], vec![field("k", "new")]),
        vec![field("k", "new")]
    );
}

/// Overridden fields keep their context position even when the call lists
/// them after new names.
#[test]
fn override_preserves_context_position() {
    assert_eq!(
        merge(
            vec![field("k1", "v1")],
            vec![field("k2", "v2"), field("k1", "v1x")]
        ),
        vec![field("k1", "v1x"), field("k2", "v2")]
    );
}

/// A name repeated in the call sequence resolves to its last occurrence.
#[test]
fn triple_override_last_occurrence_wins() {
    let merged = merge(
        vec![field("k1", "ctx")],
        vec![
            field("k2", "v2"),
            field("k1", "v1'"),
            field("k3", "v3"),
            field("k1", "v1"),
        ],
    );
    assert_eq!(
        merged,
        vec![field("k1", "v1"), field("k2", "v2"), field("k3", "v3")]
    );
}

/// New names append in call order after all context fields.
#[test]
fn new_names_append_in_call_order() {
    let merged = merge(
        vec![field("a", 1)],
        vec![field("c", 3), field("b", 2), field("d", 4)],
    );
    assert_eq!(
        merged,
        vec![field("a", 1), field("c", 3), field("b", 2), field("d", 4)]
    );
}

// ---------------------------------------------------------------------------
// Invariants (proptest)
// ---------------------------------------------------------------------------

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        Just("d".to_string()),
        Just("e".to_string()),
    ]
}

/// Context sequences are generated without internal duplicates, matching the
/// state produced by `add_fields`; call sequences may repeat names freely.
fn context_strategy() -> impl Strategy<Value = Vec<Field>> {
    prop_vec((name_strategy(), any::<i64>()), 0..5).prop_map(|pairs| {
        let mut seen = std::collections::HashSet::new();
        pairs
            .into_iter()
            .filter(|(name, _)| seen.insert(name.clone()))
            .map(|(name, value)| Field::new(name, value))
            .collect()
    })
}

fn call_strategy() -> impl Strategy<Value = Vec<Field>> {
    prop_vec((name_strategy(), any::<i64>()), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(name, value)| Field::new(name, value))
            .collect()
    })
}

proptest! {
    /// The merged output never contains duplicate names.
    #[test]
    fn merged_output_has_no_duplicate_names(
        context in context_strategy(),
        call in call_strategy(),
    ) {
        let merged = merge(context, call);
        assert_no_duplicate_names!(merged);
    }

    /// Context names keep their relative order, and names only ever append.
    #[test]
    fn context_order_is_preserved(
        context in context_strategy(),
        call in call_strategy(),
    ) {
        let context_names: Vec<String> =
            context.iter().map(|f| f.name.clone()).collect();
        let merged = merge(context, call);
        let merged_names: Vec<String> =
            merged.iter().map(|f| f.name.clone()).collect();
        prop_assert_eq!(&merged_names[..context_names.len()], &context_names[..]);
    }

    /// Every call name ends up with the value of its last occurrence; names
    /// only present in the context keep their value.
    #[test]
    fn call_values_win_and_context_values_survive(
        context in context_strategy(),
        call in call_strategy(),
    ) {
        let merged = merge(context.clone(), call.clone());
        for merged_field in &merged {
            let last_call = call.iter().rev().find(|f| f.name == merged_field.name);
            let from_context = context.iter().find(|f| f.name == merged_field.name);
            let expected = last_call.or(from_context).expect("field appeared from nowhere");
            prop_assert_eq!(&merged_field.value, &expected.value);
        }
    }
}
