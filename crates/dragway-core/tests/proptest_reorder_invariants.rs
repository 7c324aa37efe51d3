//! Property-based invariant tests for the reorder utility.
//!
//! These tests verify the external contract of `reorder`:
//!
//! 1. Moving an element onto its own index is the identity
//! 2. Any out-of-range index makes the whole call the identity
//! 3. Length and element multiset are always preserved
//! 4. The result matches the remove-then-insert reference model
//! 5. A move is undone by the inverse move
//! 6. The moved element ends up exactly at `to`

use dragway_core::reorder;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn items_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..32)
}

/// Index range deliberately wider than the longest vector, so out-of-range
/// pairs show up in every property that wants them.
fn index_strategy() -> impl Strategy<Value = usize> {
    0usize..48
}

/// Reference model: remove at `from`, insert at `to` in the shortened
/// sequence, with the same no-op fallbacks.
fn model_reorder(items: &[u8], from: usize, to: usize) -> Vec<u8> {
    let mut out = items.to_vec();
    if from == to || from >= out.len() || to >= out.len() {
        return out;
    }
    let moved = out.remove(from);
    out.insert(to, moved);
    out
}

fn sorted(mut items: Vec<u8>) -> Vec<u8> {
    items.sort_unstable();
    items
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Same-index moves are the identity
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_index_is_identity(items in items_strategy(), i in index_strategy()) {
        let mut moved = items.clone();
        reorder(&mut moved, i, i);
        prop_assert_eq!(moved, items);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Out-of-range indices are the identity
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_is_identity(
        items in items_strategy(),
        from in index_strategy(),
        to in index_strategy(),
    ) {
        prop_assume!(from >= items.len() || to >= items.len());
        let mut moved = items.clone();
        reorder(&mut moved, from, to);
        prop_assert_eq!(moved, items);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Length and multiset preservation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn preserves_length_and_multiset(
        items in items_strategy(),
        from in index_strategy(),
        to in index_strategy(),
    ) {
        let mut moved = items.clone();
        reorder(&mut moved, from, to);
        prop_assert_eq!(moved.len(), items.len());
        prop_assert_eq!(sorted(moved), sorted(items));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Agreement with the remove-then-insert model
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn matches_reference_model(
        items in items_strategy(),
        from in index_strategy(),
        to in index_strategy(),
    ) {
        let mut moved = items.clone();
        reorder(&mut moved, from, to);
        prop_assert_eq!(moved, model_reorder(&items, from, to));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Moves are invertible
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inverse_move_restores_original(
        items in items_strategy(),
        from in index_strategy(),
        to in index_strategy(),
    ) {
        let mut moved = items.clone();
        reorder(&mut moved, from, to);
        reorder(&mut moved, to, from);
        prop_assert_eq!(moved, items);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. The moved element lands at `to`
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn moved_element_lands_at_destination(
        items in prop::collection::vec(any::<u8>(), 1..32),
        (from, to) in (0usize..32, 0usize..32),
    ) {
        prop_assume!(from < items.len() && to < items.len());
        let expected = items[from];
        let mut moved = items;
        reorder(&mut moved, from, to);
        prop_assert_eq!(moved[to], expected);
    }
}
