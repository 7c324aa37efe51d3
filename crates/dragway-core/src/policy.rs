#![forbid(unsafe_code)]

//! Acceptance policy: which containers accept transfers from which sources.
//!
//! A container always accepts drops that originate from itself (same-list
//! reorder). Cross-container transfers require an explicit grant. The check
//! is a plain set-membership test: no transitivity, no wildcards.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

/// Permission relation from destination container to accepted sources.
///
/// The relation is passed explicitly into [`DragSession::apply`] rather than
/// read from ambient configuration, keeping the reducer pure.
///
/// [`DragSession::apply`]: crate::session::DragSession::apply
#[derive(Debug, Clone, Default)]
pub struct AcceptPolicy<C> {
    accept_from: AHashMap<C, AHashSet<C>>,
}

impl<C: Eq + Hash> AcceptPolicy<C> {
    /// Create an empty policy: only same-container reorders are accepted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accept_from: AHashMap::new(),
        }
    }

    /// Grant `destination` permission to accept items dragged out of `source`.
    pub fn allow(&mut self, destination: C, source: C) {
        self.accept_from.entry(destination).or_default().insert(source);
    }

    /// Grant `destination` permission for every source in `sources`.
    pub fn allow_all(&mut self, destination: C, sources: impl IntoIterator<Item = C>) {
        self.accept_from
            .entry(destination)
            .or_default()
            .extend(sources);
    }

    /// Remove a previously granted permission. Unknown pairs are ignored.
    pub fn revoke(&mut self, destination: &C, source: &C) {
        if let Some(sources) = self.accept_from.get_mut(destination) {
            sources.remove(source);
        }
    }

    /// Whether `destination` accepts an item originating in `source`.
    ///
    /// Same-container transfers are always accepted, regardless of grants.
    #[must_use]
    pub fn accepts(&self, destination: &C, source: &C) -> bool {
        destination == source
            || self
                .accept_from
                .get(destination)
                .is_some_and(|sources| sources.contains(source))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_container_always_accepted() {
        let policy: AcceptPolicy<&str> = AcceptPolicy::new();
        assert!(policy.accepts(&"a", &"a"));
    }

    #[test]
    fn cross_container_denied_by_default() {
        let policy: AcceptPolicy<&str> = AcceptPolicy::new();
        assert!(!policy.accepts(&"b", &"a"));
    }

    #[test]
    fn allow_grants_one_direction_only() {
        let mut policy = AcceptPolicy::new();
        policy.allow("b", "a");

        assert!(policy.accepts(&"b", &"a"));
        // The grant is directional: a does not accept from b.
        assert!(!policy.accepts(&"a", &"b"));
    }

    #[test]
    fn no_transitivity() {
        let mut policy = AcceptPolicy::new();
        policy.allow("b", "a");
        policy.allow("c", "b");

        assert!(!policy.accepts(&"c", &"a"));
    }

    #[test]
    fn allow_all_grants_every_source() {
        let mut policy = AcceptPolicy::new();
        policy.allow_all("sink", ["a", "b", "c"]);

        assert!(policy.accepts(&"sink", &"a"));
        assert!(policy.accepts(&"sink", &"b"));
        assert!(policy.accepts(&"sink", &"c"));
        assert!(!policy.accepts(&"sink", &"d"));
    }

    #[test]
    fn revoke_removes_grant() {
        let mut policy = AcceptPolicy::new();
        policy.allow("b", "a");
        policy.revoke(&"b", &"a");

        assert!(!policy.accepts(&"b", &"a"));
        // Same-container acceptance is not revocable.
        assert!(policy.accepts(&"b", &"b"));
    }

    #[test]
    fn revoke_unknown_pair_is_noop() {
        let mut policy: AcceptPolicy<&str> = AcceptPolicy::new();
        policy.revoke(&"x", &"y");
        assert!(!policy.accepts(&"x", &"y"));
    }

    #[test]
    fn duplicate_allow_is_idempotent() {
        let mut policy = AcceptPolicy::new();
        policy.allow("b", "a");
        policy.allow("b", "a");
        assert!(policy.accepts(&"b", &"a"));
        policy.revoke(&"b", &"a");
        assert!(!policy.accepts(&"b", &"a"));
    }
}
