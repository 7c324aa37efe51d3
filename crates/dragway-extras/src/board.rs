#![forbid(unsafe_code)]

//! A board of named ordered lists with drag-and-drop wiring.
//!
//! [`Board`] owns the item lists, the acceptance policy, and one
//! [`DragSession`]. Feeding it a [`DragEvent`] runs the reducer and applies
//! whatever decision comes back:
//!
//! - a reorder runs [`reorder`] on the gesture's source list;
//! - a transfer removes the item from the source list and splices it into
//!   the destination list.
//!
//! Application follows the same no-fault policy as the core: a decision
//! whose indices have gone stale (the lists were mutated mid-gesture) is
//! applied as far as it safely can be and otherwise dropped, never raised.

use std::hash::Hash;

use dragway_core::{AcceptPolicy, Decision, DragConfig, DragEvent, DragSession, reorder};

/// Named ordered lists plus the session that moves items between them.
///
/// List order is insertion order, which is stable across reorders and
/// transfers; lookups are by container identifier.
#[derive(Debug, Clone, Default)]
pub struct Board<C, T> {
    lists: Vec<(C, Vec<T>)>,
    policy: AcceptPolicy<C>,
    session: DragSession<C>,
    config: DragConfig,
}

impl<C: Clone + Eq + Hash, T> Board<C, T> {
    /// Create an empty board with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DragConfig::default())
    }

    /// Create an empty board with an explicit reducer config.
    #[must_use]
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            lists: Vec::new(),
            policy: AcceptPolicy::new(),
            session: DragSession::new(),
            config,
        }
    }

    /// Add a list under `id`, replacing any existing list with that id.
    pub fn insert_list(&mut self, id: C, items: Vec<T>) {
        match self.position(&id) {
            Some(at) => self.lists[at].1 = items,
            None => self.lists.push((id, items)),
        }
    }

    /// Remove the list under `id`, returning its items.
    ///
    /// Any in-flight gesture keeps running; decisions that still point at
    /// the removed list degrade to no-ops when applied.
    pub fn remove_list(&mut self, id: &C) -> Option<Vec<T>> {
        let at = self.position(id)?;
        Some(self.lists.remove(at).1)
    }

    /// Grant `destination` permission to accept items dragged from `source`.
    pub fn allow(&mut self, destination: C, source: C) {
        self.policy.allow(destination, source);
    }

    /// Remove a previously granted permission.
    pub fn revoke(&mut self, destination: &C, source: &C) {
        self.policy.revoke(destination, source);
    }

    /// The items currently held by the list under `id`.
    #[must_use]
    pub fn items(&self, id: &C) -> Option<&[T]> {
        self.lists
            .iter()
            .find(|(list_id, _)| list_id == id)
            .map(|(_, items)| items.as_slice())
    }

    /// Iterate the lists in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&C, &[T])> {
        self.lists.iter().map(|(id, items)| (id, items.as_slice()))
    }

    /// Number of lists on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the board holds no lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// The current drag session, for rendering drag affordances.
    #[must_use]
    pub fn session(&self) -> &DragSession<C> {
        &self.session
    }

    /// Feed one event through the reducer and apply any resulting decision.
    ///
    /// The decision is also returned so the caller can notify the wider
    /// application about what just happened.
    pub fn handle<U>(&mut self, event: &DragEvent<C, U>) -> Option<Decision<C>> {
        // The session forgets its source the moment it resolves, so capture
        // it first: a Reorder decision carries indices only.
        let gesture_source = self.session.source().map(|(id, _)| id.clone());
        let decision = self.session.apply(event, &self.policy, &self.config);
        if let Some(decision) = &decision {
            self.apply_decision(gesture_source, decision);
        }
        decision
    }

    /// Like [`handle`](Board::handle), but maps a produced decision through
    /// `f`, typically into an application message for dispatch.
    pub fn handle_map<U, A>(
        &mut self,
        event: &DragEvent<C, U>,
        f: impl FnOnce(&Decision<C>) -> A,
    ) -> Option<A> {
        self.handle(event).as_ref().map(f)
    }

    fn position(&self, id: &C) -> Option<usize> {
        self.lists.iter().position(|(list_id, _)| list_id == id)
    }

    fn items_mut(&mut self, id: &C) -> Option<&mut Vec<T>> {
        self.lists
            .iter_mut()
            .find(|(list_id, _)| list_id == id)
            .map(|(_, items)| items)
    }

    fn apply_decision(&mut self, gesture_source: Option<C>, decision: &Decision<C>) {
        match decision {
            Decision::Reorder { from, to } => {
                if let Some(id) = gesture_source
                    && let Some(items) = self.items_mut(&id)
                {
                    reorder(items, *from, *to);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(from, to, "reorder applied");
                }
            }
            Decision::Transfer {
                source,
                from,
                target,
                to,
            } => {
                let Some(moved) = self.take_item(source, *from) else {
                    return;
                };
                match self.position(target) {
                    Some(at) => {
                        let items = &mut self.lists[at].1;
                        let at = (*to).min(items.len());
                        items.insert(at, moved);
                        #[cfg(feature = "tracing")]
                        tracing::debug!(from, to = at, "transfer applied");
                    }
                    None => {
                        // Destination vanished mid-gesture: put the item back.
                        if let Some(items) = self.items_mut(source) {
                            let at = (*from).min(items.len());
                            items.insert(at, moved);
                        }
                    }
                }
            }
        }
    }

    fn take_item(&mut self, id: &C, index: usize) -> Option<T> {
        let items = self.items_mut(id)?;
        if index >= items.len() {
            return None;
        }
        Some(items.remove(index))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
