#![forbid(unsafe_code)]

//! Drag session state machine: one in-flight gesture, one decision.
//!
//! [`DragSession`] is a reducer over [`DragEvent`] streams. Each call to
//! [`apply`](DragSession::apply) consumes one event and returns at most one
//! [`Decision`] describing how the caller should mutate its collections.
//!
//! # State Machine
//!
//! A session is either `Idle` or `Active`. `Start` creates an active session
//! pinned to a modality, a source container, and the dragged item's index.
//! `Enter` records a candidate drop target (subject to the acceptance
//! policy), touch `Move` clears it again, and `Drop`/`End`/`Cancel` finish
//! the gesture and return the session to `Idle`.
//!
//! # Invariants
//!
//! 1. The source container and index are fixed at `Start` and never change
//!    for the lifetime of the session.
//! 2. A session's modality never changes; events tagged with the other
//!    modality are identity transitions against it.
//! 3. A recorded target only exists while the session is active and only
//!    after an accepted `Enter`.
//! 4. A gesture yields at most one decision, produced exactly at the
//!    transition back to `Idle`. `Drop` and `End` of matching modality land
//!    in `Idle` in every branch, decision or not.
//! 5. Acceptance is checked independently at `Enter` time and at `Drop`/
//!    `End` time; both must agree for a cross-container transfer to resolve.
//!
//! # Failure Modes
//!
//! There are none by design: the reducer is total. Events that make no sense
//! in the current state (an `Enter` while idle, a terminal event of the
//! wrong modality, a repeated `Drop`) degrade to identity transitions with
//! no decision, favoring robustness under out-of-order delivery over strict
//! protocol conformance. Stale indices inside a returned decision are
//! absorbed later by [`reorder`](crate::reorder::reorder)'s bounds fallback.

use std::hash::Hash;

use crate::event::{DragEvent, Modality};
use crate::policy::AcceptPolicy;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What `Start` does while a session is already active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Replace the in-flight session with the new gesture (default).
    Overwrite,

    /// Ignore the new `Start`; the in-flight gesture keeps its session.
    IgnoreWhileActive,
}

/// Tunables for the session reducer.
#[derive(Debug, Clone)]
pub struct DragConfig {
    /// Behavior of `Start` against an active session (default: overwrite).
    pub restart: RestartPolicy,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            restart: RestartPolicy::Overwrite,
        }
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// A candidate drop destination recorded by an accepted `Enter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget<C> {
    /// Container that would receive the item.
    pub container: C,
    /// Insertion index within that container.
    pub index: usize,
}

/// Transient record of one in-flight gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession<C> {
    /// No gesture in flight.
    #[default]
    Idle,

    /// A gesture is in flight.
    Active {
        /// Input mechanism that created the session.
        modality: Modality,
        /// Container the dragged item came from.
        source: C,
        /// Index of the dragged item within `source` at gesture start.
        source_index: usize,
        /// Destination recorded by the most recent accepted `Enter`, if any.
        target: Option<DropTarget<C>>,
    },
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// The outcome of a completed gesture.
///
/// The reducer never touches item collections; a decision is the caller's
/// instruction to do so. Indices are positions captured during the gesture
/// and may be stale if the collections were mutated mid-gesture; appliers
/// treat out-of-bounds indices as no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<C> {
    /// Move one item within the source container.
    Reorder {
        /// Index the item was picked up from.
        from: usize,
        /// Index it should end up at.
        to: usize,
    },

    /// Move one item from the source container into another container.
    Transfer {
        /// Container the item was picked up from.
        source: C,
        /// Index within `source`.
        from: usize,
        /// Container receiving the item.
        target: C,
        /// Insertion index within `target`.
        to: usize,
    },
}

impl<C> Decision<C> {
    /// Returns true for a same-container reorder.
    #[must_use]
    pub const fn is_reorder(&self) -> bool {
        matches!(self, Self::Reorder { .. })
    }

    /// Returns true for a cross-container transfer.
    #[must_use]
    pub const fn is_transfer(&self) -> bool {
        matches!(self, Self::Transfer { .. })
    }
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

impl<C: Clone + Eq + Hash> DragSession<C> {
    /// Create an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::Idle
    }

    /// Consume one event and return the decision it resolves to, if any.
    ///
    /// The acceptance policy and config are passed in per call so the
    /// reducer stays pure: the same state, event, and policy always yield
    /// the same result. The passthrough payload type `U` is never examined.
    pub fn apply<U>(
        &mut self,
        event: &DragEvent<C, U>,
        policy: &AcceptPolicy<C>,
        config: &DragConfig,
    ) -> Option<Decision<C>> {
        match event {
            DragEvent::Start {
                modality,
                source,
                index,
            } => {
                self.on_start(*modality, source, *index, config);
                None
            }
            DragEvent::Enter {
                modality,
                target,
                index,
            } => {
                self.on_enter(*modality, target, *index, policy);
                None
            }
            DragEvent::Move { modality } => {
                self.on_move(*modality);
                None
            }
            DragEvent::Drop {
                modality,
                target,
                index,
            } => self.on_drop(*modality, target, *index, policy),
            DragEvent::End { modality } => self.on_end(*modality, policy),
            DragEvent::Cancel => {
                self.on_cancel();
                None
            }
            // Reserved hooks and the caller-message tunnel: identity.
            DragEvent::Leave { .. } | DragEvent::Hover { .. } | DragEvent::Passthrough(_) => None,
        }
    }

    /// Whether a gesture is in flight.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Whether no gesture is in flight.
    #[inline]
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The modality of the in-flight gesture, if any.
    #[must_use]
    pub const fn modality(&self) -> Option<Modality> {
        match self {
            Self::Active { modality, .. } => Some(*modality),
            Self::Idle => None,
        }
    }

    /// Source container and item index of the in-flight gesture, if any.
    #[must_use]
    pub const fn source(&self) -> Option<(&C, usize)> {
        match self {
            Self::Active {
                source,
                source_index,
                ..
            } => Some((source, *source_index)),
            Self::Idle => None,
        }
    }

    /// The currently recorded drop target, if any.
    #[must_use]
    pub const fn recorded_target(&self) -> Option<&DropTarget<C>> {
        match self {
            Self::Active {
                target: Some(target),
                ..
            } => Some(target),
            _ => None,
        }
    }

    /// Reset to idle, discarding any in-flight gesture.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl<C: Clone + Eq + Hash> DragSession<C> {
    fn on_start(&mut self, modality: Modality, source: &C, index: usize, config: &DragConfig) {
        if self.is_active() {
            match config.restart {
                RestartPolicy::IgnoreWhileActive => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(index, "start ignored while a gesture is in flight");
                    return;
                }
                RestartPolicy::Overwrite => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(index, "start overwrites in-flight gesture");
                }
            }
        }
        *self = Self::Active {
            modality,
            source: source.clone(),
            source_index: index,
            target: None,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(?modality, index, "gesture started");
    }

    fn on_enter(&mut self, modality: Modality, target: &C, index: usize, policy: &AcceptPolicy<C>) {
        if let Self::Active {
            modality: m,
            source,
            target: recorded,
            ..
        } = self
            && *m == modality
        {
            if policy.accepts(target, source) {
                *recorded = Some(DropTarget {
                    container: target.clone(),
                    index,
                });
                #[cfg(feature = "tracing")]
                tracing::trace!(index, "drop target recorded");
            } else {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, "enter rejected by policy");
            }
        }
    }

    fn on_move(&mut self, modality: Modality) {
        // Clear-on-move contract: a touch move invalidates the recorded
        // target, so only a fresh Enter can make End resolve somewhere.
        if modality == Modality::Touch
            && let Self::Active {
                modality: Modality::Touch,
                target,
                ..
            } = self
        {
            *target = None;
        }
    }

    fn on_drop(
        &mut self,
        modality: Modality,
        target: &C,
        index: usize,
        policy: &AcceptPolicy<C>,
    ) -> Option<Decision<C>> {
        let (source, from) = match self {
            Self::Active {
                modality: m,
                source,
                source_index,
                ..
            } if *m == modality => (source.clone(), *source_index),
            _ => return None,
        };
        // Back to idle in every branch; the decision rides alongside.
        *self = Self::Idle;
        Self::resolve(source, from, target.clone(), index, policy)
    }

    fn on_end(&mut self, modality: Modality, policy: &AcceptPolicy<C>) -> Option<Decision<C>> {
        let (source, from, recorded) = match self {
            Self::Active {
                modality: m,
                source,
                source_index,
                target,
            } if *m == modality => (source.clone(), *source_index, target.take()),
            _ => return None,
        };
        *self = Self::Idle;
        let DropTarget { container, index } = recorded?;
        Self::resolve(source, from, container, index, policy)
    }

    fn on_cancel(&mut self) {
        #[cfg(feature = "tracing")]
        if self.is_active() {
            tracing::trace!("gesture cancelled");
        }
        *self = Self::Idle;
    }

    /// Map a completed gesture's endpoints to a decision.
    ///
    /// Acceptance is re-checked here even when the target came from a
    /// recorded Enter, so a policy that changed mid-gesture cannot smuggle
    /// an item into a container that no longer accepts it.
    fn resolve(
        source: C,
        from: usize,
        target: C,
        to: usize,
        policy: &AcceptPolicy<C>,
    ) -> Option<Decision<C>> {
        if source == target {
            #[cfg(feature = "tracing")]
            tracing::trace!(from, to, "gesture resolved to reorder");
            return Some(Decision::Reorder { from, to });
        }
        if policy.accepts(&target, &source) {
            #[cfg(feature = "tracing")]
            tracing::trace!(from, to, "gesture resolved to transfer");
            return Some(Decision::Transfer {
                source,
                from,
                target,
                to,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(from, to, "gesture resolved to nothing");
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
