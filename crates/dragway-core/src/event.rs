#![forbid(unsafe_code)]

//! Canonical semantic drag events.
//!
//! This module defines the event vocabulary consumed by the session reducer.
//! Events are *semantic*: a host adapter has already decoded raw pointer or
//! touch primitives into these, so the core never sees coordinates, only
//! container identifiers and item indices.
//!
//! # Design Notes
//!
//! - Pointer and touch gestures share one event set, distinguished by a
//!   [`Modality`] tag. A session never changes modality; events tagged with
//!   the other modality are no-ops against it.
//! - `Passthrough` tunnels caller-defined messages through the same channel
//!   without the reducer examining them.
//! - All events derive `Clone` and `PartialEq` for use in tests and pattern
//!   matching.

/// Which input mechanism originated a gesture.
///
/// Sessions do not mix modalities: a session created by a pointer start only
/// reacts to pointer events, and likewise for touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Mouse or pen style input with discrete enter/leave/drop events.
    Pointer,

    /// Touch style input where movement is continuous and the drop target
    /// is whatever was last entered.
    Touch,
}

/// A semantic drag event.
///
/// `C` is the caller's container identifier type; `U` is an opaque payload
/// type for [`DragEvent::Passthrough`] and defaults to `()` for callers that
/// do not tunnel their own messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent<C, U = ()> {
    /// A gesture began on an item.
    Start {
        modality: Modality,
        /// Container the dragged item currently lives in.
        source: C,
        /// Index of the dragged item within `source` at gesture start.
        index: usize,
    },

    /// The gesture entered a potential drop position.
    Enter {
        modality: Modality,
        /// Container under the gesture.
        target: C,
        /// Candidate insertion index within `target`.
        index: usize,
    },

    /// The gesture left a container (reserved hook; identity transition).
    Leave { modality: Modality },

    /// The gesture moved without entering a new position.
    ///
    /// For touch sessions this clears any recorded target: a fresh `Enter`
    /// must arrive before an `End` will resolve to a destination. For
    /// pointer sessions it is a no-op.
    Move { modality: Modality },

    /// The gesture completed on an explicit drop position.
    ///
    /// The destination is taken from this event's own fields, not from any
    /// previously recorded target.
    Drop {
        modality: Modality,
        /// Container receiving the drop.
        target: C,
        /// Insertion index within `target`.
        index: usize,
    },

    /// The gesture completed without an explicit drop position.
    ///
    /// The destination is the previously recorded target, if any.
    End { modality: Modality },

    /// Hover feedback tick (presentational only; identity transition).
    Hover { modality: Modality },

    /// Abort the gesture: back to idle, no decision.
    Cancel,

    /// Caller-defined message tunneled through the event channel.
    ///
    /// The reducer never examines the payload.
    Passthrough(U),
}

impl<C, U> DragEvent<C, U> {
    /// Returns the modality tag, if this event carries one.
    #[must_use]
    pub const fn modality(&self) -> Option<Modality> {
        match self {
            Self::Start { modality, .. }
            | Self::Enter { modality, .. }
            | Self::Leave { modality }
            | Self::Move { modality }
            | Self::Drop { modality, .. }
            | Self::End { modality }
            | Self::Hover { modality } => Some(*modality),
            Self::Cancel | Self::Passthrough(_) => None,
        }
    }

    /// Returns true if this event can complete a gesture.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Drop { .. } | Self::End { .. } | Self::Cancel)
    }

    /// Returns the container identifier this event points at, if any.
    #[must_use]
    pub const fn container(&self) -> Option<&C> {
        match self {
            Self::Start { source, .. } => Some(source),
            Self::Enter { target, .. } | Self::Drop { target, .. } => Some(target),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
