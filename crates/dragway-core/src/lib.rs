#![forbid(unsafe_code)]

//! Core: drag session state machine, acceptance policy, and list reorder.
//!
//! # Role in Dragway
//! `dragway-core` is the decision layer. It consumes semantic drag events
//! (already decoded from platform input by a host adapter), runs them through
//! a per-gesture session reducer, and hands the caller a [`Decision`] telling
//! it how to mutate its own item collections.
//!
//! # Primary responsibilities
//! - **DragEvent**: canonical semantic events (start, enter, move, drop, end).
//! - **DragSession**: the per-gesture state machine and its reducer.
//! - **AcceptPolicy**: per-container allow-list for cross-container transfers.
//! - **reorder**: positional move of one element within a slice.
//!
//! # How it fits in the system
//! A host adapter (pointer or touch) emits [`DragEvent`] values; the caller
//! feeds each one into [`DragSession::apply`] together with its acceptance
//! policy. The reducer is pure and total: every event yields a new session
//! state and at most one decision, and malformed or out-of-order events
//! degrade to no-ops instead of faults. The caller owns every item
//! collection; this crate only ever sees container identifiers and indices.
//!
//! [`Decision`]: session::Decision
//! [`DragEvent`]: event::DragEvent
//! [`DragSession`]: session::DragSession
//! [`DragSession::apply`]: session::DragSession::apply
//! [`AcceptPolicy`]: policy::AcceptPolicy
//! [`reorder`]: reorder::reorder

pub mod event;
pub mod logging;
pub mod policy;
pub mod reorder;
pub mod session;

pub use event::{DragEvent, Modality};
pub use policy::AcceptPolicy;
pub use reorder::reorder;
pub use session::{Decision, DragConfig, DragSession, DropTarget, RestartPolicy};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
