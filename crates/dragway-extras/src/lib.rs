#![forbid(unsafe_code)]

//! Caller-side conveniences built on `dragway-core`.
//!
//! The core reducer never touches item collections; it hands back a
//! [`Decision`](dragway_core::Decision) and leaves the splicing to the
//! caller. [`Board`] is that caller, packaged: a set of named ordered lists
//! that owns a session, feeds events through the reducer, and applies the
//! resulting decisions to its own lists.
//!
//! Applications with their own state containers can keep doing the splicing
//! themselves and skip this crate entirely.

pub mod board;

pub use board::Board;
