//! Input decoding and the transient tabular frame.
//!
//! The step accepts split-oriented JSON: separate `columns` (names) and
//! `data` (row values) arrays. [`SplitPayload`] decodes and validates that
//! shape; [`Frame`] is the in-memory table the wire encodings are built
//! from.

mod frame;
mod split;

pub use frame::Frame;
pub use split::SplitPayload;
