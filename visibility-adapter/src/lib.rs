//! Adapter utilities for the `visibility` crate.
//!
//! The `visibility` crate tracks a single item slot. This crate provides the small,
//! framework-neutral pieces a container needs around it:
//!
//! - A per-pass driver ([`process_item`]) that evaluates the configured policies in order
//! - A slot-keyed [`Tracker`] that binds/rebinds slots and keeps indexes in sync with
//!   insertions, removals and moves
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod pass;
mod tracker;

#[cfg(test)]
mod tests;

pub use key::SlotKey;
pub use options::TrackerOptions;
pub use pass::process_item;
pub use tracker::Tracker;
