//! A headless visibility tracker for items inside scrollable containers.
//!
//! For slot bookkeeping and per-pass orchestration, see the `visibility-adapter` crate.
//!
//! This crate computes, for one item slot, how much of the item is visible and turns that into:
//! - discrete transitions ([`VisibilityState`]) for four independent policies: visible,
//!   focused, partial impression (threshold based) and full impression
//! - a continuous, de-duplicated measurement ([`VisibilityChange`])
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide, on every layout/scroll pass:
//! - the item size and its intersection with the container's visible region
//! - the container (viewport) size
//! - the item's drawing state ([`ShownState`])
//!
//! Notifications are delivered to a [`VisibilityHandle`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod handle;
mod item;
mod threshold;
mod types;


pub use handle::VisibilityHandle;
pub use item::VisibilityItem;
pub use threshold::Threshold;
pub use types::{ItemGeometry, ShownState, Size, VisibilityChange, VisibilityState};
