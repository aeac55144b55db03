#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type SlotMap<S, V> = HashMap<S, V>;
#[cfg(not(feature = "std"))]
pub(crate) type SlotMap<S, V> = BTreeMap<S, V>;

/// Identifies a container slot (e.g. a view/node id).
#[cfg(feature = "std")]
pub trait SlotKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> SlotKey for T {}

/// Identifies a container slot (e.g. a view/node id).
#[cfg(not(feature = "std"))]
pub trait SlotKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> SlotKey for T {}
