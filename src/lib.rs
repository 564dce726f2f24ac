//! # trackset
//!
//! Mutable hash sets with change tracking, for syncing in-memory state to
//! persistent stores.
//!
//! ## Overview
//!
//! This library provides two collection types:
//!
//! - [`Set`]: a hash set — a thin wrapper over a hash map of elements to a
//!   unit marker — with membership testing, intersection, difference,
//!   an intersection test, deep cloning, and in-place clearing.
//! - [`TrackableSet`]: a [`Set`] decorated with bookkeeping of the elements
//!   added and removed since the last flush, so a caller (typically a
//!   persistence layer) can read the pending changes, apply them, and
//!   acknowledge the sync with [`flush`](TrackableSet::flush).
//!
//! Both types are plain in-memory containers: no I/O, no serialization, no
//! internal locking. Concurrent mutation of one instance from multiple
//! threads must be guarded externally.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash`'s Fx hasher for the backing maps
//! - `ahash`: use `ahash` for the backing maps
//!
//! Both trade DoS resistance for speed; with neither enabled the standard
//! library's SipHash-based hasher is used.
//!
//! ## Example
//!
//! ```rust
//! use trackset::TrackableSet;
//!
//! let mut members = TrackableSet::from([1, 2, 3]);
//! members.insert(4).remove(&2);
//!
//! assert!(members.has_changes());
//! assert!(members.to_be_added().contains(&4));
//! assert!(members.to_be_removed().contains(&2));
//!
//! // ... persist the pending changes, then acknowledge:
//! members.flush();
//! assert!(!members.has_changes());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use trackset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::Set;
    pub use crate::trackable::TrackableSet;
}

pub(crate) mod hasher;
pub mod set;
pub mod trackable;

pub use set::{Set, SetIntoIter, SetIter};
pub use trackable::TrackableSet;
