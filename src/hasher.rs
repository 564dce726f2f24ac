//! Feature-selected build hasher for the backing maps.
//!
//! By default the standard library's SipHash-based [`RandomState`] is used.
//! The `fxhash` and `ahash` cargo features swap in faster, non-DoS-resistant
//! hashers for workloads where the element source is trusted. When both
//! features are enabled, `fxhash` wins.
//!
//! [`RandomState`]: std::collections::hash_map::RandomState

/// Build hasher used by [`Set`](crate::Set)'s backing map.
#[cfg(feature = "fxhash")]
pub(crate) type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// Build hasher used by [`Set`](crate::Set)'s backing map.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type DefaultBuildHasher = ahash::RandomState;

/// Build hasher used by [`Set`](crate::Set)'s backing map.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type DefaultBuildHasher = std::collections::hash_map::RandomState;
