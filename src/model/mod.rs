//! Fixed solid geometry.

/// The square pyramid rendered by every animation.
pub mod pyramid;
