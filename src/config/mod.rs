//! Run configuration, resolved once at startup.

/// `AnimationConfig` and the resolved, immutable `Animation`.
pub mod animation;
/// Face color generation.
pub mod palette;
