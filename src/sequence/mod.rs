//! Ordered frame generation over one full turn.

/// Lazy frame iterator.
pub mod frames;
