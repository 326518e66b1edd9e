//! 3-D to 2-D mapping.

/// Fixed-camera perspective projection.
pub mod perspective;
