//! Model-space transforms.

/// Rotation about the vertical (Y) axis.
pub mod rotate;
