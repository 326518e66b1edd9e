use glam::DMat3;

use crate::model::pyramid::Vertex;

/// Right-handed rotation matrix about the Y axis.
///
/// `x' = x·cos θ + z·sin θ`, `y' = y`, `z' = -x·sin θ + z·cos θ`.
pub fn rotation_about_vertical_axis(angle: f64) -> DMat3 {
    DMat3::from_rotation_y(angle)
}

/// Rotate every vertex by `angle` radians about the Y axis.
///
/// The input is left untouched; the output keeps its length and order. Any finite angle is
/// accepted since rotation is periodic.
pub fn rotate_about_vertical_axis(vertices: &[Vertex], angle: f64) -> Vec<Vertex> {
    let m = rotation_about_vertical_axis(angle);
    vertices.iter().map(|&v| m * v).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
