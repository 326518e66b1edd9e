use crate::foundation::math::{OFF_BUFFER_COORD, floor_to_pixel};
use crate::model::pyramid::Vertex;

/// Default focal scale in pixels per model unit at unit depth.
pub const DEFAULT_FOCAL_SCALE: f64 = 150.0;
/// Default camera distance along Z.
pub const DEFAULT_CAMERA_OFFSET: f64 = 4.0;

const MIN_DEPTH: f64 = 1e-9;

/// Integer pixel coordinate; may fall outside the target buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectedPoint {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downward.
    pub y: i32,
}

impl ProjectedPoint {
    /// Return `true` when the point lands inside a `size`×`size` buffer.
    pub fn is_inside(self, size: u32) -> bool {
        let s = i64::from(size);
        (0..s).contains(&i64::from(self.x)) && (0..s).contains(&i64::from(self.y))
    }
}

/// Camera parameters for [`project`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    /// Pixels per model unit at unit depth.
    pub focal_scale: f64,
    /// Distance from the camera to the model origin along Z.
    pub camera_offset: f64,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            focal_scale: DEFAULT_FOCAL_SCALE,
            camera_offset: DEFAULT_CAMERA_OFFSET,
        }
    }
}

impl Perspective {
    /// Project one vertex into a `size`×`size` buffer.
    ///
    /// `factor = focal / (z + offset)`, `px = floor(size/2 + x·factor)`,
    /// `py = floor(size/2 - y·factor)`. A vanishing denominator sends the point far off-buffer
    /// instead of dividing by zero.
    pub fn project(&self, v: Vertex, size: u32) -> ProjectedPoint {
        let depth = v.z + self.camera_offset;
        if !depth.is_finite() || depth.abs() < MIN_DEPTH {
            return ProjectedPoint {
                x: off_buffer(v.x),
                y: off_buffer(-v.y),
            };
        }

        let half = f64::from(size) / 2.0;
        let factor = self.focal_scale / depth;
        ProjectedPoint {
            x: floor_to_pixel(half + v.x * factor),
            y: floor_to_pixel(half - v.y * factor),
        }
    }

    /// Project every vertex, keeping order.
    pub fn project_all(&self, vertices: &[Vertex], size: u32) -> Vec<ProjectedPoint> {
        vertices.iter().map(|&v| self.project(v, size)).collect()
    }
}

/// Project with the default camera (`focal = 150`, offset `4`).
pub fn project(v: Vertex, size: u32) -> ProjectedPoint {
    Perspective::default().project(v, size)
}

fn off_buffer(direction: f64) -> i32 {
    if direction < 0.0 {
        -OFF_BUFFER_COORD
    } else {
        OFF_BUFFER_COORD
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/perspective.rs"]
mod tests;
