use glam::DVec3;

/// A model-space vertex `(x, y, z)`; `y` points up.
pub type Vertex = DVec3;

/// A closed planar polygon given as indices into the model's vertex list.
///
/// Faces are drawn in declaration order (painter's order); there is no depth sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face(&'static [usize]);

impl Face {
    /// Vertex indices in winding order.
    pub fn indices(self) -> &'static [usize] {
        self.0
    }

    /// Number of corners (3 or 4 for the pyramid).
    pub fn len(self) -> usize {
        self.0.len()
    }

    /// Always `false` for the built-in faces.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

/// Four base corners on the `y = -1` plane followed by the apex at `y = +1`.
pub const PYRAMID_VERTICES: [Vertex; 5] = [
    DVec3::new(-1.0, -1.0, -1.0),
    DVec3::new(1.0, -1.0, -1.0),
    DVec3::new(1.0, -1.0, 1.0),
    DVec3::new(-1.0, -1.0, 1.0),
    DVec3::new(0.0, 1.0, 0.0),
];

/// Base quad, then the four sides. Index 4 is the apex.
pub const PYRAMID_FACES: [Face; 5] = [
    Face(&[0, 1, 2, 3]),
    Face(&[0, 1, 4]),
    Face(&[1, 2, 4]),
    Face(&[2, 3, 4]),
    Face(&[3, 0, 4]),
];

/// Read-only view over an immutable vertex/face set.
#[derive(Clone, Copy, Debug)]
pub struct Model {
    vertices: &'static [Vertex],
    faces: &'static [Face],
}

impl Model {
    /// The built-in square pyramid.
    pub const fn pyramid() -> Self {
        Self {
            vertices: &PYRAMID_VERTICES,
            faces: &PYRAMID_FACES,
        }
    }

    /// Model-space vertices.
    pub fn vertices(&self) -> &'static [Vertex] {
        self.vertices
    }

    /// Faces in draw order.
    pub fn faces(&self) -> &'static [Face] {
        self.faces
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::pyramid()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/pyramid.rs"]
mod tests;
