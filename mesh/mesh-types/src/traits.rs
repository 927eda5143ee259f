//! Traits for vertex collections.

use crate::Aabb;
use nalgebra::Point3;

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if there are no vertices.
    fn bounds(&self) -> Aabb;

    /// Compute the bounding box, returning `None` if empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() {
            None
        } else {
            Some(b)
        }
    }
}

impl MeshBounds for [Point3<f64>] {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.iter())
    }
}

impl MeshBounds for Vec<Point3<f64>> {
    fn bounds(&self) -> Aabb {
        self.as_slice().bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn test_slice_bounds() {
        let vertices = [Point3::new(-1.0, 0.0, 2.0), Point3::new(1.0, 3.0, -2.0)];
        let bounds = vertices[..].bounds();
        assert_eq!(bounds.extent(Axis::X), 2.0);
        assert_eq!(bounds.extent(Axis::Z), 4.0);
    }

    #[test]
    fn test_empty_slice_has_no_bounds() {
        let vertices: Vec<Point3<f64>> = Vec::new();
        assert!(vertices.bounds_opt().is_none());
    }
}
