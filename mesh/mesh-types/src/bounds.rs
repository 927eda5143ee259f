//! Axis-aligned bounding box.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Axis;

/// An axis-aligned bounding box (AABB) over a set of vertices.
///
/// Besides the usual corner accessors, the box answers the questions the
/// zone classifiers ask of it: the extent and midpoint along one axis, and a
/// degenerate-safe extent that never divides by zero.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Axis, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 4.0, 0.0),
/// );
///
/// assert_eq!(aabb.extent(Axis::X), 10.0);
/// assert_eq!(aabb.safe_extent(Axis::Z), 1.0); // flat along Z
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which is useful as a starting point
    /// for expanding to include points.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns an empty AABB if the iterator is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let points = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 5.0, 3.0),
    ///     Point3::new(-2.0, 8.0, 1.0),
    /// ];
    ///
    /// let aabb = Aabb::from_points(points.iter());
    /// assert_eq!(aabb.min, Point3::new(-2.0, 0.0, 0.0));
    /// assert_eq!(aabb.max, Point3::new(10.0, 8.0, 3.0));
    /// ```
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Check if the AABB is empty (no point was ever included).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Minimum coordinate along an axis.
    #[inline]
    #[must_use]
    pub fn lower(&self, axis: Axis) -> f64 {
        axis.of(&self.min)
    }

    /// Maximum coordinate along an axis.
    #[inline]
    #[must_use]
    pub fn upper(&self, axis: Axis) -> f64 {
        axis.of(&self.max)
    }

    /// Extent (max - min) along an axis.
    ///
    /// Returns 0.0 for empty boxes.
    #[inline]
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.upper(axis) - self.lower(axis)
    }

    /// Extent along an axis, usable as a divisor.
    ///
    /// A zero (or non-positive) extent reads as 1.0 so that normalizing a
    /// coordinate against a flat axis yields 0 rather than NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Axis, Point3};
    ///
    /// let flat = Aabb::from_point(Point3::new(3.0, 3.0, 3.0));
    /// assert_eq!(flat.safe_extent(Axis::Y), 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn safe_extent(&self, axis: Axis) -> f64 {
        let extent = self.extent(axis);
        if extent > 0.0 {
            extent
        } else {
            1.0
        }
    }

    /// Midpoint along an axis.
    #[inline]
    #[must_use]
    pub fn midpoint(&self, axis: Axis) -> f64 {
        (self.lower(axis) + self.upper(axis)) * 0.5
    }

    /// Create an AABB from a single point.
    ///
    /// The resulting box has zero extent on every axis.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Expand the AABB to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn head_box() -> Aabb {
        Aabb::new(Point3::new(-0.08, -0.12, -0.1), Point3::new(0.08, 0.14, 0.1))
    }

    #[test]
    fn test_new_corrects_corners() {
        let aabb = Aabb::new(Point3::new(1.0, 0.0, 5.0), Point3::new(0.0, 1.0, 2.0));
        assert_eq!(aabb.min, Point3::new(0.0, 0.0, 2.0));
        assert_eq!(aabb.max, Point3::new(1.0, 1.0, 5.0));
    }

    #[test]
    fn test_empty() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
        assert_eq!(aabb.extent(Axis::X), 0.0);
        assert_eq!(aabb.safe_extent(Axis::X), 1.0);
    }

    #[test]
    fn test_extent_and_midpoint() {
        let aabb = head_box();
        assert_relative_eq!(aabb.extent(Axis::X), 0.16, epsilon = 1e-12);
        assert_relative_eq!(aabb.extent(Axis::Y), 0.26, epsilon = 1e-12);
        assert_relative_eq!(aabb.midpoint(Axis::Y), 0.01, epsilon = 1e-12);
        assert_relative_eq!(aabb.midpoint(Axis::Z), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_safe_extent_on_flat_axis() {
        let aabb = Aabb::new(Point3::new(0.0, 2.0, 0.0), Point3::new(4.0, 2.0, 0.0));
        assert_relative_eq!(aabb.safe_extent(Axis::X), 4.0);
        assert_relative_eq!(aabb.safe_extent(Axis::Y), 1.0);
    }

    #[test]
    fn test_from_points() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)];
        let aabb = Aabb::from_points(points.iter());
        assert_relative_eq!(aabb.lower(Axis::Y), 0.0);
        assert_relative_eq!(aabb.upper(Axis::Z), 6.0);
        assert_relative_eq!(aabb.midpoint(Axis::X), 1.0);
    }
}
