//! Region selection criteria.
//!
//! The [`RegionSelector`] enum expresses the coordinate predicates zone rules
//! are built from: a threshold on one axis, a distance band around a plane
//! such as the facial midline, and boolean combinations of those.

use mesh_types::{Axis, Point3};

use crate::interval::Interval;
use crate::region::MeshRegion;

/// Selector for picking vertices of a region by position.
///
/// Selectors can be combined using boolean operations (AND, OR, NOT).
///
/// # Example
///
/// ```
/// use mesh_region::{MeshRegion, RegionSelector};
/// use mesh_types::{Axis, Point3};
///
/// let positions = vec![
///     Point3::new(-1.0, 0.0, 0.0),
///     Point3::new(0.0, 2.0, 0.0),
///     Point3::new(1.0, 4.0, 0.0),
/// ];
/// let all = MeshRegion::from_vertices("all", [0, 1, 2]);
///
/// // Upper vertices within 0.5 of the x = 0 midline.
/// let selector = RegionSelector::above(Axis::Y, 1.0).and(RegionSelector::near(Axis::X, 0.0, 0.5));
///
/// let picked = selector.select(&positions, &all, "center");
/// assert_eq!(picked.as_slice(), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegionSelector {
    /// Select every vertex.
    All,

    /// Select vertices whose coordinate lies in an interval.
    Coordinate {
        /// Axis to read.
        axis: Axis,
        /// Accepted values.
        interval: Interval,
    },

    /// Select vertices whose distance `|coord - center|` lies in an interval.
    DistanceFrom {
        /// Axis to read.
        axis: Axis,
        /// Reference coordinate.
        center: f64,
        /// Accepted distances.
        interval: Interval,
    },

    /// Combine selectors with AND (intersection).
    And(Box<RegionSelector>, Box<RegionSelector>),

    /// Combine selectors with OR (union).
    Or(Box<RegionSelector>, Box<RegionSelector>),

    /// Negate a selector (complement within the input region).
    Not(Box<RegionSelector>),
}

impl RegionSelector {
    /// Coordinate within an interval.
    #[must_use]
    pub fn coordinate(axis: Axis, interval: Interval) -> Self {
        Self::Coordinate { axis, interval }
    }

    /// `coord > threshold`.
    #[must_use]
    pub fn above(axis: Axis, threshold: f64) -> Self {
        Self::coordinate(axis, Interval::above(threshold))
    }

    /// `coord >= threshold`.
    #[must_use]
    pub fn at_or_above(axis: Axis, threshold: f64) -> Self {
        Self::coordinate(axis, Interval::at_or_above(threshold))
    }

    /// `coord < threshold`.
    #[must_use]
    pub fn below(axis: Axis, threshold: f64) -> Self {
        Self::coordinate(axis, Interval::below(threshold))
    }

    /// `coord <= threshold`.
    #[must_use]
    pub fn at_or_below(axis: Axis, threshold: f64) -> Self {
        Self::coordinate(axis, Interval::at_or_below(threshold))
    }

    /// `lo <= coord <= hi`.
    #[must_use]
    pub fn between(axis: Axis, lo: f64, hi: f64) -> Self {
        Self::coordinate(axis, Interval::closed(lo, hi))
    }

    /// Distance from `center` within an interval.
    #[must_use]
    pub fn distance_from(axis: Axis, center: f64, interval: Interval) -> Self {
        Self::DistanceFrom {
            axis,
            center,
            interval,
        }
    }

    /// `|coord - center| < radius`.
    #[must_use]
    pub fn near(axis: Axis, center: f64, radius: f64) -> Self {
        Self::distance_from(axis, center, Interval::below(radius))
    }

    /// `|coord - center| >= radius`.
    #[must_use]
    pub fn away_from(axis: Axis, center: f64, radius: f64) -> Self {
        Self::distance_from(axis, center, Interval::at_or_above(radius))
    }

    /// `|coord - center| > radius`.
    #[must_use]
    pub fn beyond(axis: Axis, center: f64, radius: f64) -> Self {
        Self::distance_from(axis, center, Interval::above(radius))
    }

    /// Combine with another selector using AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Combine with another selector using OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Negate this selector.
    #[must_use]
    #[allow(clippy::should_implement_trait)] // This is a builder method, not std::ops::Not
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Test a single position.
    #[must_use]
    pub fn matches(&self, point: &Point3<f64>) -> bool {
        match self {
            Self::All => true,
            Self::Coordinate { axis, interval } => interval.contains(axis.of(point)),
            Self::DistanceFrom {
                axis,
                center,
                interval,
            } => interval.contains((axis.of(point) - center).abs()),
            Self::And(a, b) => a.matches(point) && b.matches(point),
            Self::Or(a, b) => a.matches(point) || b.matches(point),
            Self::Not(inner) => !inner.matches(point),
        }
    }

    /// Select the vertices of `region` whose positions match.
    ///
    /// Indices of `region` must be valid for `positions`.
    #[must_use]
    pub fn select(
        &self,
        positions: &[Point3<f64>],
        region: &MeshRegion,
        name: impl Into<String>,
    ) -> MeshRegion {
        region.filter(positions, name, |point| self.matches(point))
    }

    /// Split `region` into (matching, non-matching) vertices.
    #[must_use]
    pub fn split(
        &self,
        positions: &[Point3<f64>],
        region: &MeshRegion,
        names: (&str, &str),
    ) -> (MeshRegion, MeshRegion) {
        let matching = self.select(positions, region, names.0);
        let rest = region.difference(&matching).renamed(names.1);
        (matching, rest)
    }
}
