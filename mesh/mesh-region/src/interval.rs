//! Half-open and closed coordinate intervals.

use std::ops::Bound;

/// A range of coordinate values with explicit open/closed ends.
///
/// Zone rules are sensitive to whether a threshold is inclusive, so every
/// bound states it.
///
/// # Example
///
/// ```
/// use mesh_region::Interval;
///
/// let band = Interval::closed_open(0.25, 0.5);
/// assert!(band.contains(0.25));
/// assert!(!band.contains(0.5));
/// assert!(Interval::above(1.0).contains(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: Bound<f64>,
    upper: Bound<f64>,
}

impl Interval {
    /// Every value.
    pub const ANY: Self = Self::new(Bound::Unbounded, Bound::Unbounded);

    /// Create an interval from explicit bounds.
    #[must_use]
    pub const fn new(lower: Bound<f64>, upper: Bound<f64>) -> Self {
        Self { lower, upper }
    }

    /// `v > lo`.
    #[must_use]
    pub const fn above(lo: f64) -> Self {
        Self::new(Bound::Excluded(lo), Bound::Unbounded)
    }

    /// `v >= lo`.
    #[must_use]
    pub const fn at_or_above(lo: f64) -> Self {
        Self::new(Bound::Included(lo), Bound::Unbounded)
    }

    /// `v < hi`.
    #[must_use]
    pub const fn below(hi: f64) -> Self {
        Self::new(Bound::Unbounded, Bound::Excluded(hi))
    }

    /// `v <= hi`.
    #[must_use]
    pub const fn at_or_below(hi: f64) -> Self {
        Self::new(Bound::Unbounded, Bound::Included(hi))
    }

    /// `lo <= v <= hi`.
    #[must_use]
    pub const fn closed(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Included(lo), Bound::Included(hi))
    }

    /// `lo < v < hi`.
    #[must_use]
    pub const fn open(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Excluded(lo), Bound::Excluded(hi))
    }

    /// `lo < v <= hi`.
    #[must_use]
    pub const fn open_closed(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Excluded(lo), Bound::Included(hi))
    }

    /// `lo <= v < hi`.
    #[must_use]
    pub const fn closed_open(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Included(lo), Bound::Excluded(hi))
    }

    /// Check whether a value lies in the interval.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Included(lo) => value >= lo,
            Bound::Excluded(lo) => value > lo,
            Bound::Unbounded => true,
        };
        let below_upper = match self.upper {
            Bound::Included(hi) => value <= hi,
            Bound::Excluded(hi) => value < hi,
            Bound::Unbounded => true,
        };
        above_lower && below_upper
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ANY
    }
}
