//! Order statistics over vertex coordinates.
//!
//! All zone boundaries are expressed as percentiles of a coordinate within a
//! region. Percentiles use linear interpolation between closest ranks: for
//! `n` sorted values the `p`-th percentile sits at fractional position
//! `p / 100 * (n - 1)`.

/// Compute a percentile of unsorted values.
///
/// Returns 0.0 for an empty slice. `pct` is clamped to `[0, 100]`.
///
/// # Example
///
/// ```
/// use mesh_region::percentile;
///
/// assert_eq!(percentile(&[4.0, 1.0, 3.0, 2.0], 50.0), 2.5);
/// assert_eq!(percentile(&[], 90.0), 0.0);
/// ```
#[must_use]
pub fn percentile(values: &[f64], pct: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    percentile_sorted(&sorted, pct)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentile_sorted(sorted: &[f64], pct: f64) -> f64 {
    let Some(&last) = sorted.last() else {
        return 0.0;
    };
    if sorted.len() == 1 {
        return last;
    }
    let position = pct.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - position.floor();
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Sorted samples of one coordinate across a region.
///
/// Built once per region and axis, then queried for as many percentiles as a
/// rule needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSamples {
    sorted: Vec<f64>,
}

impl AxisSamples {
    /// Wrap coordinate values, sorting them.
    #[must_use]
    pub fn new(mut values: Vec<f64>) -> Self {
        values.sort_unstable_by(f64::total_cmp);
        Self { sorted: values }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Check if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Interpolated percentile, 0.0 when empty.
    #[must_use]
    pub fn percentile(&self, pct: f64) -> f64 {
        percentile_sorted(&self.sorted, pct)
    }

    /// The 50th percentile.
    #[must_use]
    pub fn median(&self) -> f64 {
        self.percentile(50.0)
    }

    /// Smallest sample, 0.0 when empty.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.sorted.first().copied().unwrap_or(0.0)
    }

    /// Largest sample, 0.0 when empty.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.sorted.last().copied().unwrap_or(0.0)
    }

    /// Spread between the largest and smallest sample.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max() - self.min()
    }
}
