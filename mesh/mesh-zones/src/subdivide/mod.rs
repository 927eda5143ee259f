//! Mask-guided zone subdivision.
//!
//! Each coarse mask supplied by the head model is cut into clinical zones by
//! percentile thresholds computed over that mask alone. Rules for different
//! masks are independent; only the midline (median x of the nose) and the
//! face remainder tie them together.

mod eyes;
mod face;
mod forehead;
mod lips;
mod nose;

use mesh_region::{AxisSamples, CoarseRegion, MeshRegion, RegionMap, RegionSelector};
use mesh_types::{Axis, Point3};
use tracing::{debug, info};

use crate::params::SubdivideParams;
use crate::zone::ClinicalZone;
use crate::zone_map::ZoneMap;

/// Coarse masks removed from `face` to form the face remainder.
const NON_REMAINDER: [CoarseRegion; 10] = [
    CoarseRegion::Nose,
    CoarseRegion::Lips,
    CoarseRegion::Forehead,
    CoarseRegion::LeftEyeRegion,
    CoarseRegion::RightEyeRegion,
    CoarseRegion::Neck,
    CoarseRegion::LeftEar,
    CoarseRegion::RightEar,
    CoarseRegion::LeftEyeball,
    CoarseRegion::RightEyeball,
];

/// Raw coarse masks merged into `full_face`.
const FULL_FACE_MASKS: [CoarseRegion; 6] = [
    CoarseRegion::Face,
    CoarseRegion::Forehead,
    CoarseRegion::Nose,
    CoarseRegion::Lips,
    CoarseRegion::LeftEyeRegion,
    CoarseRegion::RightEyeRegion,
];

/// Subdivide coarse masks into clinical zones with default parameters.
///
/// Missing masks read as empty, so any subset of masks may be supplied.
///
/// # Example
///
/// ```
/// use mesh_region::{MeshRegion, RegionMap};
/// use mesh_types::Point3;
/// use mesh_zones::{subdivide, ClinicalZone};
///
/// let positions = vec![
///     Point3::new(0.0, 0.1, 0.0),
///     Point3::new(0.0, 0.5, 0.0),
///     Point3::new(0.0, 0.9, 0.0),
///     Point3::new(-0.1, 0.3, 0.0),
///     Point3::new(0.1, 0.3, 0.0),
/// ];
/// let regions: RegionMap = [MeshRegion::from_vertices("nose", 0..5)]
///     .into_iter()
///     .collect();
///
/// let zones = subdivide(&positions, &regions);
/// assert_eq!(zones.get(ClinicalZone::NoseBridge), &[1, 2]);
/// assert_eq!(zones.get(ClinicalZone::FullFace), &[0, 1, 2, 3, 4]);
/// ```
#[must_use]
pub fn subdivide(positions: &[Point3<f64>], regions: &RegionMap) -> ZoneMap {
    subdivide_with_params(positions, regions, &SubdivideParams::default())
}

/// Subdivide coarse masks into clinical zones.
///
/// Mask indices that do not address a vertex are dropped first.
#[must_use]
pub fn subdivide_with_params(
    positions: &[Point3<f64>],
    regions: &RegionMap,
    params: &SubdivideParams,
) -> ZoneMap {
    let regions = regions.clone().restricted_to(positions.len());
    let nose = regions.coarse(CoarseRegion::Nose);
    let midline = if nose.is_empty() {
        0.0
    } else {
        nose.samples(positions, Axis::X).median()
    };

    info!(
        vertices = positions.len(),
        masks = regions.len(),
        midline,
        "Starting mask-guided zone subdivision"
    );

    let ctx = Context {
        positions,
        regions: &regions,
        params,
        midline,
    };
    let mut zones = ZoneMap::new();

    forehead::subdivide(&ctx, &mut zones);
    for side in Side::BOTH {
        eyes::subdivide(&ctx, side, &mut zones);
    }
    nose::subdivide(&ctx, &mut zones);
    lips::subdivide(&ctx, &mut zones);

    let remainder = regions
        .coarse(CoarseRegion::Face)
        .difference_all("face_remainder", NON_REMAINDER.map(|r| regions.coarse(r)));
    debug!(vertices = remainder.vertex_count(), "face remainder");
    face::subdivide(&ctx, &remainder, &mut zones);

    for (zone, mask) in [
        (ClinicalZone::EarLeft, CoarseRegion::LeftEar),
        (ClinicalZone::EarRight, CoarseRegion::RightEar),
        (ClinicalZone::Neck, CoarseRegion::Neck),
    ] {
        zones.set_region(zone, regions.coarse(mask).clone());
    }

    temples_from_scalp(&ctx, &mut zones);
    assemble_full_face(&regions, &mut zones);

    let coverage = zones.coverage();
    info!(
        assignments = coverage.total_assignments,
        populated = coverage.populated_zones,
        "Zone subdivision complete"
    );
    debug!("{coverage}");

    zones
}

/// Left or right of the facial midline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Subject's left, positive x.
    Left,
    /// Subject's right.
    Right,
}

impl Side {
    pub(crate) const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Selector for this side of a split at `midline`.
    ///
    /// Vertices exactly on the midline go right.
    pub(crate) fn of(self, midline: f64) -> RegionSelector {
        match self {
            Self::Left => RegionSelector::above(Axis::X, midline),
            Self::Right => RegionSelector::at_or_below(Axis::X, midline),
        }
    }

    /// Choose between the left and right variant of something.
    pub(crate) fn pick<T>(self, left: T, right: T) -> T {
        match self {
            Self::Left => left,
            Self::Right => right,
        }
    }
}

/// Inputs shared by every subdivision rule.
pub(crate) struct Context<'a> {
    positions: &'a [Point3<f64>],
    regions: &'a RegionMap,
    params: &'a SubdivideParams,
    midline: f64,
}

impl Context<'_> {
    fn coarse(&self, region: CoarseRegion) -> &MeshRegion {
        self.regions.coarse(region)
    }

    fn samples(&self, region: &MeshRegion, axis: Axis) -> AxisSamples {
        region.samples(self.positions, axis)
    }

    fn select(
        &self,
        selector: &RegionSelector,
        region: &MeshRegion,
        zone: ClinicalZone,
    ) -> MeshRegion {
        selector.select(self.positions, region, zone.name())
    }

    /// Split a region at the midline into its left and right parts.
    fn split_sides(
        &self,
        region: &MeshRegion,
        zones: (ClinicalZone, ClinicalZone),
    ) -> (MeshRegion, MeshRegion) {
        (
            self.select(&Side::Left.of(self.midline), region, zones.0),
            self.select(&Side::Right.of(self.midline), region, zones.1),
        )
    }
}

/// Derive temples from the lower scalp when the forehead produced none.
///
/// Only the left temple gates the fallback; when it runs, both temples are
/// replaced.
fn temples_from_scalp(ctx: &Context<'_>, zones: &mut ZoneMap) {
    let scalp = ctx.coarse(CoarseRegion::Scalp);
    if !zones.get(ClinicalZone::TempleLeft).is_empty() || scalp.is_empty() {
        return;
    }
    let params = &ctx.params.scalp;
    let cut = ctx.samples(scalp, Axis::Y).percentile(params.low_pct);
    let low = RegionSelector::below(Axis::Y, cut).select(ctx.positions, scalp, "scalp_low");
    if low.is_empty() {
        return;
    }
    let x = ctx.samples(&low, Axis::X);
    let left = RegionSelector::above(Axis::X, x.percentile(params.temple_outer_pct));
    let right = RegionSelector::below(Axis::X, x.percentile(100.0 - params.temple_outer_pct));
    debug!(candidates = low.vertex_count(), "temples from scalp");
    zones.set_region(
        ClinicalZone::TempleLeft,
        ctx.select(&left, &low, ClinicalZone::TempleLeft),
    );
    zones.set_region(
        ClinicalZone::TempleRight,
        ctx.select(&right, &low, ClinicalZone::TempleRight),
    );
}

/// Union every facial zone and the raw facial masks into `full_face`.
fn assemble_full_face(regions: &RegionMap, zones: &mut ZoneMap) {
    let mut full_face: Vec<u32> = ClinicalZone::ALL
        .into_iter()
        .filter(|&zone| zone.is_facial() && zone != ClinicalZone::FullFace)
        .flat_map(|zone| zones.get(zone).iter().copied())
        .collect();
    for mask in FULL_FACE_MASKS {
        full_face.extend(regions.coarse(mask).vertices());
    }
    zones.set(ClinicalZone::FullFace, full_face);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> Vec<Point3<f64>> {
        (0..8)
            .map(|i| Point3::new(f64::from(i) - 3.5, f64::from(i % 4), 0.0))
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_zones() {
        let zones = subdivide(&[], &RegionMap::new());
        assert!(zones.all_empty());
    }

    #[test]
    fn pass_through_masks() {
        let regions: RegionMap = [
            MeshRegion::from_vertices("neck", [0, 1]),
            MeshRegion::from_vertices("left_ear", [6]),
            MeshRegion::from_vertices("right_ear", [7]),
        ]
        .into_iter()
        .collect();
        let zones = subdivide(&positions(), &regions);
        assert_eq!(zones.get(ClinicalZone::Neck), &[0, 1]);
        assert_eq!(zones.get(ClinicalZone::EarLeft), &[6]);
        assert_eq!(zones.get(ClinicalZone::EarRight), &[7]);
        assert!(zones.get(ClinicalZone::FullFace).is_empty());
    }

    #[test]
    fn out_of_range_mask_indices_dropped() {
        let regions: RegionMap = [MeshRegion::from_vertices("neck", [1, 100])]
            .into_iter()
            .collect();
        let zones = subdivide(&positions(), &regions);
        assert_eq!(zones.get(ClinicalZone::Neck), &[1]);
    }

    #[test]
    fn scalp_fallback_fills_both_temples() {
        let regions: RegionMap = [MeshRegion::from_vertices("scalp", 0..8)]
            .into_iter()
            .collect();
        let zones = subdivide(&positions(), &regions);
        // Lower half of the scalp is y in {0, 1}: vertices 0, 1, 4, 5.
        assert_eq!(zones.get(ClinicalZone::TempleLeft), &[5]);
        assert_eq!(zones.get(ClinicalZone::TempleRight), &[0]);
        assert_eq!(zones.get(ClinicalZone::FullFace), &[0, 5]);
    }

    #[test]
    fn side_split_sends_midline_right() {
        assert!(Side::Left.of(0.0).matches(&Point3::new(0.1, 0.0, 0.0)));
        assert!(!Side::Left.of(0.0).matches(&Point3::new(0.0, 0.0, 0.0)));
        assert!(Side::Right.of(0.0).matches(&Point3::new(0.0, 0.0, 0.0)));
        assert_eq!(Side::Right.pick("l", "r"), "r");
    }
}
