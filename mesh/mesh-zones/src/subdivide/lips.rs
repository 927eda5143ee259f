//! Lip halves, thirds and corners.

use mesh_region::{CoarseRegion, MeshRegion, RegionSelector};
use mesh_types::Axis;
use tracing::debug;

use super::Context;
use crate::zone::ClinicalZone;
use crate::zone_map::ZoneMap;

pub(super) fn subdivide(ctx: &Context<'_>, zones: &mut ZoneMap) {
    let lips = ctx.coarse(CoarseRegion::Lips);
    if lips.is_empty() {
        return;
    }
    let params = &ctx.params.lips;
    let x = ctx.samples(lips, Axis::X);
    let y = ctx.samples(lips, Axis::Y);
    let mid = y.median();

    let (upper, lower) = RegionSelector::above(Axis::Y, mid).split(
        ctx.positions,
        lips,
        (ClinicalZone::LipUpper.name(), ClinicalZone::LipLower.name()),
    );

    let lo = x.percentile(params.band_pcts.0);
    let hi = x.percentile(params.band_pcts.1);
    let third = (hi - lo) / 3.0;
    let thirds = Thirds {
        left: RegionSelector::above(Axis::X, hi - third),
        right: RegionSelector::below(Axis::X, lo + third),
        center: RegionSelector::between(Axis::X, lo + third, hi - third),
    };
    thirds.assign(
        ctx,
        &upper,
        [
            ClinicalZone::LipUpperLeft,
            ClinicalZone::LipUpperRight,
            ClinicalZone::LipUpperCenter,
        ],
        zones,
    );
    thirds.assign(
        ctx,
        &lower,
        [
            ClinicalZone::LipLowerLeft,
            ClinicalZone::LipLowerRight,
            ClinicalZone::LipLowerCenter,
        ],
        zones,
    );

    let half_band = params.corner_band * y.span();
    let band = RegionSelector::between(Axis::Y, mid - half_band, mid + half_band).select(
        ctx.positions,
        lips,
        "lip_corner_band",
    );
    let band_x = ctx.samples(&band, Axis::X);
    let corner_left =
        RegionSelector::above(Axis::X, band_x.percentile(100.0 - params.corner_pct));
    let corner_right = RegionSelector::below(Axis::X, band_x.percentile(params.corner_pct));
    zones.set_region(
        ClinicalZone::LipCornerLeft,
        ctx.select(&corner_left, &band, ClinicalZone::LipCornerLeft),
    );
    zones.set_region(
        ClinicalZone::LipCornerRight,
        ctx.select(&corner_right, &band, ClinicalZone::LipCornerRight),
    );

    debug!(
        vertices = lips.vertex_count(),
        median_y = mid,
        upper = upper.vertex_count(),
        lower = lower.vertex_count(),
        "lips subdivided"
    );
    zones.set_region(ClinicalZone::LipUpper, upper);
    zones.set_region(ClinicalZone::LipLower, lower);
}

/// Left, right and center thirds of a lip half.
struct Thirds {
    left: RegionSelector,
    right: RegionSelector,
    center: RegionSelector,
}

impl Thirds {
    /// Assign a lip half's thirds to `[left, right, center]` zones.
    fn assign(
        &self,
        ctx: &Context<'_>,
        half: &MeshRegion,
        targets: [ClinicalZone; 3],
        zones: &mut ZoneMap,
    ) {
        let [left, right, center] = targets;
        zones.set_region(left, ctx.select(&self.left, half, left));
        zones.set_region(right, ctx.select(&self.right, half, right));
        zones.set_region(center, ctx.select(&self.center, half, center));
    }
}

#[cfg(test)]
mod tests {
    use mesh_region::{MeshRegion, RegionMap};
    use mesh_types::Point3;

    use crate::subdivide::subdivide;
    use crate::zone::ClinicalZone;

    /// Three rows of seven lip vertices, x = -3..=3, at y = 0, 1, 2.
    fn lips() -> (Vec<Point3<f64>>, RegionMap) {
        let mut points = Vec::new();
        for y in 0..3 {
            for x in -3..=3 {
                points.push(Point3::new(f64::from(x), f64::from(y), 0.0));
            }
        }
        let regions = [MeshRegion::from_vertices("lips", 0..21)].into_iter().collect();
        (points, regions)
    }

    #[test]
    fn halves_split_at_median() {
        let (points, regions) = lips();
        let zones = subdivide(&points, &regions);
        // Median y is 1; the middle row belongs to the lower lip.
        assert_eq!(zones.get(ClinicalZone::LipLower).len(), 14);
        assert_eq!(zones.get(ClinicalZone::LipUpper), &[14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn thirds_cover_each_half() {
        let (points, regions) = lips();
        let zones = subdivide(&points, &regions);
        // P5 = -3, P95 = 3, thirds cut at -1 and 1.
        assert_eq!(zones.get(ClinicalZone::LipLowerLeft), &[5, 6, 12, 13]);
        assert_eq!(zones.get(ClinicalZone::LipLowerRight), &[0, 1, 7, 8]);
        assert_eq!(zones.get(ClinicalZone::LipLowerCenter), &[2, 3, 4, 9, 10, 11]);
        assert_eq!(zones.get(ClinicalZone::LipUpperLeft), &[19, 20]);
        assert_eq!(zones.get(ClinicalZone::LipUpperRight), &[14, 15]);
        assert_eq!(zones.get(ClinicalZone::LipUpperCenter), &[16, 17, 18]);
    }

    #[test]
    fn corners_are_outermost_in_band() {
        let (points, regions) = lips();
        let zones = subdivide(&points, &regions);
        // Band |y - 1| <= 0.4 is the middle row; P85 x = 2.1, P15 x = -2.1.
        assert_eq!(zones.get(ClinicalZone::LipCornerLeft), &[13]);
        assert_eq!(zones.get(ClinicalZone::LipCornerRight), &[7]);
    }
}
