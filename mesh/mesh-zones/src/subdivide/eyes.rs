//! Eyelids, eye corners, under-eye and tear troughs.
//!
//! Both eyes run the same rules; only the zone names and which x extreme
//! counts as the inner corner differ. Inner corners face the midline, which
//! is the low-x end of the left eye and the high-x end of the right eye.

use mesh_region::{CoarseRegion, RegionSelector};
use mesh_types::Axis;
use tracing::{debug, warn};

use super::{Context, Side};
use crate::params::EyeSkinFallback;
use crate::zone::ClinicalZone;
use crate::zone_map::ZoneMap;

/// Zones derived from one eye.
struct EyeZones {
    upper: ClinicalZone,
    lower: ClinicalZone,
    corner_inner: ClinicalZone,
    corner_outer: ClinicalZone,
    under_eye: ClinicalZone,
    tear_trough: ClinicalZone,
}

impl EyeZones {
    const LEFT: Self = Self {
        upper: ClinicalZone::EyeLeftUpper,
        lower: ClinicalZone::EyeLeftLower,
        corner_inner: ClinicalZone::EyeLeftCornerInner,
        corner_outer: ClinicalZone::EyeLeftCornerOuter,
        under_eye: ClinicalZone::UnderEyeLeft,
        tear_trough: ClinicalZone::TearTroughLeft,
    };

    const RIGHT: Self = Self {
        upper: ClinicalZone::EyeRightUpper,
        lower: ClinicalZone::EyeRightLower,
        corner_inner: ClinicalZone::EyeRightCornerInner,
        corner_outer: ClinicalZone::EyeRightCornerOuter,
        under_eye: ClinicalZone::UnderEyeRight,
        tear_trough: ClinicalZone::TearTroughRight,
    };
}

pub(super) fn subdivide(ctx: &Context<'_>, side: Side, zones: &mut ZoneMap) {
    let region = ctx.coarse(side.pick(
        CoarseRegion::LeftEyeRegion,
        CoarseRegion::RightEyeRegion,
    ));
    if region.is_empty() {
        return;
    }
    let eyeball = ctx.coarse(side.pick(CoarseRegion::LeftEyeball, CoarseRegion::RightEyeball));
    let names = side.pick(EyeZones::LEFT, EyeZones::RIGHT);
    let params = &ctx.params.eyes;

    // Reference heights come from the whole region, eyeball included.
    let y = ctx.samples(region, Axis::Y);
    let mid = y.median();
    let span = y.percentile(params.span_high_pct) - y.percentile(params.span_low_pct);

    let mut skin = region.difference(eyeball);
    if skin.is_empty() {
        match params.skin_fallback {
            EyeSkinFallback::Always => {
                warn!(?side, "eyeball covers the eye region, using the whole region as skin");
                skin = region.clone();
            }
            EyeSkinFallback::Never => {
                debug!(?side, "eyeball covers the eye region, no eye skin");
                return;
            }
        }
    }

    let upper = ctx.select(&RegionSelector::above(Axis::Y, mid), &skin, names.upper);
    let lower = ctx.select(&RegionSelector::at_or_below(Axis::Y, mid), &skin, names.lower);

    let band = RegionSelector::near(Axis::Y, mid, span * params.corner_band).select(
        ctx.positions,
        &skin,
        "eye_corner_band",
    );
    let band_x = ctx.samples(&band, Axis::X);
    let low_x = RegionSelector::at_or_below(Axis::X, band_x.percentile(params.corner_pct));
    let high_x =
        RegionSelector::at_or_above(Axis::X, band_x.percentile(100.0 - params.corner_pct));
    let (inner, outer) = side.pick((low_x.clone(), high_x.clone()), (high_x, low_x));
    zones.set_region(
        names.corner_inner,
        ctx.select(&inner, &band, names.corner_inner),
    );
    zones.set_region(
        names.corner_outer,
        ctx.select(&outer, &band, names.corner_outer),
    );

    if !lower.is_empty() {
        let center = ctx.samples(&lower, Axis::X).median();
        let medial = side.pick(
            RegionSelector::below(Axis::X, center),
            RegionSelector::above(Axis::X, center),
        );
        zones.set_region(
            names.tear_trough,
            ctx.select(&medial, &lower, names.tear_trough),
        );
    }

    debug!(
        ?side,
        skin = skin.vertex_count(),
        upper = upper.vertex_count(),
        lower = lower.vertex_count(),
        corner_band = band.vertex_count(),
        "eye subdivided"
    );
    zones.set_region(names.under_eye, lower.clone());
    zones.set_region(names.upper, upper);
    zones.set_region(names.lower, lower);
}

#[cfg(test)]
mod tests {
    use mesh_region::{MeshRegion, RegionMap};
    use mesh_types::Point3;

    use crate::params::{EyeSkinFallback, SubdivideParams};
    use crate::subdivide::{subdivide, subdivide_with_params};
    use crate::zone::ClinicalZone;

    /// A 5 x 3 patch of eye skin around (3, 10), rows y = 9, 10, 11.
    fn left_eye_patch() -> Vec<Point3<f64>> {
        let mut points = Vec::new();
        for y in 9..12 {
            for x in 1..6 {
                points.push(Point3::new(f64::from(x), f64::from(y), 0.0));
            }
        }
        points
    }

    fn eye_regions(eyeball: &[u32]) -> RegionMap {
        [
            MeshRegion::from_vertices("left_eye_region", 0..15),
            MeshRegion::from_vertices("left_eyeball", eyeball.iter().copied()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn eyelids_split_at_median_height() {
        let zones = subdivide(&left_eye_patch(), &eye_regions(&[]));
        assert_eq!(zones.get(ClinicalZone::EyeLeftUpper), &[10, 11, 12, 13, 14]);
        assert_eq!(zones.get(ClinicalZone::EyeLeftLower).len(), 10);
        assert_eq!(
            zones.get(ClinicalZone::UnderEyeLeft),
            zones.get(ClinicalZone::EyeLeftLower)
        );
        assert!(zones.get(ClinicalZone::EyeRightUpper).is_empty());
    }

    #[test]
    fn corners_on_middle_row() {
        let zones = subdivide(&left_eye_patch(), &eye_regions(&[]));
        // span = P90 - P10 = 2, band |y - 10| < 0.6 keeps the middle row.
        // Its P15 x is 1.6 and P85 x is 4.4.
        assert_eq!(zones.get(ClinicalZone::EyeLeftCornerInner), &[5]);
        assert_eq!(zones.get(ClinicalZone::EyeLeftCornerOuter), &[9]);
    }

    #[test]
    fn tear_trough_is_medial_half() {
        let zones = subdivide(&left_eye_patch(), &eye_regions(&[]));
        // Under-eye x median is 3; medial on the left eye is x < 3.
        assert_eq!(zones.get(ClinicalZone::TearTroughLeft), &[0, 1, 5, 6]);
    }

    #[test]
    fn eyeball_is_removed_from_skin() {
        let zones = subdivide(&left_eye_patch(), &eye_regions(&[10, 11, 12]));
        assert_eq!(zones.get(ClinicalZone::EyeLeftUpper), &[13, 14]);
    }

    #[test]
    fn full_eyeball_cover_empties_skin_zones() {
        let all: Vec<u32> = (0..15).collect();
        let zones = subdivide(&left_eye_patch(), &eye_regions(&all));
        for zone in [
            ClinicalZone::EyeLeftUpper,
            ClinicalZone::EyeLeftLower,
            ClinicalZone::EyeLeftCornerInner,
            ClinicalZone::EyeLeftCornerOuter,
            ClinicalZone::UnderEyeLeft,
            ClinicalZone::TearTroughLeft,
        ] {
            assert!(zones.get(zone).is_empty(), "{zone} should be empty");
        }
        assert_eq!(zones.get(ClinicalZone::FullFace).len(), 15);
    }

    #[test]
    fn always_fallback_uses_whole_region() {
        let all: Vec<u32> = (0..15).collect();
        let params = SubdivideParams::new().with_eye_skin_fallback(EyeSkinFallback::Always);
        let zones = subdivide_with_params(&left_eye_patch(), &eye_regions(&all), &params);
        assert_eq!(zones.get(ClinicalZone::EyeLeftUpper), &[10, 11, 12, 13, 14]);
        assert_eq!(zones.get(ClinicalZone::EyeLeftCornerInner), &[5]);
    }
}
