//! Bridge, tip and nostrils.

use mesh_region::{CoarseRegion, Interval, RegionSelector};
use mesh_types::Axis;
use tracing::debug;

use super::Context;
use crate::zone::ClinicalZone;
use crate::zone_map::ZoneMap;

pub(super) fn subdivide(ctx: &Context<'_>, zones: &mut ZoneMap) {
    let nose = ctx.coarse(CoarseRegion::Nose);
    if nose.is_empty() {
        return;
    }
    let params = &ctx.params.nose;
    let x = ctx.samples(nose, Axis::X);
    let y = ctx.samples(nose, Axis::Y);

    let bottom = y.percentile(params.low_pct);
    let height = y.percentile(params.high_pct) - bottom;
    let width = x.percentile(params.width_pcts.1) - x.percentile(params.width_pcts.0);
    let central = RegionSelector::near(Axis::X, ctx.midline, params.center_half_width * width);

    let bridge_start = bottom + params.bridge_start * height;
    let bridge = ctx.select(
        &RegionSelector::above(Axis::Y, bridge_start).and(central.clone()),
        nose,
        ClinicalZone::NoseBridge,
    );
    let bridge_mid = ctx.samples(&bridge, Axis::Y).median();
    let (bridge_upper, bridge_lower) = RegionSelector::above(Axis::Y, bridge_mid).split(
        ctx.positions,
        &bridge,
        (ClinicalZone::NoseBridgeUpper.name(), ClinicalZone::NoseBridgeLower.name()),
    );

    let tip_band = Interval::open_closed(
        bottom + params.tip_band.0 * height,
        bottom + params.tip_band.1 * height,
    );
    let tip = ctx.select(
        &RegionSelector::coordinate(Axis::Y, tip_band).and(central),
        nose,
        ClinicalZone::NoseTip,
    );
    let (tip_left, tip_right) =
        ctx.split_sides(&tip, (ClinicalZone::NoseTipLeft, ClinicalZone::NoseTipRight));

    let low = RegionSelector::at_or_below(Axis::Y, bottom + params.nostril_top * height);
    let offset = params.nostril_offset * width;
    let nostril_left = low
        .clone()
        .and(RegionSelector::above(Axis::X, ctx.midline + offset));
    let nostril_right = low.and(RegionSelector::below(Axis::X, ctx.midline - offset));
    zones.set_region(
        ClinicalZone::NostrilLeft,
        ctx.select(&nostril_left, nose, ClinicalZone::NostrilLeft),
    );
    zones.set_region(
        ClinicalZone::NostrilRight,
        ctx.select(&nostril_right, nose, ClinicalZone::NostrilRight),
    );

    debug!(
        vertices = nose.vertex_count(),
        bottom,
        height,
        width,
        bridge = bridge.vertex_count(),
        tip = tip.vertex_count(),
        "nose subdivided"
    );
    zones.set_region(ClinicalZone::NoseDorsum, bridge.clone());
    zones.set_region(ClinicalZone::NoseBridge, bridge);
    zones.set_region(ClinicalZone::NoseBridgeUpper, bridge_upper);
    zones.set_region(ClinicalZone::NoseBridgeLower, bridge_lower);
    zones.set_region(ClinicalZone::NoseTip, tip);
    zones.set_region(ClinicalZone::NoseTipLeft, tip_left);
    zones.set_region(ClinicalZone::NoseTipRight, tip_right);
}

#[cfg(test)]
mod tests {
    use mesh_region::{MeshRegion, RegionMap};
    use mesh_types::Point3;

    use crate::subdivide::subdivide;
    use crate::zone::ClinicalZone;

    /// A nose column at x = 0 with y = 0..=10, plus four flared nostril
    /// vertices at x = +-1 near the base.
    fn nose() -> (Vec<Point3<f64>>, RegionMap) {
        let mut points: Vec<Point3<f64>> = (0..=10)
            .map(|i| Point3::new(0.0, f64::from(i), 0.0))
            .collect();
        points.push(Point3::new(1.0, 1.0, 0.0));
        points.push(Point3::new(-1.0, 1.0, 0.0));
        points.push(Point3::new(1.0, 2.0, 0.0));
        points.push(Point3::new(-1.0, 2.0, 0.0));
        let regions = [MeshRegion::from_vertices("nose", 0..15)].into_iter().collect();
        (points, regions)
    }

    #[test]
    fn bridge_is_upper_center() {
        let (points, regions) = nose();
        let zones = subdivide(&points, &regions);
        // x: P10 = -0.6, P90 = 0.6, so the central band is |x| < 0.42.
        // y: P5 = 0.7, P95 = 9.3, bridge above 0.7 + 0.4 * 8.6 = 4.14.
        assert_eq!(zones.get(ClinicalZone::NoseBridge), &[5, 6, 7, 8, 9, 10]);
        assert_eq!(
            zones.get(ClinicalZone::NoseDorsum),
            zones.get(ClinicalZone::NoseBridge)
        );
        assert_eq!(zones.get(ClinicalZone::NoseBridgeUpper), &[8, 9, 10]);
        assert_eq!(zones.get(ClinicalZone::NoseBridgeLower), &[5, 6, 7]);
    }

    #[test]
    fn tip_band() {
        let (points, regions) = nose();
        let zones = subdivide(&points, &regions);
        // Tip y in (1.56, 3.28], inside the central band.
        assert_eq!(zones.get(ClinicalZone::NoseTip), &[2, 3]);
        assert!(zones.get(ClinicalZone::NoseTipLeft).is_empty());
        assert_eq!(zones.get(ClinicalZone::NoseTipRight), &[2, 3]);
    }

    #[test]
    fn nostrils_are_flared_base() {
        let (points, regions) = nose();
        let zones = subdivide(&points, &regions);
        // Offset 0.15 * 1.2 = 0.18 either side of the midline.
        assert_eq!(zones.get(ClinicalZone::NostrilLeft), &[11, 13]);
        assert_eq!(zones.get(ClinicalZone::NostrilRight), &[12, 14]);
    }
}
