//! Chin, jaw, cheeks and nasolabial folds from the face remainder.

use mesh_region::{CoarseRegion, Interval, MeshRegion, RegionSelector};
use mesh_types::Axis;
use tracing::debug;

use super::{Context, Side};
use crate::zone::ClinicalZone;
use crate::zone_map::ZoneMap;

pub(super) fn subdivide(ctx: &Context<'_>, remainder: &MeshRegion, zones: &mut ZoneMap) {
    if remainder.is_empty() {
        return;
    }
    let params = &ctx.params.face;
    let x = ctx.samples(remainder, Axis::X);
    let y = ctx.samples(remainder, Axis::Y);
    let bottom = y.percentile(params.height_pcts.0);
    let height = y.percentile(params.height_pcts.1) - bottom;
    let x_span = x.span();
    let mid = ctx.midline;

    // Chin: low and central, cut into thirds of its own width.
    let half_width = params.chin_half_width * x_span;
    let chin = ctx.select(
        &RegionSelector::at_or_below(Axis::Y, bottom + params.chin_top * height)
            .and(RegionSelector::near(Axis::X, mid, half_width)),
        remainder,
        ClinicalZone::Chin,
    );
    let third = half_width * 2.0 / 3.0;
    for (zone, selector) in [
        (ClinicalZone::ChinCenter, RegionSelector::near(Axis::X, mid, third / 2.0)),
        (ClinicalZone::ChinLeft, RegionSelector::above(Axis::X, mid + third / 2.0)),
        (ClinicalZone::ChinRight, RegionSelector::below(Axis::X, mid - third / 2.0)),
    ] {
        zones.set_region(zone, ctx.select(&selector, &chin, zone));
    }

    // Jaw: low and lateral of the chin.
    let jaw = RegionSelector::at_or_below(Axis::Y, bottom + params.jaw_top * height)
        .and(RegionSelector::away_from(Axis::X, mid, half_width))
        .select(ctx.positions, remainder, "jaw");
    let (jaw_left, jaw_right) =
        ctx.split_sides(&jaw, (ClinicalZone::JawLeft, ClinicalZone::JawRight));
    for (side, jaw_side) in [(Side::Left, &jaw_left), (Side::Right, &jaw_right)] {
        let zone = side.pick(ClinicalZone::JawlineLeft, ClinicalZone::JawlineRight);
        let edge = ctx.samples(jaw_side, Axis::Y).percentile(params.jawline_pct);
        zones.set_region(
            zone,
            ctx.select(&RegionSelector::below(Axis::Y, edge), jaw_side, zone),
        );
    }

    // Cheeks: mid-height and away from the midline.
    let cheek_low = bottom + params.cheek_band.0 * height;
    let cheek_high = bottom + params.cheek_band.1 * height;
    let cheeks = RegionSelector::between(Axis::Y, cheek_low, cheek_high)
        .and(RegionSelector::beyond(Axis::X, mid, params.cheek_offset * x_span))
        .select(ctx.positions, remainder, "cheeks");
    let cheek_mid = if cheeks.is_empty() {
        (cheek_low + cheek_high) / 2.0
    } else {
        ctx.samples(&cheeks, Axis::Y).median()
    };
    let (cheek_left, cheek_right) =
        ctx.split_sides(&cheeks, (ClinicalZone::CheekLeft, ClinicalZone::CheekRight));
    for (side, cheek) in [(Side::Left, &cheek_left), (Side::Right, &cheek_right)] {
        let bone = side.pick(ClinicalZone::CheekboneLeft, ClinicalZone::CheekboneRight);
        let hollow = side.pick(ClinicalZone::CheekHollowLeft, ClinicalZone::CheekHollowRight);
        let (upper, lower) = RegionSelector::above(Axis::Y, cheek_mid).split(
            ctx.positions,
            cheek,
            (bone.name(), hollow.name()),
        );
        zones.set_region(bone, upper);
        zones.set_region(hollow, lower);
    }

    nasolabial(ctx, remainder, zones);

    debug!(
        vertices = remainder.vertex_count(),
        chin = chin.vertex_count(),
        jaw = jaw.vertex_count(),
        cheeks = cheeks.vertex_count(),
        "face remainder subdivided"
    );
    zones.set_region(ClinicalZone::Chin, chin);
    zones.set_region(ClinicalZone::JawLeft, jaw_left);
    zones.set_region(ClinicalZone::JawRight, jaw_right);
    zones.set_region(ClinicalZone::CheekLeft, cheek_left);
    zones.set_region(ClinicalZone::CheekRight, cheek_right);
}

/// Folds between the nose and the mouth corners.
///
/// Needs both the nose and the lips masks for its reference heights.
fn nasolabial(ctx: &Context<'_>, remainder: &MeshRegion, zones: &mut ZoneMap) {
    let nose = ctx.coarse(CoarseRegion::Nose);
    let lips = ctx.coarse(CoarseRegion::Lips);
    if nose.is_empty() || lips.is_empty() {
        return;
    }
    let params = &ctx.params.face;
    let nose_x = ctx.samples(nose, Axis::X);
    let nose_width = nose_x.percentile(90.0) - nose_x.percentile(10.0);
    let bottom = ctx.samples(lips, Axis::Y).percentile(params.nasolabial_lip_pct);
    let top = ctx.samples(nose, Axis::Y).percentile(params.nasolabial_nose_pct);
    let (near, far) = params.nasolabial_offsets;

    let folds = RegionSelector::between(Axis::Y, bottom, top)
        .and(RegionSelector::distance_from(
            Axis::X,
            ctx.midline,
            Interval::closed(near * nose_width, far * nose_width),
        ))
        .select(ctx.positions, remainder, "nasolabial");
    let (left, right) = ctx.split_sides(
        &folds,
        (ClinicalZone::NasolabialLeft, ClinicalZone::NasolabialRight),
    );
    zones.set_region(ClinicalZone::NasolabialLeft, left);
    zones.set_region(ClinicalZone::NasolabialRight, right);
}

#[cfg(test)]
mod tests {
    use mesh_region::{MeshRegion, RegionMap};
    use mesh_types::Point3;

    use crate::subdivide::subdivide;
    use crate::zone::ClinicalZone;

    /// 9 x 11 grid, x = -4..=4 and y = 0..=10, row-major by y.
    fn grid() -> Vec<Point3<f64>> {
        let mut points = Vec::new();
        for y in 0..=10 {
            for x in -4..=4 {
                points.push(Point3::new(f64::from(x), f64::from(y), 0.0));
            }
        }
        points
    }

    fn at(x: i32, y: u32) -> u32 {
        y * 9 + u32::try_from(x + 4).unwrap_or(0)
    }

    fn face_only() -> RegionMap {
        [MeshRegion::from_vertices("face", 0..99)].into_iter().collect()
    }

    #[test]
    fn chin_is_low_center() {
        let zones = subdivide(&grid(), &face_only());
        // y: P5 = 0, P95 = 10; chin is y <= 2.5 with |x| < 2.
        let chin = zones.get(ClinicalZone::Chin);
        assert_eq!(chin.len(), 9);
        assert!(chin.contains(&at(1, 2)));
        assert!(!chin.contains(&at(2, 0)));
        // Thirds of the chin: |x| < 2/3 is center.
        assert_eq!(zones.get(ClinicalZone::ChinCenter), &[at(0, 0), at(0, 1), at(0, 2)]);
        assert_eq!(zones.get(ClinicalZone::ChinLeft), &[at(1, 0), at(1, 1), at(1, 2)]);
        assert_eq!(zones.get(ClinicalZone::ChinRight), &[at(-1, 0), at(-1, 1), at(-1, 2)]);
    }

    #[test]
    fn jaw_is_low_lateral() {
        let zones = subdivide(&grid(), &face_only());
        // Jaw is y <= 4 with |x| >= 2: 3 columns x 5 rows per side.
        assert_eq!(zones.get(ClinicalZone::JawLeft).len(), 15);
        assert_eq!(zones.get(ClinicalZone::JawRight).len(), 15);
        assert!(zones.get(ClinicalZone::JawLeft).contains(&at(2, 4)));
        // Jawline: below the jaw side's P35 y = 1, so the bottom row only.
        assert_eq!(zones.get(ClinicalZone::JawlineLeft), &[at(2, 0), at(3, 0), at(4, 0)]);
        assert!(zones.get(ClinicalZone::JawlineRight).contains(&at(-4, 0)));
    }

    #[test]
    fn cheeks_split_at_their_median() {
        let zones = subdivide(&grid(), &face_only());
        // Cheek band y in [2.5, 7], |x| > 0.8: rows 3..=7, columns 1..=4.
        assert_eq!(zones.get(ClinicalZone::CheekLeft).len(), 20);
        assert_eq!(zones.get(ClinicalZone::CheekRight).len(), 20);
        // Median y 5: rows 6 and 7 are cheekbone, the median row is hollow.
        assert!(zones.get(ClinicalZone::CheekboneLeft).contains(&at(3, 6)));
        assert!(zones.get(ClinicalZone::CheekHollowLeft).contains(&at(3, 5)));
        assert_eq!(zones.get(ClinicalZone::CheekboneRight).len(), 8);
        assert_eq!(zones.get(ClinicalZone::CheekHollowRight).len(), 12);
    }

    #[test]
    fn nasolabial_needs_nose_and_lips() {
        let zones = subdivide(&grid(), &face_only());
        assert!(zones.get(ClinicalZone::NasolabialLeft).is_empty());
        assert!(zones.get(ClinicalZone::NasolabialRight).is_empty());
    }

    #[test]
    fn nasolabial_between_lips_and_nose() {
        let mut points = grid();
        // Nose column at x = 0, y 5..=8, widened by two vertices at x = +-1.
        let nose_start = u32::try_from(points.len()).unwrap_or(0);
        for y in 5..=8 {
            points.push(Point3::new(0.0, f64::from(y), 1.0));
        }
        points.push(Point3::new(1.0, 5.0, 1.0));
        points.push(Point3::new(-1.0, 5.0, 1.0));
        // Lips at y = 2..=3.
        let lips_start = u32::try_from(points.len()).unwrap_or(0);
        for x in -1..=1 {
            for y in 2..=3 {
                points.push(Point3::new(f64::from(x), f64::from(y), 1.0));
            }
        }
        let regions: RegionMap = [
            MeshRegion::from_vertices("face", 0..99),
            MeshRegion::from_vertices("nose", nose_start..lips_start),
            MeshRegion::from_vertices("lips", lips_start..lips_start + 6),
        ]
        .into_iter()
        .collect();
        let zones = subdivide(&points, &regions);
        // Nose x: P10 = -0.5, P90 = 0.5, width 1: fold |x| in [0.4, 0.9]
        // keeps no grid column; lips P50 y = 2.5, nose P30 y = 5.
        assert!(zones.get(ClinicalZone::NasolabialLeft).is_empty());

        // Widen the nose so the fold lands on the x = +-1 columns.
        let mut wide = points;
        let flare = usize::try_from(lips_start).unwrap_or(0) - 2;
        wide[flare] = Point3::new(2.0, 5.0, 1.0);
        wide[flare + 1] = Point3::new(-2.0, 5.0, 1.0);
        let zones = subdivide(&wide, &regions);
        // Nose x: P10 = -1, P90 = 1, width 2: fold |x| in [0.8, 1.8].
        assert_eq!(
            zones.get(ClinicalZone::NasolabialLeft),
            &[at(1, 3), at(1, 4), at(1, 5)]
        );
        assert_eq!(
            zones.get(ClinicalZone::NasolabialRight),
            &[at(-1, 3), at(-1, 4), at(-1, 5)]
        );
    }
}
