//! Position-only zone classification.
//!
//! Used when no coarse masks are available. Every vertex is placed in a
//! normalized head frame derived from the mesh bounding box and matched
//! against a fixed table of rectangles in that frame:
//!
//! - `yn = (y - y_min) / y_extent`, 0 at the lowest vertex and 1 at the
//!   highest;
//! - `xn = (x - x_mid) / (x_extent / 2)`, -1 at the subject's right edge and
//!   1 at the left edge.
//!
//! Vertices below `yn = 0.10` are neck and nothing else. Of the rest, only
//! vertices in front of the bounding-box z midpoint receive zones.

use mesh_region::Interval;
use mesh_types::{Aabb, Axis, MeshBounds, Point3};
use tracing::{debug, info, warn};

use crate::zone::{ClinicalZone, ZONE_COUNT};
use crate::zone_map::ZoneMap;

/// Height below which a vertex is neck.
const NECK_TOP: f64 = 0.10;

/// One rectangle of the normalized head frame.
struct PositionRule {
    zone: ClinicalZone,
    y: Interval,
    x: Interval,
}

const fn rule(zone: ClinicalZone, y: Interval, x: Interval) -> PositionRule {
    PositionRule { zone, y, x }
}

/// Rules applied to front-facing vertices above the neck.
#[rustfmt::skip]
const RULES: &[PositionRule] = {
    use ClinicalZone as Z;
    use Interval as I;
    &[
        rule(Z::FullFace, I::above(NECK_TOP), I::ANY),

        rule(Z::Forehead, I::above(0.75), I::ANY),
        rule(Z::ForeheadLeft, I::above(0.75), I::above(0.15)),
        rule(Z::ForeheadRight, I::above(0.75), I::below(-0.15)),
        rule(Z::ForeheadCenter, I::above(0.75), I::closed(-0.15, 0.15)),

        rule(Z::BrowLeft, I::open(0.65, 0.75), I::above(0.10)),
        rule(Z::BrowRight, I::open(0.65, 0.75), I::below(-0.10)),
        rule(Z::BrowInnerLeft, I::open(0.65, 0.75), I::open(0.10, 0.30)),
        rule(Z::BrowInnerRight, I::open(0.65, 0.75), I::open(-0.30, -0.10)),

        rule(Z::EyeLeftUpper, I::open(0.62, 0.68), I::open(0.15, 0.55)),
        rule(Z::EyeLeftLower, I::open_closed(0.55, 0.62), I::open(0.15, 0.55)),
        rule(Z::EyeRightUpper, I::open(0.62, 0.68), I::open(-0.55, -0.15)),
        rule(Z::EyeRightLower, I::open_closed(0.55, 0.62), I::open(-0.55, -0.15)),
        rule(Z::EyeLeftCornerInner, I::open(0.55, 0.68), I::open(0.15, 0.25)),
        rule(Z::EyeLeftCornerOuter, I::open(0.55, 0.68), I::open(0.45, 0.55)),
        rule(Z::EyeRightCornerInner, I::open(0.55, 0.68), I::open(-0.25, -0.15)),
        rule(Z::EyeRightCornerOuter, I::open(0.55, 0.68), I::open(-0.55, -0.45)),
        rule(Z::UnderEyeLeft, I::open(0.48, 0.58), I::open(0.10, 0.50)),
        rule(Z::UnderEyeRight, I::open(0.48, 0.58), I::open(-0.50, -0.10)),
        rule(Z::TearTroughLeft, I::open(0.48, 0.58), I::open(0.10, 0.30)),
        rule(Z::TearTroughRight, I::open(0.48, 0.58), I::open(-0.30, -0.10)),

        rule(Z::NoseBridge, I::open(0.35, 0.60), I::open(-0.15, 0.15)),
        rule(Z::NoseBridgeUpper, I::open(0.48, 0.60), I::open(-0.15, 0.15)),
        rule(Z::NoseBridgeLower, I::open_closed(0.35, 0.48), I::open(-0.15, 0.15)),
        rule(Z::NoseTip, I::open(0.30, 0.40), I::open(-0.15, 0.15)),
        rule(Z::NoseTipLeft, I::open(0.30, 0.40), I::open(0.0, 0.15)),
        rule(Z::NoseTipRight, I::open(0.30, 0.40), I::open_closed(-0.15, 0.0)),
        rule(Z::NostrilLeft, I::open(0.28, 0.38), I::open(0.08, 0.22)),
        rule(Z::NostrilRight, I::open(0.28, 0.38), I::open(-0.22, -0.08)),
        rule(Z::NoseDorsum, I::open(0.35, 0.60), I::open(-0.15, 0.15)),

        rule(Z::CheekLeft, I::open(0.30, 0.55), I::above(0.25)),
        rule(Z::CheekRight, I::open(0.30, 0.55), I::below(-0.25)),
        rule(Z::CheekboneLeft, I::open(0.42, 0.55), I::above(0.25)),
        rule(Z::CheekboneRight, I::open(0.42, 0.55), I::below(-0.25)),
        rule(Z::CheekHollowLeft, I::open_closed(0.30, 0.42), I::above(0.25)),
        rule(Z::CheekHollowRight, I::open_closed(0.30, 0.42), I::below(-0.25)),
        rule(Z::NasolabialLeft, I::open(0.28, 0.48), I::open(0.15, 0.28)),
        rule(Z::NasolabialRight, I::open(0.28, 0.48), I::open(-0.28, -0.15)),

        rule(Z::LipUpper, I::open(0.27, 0.32), I::open(-0.25, 0.25)),
        rule(Z::LipUpperLeft, I::open(0.27, 0.32), I::open(0.06, 0.25)),
        rule(Z::LipUpperRight, I::open(0.27, 0.32), I::open(-0.25, -0.06)),
        rule(Z::LipUpperCenter, I::open(0.27, 0.32), I::closed(-0.06, 0.06)),
        rule(Z::LipLower, I::open_closed(0.22, 0.27), I::open(-0.25, 0.25)),
        rule(Z::LipLowerLeft, I::open_closed(0.22, 0.27), I::open(0.06, 0.25)),
        rule(Z::LipLowerRight, I::open_closed(0.22, 0.27), I::open(-0.25, -0.06)),
        rule(Z::LipLowerCenter, I::open_closed(0.22, 0.27), I::closed(-0.06, 0.06)),
        rule(Z::LipCornerLeft, I::open(0.24, 0.30), I::open(0.18, 0.25)),
        rule(Z::LipCornerRight, I::open(0.24, 0.30), I::open(-0.25, -0.18)),

        rule(Z::Chin, I::open(0.12, 0.24), I::open(-0.30, 0.30)),
        rule(Z::ChinCenter, I::open(0.12, 0.24), I::open(-0.10, 0.10)),
        rule(Z::ChinLeft, I::open(0.12, 0.24), I::closed_open(0.10, 0.30)),
        rule(Z::ChinRight, I::open(0.12, 0.24), I::open_closed(-0.30, -0.10)),
        rule(Z::JawLeft, I::open(0.10, 0.30), I::above(0.25)),
        rule(Z::JawRight, I::open(0.10, 0.30), I::below(-0.25)),
        rule(Z::JawlineLeft, I::open(0.10, 0.18), I::above(0.25)),
        rule(Z::JawlineRight, I::open(0.10, 0.18), I::below(-0.25)),

        rule(Z::TempleLeft, I::open(0.60, 0.78), I::above(0.50)),
        rule(Z::TempleRight, I::open(0.60, 0.78), I::below(-0.50)),
        rule(Z::EarLeft, I::open(0.40, 0.70), I::above(0.80)),
        rule(Z::EarRight, I::open(0.40, 0.70), I::below(-0.80)),
    ]
};

/// Where a vertex sits in the normalized head frame.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Placement {
    Neck,
    /// Behind the z midpoint; receives no zones.
    Back,
    Front { yn: f64, xn: f64 },
}

/// Normalization constants taken from the mesh bounding box.
#[derive(Debug, Clone, Copy)]
struct HeadFrame {
    y_min: f64,
    y_extent: f64,
    x_mid: f64,
    x_half: f64,
    z_mid: f64,
}

impl HeadFrame {
    fn new(bounds: &Aabb) -> Self {
        Self {
            y_min: bounds.lower(Axis::Y),
            y_extent: bounds.safe_extent(Axis::Y),
            x_mid: bounds.midpoint(Axis::X),
            x_half: bounds.safe_extent(Axis::X) / 2.0,
            z_mid: bounds.midpoint(Axis::Z),
        }
    }

    fn place(&self, point: &Point3<f64>) -> Placement {
        let yn = (point.y - self.y_min) / self.y_extent;
        if yn < NECK_TOP {
            Placement::Neck
        } else if point.z > self.z_mid {
            Placement::Front {
                yn,
                xn: (point.x - self.x_mid) / self.x_half,
            }
        } else {
            Placement::Back
        }
    }

    /// Zones of one vertex, in rule order.
    fn zones_of(&self, point: &Point3<f64>) -> Vec<ClinicalZone> {
        match self.place(point) {
            Placement::Neck => vec![ClinicalZone::Neck],
            Placement::Back => Vec::new(),
            Placement::Front { yn, xn } => RULES
                .iter()
                .filter(|rule| rule.y.contains(yn) && rule.x.contains(xn))
                .map(|rule| rule.zone)
                .collect(),
        }
    }
}

/// Classify vertices into clinical zones from their positions alone.
///
/// The thresholds are calibrated for a head whose y axis points up, x axis
/// points to the subject's left and z axis points out of the face. The
/// result is approximate; prefer [`crate::subdivide`] when coarse masks are
/// available.
///
/// With the `parallel` feature, vertices are classified on the rayon pool
/// and merged in index order, so the output does not change.
///
/// # Example
///
/// ```
/// use mesh_types::Point3;
/// use mesh_zones::{classify_by_position, ClinicalZone};
///
/// let positions = vec![
///     Point3::new(-1.0, 0.0, -1.0),
///     Point3::new(1.0, 1.0, 1.0),
///     Point3::new(0.0, 0.8, 0.5),
/// ];
/// let zones = classify_by_position(&positions);
/// assert_eq!(zones.get(ClinicalZone::Neck), &[0]);
/// assert_eq!(zones.get(ClinicalZone::ForeheadCenter), &[2]);
/// ```
#[must_use]
pub fn classify_by_position(positions: &[Point3<f64>]) -> ZoneMap {
    let Some(bounds) = positions.bounds_opt() else {
        if !positions.is_empty() {
            warn!(
                vertices = positions.len(),
                "no finite vertex positions, leaving every zone empty"
            );
        }
        return ZoneMap::new();
    };
    let frame = HeadFrame::new(&bounds);

    info!(
        vertices = positions.len(),
        y_extent = frame.y_extent,
        z_mid = frame.z_mid,
        "Starting position-only zone classification"
    );

    let per_vertex = per_vertex_zones(&frame, positions);

    let mut assigned: Vec<Vec<u32>> = vec![Vec::new(); ZONE_COUNT];
    for (index, zones) in (0u32..).zip(per_vertex) {
        for zone in zones {
            assigned[zone.index()].push(index);
        }
    }
    let mut zones = ZoneMap::new();
    for (zone, vertices) in ClinicalZone::ALL.into_iter().zip(assigned) {
        zones.set(zone, vertices);
    }

    let coverage = zones.coverage();
    info!(
        assignments = coverage.total_assignments,
        populated = coverage.populated_zones,
        "Position-only classification complete"
    );
    debug!("{coverage}");
    zones
}

fn per_vertex_zones(frame: &HeadFrame, positions: &[Point3<f64>]) -> Vec<Vec<ClinicalZone>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        positions
            .par_iter()
            .map(|point| frame.zones_of(point))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        positions.iter().map(|point| frame.zones_of(point)).collect()
    }
}
