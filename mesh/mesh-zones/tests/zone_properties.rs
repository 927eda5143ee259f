//! Property-based tests for zone classification.
//!
//! These tests use proptest to generate random vertex clouds and random
//! coarse masks and check the output contract of both classifiers.
//!
//! Run with: cargo test -p mesh-zones --test zone_properties

use mesh_region::{CoarseRegion, RegionMap, RegionMask};
use mesh_types::Point3;
use mesh_zones::{
    classify_by_position, subdivide, ClinicalZone, ZoneMap, ZoneReport, ZONE_COUNT,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_position() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-1.0..1.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

fn arb_positions(max_vertices: usize) -> impl Strategy<Value = Vec<Point3<f64>>> {
    prop::collection::vec(arb_position(), 1..=max_vertices)
}

/// A mask in either form; index masks may hold out-of-range entries.
fn arb_mask(vertex_count: usize) -> BoxedStrategy<RegionMask> {
    let upper = i64::try_from(vertex_count).unwrap_or(i64::MAX);
    prop_oneof![
        3 => prop::collection::vec(any::<bool>(), vertex_count).prop_map(RegionMask::Flags),
        1 => prop::collection::vec(-2..upper + 2, 0..vertex_count + 1)
            .prop_map(RegionMask::Indices),
    ]
    .boxed()
}

/// Positions together with a random subset of coarse masks over them.
fn arb_case(max_vertices: usize) -> impl Strategy<Value = (Vec<Point3<f64>>, RegionMap)> {
    arb_positions(max_vertices).prop_flat_map(|positions| {
        let n = positions.len();
        let masks = prop::collection::vec(
            (prop::sample::select(CoarseRegion::ALL.to_vec()), arb_mask(n)),
            0..10,
        );
        (Just(positions), masks).prop_map(move |(positions, masks)| {
            let regions = RegionMap::from_masks(
                masks.into_iter().map(|(region, mask)| (region.name(), mask)),
                n,
            );
            (positions, regions)
        })
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn check_contract(zones: &ZoneMap, vertex_count: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(zones.zone_count(), ZONE_COUNT);
    prop_assert!(zones.validate(vertex_count).is_ok());
    let full_face = zones.get(ClinicalZone::FullFace);
    for (zone, vertices) in zones.iter() {
        if !zone.is_facial() {
            continue;
        }
        for vertex in vertices {
            prop_assert!(
                full_face.binary_search(vertex).is_ok(),
                "vertex {} of {} missing from full_face",
                vertex,
                zone
            );
        }
    }
    Ok(())
}

const NOSE_ZONES: [ClinicalZone; 9] = [
    ClinicalZone::NoseBridge,
    ClinicalZone::NoseBridgeUpper,
    ClinicalZone::NoseBridgeLower,
    ClinicalZone::NoseTip,
    ClinicalZone::NoseTipLeft,
    ClinicalZone::NoseTipRight,
    ClinicalZone::NostrilLeft,
    ClinicalZone::NostrilRight,
    ClinicalZone::NoseDorsum,
];

const LIP_ZONES: [ClinicalZone; 10] = [
    ClinicalZone::LipUpper,
    ClinicalZone::LipUpperLeft,
    ClinicalZone::LipUpperRight,
    ClinicalZone::LipUpperCenter,
    ClinicalZone::LipLower,
    ClinicalZone::LipLowerLeft,
    ClinicalZone::LipLowerRight,
    ClinicalZone::LipLowerCenter,
    ClinicalZone::LipCornerLeft,
    ClinicalZone::LipCornerRight,
];

const LEFT_EYE_ZONES: [ClinicalZone; 6] = [
    ClinicalZone::EyeLeftUpper,
    ClinicalZone::EyeLeftLower,
    ClinicalZone::EyeLeftCornerInner,
    ClinicalZone::EyeLeftCornerOuter,
    ClinicalZone::UnderEyeLeft,
    ClinicalZone::TearTroughLeft,
];

const RIGHT_EYE_ZONES: [ClinicalZone; 6] = [
    ClinicalZone::EyeRightUpper,
    ClinicalZone::EyeRightLower,
    ClinicalZone::EyeRightCornerInner,
    ClinicalZone::EyeRightCornerOuter,
    ClinicalZone::UnderEyeRight,
    ClinicalZone::TearTroughRight,
];

const FOREHEAD_ZONES: [ClinicalZone; 8] = [
    ClinicalZone::Forehead,
    ClinicalZone::ForeheadLeft,
    ClinicalZone::ForeheadRight,
    ClinicalZone::ForeheadCenter,
    ClinicalZone::BrowLeft,
    ClinicalZone::BrowRight,
    ClinicalZone::BrowInnerLeft,
    ClinicalZone::BrowInnerRight,
];

const FACE_REMAINDER_ZONES: [ClinicalZone; 16] = [
    ClinicalZone::CheekLeft,
    ClinicalZone::CheekRight,
    ClinicalZone::CheekboneLeft,
    ClinicalZone::CheekboneRight,
    ClinicalZone::CheekHollowLeft,
    ClinicalZone::CheekHollowRight,
    ClinicalZone::NasolabialLeft,
    ClinicalZone::NasolabialRight,
    ClinicalZone::Chin,
    ClinicalZone::ChinCenter,
    ClinicalZone::ChinLeft,
    ClinicalZone::ChinRight,
    ClinicalZone::JawLeft,
    ClinicalZone::JawRight,
    ClinicalZone::JawlineLeft,
    ClinicalZone::JawlineRight,
];

// =============================================================================
// Property Tests: Output contract
// =============================================================================

proptest! {
    /// Mask-guided output covers all zones with valid, sorted indices.
    #[test]
    fn subdivide_contract((positions, regions) in arb_case(60)) {
        let zones = subdivide(&positions, &regions);
        check_contract(&zones, positions.len())?;
    }

    /// Position-only output satisfies the same contract.
    #[test]
    fn position_contract(positions in arb_positions(80)) {
        let zones = classify_by_position(&positions);
        check_contract(&zones, positions.len())?;
    }

    /// Identical inputs give identical zone maps.
    #[test]
    fn classification_is_idempotent((positions, regions) in arb_case(40)) {
        prop_assert_eq!(subdivide(&positions, &regions), subdivide(&positions, &regions));
        prop_assert_eq!(classify_by_position(&positions), classify_by_position(&positions));
    }

    /// Zones derived from a single mask stay empty when it is absent.
    #[test]
    fn absent_masks_leave_zones_empty((positions, regions) in arb_case(50)) {
        let zones = subdivide(&positions, &regions);
        let cases: [(CoarseRegion, &[ClinicalZone]); 5] = [
            (CoarseRegion::Nose, &NOSE_ZONES),
            (CoarseRegion::Lips, &LIP_ZONES),
            (CoarseRegion::LeftEyeRegion, &LEFT_EYE_ZONES),
            (CoarseRegion::RightEyeRegion, &RIGHT_EYE_ZONES),
            (CoarseRegion::Forehead, &FOREHEAD_ZONES),
        ];
        for (mask, derived) in cases {
            if regions.coarse(mask).is_empty() {
                for &zone in derived {
                    prop_assert!(zones.get(zone).is_empty(), "{} without {}", zone, mask);
                }
            }
        }
        if regions.coarse(CoarseRegion::Face).is_empty() {
            for zone in FACE_REMAINDER_ZONES {
                prop_assert!(zones.get(zone).is_empty(), "{} without face", zone);
            }
        }
        if regions.coarse(CoarseRegion::Neck).is_empty() {
            prop_assert!(zones.get(ClinicalZone::Neck).is_empty());
        }
        // Without a forehead, temples can only come from the scalp.
        if regions.coarse(CoarseRegion::Forehead).is_empty() {
            let scalp = regions.coarse(CoarseRegion::Scalp);
            for zone in [ClinicalZone::TempleLeft, ClinicalZone::TempleRight] {
                for &vertex in zones.get(zone) {
                    prop_assert!(scalp.contains_vertex(vertex), "{} outside scalp", zone);
                }
            }
        }
    }

    /// Ears are passed through from their masks unchanged.
    #[test]
    fn ears_pass_through((positions, regions) in arb_case(50)) {
        let zones = subdivide(&positions, &regions);
        prop_assert_eq!(
            zones.get(ClinicalZone::EarLeft),
            regions.coarse(CoarseRegion::LeftEar).as_slice()
        );
        prop_assert_eq!(
            zones.get(ClinicalZone::EarRight),
            regions.coarse(CoarseRegion::RightEar).as_slice()
        );
    }

    /// Reports rebuild the zone map they were written from.
    #[test]
    fn report_preserves_zones((positions, regions) in arb_case(30)) {
        let zones = subdivide(&positions, &regions);
        let json = ZoneReport::new(&zones, positions.len()).to_json().unwrap();
        let restored = ZoneReport::from_json(&json).unwrap().to_zone_map().unwrap();
        prop_assert_eq!(restored, zones);
    }
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn single_vertex_without_masks() {
    let positions = [Point3::new(0.3, -0.2, 0.7)];
    for zones in [
        subdivide(&positions, &RegionMap::new()),
        classify_by_position(&positions),
    ] {
        for (_, vertices) in zones.iter() {
            assert!(vertices.is_empty() || vertices == [0]);
        }
    }
}
