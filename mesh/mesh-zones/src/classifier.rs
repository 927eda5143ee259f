//! Classification strategies and dispatch by data availability.

use mesh_region::RegionMap;
use mesh_types::Point3;
use tracing::info;

use crate::params::SubdivideParams;
use crate::position::classify_by_position;
use crate::subdivide::subdivide_with_params;
use crate::zone_map::ZoneMap;

/// A way of assigning mesh vertices to clinical zones.
///
/// Every implementation returns a map covering all 61 zones, with sorted,
/// duplicate-free indices below `positions.len()`.
pub trait ZoneClassifier {
    /// Short human-readable name of the strategy.
    fn name(&self) -> &'static str;

    /// Classify rest-pose vertex positions.
    fn classify(&self, positions: &[Point3<f64>]) -> ZoneMap;
}

/// Subdivides coarse masks supplied with the head model.
#[derive(Debug, Clone)]
pub struct MaskGuidedClassifier<'a> {
    regions: &'a RegionMap,
    params: SubdivideParams,
}

impl<'a> MaskGuidedClassifier<'a> {
    /// Create a classifier over `regions` with default parameters.
    #[must_use]
    pub fn new(regions: &'a RegionMap) -> Self {
        Self {
            regions,
            params: SubdivideParams::default(),
        }
    }

    /// Use custom subdivision parameters.
    #[must_use]
    pub fn with_params(mut self, params: SubdivideParams) -> Self {
        self.params = params;
        self
    }

    /// The coarse regions being subdivided.
    #[must_use]
    pub const fn regions(&self) -> &RegionMap {
        self.regions
    }
}

impl ZoneClassifier for MaskGuidedClassifier<'_> {
    fn name(&self) -> &'static str {
        "mask-guided"
    }

    fn classify(&self, positions: &[Point3<f64>]) -> ZoneMap {
        subdivide_with_params(positions, self.regions, &self.params)
    }
}

/// Classifies from bounding-box normalized positions alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionOnlyClassifier;

impl ZoneClassifier for PositionOnlyClassifier {
    fn name(&self) -> &'static str {
        "position-only"
    }

    fn classify(&self, positions: &[Point3<f64>]) -> ZoneMap {
        classify_by_position(positions)
    }
}

/// Which strategy [`classify_zones`] ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationMethod {
    /// Coarse masks were subdivided.
    MaskGuided,
    /// No usable masks; positions alone were used.
    PositionOnly,
}

impl ClassificationMethod {
    /// Choose a method for the given coarse regions.
    ///
    /// Masks are used when at least one region was supplied, even if every
    /// supplied region turns out to be empty.
    #[must_use]
    pub fn for_regions(regions: Option<&RegionMap>) -> Self {
        match regions {
            Some(map) if !map.is_empty() => Self::MaskGuided,
            _ => Self::PositionOnly,
        }
    }
}

/// Classify vertices with the best strategy the data allows.
///
/// Runs the mask-guided subdivider when coarse regions are present and
/// falls back to position-only classification otherwise.
///
/// # Example
///
/// ```
/// use mesh_types::Point3;
/// use mesh_zones::{classify_zones, ClassificationMethod, ClinicalZone, SubdivideParams};
///
/// let positions = vec![Point3::new(0.0, 0.0, 0.0)];
/// let (zones, method) = classify_zones(&positions, None, &SubdivideParams::default());
/// assert_eq!(method, ClassificationMethod::PositionOnly);
/// assert_eq!(zones.get(ClinicalZone::Neck), &[0]);
/// ```
#[must_use]
pub fn classify_zones(
    positions: &[Point3<f64>],
    regions: Option<&RegionMap>,
    params: &SubdivideParams,
) -> (ZoneMap, ClassificationMethod) {
    let method = ClassificationMethod::for_regions(regions);
    let zones = match (method, regions) {
        (ClassificationMethod::MaskGuided, Some(map)) => MaskGuidedClassifier::new(map)
            .with_params(params.clone())
            .classify(positions),
        _ => PositionOnlyClassifier.classify(positions),
    };
    info!(?method, vertices = positions.len(), "Zones classified");
    (zones, method)
}
