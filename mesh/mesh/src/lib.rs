//! Clinical zone classification for morphable head meshes.
//!
//! This umbrella crate re-exports the mesh-* crates, providing one import
//! path for classifying the vertices of a rest-pose head mesh into 61
//! anatomical zones.
//!
//! # Quick Start
//!
//! ```
//! use mesh::prelude::*;
//!
//! let positions: Vec<Point3<f64>> = (0..12)
//!     .map(|i| Point3::new(f64::from(i % 3) - 1.0, f64::from(i / 3), 1.0))
//!     .collect();
//! let regions = RegionMap::from_masks([("neck", RegionMask::Indices(vec![0, 1, 2]))], 12);
//!
//! let (zones, method) = classify_zones(&positions, Some(&regions), &SubdivideParams::default());
//! assert_eq!(method, ClassificationMethod::MaskGuided);
//! assert_eq!(zones.get(ClinicalZone::Neck), &[0, 1, 2]);
//!
//! let report = ZoneReport::from_classification(&zones, positions.len(), Some(&regions), method);
//! let json = report.to_json().unwrap();
//! assert!(json.contains("\"neck\""));
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Points, axes and bounding boxes
//! - [`region`] - Named vertex regions, coarse masks, selectors and percentiles
//! - [`zones`] - The clinical zone taxonomy, both classifiers and zone reports
//!
//! # Feature Flags
//!
//! - `parallel` - Classify positions on the rayon thread pool
//! - `serde` - Serialize bounding boxes, coarse region names and masks

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Points, axes and bounding boxes.
pub use mesh_types as types;

/// Named vertex regions, coarse masks, selectors and percentiles.
pub use mesh_region as region;

/// Clinical zones, mask-guided and position-only classification, reports.
pub use mesh_zones as zones;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for zone classification.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use mesh_types::{Aabb, Axis, MeshBounds, Point3};

    // Regions
    pub use mesh_region::{CoarseRegion, MeshRegion, RegionMap, RegionMask, RegionSelector};

    // Zones
    pub use mesh_zones::{
        classify_zones, ClassificationMethod, ClinicalZone, SubdivideParams, ZoneClassifier,
        ZoneMap, ZoneReport,
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let zones = ZoneMap::new();
        assert_eq!(zones.zone_count(), 61);
        assert!(RegionMap::new().coarse(CoarseRegion::Nose).is_empty());
    }

    #[test]
    fn test_module_reexports() {
        let _ = types::Aabb::empty();
        let _ = region::Interval::ANY;
        let _ = zones::SubdivideParams::default();
    }
}
