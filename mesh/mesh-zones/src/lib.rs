//! Clinical zone classification for morphable head meshes.
//!
//! This crate assigns the vertices of a rest-pose head mesh to 61 named
//! anatomical zones such as `forehead_left`, `nose_tip` or
//! `lip_corner_right`. Zones may overlap and may be empty; every index in a
//! zone is a valid vertex index, and index lists are sorted and unique.
//!
//! # Overview
//!
//! Two classifiers share one output type, [`ZoneMap`]:
//!
//! - [`subdivide`] cuts the coarse masks that ship with a head model
//!   (`nose`, `lips`, `forehead`, `face`, eye regions, ...) into zones using
//!   percentile thresholds computed within each mask. This is the primary
//!   path.
//! - [`classify_by_position`] places each vertex in a frame normalized to the
//!   mesh bounding box and matches it against a fixed rule table. It needs no
//!   masks and is only approximate.
//!
//! [`classify_zones`] picks between them based on whether masks were
//! supplied. Both are also available behind the [`ZoneClassifier`] trait.
//!
//! # Quick Start
//!
//! ```
//! use mesh_region::{MeshRegion, RegionMap};
//! use mesh_types::Point3;
//! use mesh_zones::{classify_zones, ClinicalZone, SubdivideParams, ZoneReport};
//!
//! let positions: Vec<Point3<f64>> = (0..10)
//!     .map(|i| Point3::new(0.0, f64::from(i), 0.0))
//!     .collect();
//! let regions: RegionMap = [
//!     MeshRegion::from_vertices("neck", 0..2),
//!     MeshRegion::from_vertices("forehead", 7..10),
//! ]
//! .into_iter()
//! .collect();
//!
//! let (zones, method) = classify_zones(&positions, Some(&regions), &SubdivideParams::default());
//! assert_eq!(zones.get(ClinicalZone::Neck), &[0, 1]);
//! assert_eq!(zones.get(ClinicalZone::Forehead), &[7, 8, 9]);
//!
//! let report = ZoneReport::from_classification(&zones, positions.len(), Some(&regions), method);
//! println!("{}", zones.coverage());
//! assert_eq!(report.zone_count, 61);
//! ```
//!
//! # Coordinate convention
//!
//! Both classifiers expect y up and x towards the subject's left. The
//! position-only classifier also expects z to point out of the face.
//!
//! # Features
//!
//! - `parallel`: classify vertices on the rayon thread pool in
//!   [`classify_by_position`]. Results are identical to the sequential path.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod classifier;
mod error;
mod params;
mod position;
mod report;
mod subdivide;
mod zone;
mod zone_map;

pub use classifier::{
    classify_zones, ClassificationMethod, MaskGuidedClassifier, PositionOnlyClassifier,
    ZoneClassifier,
};
pub use error::{ZoneError, ZoneResult};
pub use params::{
    EyeParams, EyeSkinFallback, FaceParams, ForeheadParams, LipParams, NoseParams, ScalpParams,
    SubdivideParams,
};
pub use position::classify_by_position;
pub use report::{ZoneEntry, ZoneReport, POSITION_ONLY_NOTE};
pub use subdivide::{subdivide, subdivide_with_params};
pub use zone::{ClinicalZone, ZONE_COUNT};
pub use zone_map::{ZoneCoverage, ZoneMap};
