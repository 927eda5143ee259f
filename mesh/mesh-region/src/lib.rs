//! Named vertex regions, coarse masks and coordinate selectors for head meshes.
//!
//! This crate provides the vertex-set vocabulary zone classification is
//! written in: named regions, the coarse anatomical masks a head model ships,
//! interval selectors over vertex coordinates, and percentile statistics.
//!
//! # Layer 0 Crate
//!
//! Regions carry vertex indices only. Positions are borrowed per call, so one
//! region map serves any number of meshes sharing a topology.
//!
//! # Overview
//!
//! - [`MeshRegion`] - A named, sorted set of vertex indices
//! - [`RegionMap`] - A collection of named regions
//! - [`RegionMask`] - A raw mask in flag or index form
//! - [`CoarseRegion`] - Names of the masks a head model supplies
//! - [`RegionSelector`] - Coordinate predicates for picking vertices
//! - [`Interval`] - A value range with explicit open/closed ends
//! - [`AxisSamples`] / [`percentile`] - Order statistics over a region
//!
//! # Quick Start
//!
//! ```
//! use mesh_region::{CoarseRegion, RegionMap, RegionMask, RegionSelector};
//! use mesh_types::{Axis, Point3};
//!
//! let positions = vec![
//!     Point3::new(-0.01, 0.00, 0.1),
//!     Point3::new(0.01, 0.02, 0.1),
//!     Point3::new(0.00, 0.04, 0.1),
//! ];
//! let masks = RegionMap::from_masks([("nose", RegionMask::Indices(vec![0, 1, 2]))], 3);
//! let nose = masks.coarse(CoarseRegion::Nose);
//!
//! // Split the nose at its median height.
//! let median = nose.samples(&positions, Axis::Y).median();
//! let (upper, lower) =
//!     RegionSelector::above(Axis::Y, median).split(&positions, nose, ("upper", "lower"));
//! assert_eq!(upper.as_slice(), &[2]);
//! assert_eq!(lower.as_slice(), &[0, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod coarse;
mod error;
mod interval;
mod mask;
mod region;
mod region_map;
mod selector;
mod stats;

pub use coarse::{CoarseRegion, UnknownCoarseRegion};
pub use error::{RegionError, RegionResult};
pub use interval::Interval;
pub use mask::RegionMask;
pub use region::MeshRegion;
pub use region_map::RegionMap;
pub use selector::RegionSelector;
pub use stats::{percentile, AxisSamples};

// Re-export for convenience
pub use mesh_types::{Axis, Point3};
