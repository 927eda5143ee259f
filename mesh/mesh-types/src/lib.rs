//! Core geometric types for head-mesh zone classification.
//!
//! This crate provides the foundational types shared by the region and zone
//! crates:
//!
//! - [`Axis`] - One of the three coordinate axes
//! - [`Aabb`] - Axis-aligned bounding box with degenerate-safe extents
//! - [`MeshBounds`] - Bounding box computation for vertex slices
//!
//! # Layer 0 Crate
//!
//! Depends only on `nalgebra` (plus `serde` behind the `serde` feature), so
//! it builds anywhere the classifiers do, including batch tools and WASM.
//!
//! # Coordinate System
//!
//! Head meshes follow the morphable-model convention:
//! - X: left/right (positive = subject's anatomical left)
//! - Y: up/down (positive = up)
//! - Z: front/back (positive = toward the face)
//!
//! Vertex arrays are plain `&[Point3<f64>]` slices in rest pose. Nothing in
//! this workspace mutates them.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Axis, MeshBounds, Point3};
//!
//! let vertices = vec![
//!     Point3::new(-1.0, 0.0, 0.0),
//!     Point3::new(1.0, 2.0, 0.5),
//! ];
//!
//! let bounds = vertices.bounds();
//! assert_eq!(bounds.extent(Axis::X), 2.0);
//! assert_eq!(bounds.midpoint(Axis::Y), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod axis;
mod bounds;
mod traits;

pub use axis::Axis;
pub use bounds::Aabb;
pub use traits::MeshBounds;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
