//! Error types for mesh region operations.

use thiserror::Error;

/// Result type for region operations.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur during region operations.
///
/// Zone classification never surfaces these: the lenient constructors turn
/// a malformed mask into an empty region instead. They are returned by the
/// strict APIs ([`RegionMap::add_unique`](crate::RegionMap::add_unique),
/// [`RegionMask::to_indices`](crate::RegionMask::to_indices),
/// [`MeshRegion::validate`](crate::MeshRegion::validate)).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// A region with this name already exists.
    #[error("region '{name}' already exists")]
    DuplicateRegion {
        /// The duplicate region name.
        name: String,
    },

    /// A vertex index is negative or past the end of the vertex array.
    #[error("invalid vertex index {index} (mesh has {vertex_count} vertices)")]
    InvalidVertexIndex {
        /// The invalid index.
        index: i64,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A boolean membership mask does not have one flag per vertex.
    #[error("mask has {len} flags but mesh has {vertex_count} vertices")]
    MaskLengthMismatch {
        /// Number of flags in the mask.
        len: usize,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },
}
