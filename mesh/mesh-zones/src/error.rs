//! Error types for zone operations.
//!
//! Classification itself cannot fail; these cover validation of zone maps
//! and reading or writing zone reports.

use thiserror::Error;

/// Result type for zone operations.
pub type ZoneResult<T> = Result<T, ZoneError>;

/// Errors that can occur during zone operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZoneError {
    /// Vertex index is out of bounds.
    #[error("zone '{zone}': vertex index {vertex_idx} out of bounds (mesh has {vertex_count} vertices)")]
    VertexOutOfBounds {
        /// Zone holding the index.
        zone: String,
        /// The invalid vertex index.
        vertex_idx: u64,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Zone indices are not strictly increasing.
    #[error("zone '{zone}': indices are not sorted and unique at position {position}")]
    UnsortedZone {
        /// Offending zone.
        zone: String,
        /// Position of the first out-of-order index.
        position: usize,
    },

    /// A name is not one of the clinical zones.
    #[error("unknown zone '{0}'")]
    UnknownZone(String),

    /// A clinical zone is listed more than once in a report.
    #[error("zone '{0}' listed more than once in report")]
    DuplicateZone(String),

    /// A clinical zone is missing from a report.
    #[error("zone '{0}' missing from report")]
    MissingZone(String),

    /// Report JSON could not be parsed or produced.
    #[error("zone report JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report file could not be read or written.
    #[error("zone report I/O error: {0}")]
    Io(#[from] std::io::Error),
}
