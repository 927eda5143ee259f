//! Mesh region definition.
//!
//! A [`MeshRegion`] represents a named subset of mesh vertices. The index
//! list is kept sorted and duplicate-free at all times, so regions can be
//! handed straight to consumers that expect canonical index lists, and
//! two regions built from the same indices compare equal.

use hashbrown::HashSet;
use mesh_types::{Axis, Point3};

use crate::error::{RegionError, RegionResult};
use crate::stats::AxisSamples;

/// A named set of vertex indices.
///
/// # Example
///
/// ```
/// use mesh_region::MeshRegion;
///
/// let region = MeshRegion::from_vertices("nose", [12, 10, 11, 10]);
/// assert_eq!(region.name(), "nose");
/// assert_eq!(region.as_slice(), &[10, 11, 12]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshRegion {
    /// Name for this region.
    name: String,

    /// Vertex indices, sorted ascending, no duplicates.
    vertices: Vec<u32>,
}

/// Shared empty region handed out for absent lookups.
pub(crate) static EMPTY_REGION: MeshRegion = MeshRegion {
    name: String::new(),
    vertices: Vec::new(),
};

impl MeshRegion {
    /// Create an empty region with a name.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_region::MeshRegion;
    ///
    /// let region = MeshRegion::new("scalp");
    /// assert!(region.is_empty());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
        }
    }

    /// Create a region from vertex indices in any order.
    ///
    /// Duplicates are removed.
    #[must_use]
    pub fn from_vertices(name: impl Into<String>, vertices: impl IntoIterator<Item = u32>) -> Self {
        let mut vertices: Vec<u32> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Get the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the same vertices under a different name.
    #[must_use]
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: self.vertices,
        }
    }

    /// Add multiple vertices to this region.
    pub fn add_vertices(&mut self, indices: impl IntoIterator<Item = u32>) {
        self.vertices.extend(indices);
        self.vertices.sort_unstable();
        self.vertices.dedup();
    }

    /// Check if a vertex is in this region.
    #[must_use]
    pub fn contains_vertex(&self, vertex_index: u32) -> bool {
        self.vertices.binary_search(&vertex_index).is_ok()
    }

    /// Get the number of vertices in this region.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if this region has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get an iterator over vertex indices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
        self.vertices.iter().copied()
    }

    /// Get the sorted vertex indices as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.vertices
    }

    /// Consume the region, returning its sorted vertex indices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<u32> {
        self.vertices
    }

    /// Check that every index addresses a vertex of a mesh with
    /// `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidVertexIndex`] for the first index that is
    /// out of range.
    pub fn validate(&self, vertex_count: usize) -> RegionResult<()> {
        match self.vertices.last() {
            Some(&last) if last as usize >= vertex_count => Err(RegionError::InvalidVertexIndex {
                index: i64::from(last),
                vertex_count,
            }),
            _ => Ok(()),
        }
    }

    /// Drop every index that does not address one of `vertex_count` vertices.
    ///
    /// Returns the number of indices dropped.
    pub fn truncate_to(&mut self, vertex_count: usize) -> usize {
        let keep = self
            .vertices
            .partition_point(|&index| (index as usize) < vertex_count);
        let dropped = self.vertices.len() - keep;
        self.vertices.truncate(keep);
        dropped
    }

    /// Keep the vertices whose position satisfies a predicate.
    ///
    /// Indices must be valid for `positions`; see [`truncate_to`](Self::truncate_to).
    #[must_use]
    pub fn filter(
        &self,
        positions: &[Point3<f64>],
        name: impl Into<String>,
        mut predicate: impl FnMut(&Point3<f64>) -> bool,
    ) -> Self {
        Self {
            name: name.into(),
            vertices: self
                .vertices
                .iter()
                .copied()
                .filter(|&index| predicate(&positions[index as usize]))
                .collect(),
        }
    }

    /// Collect one coordinate of every vertex, sorted, for percentile queries.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_region::MeshRegion;
    /// use mesh_types::{Axis, Point3};
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 3.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(0.0, 2.0, 0.0),
    /// ];
    /// let region = MeshRegion::from_vertices("all", [0, 1, 2]);
    /// assert_eq!(region.samples(&positions, Axis::Y).median(), 2.0);
    /// ```
    #[must_use]
    pub fn samples(&self, positions: &[Point3<f64>], axis: Axis) -> AxisSamples {
        AxisSamples::new(
            self.vertices
                .iter()
                .map(|&index| axis.of(&positions[index as usize]))
                .collect(),
        )
    }

    /// Compute the union with another region.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_region::MeshRegion;
    ///
    /// let r1 = MeshRegion::from_vertices("a", [0, 1, 2]);
    /// let r2 = MeshRegion::from_vertices("b", [2, 3, 4]);
    /// assert_eq!(r1.union(&r2).vertex_count(), 5);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + other.vertices.len());
        let (mut a, mut b) = (self.vertices.iter().peekable(), other.vertices.iter().peekable());
        loop {
            let next = match (a.peek(), b.peek()) {
                (Some(&&x), Some(&&y)) if x < y => a.next(),
                (Some(&&x), Some(&&y)) if y < x => b.next(),
                (Some(_), Some(_)) => {
                    b.next();
                    a.next()
                }
                (Some(_), None) => a.next(),
                (None, Some(_)) => b.next(),
                (None, None) => break,
            };
            if let Some(&index) = next {
                vertices.push(index);
            }
        }
        Self {
            name: format!("{}+{}", self.name, other.name),
            vertices,
        }
    }

    /// Compute the intersection with another region.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            name: format!("{}&{}", self.name, other.name),
            vertices: self
                .vertices
                .iter()
                .copied()
                .filter(|&index| other.contains_vertex(index))
                .collect(),
        }
    }

    /// Compute the difference (self - other).
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_region::MeshRegion;
    ///
    /// let r1 = MeshRegion::from_vertices("a", [0, 1, 2]);
    /// let r2 = MeshRegion::from_vertices("b", [2, 3, 4]);
    /// assert_eq!(r1.difference(&r2).as_slice(), &[0, 1]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            name: format!("{}-{}", self.name, other.name),
            vertices: self
                .vertices
                .iter()
                .copied()
                .filter(|&index| !other.contains_vertex(index))
                .collect(),
        }
    }

    /// Remove every vertex claimed by any of `others`.
    ///
    /// Equivalent to chaining [`difference`](Self::difference) but builds a
    /// single lookup set, which is what large coarse masks want.
    #[must_use]
    pub fn difference_all<'a>(
        &self,
        name: impl Into<String>,
        others: impl IntoIterator<Item = &'a Self>,
    ) -> Self {
        let claimed: HashSet<u32> = others.into_iter().flat_map(Self::vertices).collect();
        Self {
            name: name.into(),
            vertices: self
                .vertices
                .iter()
                .copied()
                .filter(|index| !claimed.contains(index))
                .collect(),
        }
    }
}
