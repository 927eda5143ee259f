//! Collection of named regions.
//!
//! A [`RegionMap`] stores multiple named regions by name. It is also the
//! entry point for coarse masks delivered by a head model.

use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::coarse::CoarseRegion;
use crate::error::{RegionError, RegionResult};
use crate::mask::RegionMask;
use crate::region::{MeshRegion, EMPTY_REGION};

/// A collection of named regions for a mesh.
///
/// The `RegionMap` provides lookup by region name; absent coarse masks
/// read as empty regions.
///
/// # Example
///
/// ```
/// use mesh_region::{RegionMap, MeshRegion};
///
/// let mut regions = RegionMap::new();
///
/// let nose = MeshRegion::from_vertices("nose", [4, 5, 6, 7]);
/// let lips = MeshRegion::from_vertices("lips", [0, 1, 2, 3]);
///
/// regions.add(nose);
/// regions.add(lips);
///
/// assert_eq!(regions.len(), 2);
/// assert!(regions.get("nose").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    /// Regions indexed by name.
    regions: HashMap<String, MeshRegion>,
}

impl RegionMap {
    /// Create a new empty region map.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_region::RegionMap;
    ///
    /// let regions = RegionMap::new();
    /// assert!(regions.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from raw masks, skipping malformed ones.
    ///
    /// A mask whose flag count does not match `vertex_count`, or that holds
    /// a negative or out-of-range index, is logged and stored as an empty
    /// region so later lookups behave as if the mask were absent.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_region::{RegionMap, RegionMask};
    ///
    /// let regions = RegionMap::from_masks(
    ///     [
    ///         ("nose", RegionMask::Indices(vec![2, 1])),
    ///         ("lips", RegionMask::Indices(vec![9])),
    ///     ],
    ///     4,
    /// );
    /// assert_eq!(regions.get("nose").unwrap().as_slice(), &[1, 2]);
    /// assert!(regions.get("lips").unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn from_masks<K, I>(masks: I, vertex_count: usize) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RegionMask)>,
    {
        let mut map = Self::new();
        for (name, mask) in masks {
            let name = name.into();
            let indices = match mask.to_indices(vertex_count) {
                Ok(indices) => indices,
                Err(err) => {
                    warn!(region = %name, error = %err, "ignoring malformed mask");
                    Vec::new()
                }
            };
            map.add(MeshRegion::from_vertices(name, indices));
        }
        debug!(regions = map.len(), vertex_count, "built region map from masks");
        map
    }

    /// Build a map from raw masks, failing on the first malformed one.
    ///
    /// # Errors
    ///
    /// Returns the [`RegionError`] of the first mask that does not convert,
    /// or [`RegionError::DuplicateRegion`] if a name repeats.
    pub fn try_from_masks<K, I>(masks: I, vertex_count: usize) -> RegionResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RegionMask)>,
    {
        let mut map = Self::new();
        for (name, mask) in masks {
            let indices = mask.to_indices(vertex_count)?;
            map.add_unique(MeshRegion::from_vertices(name, indices))?;
        }
        Ok(map)
    }

    /// Add a region to the map.
    ///
    /// If a region with the same name already exists, it will be replaced.
    pub fn add(&mut self, region: MeshRegion) {
        self.regions.insert(region.name().to_string(), region);
    }

    /// Add a region, returning an error if it already exists.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateRegion`] if a region with the same name exists.
    pub fn add_unique(&mut self, region: MeshRegion) -> RegionResult<()> {
        if self.regions.contains_key(region.name()) {
            return Err(RegionError::DuplicateRegion {
                name: region.name().to_string(),
            });
        }
        self.regions.insert(region.name().to_string(), region);
        Ok(())
    }

    /// Get a region by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MeshRegion> {
        self.regions.get(name)
    }

    /// Get a coarse region, or an empty region if the mask is absent.
    #[must_use]
    pub fn coarse(&self, region: CoarseRegion) -> &MeshRegion {
        self.regions.get(region.name()).unwrap_or(&EMPTY_REGION)
    }

    /// Remove a region by name.
    ///
    /// Returns the removed region, or `None` if not found.
    pub fn remove(&mut self, name: &str) -> Option<MeshRegion> {
        self.regions.remove(name)
    }

    /// Get the number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get an iterator over regions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MeshRegion)> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop every index that does not address one of `vertex_count`
    /// vertices, logging each region that lost indices.
    #[must_use]
    pub fn restricted_to(mut self, vertex_count: usize) -> Self {
        for (name, region) in &mut self.regions {
            let dropped = region.truncate_to(vertex_count);
            if dropped > 0 {
                warn!(region = %name, dropped, vertex_count, "dropping out-of-range indices");
            }
        }
        self
    }
}

impl FromIterator<MeshRegion> for RegionMap {
    fn from_iter<I: IntoIterator<Item = MeshRegion>>(iter: I) -> Self {
        let mut map = Self::new();
        for region in iter {
            map.add(region);
        }
        map
    }
}
