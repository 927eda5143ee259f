//! Zone map for storing zone-to-vertex assignments.
//!
//! A zone map holds one sorted vertex list per clinical zone. All 61 zones
//! are always present; unassigned zones are simply empty. Zones may
//! overlap.

use std::fmt;

use mesh_region::MeshRegion;

use crate::error::{ZoneError, ZoneResult};
use crate::zone::{ClinicalZone, ZONE_COUNT};

/// A map from every clinical zone to its vertex indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMap {
    /// One region per zone, in canonical order.
    zones: Vec<MeshRegion>,
}

impl Default for ZoneMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneMap {
    /// Create a zone map with every zone empty.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_zones::ZoneMap;
    ///
    /// let map = ZoneMap::new();
    /// assert_eq!(map.zone_count(), 61);
    /// assert!(map.all_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            zones: ClinicalZone::ALL
                .iter()
                .map(|zone| MeshRegion::new(zone.name()))
                .collect(),
        }
    }

    /// Get the vertices of a zone.
    #[must_use]
    pub fn get(&self, zone: ClinicalZone) -> &[u32] {
        self.zones[zone.index()].as_slice()
    }

    /// Get a zone as a region.
    #[must_use]
    pub fn region(&self, zone: ClinicalZone) -> &MeshRegion {
        &self.zones[zone.index()]
    }

    /// Replace a zone's vertices.
    ///
    /// Indices are sorted and de-duplicated.
    pub fn set(&mut self, zone: ClinicalZone, vertices: impl IntoIterator<Item = u32>) {
        self.zones[zone.index()] = MeshRegion::from_vertices(zone.name(), vertices);
    }

    /// Replace a zone with a region's vertices.
    pub fn set_region(&mut self, zone: ClinicalZone, region: MeshRegion) {
        self.zones[zone.index()] = region.renamed(zone.name());
    }

    /// Number of zones, always 61.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Check whether every zone is empty.
    #[must_use]
    pub fn all_empty(&self) -> bool {
        self.zones.iter().all(MeshRegion::is_empty)
    }

    /// Iterate zones in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ClinicalZone, &[u32])> {
        ClinicalZone::ALL
            .into_iter()
            .zip(self.zones.iter().map(MeshRegion::as_slice))
    }

    /// Zones a vertex belongs to, in canonical order.
    #[must_use]
    pub fn zones_of_vertex(&self, vertex_index: u32) -> Vec<ClinicalZone> {
        self.iter()
            .filter(|(_, vertices)| vertices.binary_search(&vertex_index).is_ok())
            .map(|(zone, _)| zone)
            .collect()
    }

    /// Summarize how many zones received vertices.
    #[must_use]
    pub fn coverage(&self) -> ZoneCoverage {
        let mut coverage = ZoneCoverage::default();
        for (zone, vertices) in self.iter() {
            coverage.total_assignments += vertices.len();
            if vertices.is_empty() {
                coverage.empty_zones.push(zone);
            } else {
                coverage.populated_zones += 1;
            }
        }
        coverage
    }

    /// Check every zone against a mesh with `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::UnsortedZone`] if a zone's indices are not
    /// strictly increasing, or [`ZoneError::VertexOutOfBounds`] if an index
    /// does not address a vertex.
    pub fn validate(&self, vertex_count: usize) -> ZoneResult<()> {
        for (zone, vertices) in self.iter() {
            if let Some(position) = vertices.windows(2).position(|w| w[0] >= w[1]) {
                return Err(ZoneError::UnsortedZone {
                    zone: zone.name().to_string(),
                    position: position + 1,
                });
            }
            if let Some(&last) = vertices.last() {
                if last as usize >= vertex_count {
                    return Err(ZoneError::VertexOutOfBounds {
                        zone: zone.name().to_string(),
                        vertex_idx: u64::from(last),
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Summary of zone population after classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneCoverage {
    /// Sum of all zone sizes (a vertex in three zones counts three times).
    pub total_assignments: usize,
    /// Number of zones with at least one vertex.
    pub populated_zones: usize,
    /// Zones left empty, in canonical order.
    pub empty_zones: Vec<ClinicalZone>,
}

impl fmt::Display for ZoneCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} zone assignments, {}/{} zones populated",
            self.total_assignments, self.populated_zones, ZONE_COUNT
        )?;
        if !self.empty_zones.is_empty() {
            let names: Vec<&str> = self.empty_zones.iter().map(|z| z.name()).collect();
            write!(f, ", empty: {}", names.join(", "))?;
        }
        Ok(())
    }
}
