//! JSON zone reports.
//!
//! A report is the persisted form of a [`ZoneMap`]: every zone in canonical
//! order with its vertex indices, plus enough context to tell how the map
//! was produced.
//!
//! ```json
//! {
//!   "zone_count": 61,
//!   "vertex_count": 5023,
//!   "zones": {
//!     "full_face": { "vertex_indices": [0, 1, 2], "vertex_count": 3 },
//!     "forehead": { "vertex_indices": [], "vertex_count": 0 }
//!   },
//!   "mask_names": ["face", "forehead", "nose"]
//! }
//! ```

use std::fs;
use std::path::Path;

use hashbrown::HashSet;
use mesh_region::RegionMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classifier::ClassificationMethod;
use crate::error::{ZoneError, ZoneResult};
use crate::zone::{ClinicalZone, ZONE_COUNT};
use crate::zone_map::ZoneMap;

/// Note attached to reports produced without coarse masks.
pub const POSITION_ONLY_NOTE: &str = "Position-only classification (no coarse masks available)";

/// Vertices of one zone in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEntry {
    /// Sorted vertex indices.
    pub vertex_indices: Vec<u32>,
    /// Number of indices.
    pub vertex_count: usize,
}

impl ZoneEntry {
    fn new(vertices: &[u32]) -> Self {
        Self {
            vertex_indices: vertices.to_vec(),
            vertex_count: vertices.len(),
        }
    }
}

/// Serializable record of a zone classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneReport {
    /// Number of zones; always 61 for reports written by this crate.
    pub zone_count: usize,
    /// Vertices in the classified mesh.
    pub vertex_count: usize,
    /// Zone name to vertices, in canonical order.
    #[serde(with = "ordered_zones")]
    pub zones: Vec<(String, ZoneEntry)>,
    /// Names of the coarse masks that were supplied, sorted.
    #[serde(default)]
    pub mask_names: Vec<String>,
    /// Free-form remark about how the zones were derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ZoneReport {
    /// Build a report for a zone map over `vertex_count` vertices.
    #[must_use]
    pub fn new(zones: &ZoneMap, vertex_count: usize) -> Self {
        Self {
            zone_count: zones.zone_count(),
            vertex_count,
            zones: zones
                .iter()
                .map(|(zone, vertices)| (zone.name().to_string(), ZoneEntry::new(vertices)))
                .collect(),
            mask_names: Vec::new(),
            note: None,
        }
    }

    /// Build a report recording which masks and method produced `zones`.
    ///
    /// Position-only results carry [`POSITION_ONLY_NOTE`].
    #[must_use]
    pub fn from_classification(
        zones: &ZoneMap,
        vertex_count: usize,
        regions: Option<&RegionMap>,
        method: ClassificationMethod,
    ) -> Self {
        let mut report = Self::new(zones, vertex_count);
        if let Some(regions) = regions {
            report.mask_names = regions.names().into_iter().map(str::to_string).collect();
        }
        if method == ClassificationMethod::PositionOnly {
            report.note = Some(POSITION_ONLY_NOTE.to_string());
        }
        report
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Entry for one zone, if present.
    #[must_use]
    pub fn entry(&self, zone: ClinicalZone) -> Option<&ZoneEntry> {
        self.zones
            .iter()
            .find(|(name, _)| name == zone.name())
            .map(|(_, entry)| entry)
    }

    /// Check that the report names every clinical zone exactly once and
    /// nothing else, and that every index addresses one of its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::UnknownZone`] for a name outside the taxonomy,
    /// [`ZoneError::DuplicateZone`] for a name listed twice,
    /// [`ZoneError::VertexOutOfBounds`] for an index at or past
    /// `vertex_count`, and [`ZoneError::MissingZone`] for the first zone not
    /// present.
    pub fn validate(&self) -> ZoneResult<()> {
        let mut seen = HashSet::with_capacity(ZONE_COUNT);
        for (name, entry) in &self.zones {
            if !seen.insert(name.parse::<ClinicalZone>()?) {
                return Err(ZoneError::DuplicateZone(name.clone()));
            }
            if let Some(&index) = entry
                .vertex_indices
                .iter()
                .find(|&&index| index as usize >= self.vertex_count)
            {
                return Err(ZoneError::VertexOutOfBounds {
                    zone: name.clone(),
                    vertex_idx: u64::from(index),
                    vertex_count: self.vertex_count,
                });
            }
        }
        match ClinicalZone::ALL.into_iter().find(|zone| !seen.contains(zone)) {
            Some(zone) => Err(ZoneError::MissingZone(zone.name().to_string())),
            None => Ok(()),
        }
    }

    /// Rebuild the zone map.
    ///
    /// # Errors
    ///
    /// Fails as [`ZoneReport::validate`] does.
    pub fn to_zone_map(&self) -> ZoneResult<ZoneMap> {
        self.validate()?;
        let mut zones = ZoneMap::new();
        for (name, entry) in &self.zones {
            zones.set(name.parse()?, entry.vertex_indices.iter().copied());
        }
        Ok(zones)
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Json`] if serialization fails.
    pub fn to_json(&self) -> ZoneResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> ZoneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a report.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Json`] for malformed JSON and the errors of
    /// [`ZoneReport::validate`] for an incomplete zone set.
    pub fn from_json(json: &str) -> ZoneResult<Self> {
        let report: Self = serde_json::from_str(json)?;
        report.validate()?;
        Ok(report)
    }

    /// Write the report to a file.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Io`] if the file cannot be written.
    pub fn write_json(&self, path: impl AsRef<Path>, pretty: bool) -> ZoneResult<()> {
        let path = path.as_ref();
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        fs::write(path, json)?;
        info!(path = %path.display(), zones = self.zones.len(), "Wrote zone report");
        Ok(())
    }

    /// Read and validate a report from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Io`] if the file cannot be read, otherwise as
    /// [`ZoneReport::from_json`].
    pub fn read_json(path: impl AsRef<Path>) -> ZoneResult<Self> {
        let path = path.as_ref();
        let report = Self::from_json(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), vertices = report.vertex_count, "Read zone report");
        Ok(report)
    }
}

/// Zone entries as a JSON object whose key order is the entry order.
mod ordered_zones {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use super::ZoneEntry;

    pub fn serialize<S: Serializer>(
        zones: &[(String, ZoneEntry)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(zones.iter().map(|(name, entry)| (name, entry)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, ZoneEntry)>, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, ZoneEntry)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of zone names to vertex lists")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}
