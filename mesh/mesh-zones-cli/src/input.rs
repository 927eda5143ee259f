//! Head mesh input files.
//!
//! ```json
//! {
//!   "vertices": [[0.0, 1.0, 0.2], [0.1, 1.0, 0.2]],
//!   "regions": { "nose": [1], "face": [true, true] }
//! }
//! ```
//!
//! `regions` is optional. Each mask is either a list of vertex indices or
//! one boolean per vertex. A mask of any other shape is treated like any
//! other malformed mask.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use mesh_region::{RegionMap, RegionMask};
use mesh_types::Point3;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Rest-pose vertices plus the coarse masks shipped with them.
#[derive(Debug, Deserialize)]
pub struct HeadInput {
    /// Vertex positions as `[x, y, z]` triples.
    pub vertices: Vec<[f64; 3]>,
    /// Coarse masks keyed by region name, decoded one at a time.
    #[serde(default)]
    pub regions: Option<BTreeMap<String, Value>>,
}

impl HeadInput {
    /// Read and parse an input file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse input from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.vertices
            .iter()
            .map(|&[x, y, z]| Point3::new(x, y, z))
            .collect()
    }

    /// Build the region map, or `None` when the file carries no masks.
    ///
    /// Malformed masks are treated as absent unless `strict` is set, in
    /// which case the first one is an error.
    pub fn region_map(&self, strict: bool) -> Result<Option<RegionMap>> {
        let Some(masks) = &self.regions else {
            return Ok(None);
        };
        let vertex_count = self.vertices.len();
        let mut decoded = Vec::with_capacity(masks.len());
        for (name, value) in masks {
            match RegionMask::deserialize(value) {
                Ok(mask) => decoded.push((name.as_str(), mask)),
                Err(err) if strict => {
                    return Err(err).with_context(|| format!("region '{name}' is not a mask"));
                }
                Err(err) => {
                    warn!(region = %name, error = %err, "ignoring malformed mask");
                    decoded.push((name.as_str(), RegionMask::Indices(Vec::new())));
                }
            }
        }
        if strict {
            let regions =
                RegionMap::try_from_masks(decoded, vertex_count).context("malformed region mask")?;
            Ok(Some(regions))
        } else {
            Ok(Some(RegionMap::from_masks(decoded, vertex_count)))
        }
    }
}
