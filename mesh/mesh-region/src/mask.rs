//! Raw vertex masks as delivered by the head model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, RegionResult};

/// A vertex mask in either of the two encodings head models use.
///
/// With the `serde` feature, a JSON array of booleans deserializes as
/// [`Flags`](Self::Flags) and a JSON array of integers as
/// [`Indices`](Self::Indices).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RegionMask {
    /// One flag per vertex; `true` marks membership.
    ///
    /// An empty flag list is an empty mask regardless of the vertex count.
    Flags(Vec<bool>),
    /// Explicit vertex indices, possibly unsorted or repeated.
    Indices(Vec<i64>),
}

impl RegionMask {
    /// Check if the mask selects no vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flags(flags) => !flags.iter().any(|&flag| flag),
            Self::Indices(indices) => indices.is_empty(),
        }
    }

    /// Convert to sorted, de-duplicated vertex indices for a mesh with
    /// `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::MaskLengthMismatch`] when a non-empty flag list
    /// does not have one entry per vertex, and
    /// [`RegionError::InvalidVertexIndex`] for negative or out-of-range
    /// indices.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_region::RegionMask;
    ///
    /// let flags = RegionMask::Flags(vec![false, true, true]);
    /// assert_eq!(flags.to_indices(3).unwrap(), vec![1, 2]);
    ///
    /// let indices = RegionMask::Indices(vec![2, 0, 2]);
    /// assert_eq!(indices.to_indices(3).unwrap(), vec![0, 2]);
    /// ```
    pub fn to_indices(&self, vertex_count: usize) -> RegionResult<Vec<u32>> {
        match self {
            Self::Flags(flags) if flags.is_empty() => Ok(Vec::new()),
            Self::Flags(flags) => {
                if flags.len() != vertex_count {
                    return Err(RegionError::MaskLengthMismatch {
                        len: flags.len(),
                        vertex_count,
                    });
                }
                flags
                    .iter()
                    .enumerate()
                    .filter(|&(_, &flag)| flag)
                    .map(|(index, _)| {
                        index_to_u32(i64::try_from(index).unwrap_or(i64::MAX), vertex_count)
                    })
                    .collect()
            }
            Self::Indices(indices) => {
                let mut out = indices
                    .iter()
                    .map(|&index| index_to_u32(index, vertex_count))
                    .collect::<RegionResult<Vec<u32>>>()?;
                out.sort_unstable();
                out.dedup();
                Ok(out)
            }
        }
    }
}

fn index_to_u32(index: i64, vertex_count: usize) -> RegionResult<u32> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < vertex_count)
        .and_then(|i| u32::try_from(i).ok())
        .ok_or(RegionError::InvalidVertexIndex {
            index,
            vertex_count,
        })
}

impl From<Vec<bool>> for RegionMask {
    fn from(flags: Vec<bool>) -> Self {
        Self::Flags(flags)
    }
}

impl From<Vec<i64>> for RegionMask {
    fn from(indices: Vec<i64>) -> Self {
        Self::Indices(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_to_indices() {
        let mask = RegionMask::Flags(vec![true, false, true, false]);
        assert_eq!(mask.to_indices(4).expect("valid mask"), vec![0, 2]);
        assert!(!mask.is_empty());
    }

    #[test]
    fn test_empty_flags_mean_empty_region() {
        let mask = RegionMask::Flags(Vec::new());
        assert!(mask.is_empty());
        assert!(mask.to_indices(10).expect("valid mask").is_empty());
    }

    #[test]
    fn test_all_false_flags_are_empty() {
        assert!(RegionMask::Flags(vec![false; 3]).is_empty());
    }

    #[test]
    fn test_flag_length_mismatch() {
        let mask = RegionMask::Flags(vec![true, false]);
        assert!(matches!(
            mask.to_indices(3),
            Err(RegionError::MaskLengthMismatch {
                len: 2,
                vertex_count: 3
            })
        ));
    }

    #[test]
    fn test_indices_sorted_and_deduped() {
        let mask = RegionMask::Indices(vec![5, 1, 5, 3]);
        assert_eq!(mask.to_indices(6).expect("valid mask"), vec![1, 3, 5]);
    }

    #[test]
    fn test_negative_index_rejected() {
        let mask = RegionMask::Indices(vec![0, -1]);
        assert!(matches!(
            mask.to_indices(4),
            Err(RegionError::InvalidVertexIndex { index: -1, .. })
        ));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mask = RegionMask::Indices(vec![4]);
        assert!(matches!(
            mask.to_indices(4),
            Err(RegionError::InvalidVertexIndex {
                index: 4,
                vertex_count: 4
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_untagged_json() {
        let flags: RegionMask = serde_json::from_str("[true, false]").expect("should parse");
        assert_eq!(flags, RegionMask::Flags(vec![true, false]));
        let indices: RegionMask = serde_json::from_str("[3, 1]").expect("should parse");
        assert_eq!(indices, RegionMask::Indices(vec![3, 1]));
    }
}
