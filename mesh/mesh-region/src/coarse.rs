//! Names of the coarse anatomical masks shipped with the head model.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coarse region supplied by the head model as a vertex mask.
///
/// Masks may be absent or empty; lookups through
/// [`RegionMap::coarse`](crate::RegionMap::coarse) treat a missing mask as an
/// empty region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoarseRegion {
    /// Whole face surface.
    Face,
    /// Forehead.
    Forehead,
    /// Nose.
    Nose,
    /// Lips.
    Lips,
    /// Skin around the left eye.
    LeftEyeRegion,
    /// Skin around the right eye.
    RightEyeRegion,
    /// Neck.
    Neck,
    /// Left ear.
    LeftEar,
    /// Right ear.
    RightEar,
    /// Scalp.
    Scalp,
    /// Left eyeball geometry.
    LeftEyeball,
    /// Right eyeball geometry.
    RightEyeball,
    /// Open boundary of the mesh.
    Boundary,
}

impl CoarseRegion {
    /// Every coarse region.
    pub const ALL: [Self; 13] = [
        Self::Face,
        Self::Forehead,
        Self::Nose,
        Self::Lips,
        Self::LeftEyeRegion,
        Self::RightEyeRegion,
        Self::Neck,
        Self::LeftEar,
        Self::RightEar,
        Self::Scalp,
        Self::LeftEyeball,
        Self::RightEyeball,
        Self::Boundary,
    ];

    /// The mask key used by the head model.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Forehead => "forehead",
            Self::Nose => "nose",
            Self::Lips => "lips",
            Self::LeftEyeRegion => "left_eye_region",
            Self::RightEyeRegion => "right_eye_region",
            Self::Neck => "neck",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::Scalp => "scalp",
            Self::LeftEyeball => "left_eyeball",
            Self::RightEyeball => "right_eyeball",
            Self::Boundary => "boundary",
        }
    }
}

impl fmt::Display for CoarseRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a coarse region key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown coarse region '{0}'")]
pub struct UnknownCoarseRegion(pub String);

impl FromStr for CoarseRegion {
    type Err = UnknownCoarseRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.name() == s)
            .ok_or_else(|| UnknownCoarseRegion(s.to_string()))
    }
}
