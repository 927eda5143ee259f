//! The clinical zone taxonomy.

use std::fmt;
use std::str::FromStr;

use crate::error::ZoneError;

macro_rules! clinical_zones {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)+) => {
        /// One of the 61 named anatomical zones of a head mesh.
        ///
        /// Variants are declared in canonical order; [`ClinicalZone::ALL`]
        /// and every zone map iterate in this order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ClinicalZone {
            $($(#[$doc])* $variant,)+
        }

        impl ClinicalZone {
            /// Every zone in canonical order.
            pub const ALL: [Self; ZONE_COUNT] = [$(Self::$variant,)+];

            /// The zone's snake_case name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

/// Number of clinical zones.
pub const ZONE_COUNT: usize = 61;

clinical_zones! {
    /// Everything facial, excluding neck and ears.
    FullFace => "full_face",
    /// Whole forehead.
    Forehead => "forehead",
    /// Lateral third of the forehead on the subject's left.
    ForeheadLeft => "forehead_left",
    /// Lateral third of the forehead on the subject's right.
    ForeheadRight => "forehead_right",
    /// Central third of the forehead.
    ForeheadCenter => "forehead_center",
    /// Left brow.
    BrowLeft => "brow_left",
    /// Right brow.
    BrowRight => "brow_right",
    /// Medial part of the left brow.
    BrowInnerLeft => "brow_inner_left",
    /// Medial part of the right brow.
    BrowInnerRight => "brow_inner_right",
    /// Upper left eyelid skin.
    EyeLeftUpper => "eye_left_upper",
    /// Lower left eyelid skin.
    EyeLeftLower => "eye_left_lower",
    /// Upper right eyelid skin.
    EyeRightUpper => "eye_right_upper",
    /// Lower right eyelid skin.
    EyeRightLower => "eye_right_lower",
    /// Medial corner of the left eye.
    EyeLeftCornerInner => "eye_left_corner_inner",
    /// Lateral corner of the left eye.
    EyeLeftCornerOuter => "eye_left_corner_outer",
    /// Medial corner of the right eye.
    EyeRightCornerInner => "eye_right_corner_inner",
    /// Lateral corner of the right eye.
    EyeRightCornerOuter => "eye_right_corner_outer",
    /// Skin below the left eye.
    UnderEyeLeft => "under_eye_left",
    /// Skin below the right eye.
    UnderEyeRight => "under_eye_right",
    /// Left tear trough.
    TearTroughLeft => "tear_trough_left",
    /// Right tear trough.
    TearTroughRight => "tear_trough_right",
    /// Nasal bridge.
    NoseBridge => "nose_bridge",
    /// Upper half of the nasal bridge.
    NoseBridgeUpper => "nose_bridge_upper",
    /// Lower half of the nasal bridge.
    NoseBridgeLower => "nose_bridge_lower",
    /// Nasal tip.
    NoseTip => "nose_tip",
    /// Left half of the nasal tip.
    NoseTipLeft => "nose_tip_left",
    /// Right half of the nasal tip.
    NoseTipRight => "nose_tip_right",
    /// Left nostril.
    NostrilLeft => "nostril_left",
    /// Right nostril.
    NostrilRight => "nostril_right",
    /// Nasal dorsum.
    NoseDorsum => "nose_dorsum",
    /// Left cheek.
    CheekLeft => "cheek_left",
    /// Right cheek.
    CheekRight => "cheek_right",
    /// Left cheekbone.
    CheekboneLeft => "cheekbone_left",
    /// Right cheekbone.
    CheekboneRight => "cheekbone_right",
    /// Left cheek hollow.
    CheekHollowLeft => "cheek_hollow_left",
    /// Right cheek hollow.
    CheekHollowRight => "cheek_hollow_right",
    /// Left nasolabial fold.
    NasolabialLeft => "nasolabial_left",
    /// Right nasolabial fold.
    NasolabialRight => "nasolabial_right",
    /// Upper lip.
    LipUpper => "lip_upper",
    /// Left third of the upper lip.
    LipUpperLeft => "lip_upper_left",
    /// Right third of the upper lip.
    LipUpperRight => "lip_upper_right",
    /// Central third of the upper lip.
    LipUpperCenter => "lip_upper_center",
    /// Lower lip.
    LipLower => "lip_lower",
    /// Left third of the lower lip.
    LipLowerLeft => "lip_lower_left",
    /// Right third of the lower lip.
    LipLowerRight => "lip_lower_right",
    /// Central third of the lower lip.
    LipLowerCenter => "lip_lower_center",
    /// Left mouth corner.
    LipCornerLeft => "lip_corner_left",
    /// Right mouth corner.
    LipCornerRight => "lip_corner_right",
    /// Chin.
    Chin => "chin",
    /// Central chin.
    ChinCenter => "chin_center",
    /// Left side of the chin.
    ChinLeft => "chin_left",
    /// Right side of the chin.
    ChinRight => "chin_right",
    /// Left jaw.
    JawLeft => "jaw_left",
    /// Right jaw.
    JawRight => "jaw_right",
    /// Lower edge of the left jaw.
    JawlineLeft => "jawline_left",
    /// Lower edge of the right jaw.
    JawlineRight => "jawline_right",
    /// Left temple.
    TempleLeft => "temple_left",
    /// Right temple.
    TempleRight => "temple_right",
    /// Left ear.
    EarLeft => "ear_left",
    /// Right ear.
    EarRight => "ear_right",
    /// Neck.
    Neck => "neck",
}

impl ClinicalZone {
    /// Position in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the zone counts towards `full_face`.
    ///
    /// Neck and ears are the only zones outside the face.
    #[must_use]
    pub const fn is_facial(self) -> bool {
        !matches!(self, Self::Neck | Self::EarLeft | Self::EarRight)
    }
}

impl fmt::Display for ClinicalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClinicalZone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|zone| zone.name() == s)
            .ok_or_else(|| ZoneError::UnknownZone(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn sixty_one_distinct_names() {
        let names: HashSet<&str> = ClinicalZone::ALL.iter().map(|z| z.name()).collect();
        assert_eq!(names.len(), ZONE_COUNT);
    }

    #[test]
    fn canonical_order() {
        assert_eq!(ClinicalZone::ALL[0], ClinicalZone::FullFace);
        assert_eq!(ClinicalZone::ALL[ZONE_COUNT - 1], ClinicalZone::Neck);
        for (i, zone) in ClinicalZone::ALL.iter().enumerate() {
            assert_eq!(zone.index(), i);
        }
    }

    #[test]
    fn parse_round_trip() {
        for zone in ClinicalZone::ALL {
            assert_eq!(zone.name().parse::<ClinicalZone>().ok(), Some(zone));
        }
        assert!(matches!(
            "nose_wing".parse::<ClinicalZone>(),
            Err(ZoneError::UnknownZone(_))
        ));
    }

    #[test]
    fn facial_zones() {
        assert!(ClinicalZone::Chin.is_facial());
        assert!(!ClinicalZone::EarLeft.is_facial());
        assert!(!ClinicalZone::Neck.is_facial());
    }
}
