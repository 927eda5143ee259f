//! Subdivision parameters.
//!
//! Every threshold the mask-guided subdivider uses is a percentile of a
//! coordinate within a coarse region, or a fraction of a span derived from
//! such percentiles. The defaults reproduce the reference calibration.

/// What to do when removing eyeball vertices leaves no eye skin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EyeSkinFallback {
    /// Keep the skin set empty, so every skin-derived eye zone is empty.
    #[default]
    Never,

    /// Use the whole eye region, eyeball included, as the skin set.
    Always,
}

/// Forehead subdivision thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeheadParams {
    /// Lower x percentile of the band split into thirds.
    pub band_low_pct: f64,
    /// Upper x percentile of the band split into thirds.
    pub band_high_pct: f64,
    /// y percentile the brow threshold starts from.
    pub brow_base_pct: f64,
    /// Fraction of the way from the brow base to the median y.
    pub brow_blend: f64,
    /// Inner brow reach past the midline, as a fraction of the band width.
    pub inner_brow_reach: f64,
    /// Lowest y percentile of temple candidates.
    pub temple_low_pct: f64,
    /// Highest y percentile of temple candidates.
    pub temple_high_pct: f64,
    /// x percentile beyond which a candidate is a left temple; the right
    /// temple mirrors it at `100 - temple_outer_pct`.
    pub temple_outer_pct: f64,
}

impl Default for ForeheadParams {
    fn default() -> Self {
        Self {
            band_low_pct: 25.0,
            band_high_pct: 75.0,
            brow_base_pct: 15.0,
            brow_blend: 0.3,
            inner_brow_reach: 0.15,
            temple_low_pct: 10.0,
            temple_high_pct: 70.0,
            temple_outer_pct: 85.0,
        }
    }
}

/// Eye subdivision thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct EyeParams {
    /// Lower y percentile of the eye height span.
    pub span_low_pct: f64,
    /// Upper y percentile of the eye height span.
    pub span_high_pct: f64,
    /// Half-height of the corner band as a fraction of the span.
    pub corner_band: f64,
    /// x percentile marking the corners; the opposite corner mirrors it at
    /// `100 - corner_pct`.
    pub corner_pct: f64,
    /// Eye-skin fallback policy.
    pub skin_fallback: EyeSkinFallback,
}

impl Default for EyeParams {
    fn default() -> Self {
        Self {
            span_low_pct: 10.0,
            span_high_pct: 90.0,
            corner_band: 0.3,
            corner_pct: 15.0,
            skin_fallback: EyeSkinFallback::default(),
        }
    }
}

/// Nose subdivision thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct NoseParams {
    /// y percentile taken as the bottom of the nose.
    pub low_pct: f64,
    /// y percentile taken as the top of the nose.
    pub high_pct: f64,
    /// x percentiles bounding the nose width.
    pub width_pcts: (f64, f64),
    /// Bridge starts this fraction of the height above the bottom.
    pub bridge_start: f64,
    /// Tip band, as fractions of the height above the bottom.
    pub tip_band: (f64, f64),
    /// Half-width of the bridge and tip band, as a fraction of the width.
    pub center_half_width: f64,
    /// Nostrils lie below this fraction of the height.
    pub nostril_top: f64,
    /// Nostrils lie beyond this fraction of the width from the midline.
    pub nostril_offset: f64,
}

impl Default for NoseParams {
    fn default() -> Self {
        Self {
            low_pct: 5.0,
            high_pct: 95.0,
            width_pcts: (10.0, 90.0),
            bridge_start: 0.40,
            tip_band: (0.10, 0.30),
            center_half_width: 0.35,
            nostril_top: 0.30,
            nostril_offset: 0.15,
        }
    }
}

/// Lip subdivision thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct LipParams {
    /// x percentiles bounding the span split into thirds.
    pub band_pcts: (f64, f64),
    /// Half-height of the corner band as a fraction of the lip height.
    pub corner_band: f64,
    /// x percentile marking the right corner; the left mirrors it at
    /// `100 - corner_pct`.
    pub corner_pct: f64,
}

impl Default for LipParams {
    fn default() -> Self {
        Self {
            band_pcts: (5.0, 95.0),
            corner_band: 0.20,
            corner_pct: 15.0,
        }
    }
}

/// Thresholds for the face remainder (chin, jaw, cheeks, nasolabial folds).
#[derive(Debug, Clone, PartialEq)]
pub struct FaceParams {
    /// y percentiles bounding the remainder height.
    pub height_pcts: (f64, f64),
    /// Chin lies below this fraction of the height.
    pub chin_top: f64,
    /// Chin half-width as a fraction of the x span.
    pub chin_half_width: f64,
    /// Jaw lies below this fraction of the height.
    pub jaw_top: f64,
    /// Jawline lies below this y percentile of each jaw side.
    pub jawline_pct: f64,
    /// Cheek band, as fractions of the height above the bottom.
    pub cheek_band: (f64, f64),
    /// Cheeks lie beyond this fraction of the x span from the midline.
    pub cheek_offset: f64,
    /// Nasolabial band from this y percentile of the lips ...
    pub nasolabial_lip_pct: f64,
    /// ... up to this y percentile of the nose.
    pub nasolabial_nose_pct: f64,
    /// Nasolabial distance from the midline, as fractions of the nose width.
    pub nasolabial_offsets: (f64, f64),
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            height_pcts: (5.0, 95.0),
            chin_top: 0.25,
            chin_half_width: 0.25,
            jaw_top: 0.40,
            jawline_pct: 35.0,
            cheek_band: (0.25, 0.70),
            cheek_offset: 0.10,
            nasolabial_lip_pct: 50.0,
            nasolabial_nose_pct: 30.0,
            nasolabial_offsets: (0.4, 0.9),
        }
    }
}

/// Thresholds for the temple fallback from the scalp.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalpParams {
    /// Scalp vertices below this y percentile are temple candidates.
    pub low_pct: f64,
    /// x percentile beyond which a candidate is a left temple; the right
    /// temple mirrors it at `100 - temple_outer_pct`.
    pub temple_outer_pct: f64,
}

impl Default for ScalpParams {
    fn default() -> Self {
        Self {
            low_pct: 50.0,
            temple_outer_pct: 70.0,
        }
    }
}

/// Parameters for mask-guided zone subdivision.
///
/// # Example
///
/// ```
/// use mesh_zones::{EyeSkinFallback, SubdivideParams};
///
/// let params = SubdivideParams::new().with_eye_skin_fallback(EyeSkinFallback::Always);
/// assert_eq!(params.eyes.skin_fallback, EyeSkinFallback::Always);
/// assert_eq!(params.nose.bridge_start, 0.40);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubdivideParams {
    /// Forehead, brows and temples.
    pub forehead: ForeheadParams,
    /// Eyelids, eye corners, under-eye and tear troughs.
    pub eyes: EyeParams,
    /// Bridge, tip and nostrils.
    pub nose: NoseParams,
    /// Lip halves, thirds and corners.
    pub lips: LipParams,
    /// Chin, jaw, cheeks and nasolabial folds.
    pub face: FaceParams,
    /// Temple fallback.
    pub scalp: ScalpParams,
}

impl SubdivideParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the eye-skin fallback policy.
    #[must_use]
    pub const fn with_eye_skin_fallback(mut self, fallback: EyeSkinFallback) -> Self {
        self.eyes.skin_fallback = fallback;
        self
    }

    /// Replace the forehead thresholds.
    #[must_use]
    pub fn with_forehead(mut self, forehead: ForeheadParams) -> Self {
        self.forehead = forehead;
        self
    }

    /// Replace the eye thresholds.
    #[must_use]
    pub fn with_eyes(mut self, eyes: EyeParams) -> Self {
        self.eyes = eyes;
        self
    }

    /// Replace the nose thresholds.
    #[must_use]
    pub fn with_nose(mut self, nose: NoseParams) -> Self {
        self.nose = nose;
        self
    }

    /// Replace the lip thresholds.
    #[must_use]
    pub fn with_lips(mut self, lips: LipParams) -> Self {
        self.lips = lips;
        self
    }

    /// Replace the face remainder thresholds.
    #[must_use]
    pub fn with_face(mut self, face: FaceParams) -> Self {
        self.face = face;
        self
    }

    /// Replace the temple fallback thresholds.
    #[must_use]
    pub fn with_scalp(mut self, scalp: ScalpParams) -> Self {
        self.scalp = scalp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fallback_never() {
        assert_eq!(SubdivideParams::default().eyes.skin_fallback, EyeSkinFallback::Never);
    }

    #[test]
    fn builder_replaces_groups() {
        let params = SubdivideParams::new()
            .with_nose(NoseParams {
                bridge_start: 0.5,
                ..NoseParams::default()
            })
            .with_eye_skin_fallback(EyeSkinFallback::Always);
        assert_eq!(params.nose.bridge_start, 0.5);
        assert_eq!(params.nose.tip_band, (0.10, 0.30));
        assert_eq!(params.eyes.skin_fallback, EyeSkinFallback::Always);
        assert_eq!(params.lips, LipParams::default());
    }
}
