//! Personality profile and the feature vector derived from it.
//!
//! A [`PersonalityProfile`] holds the five trait percentiles supplied by a
//! client. Models never see the profile directly; they receive a
//! [`FeatureVector`], which is a per-model working copy that may be padded
//! or truncated to match what the model was trained on.

use super::error::DomainError;

/// Number of traits in a profile, and therefore the natural feature width.
pub const BASE_WIDTH: usize = 5;

/// Widest feature vector a model may ask for.
///
/// Widths above this, whether advertised by model metadata or recovered from
/// an error message, are treated as unusable instead of allocated.
pub const MAX_FEATURE_WIDTH: usize = 4096;

/// Value used to fill features a model expects but the profile lacks.
///
/// Zero is a neutral placeholder, not an imputation with any statistical
/// backing.
pub const PAD_VALUE: f64 = 0.0;

/// Trait names in feature order.
pub const TRAIT_NAMES: [&str; BASE_WIDTH] = [
    "openness",
    "conscientiousness",
    "extraversion",
    "agreeableness",
    "neuroticism",
];

/// Five-factor personality percentiles, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityProfile {
    openness: u8,
    conscientiousness: u8,
    extraversion: u8,
    agreeableness: u8,
    neuroticism: u8,
}

impl PersonalityProfile {
    /// Build a profile, rejecting any trait outside `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TraitOutOfRange`] naming the first offending
    /// trait in feature order.
    pub fn try_new(
        openness: i64,
        conscientiousness: i64,
        extraversion: i64,
        agreeableness: i64,
        neuroticism: i64,
    ) -> Result<Self, DomainError> {
        let values = [
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        ];
        let mut checked = [0u8; BASE_WIDTH];
        for (slot, (name, value)) in checked.iter_mut().zip(TRAIT_NAMES.iter().zip(values)) {
            *slot = percentile(*name, value)?;
        }

        Ok(Self {
            openness: checked[0],
            conscientiousness: checked[1],
            extraversion: checked[2],
            agreeableness: checked[3],
            neuroticism: checked[4],
        })
    }

    #[must_use]
    pub const fn openness(&self) -> u8 {
        self.openness
    }

    #[must_use]
    pub const fn conscientiousness(&self) -> u8 {
        self.conscientiousness
    }

    #[must_use]
    pub const fn extraversion(&self) -> u8 {
        self.extraversion
    }

    #[must_use]
    pub const fn agreeableness(&self) -> u8 {
        self.agreeableness
    }

    #[must_use]
    pub const fn neuroticism(&self) -> u8 {
        self.neuroticism
    }

    /// Encode the profile as the base feature vector, in trait order.
    #[must_use]
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(vec![
            f64::from(self.openness),
            f64::from(self.conscientiousness),
            f64::from(self.extraversion),
            f64::from(self.agreeableness),
            f64::from(self.neuroticism),
        ])
    }
}

fn percentile(name: &'static str, value: i64) -> Result<u8, DomainError> {
    match u8::try_from(value) {
        Ok(v) if v <= 100 => Ok(v),
        _ => Err(DomainError::TraitOutOfRange {
            trait_name: name,
            value,
        }),
    }
}

/// Ordered numeric encoding handed to a model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Right-pad with [`PAD_VALUE`] up to `width`. Never shrinks.
    ///
    /// Callers bound `width` by [`MAX_FEATURE_WIDTH`].
    pub fn pad_to(&mut self, width: usize) {
        if width > self.0.len() {
            self.0.resize(width, PAD_VALUE);
        }
    }

    /// Pad or truncate so the vector is exactly `width` long.
    pub fn reshape(&mut self, width: usize) {
        if width > self.0.len() {
            self.pad_to(width);
        } else {
            self.0.truncate(width);
        }
    }
}
