// SPDX-License-Identifier: MIT
// Per-call options: normalisation policy and score cutoffs.

use crate::error::{Error, Result};
use crate::utils::Normalization;

/// Options for the integer-valued scorers (`distance_with`, `similarity`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DistanceOptions {
    pub normalization: Normalization,
    /// Distances above the cutoff are reported as `cutoff + 1`.
    pub score_cutoff: Option<usize>,
}

impl DistanceOptions {
    pub fn builder() -> DistanceOptionsBuilder {
        DistanceOptionsBuilder::default()
    }

    /// Verbatim comparison with no cutoff.
    pub fn verbatim() -> Self {
        Self::default()
    }

    /// Surrounding whitespace is ignored, no cutoff.
    pub fn trimmed() -> Self {
        Self { normalization: Normalization::Trim, score_cutoff: None }
    }

    /// Cap a raw distance at `cutoff + 1`.
    #[inline]
    pub fn apply_cutoff(&self, dist: usize) -> usize {
        match self.score_cutoff {
            Some(c) if dist > c => c.saturating_add(1),
            _ => dist,
        }
    }

    /// Whether `dist` is within the cutoff (always true without one).
    #[inline]
    pub fn accepts(&self, dist: usize) -> bool {
        self.score_cutoff.map_or(true, |c| dist <= c)
    }
}

#[derive(Clone, Debug, Default)]
pub struct DistanceOptionsBuilder {
    options: DistanceOptions,
}

impl DistanceOptionsBuilder {
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.options.normalization = normalization;
        self
    }

    pub fn trim(self) -> Self {
        self.normalization(Normalization::Trim)
    }

    pub fn score_cutoff(mut self, cutoff: usize) -> Self {
        self.options.score_cutoff = Some(cutoff);
        self
    }

    pub fn build(self) -> DistanceOptions {
        self.options
    }
}

/// Options for the scorers normalised into `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedOptions {
    normalization: Normalization,
    score_cutoff: Option<f64>,
}

impl NormalizedOptions {
    pub fn builder() -> NormalizedOptionsBuilder {
        NormalizedOptionsBuilder::default()
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn score_cutoff(&self) -> Option<f64> {
        self.score_cutoff
    }
}

#[derive(Clone, Debug, Default)]
pub struct NormalizedOptionsBuilder {
    normalization: Normalization,
    score_cutoff: Option<f64>,
}

impl NormalizedOptionsBuilder {
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn trim(self) -> Self {
        self.normalization(Normalization::Trim)
    }

    pub fn score_cutoff(mut self, cutoff: f64) -> Self {
        self.score_cutoff = Some(cutoff);
        self
    }

    pub fn build(self) -> Result<NormalizedOptions> {
        if let Some(c) = self.score_cutoff {
            if !c.is_finite() || !(0.0..=1.0).contains(&c) {
                return Err(Error::InvalidCutoff(c));
            }
        }
        Ok(NormalizedOptions {
            normalization: self.normalization,
            score_cutoff: self.score_cutoff,
        })
    }
}
