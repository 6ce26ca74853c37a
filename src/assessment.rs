// ABOUTME: Deviation assessment - grades a finished blend's nutrients against the target
// ABOUTME: Per-nutrient severity bands drive the caller-facing warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use serde::{Deserialize, Serialize};

use crate::constants::{DeviationThresholds, FAT_THRESHOLDS, FIBER_THRESHOLDS, PROTEIN_THRESHOLDS};
use crate::models::NutrientProfile;

/// How far a nutrient landed from its target, in severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationSeverity {
    /// Within the ideal band of the target
    WithinIdeal,
    /// Noticeably off target; worth adjusting the selection
    Caution,
    /// Too far off target; the mix is not recommended for this nutrient
    NotRecommended,
}

/// Assessment of a single nutrient in a finished blend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutrientAssessment {
    /// Achieved percentage in the blend
    pub actual: f64,
    /// Requested target percentage
    pub target: f64,
    /// Absolute deviation in percentage points
    pub deviation: f64,
    /// Severity band the deviation falls in
    pub severity: DeviationSeverity,
}

/// Per-nutrient verdicts for a finished blend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendAssessment {
    /// Protein verdict
    pub protein: NutrientAssessment,
    /// Fat verdict
    pub fat: NutrientAssessment,
    /// Fiber verdict
    pub fiber: NutrientAssessment,
}

impl BlendAssessment {
    /// True when every nutrient is within its ideal band - an ideal mix.
    #[must_use]
    pub fn is_ideal(&self) -> bool {
        [self.protein, self.fat, self.fiber]
            .iter()
            .all(|n| n.severity == DeviationSeverity::WithinIdeal)
    }
}

/// Grade a blend's achieved nutrition against the target profile.
#[must_use]
pub fn assess(target: &NutrientProfile, actual: &NutrientProfile) -> BlendAssessment {
    BlendAssessment {
        protein: assess_nutrient(target.protein, actual.protein, &PROTEIN_THRESHOLDS),
        fat: assess_nutrient(target.fat, actual.fat, &FAT_THRESHOLDS),
        fiber: assess_nutrient(target.fiber, actual.fiber, &FIBER_THRESHOLDS),
    }
}

fn assess_nutrient(
    target: f64,
    actual: f64,
    thresholds: &DeviationThresholds,
) -> NutrientAssessment {
    let deviation = (actual - target).abs();
    let severity = if deviation > thresholds.not_recommended {
        DeviationSeverity::NotRecommended
    } else if deviation > thresholds.caution {
        DeviationSeverity::Caution
    } else {
        DeviationSeverity::WithinIdeal
    };
    NutrientAssessment {
        actual,
        target,
        deviation,
        severity,
    }
}
