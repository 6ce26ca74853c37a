// ABOUTME: Default target profile, max parts bound, and deviation assessment thresholds
// ABOUTME: Values match common pigeon feeding guidance for maintenance diets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use crate::models::NutrientProfile;

/// Default target profile: 14% protein, 3.75% fat, 4.25% fiber.
///
/// Protein 13-15% suits most pigeons; fat 2.5-5% and fiber 2.5-6% are the
/// ranges commercial all-rounder mixes fall in.
pub const DEFAULT_TARGET: NutrientProfile = NutrientProfile::new(14.0, 3.75, 4.25);

/// Default upper bound on any single ingredient's part count.
pub const DEFAULT_MAX_PARTS: u32 = 8;

/// Per-nutrient deviation thresholds for assessing a finished blend.
///
/// A deviation at or below `caution` is within the ideal band; above
/// `caution` the mix deserves a second look; above `not_recommended` it
/// should not be fed for that nutrient.
#[derive(Debug, Clone, Copy)]
pub struct DeviationThresholds {
    /// Deviation (percentage points) above which the nutrient is off-target
    pub caution: f64,
    /// Deviation above which the mix is not recommended
    pub not_recommended: f64,
}

/// Protein deviation thresholds (percentage points from target)
pub const PROTEIN_THRESHOLDS: DeviationThresholds = DeviationThresholds {
    caution: 3.0,
    not_recommended: 8.0,
};

/// Fat deviation thresholds (percentage points from target)
pub const FAT_THRESHOLDS: DeviationThresholds = DeviationThresholds {
    caution: 3.0,
    not_recommended: 8.0,
};

/// Fiber deviation thresholds - fiber is more forgiving than protein or fat
pub const FIBER_THRESHOLDS: DeviationThresholds = DeviationThresholds {
    caution: 6.0,
    not_recommended: 12.0,
};
