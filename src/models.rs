// ABOUTME: Core data model for feed blending - nutrient profiles, ingredients, blend results
// ABOUTME: All types are created fresh per invocation and never mutated by the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Percentages by weight for the three tracked nutrients.
///
/// Used for ingredient nutrition, target profiles, and the nutrition of a
/// computed blend. Values are weight percentages; ingredient profiles stay in
/// `[0, 100]`, targets are whatever the caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NutrientProfile {
    /// Crude protein (% by weight)
    pub protein: f64,
    /// Crude fat (% by weight)
    pub fat: f64,
    /// Crude fiber (% by weight)
    pub fiber: f64,
}

impl NutrientProfile {
    /// Create a profile from the three nutrient percentages.
    #[must_use]
    pub const fn new(protein: f64, fat: f64, fiber: f64) -> Self {
        Self {
            protein,
            fat,
            fiber,
        }
    }

    /// Sum of per-nutrient absolute deviations from `target`.
    ///
    /// This is the quantity the blend optimizer minimizes, so it doubles as
    /// the "how close did we get" metric for a finished blend.
    #[must_use]
    pub fn total_deviation_from(&self, target: &Self) -> f64 {
        (self.protein - target.protein).abs()
            + (self.fat - target.fat).abs()
            + (self.fiber - target.fiber).abs()
    }
}

/// A single feed ingredient: a name plus its fixed nutrient percentages.
///
/// Supplied by the caller per invocation; the core never persists or mutates
/// ingredient records. Names are unique case-insensitively - the catalog
/// enforces that before ingredients reach the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, unique case-insensitively within a catalog
    pub name: String,
    /// Fixed nutrient percentages for this ingredient
    pub nutrition: NutrientProfile,
}

impl Ingredient {
    /// Create an ingredient from a name and the three nutrient percentages.
    #[must_use]
    pub fn new(name: impl Into<String>, protein: f64, fat: f64, fiber: f64) -> Self {
        Self {
            name: name.into(),
            nutrition: NutrientProfile::new(protein, fat, fiber),
        }
    }
}

/// The externally visible result of a blend computation.
///
/// `parts` maps each input ingredient name to a positive integer part count
/// (e.g. "3 parts corn, 1 part peas"). `nutrition` is the exact
/// parts-weighted average of the input ingredient profiles - re-derivable
/// from `parts` alone, and slightly different from the continuous optimum
/// because of integer rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendResult {
    /// Integer part count per ingredient name, every value >= 1
    pub parts: BTreeMap<String, u32>,
    /// Nutrient percentages of the rounded integer blend
    pub nutrition: NutrientProfile,
}

impl BlendResult {
    /// Total number of parts across all ingredients.
    #[must_use]
    pub fn total_parts(&self) -> u32 {
        self.parts.values().sum()
    }
}
