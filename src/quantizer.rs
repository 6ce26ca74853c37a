// ABOUTME: Ratio quantizer - converts continuous proportions into small integer part counts
// ABOUTME: Two-pass heuristic: round to multiples of the minimum, then rescale under the bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::BlendError;
use crate::models::{BlendResult, Ingredient, NutrientProfile};

/// Convert continuous proportions into positive integer parts and compute
/// the nutrition of the rounded blend.
///
/// The two rounding passes are deliberate and preserved exactly:
///
/// 1. Divide every proportion by the smallest nonzero one and round to the
///    nearest integer (half away from zero), flooring at 1. Ingredients the
///    optimizer assigned zero weight still get 1 part, so every selected
///    ingredient appears with a physically measurable amount.
/// 2. If the largest part count exceeds `max_parts`, rescale everything by
///    `max_parts / max` and round again with the same floor. The floor can
///    leave the maximum slightly above the bound when a tiny share fights
///    the downscale; that is accepted rather than iterated away.
///
/// The returned nutrition is the parts-weighted average of the ingredient
/// profiles - exact for the integer blend, not the continuous optimum.
///
/// A `max_parts` of 0 is treated as 1, the smallest bound the part floor
/// can honor.
///
/// # Errors
///
/// [`BlendError::DegenerateSolution`] if no proportion is positive. That
/// cannot happen for a feasible solve over a nonempty ingredient list, but
/// is handled rather than assumed away.
pub fn quantize(
    proportions: &[f64],
    ingredients: &[Ingredient],
    max_parts: u32,
) -> Result<BlendResult, BlendError> {
    debug_assert_eq!(proportions.len(), ingredients.len());
    let max_parts = max_parts.max(1);

    let min_nonzero = proportions
        .iter()
        .copied()
        .filter(|&p| p > 0.0)
        .fold(f64::INFINITY, f64::min);
    if !min_nonzero.is_finite() {
        return Err(BlendError::DegenerateSolution {
            ingredient_count: ingredients.len(),
        });
    }

    let mut ratios: Vec<u32> = proportions
        .iter()
        .map(|&p| ((p / min_nonzero).round() as u32).max(1))
        .collect();

    let max_ratio = ratios.iter().copied().max().unwrap_or(1);
    if max_ratio > max_parts {
        let factor = f64::from(max_parts) / f64::from(max_ratio);
        for ratio in &mut ratios {
            *ratio = ((f64::from(*ratio) * factor).round() as u32).max(1);
        }
        let rescaled_max = ratios.iter().copied().max().unwrap_or(1);
        if rescaled_max > max_parts {
            debug!(
                rescaled_max,
                max_parts, "part floor kept the rescaled maximum above the bound"
            );
        }
    }

    let total_parts: u32 = ratios.iter().sum();
    let total = f64::from(total_parts);
    let mut nutrition = NutrientProfile::new(0.0, 0.0, 0.0);
    for (ingredient, &ratio) in ingredients.iter().zip(&ratios) {
        let weight = f64::from(ratio);
        nutrition.protein += ingredient.nutrition.protein * weight;
        nutrition.fat += ingredient.nutrition.fat * weight;
        nutrition.fiber += ingredient.nutrition.fiber * weight;
    }
    nutrition.protein /= total;
    nutrition.fat /= total;
    nutrition.fiber /= total;

    let parts: BTreeMap<String, u32> = ingredients
        .iter()
        .zip(&ratios)
        .map(|(ingredient, &ratio)| (ingredient.name.clone(), ratio))
        .collect();

    Ok(BlendResult { parts, nutrition })
}
