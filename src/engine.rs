// ABOUTME: The single blend operation - optimizer then quantizer, stateless per invocation
// ABOUTME: Async entry point offloads the LP solve from the executor via spawn_blocking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use tracing::debug;

use crate::errors::BlendError;
use crate::models::{BlendResult, Ingredient, NutrientProfile};
use crate::optimizer::solve_proportions;
use crate::quantizer::quantize;

/// Compute the integer-part blend best matching `target`.
///
/// The one logical operation of the core: solve for continuous proportions,
/// then quantize them into parts bounded by `max_parts`. Stateless; every
/// invocation is independent and concurrent calls need no coordination.
///
/// The LP solve can be slow relative to interactive latency, so this is the
/// single suspension point callers await. The solve runs on the blocking
/// thread pool; a caller that drops the future lets the task run to
/// completion and discards the result.
///
/// # Errors
///
/// [`BlendError::EmptySelection`] for an empty ingredient list,
/// [`BlendError::DegenerateSolution`] if the solver hands back all-zero
/// proportions, and [`BlendError::OptimizerFault`] for solver failures.
pub async fn compute_blend(
    target: NutrientProfile,
    ingredients: Vec<Ingredient>,
    max_parts: u32,
) -> Result<BlendResult, BlendError> {
    if ingredients.is_empty() {
        // Fail before touching the blocking pool - no solver invocation.
        return Err(BlendError::EmptySelection);
    }
    match tokio::task::spawn_blocking(move || {
        compute_blend_sync(&target, &ingredients, max_parts)
    })
    .await
    {
        Ok(result) => result,
        Err(join_error) => Err(BlendError::OptimizerFault {
            detail: format!("blend task did not complete: {join_error}"),
        }),
    }
}

/// Synchronous blend computation: optimizer followed by quantizer.
///
/// Same contract as [`compute_blend`] without the suspension point. Useful
/// when already off the async executor.
///
/// # Errors
///
/// See [`compute_blend`].
pub fn compute_blend_sync(
    target: &NutrientProfile,
    ingredients: &[Ingredient],
    max_parts: u32,
) -> Result<BlendResult, BlendError> {
    let proportions = solve_proportions(target, ingredients)?;
    let result = quantize(&proportions, ingredients, max_parts)?;
    debug!(
        total_parts = result.total_parts(),
        deviation = result.nutrition.total_deviation_from(target),
        "blend computed"
    );
    Ok(result)
}
