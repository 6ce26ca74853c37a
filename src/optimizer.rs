// ABOUTME: Blend optimizer - LP formulation minimizing total absolute nutrient deviation
// ABOUTME: One proportion variable per ingredient, paired deviation slacks per nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use good_lp::{default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable};
use tracing::{debug, warn};

use crate::errors::BlendError;
use crate::models::{Ingredient, NutrientProfile};

/// Number of tracked nutrients (protein, fat, fiber). The formulation and
/// the quantizer's nutrition recomputation are both fixed to these three.
const NUTRIENT_COUNT: usize = 3;

/// Find the continuous blend proportions that best match `target`.
///
/// Returns one nonnegative proportion per ingredient, summing to 1,
/// minimizing the total absolute deviation between the blend's nutrient
/// profile and the target across protein, fat, and fiber.
///
/// The absolute-value objective is linearized with a pair of nonnegative
/// slack variables per nutrient: `blend_nutrient - pos + neg = target`,
/// minimizing `sum(pos + neg)`. Both slacks are penalized, so at the
/// optimum at most one of each pair is nonzero and `pos + neg` equals the
/// absolute deviation.
///
/// When the optimum is attained at multiple vertices the returned vector is
/// whichever one the solver's pivot rule lands on. The microlp backend is
/// deterministic, so identical inputs give identical outputs, but only the
/// objective value (minimum total deviation) is solver-independent.
///
/// # Errors
///
/// - [`BlendError::EmptySelection`] when `ingredients` is empty (no model
///   is constructed).
/// - [`BlendError::OptimizerFault`] if the solver reports infeasibility or
///   any other failure. The constraint set is feasible by construction
///   (`p[i] = 1/n` always satisfies the sum constraint and the slacks
///   absorb any nutrient mismatch), so this signals a defect.
pub fn solve_proportions(
    target: &NutrientProfile,
    ingredients: &[Ingredient],
) -> Result<Vec<f64>, BlendError> {
    if ingredients.is_empty() {
        return Err(BlendError::EmptySelection);
    }

    debug!(
        ingredient_count = ingredients.len(),
        protein = target.protein,
        fat = target.fat,
        fiber = target.fiber,
        "solving blend proportions"
    );

    let mut vars = variables!();

    let proportions: Vec<Variable> = ingredients
        .iter()
        .map(|_| vars.add(variable().min(0.0)))
        .collect();

    // (pos_dev, neg_dev) per nutrient, in protein/fat/fiber order.
    let deviations: Vec<(Variable, Variable)> = (0..NUTRIENT_COUNT)
        .map(|_| {
            (
                vars.add(variable().min(0.0)),
                vars.add(variable().min(0.0)),
            )
        })
        .collect();

    let mut objective = Expression::with_capacity(NUTRIENT_COUNT * 2);
    for &(pos, neg) in &deviations {
        objective.add_mul(1.0, pos);
        objective.add_mul(1.0, neg);
    }

    let mut problem = vars.minimise(objective).using(default_solver);

    // Weight fractions sum to a whole blend.
    let mut sum_constraint = Expression::with_capacity(proportions.len());
    for &p in &proportions {
        sum_constraint.add_mul(1.0, p);
    }
    problem = problem.with(sum_constraint.eq(1.0));

    // One equality per nutrient: blend value minus pos plus neg hits the target.
    let nutrient_targets = [target.protein, target.fat, target.fiber];
    for (nutrient_idx, &nutrient_target) in nutrient_targets.iter().enumerate() {
        let mut constraint = Expression::with_capacity(proportions.len() + 2);
        for (&p, ingredient) in proportions.iter().zip(ingredients) {
            constraint.add_mul(nutrient_value(ingredient, nutrient_idx), p);
        }
        let (pos, neg) = deviations[nutrient_idx];
        constraint.add_mul(-1.0, pos);
        constraint.add_mul(1.0, neg);
        problem = problem.with(constraint.eq(nutrient_target));
    }

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible) => {
            warn!(
                ingredient_count = ingredients.len(),
                "solver reported infeasibility for an always-feasible formulation"
            );
            return Err(BlendError::OptimizerFault {
                detail: "solver reported infeasible for an always-feasible formulation".to_owned(),
            });
        }
        Err(other) => {
            warn!(error = %other, "blend LP solve failed");
            return Err(BlendError::OptimizerFault {
                detail: other.to_string(),
            });
        }
    };

    // Clamp solver float noise; true proportions are bounded below by zero.
    Ok(proportions
        .iter()
        .map(|&p| solution.value(p).max(0.0))
        .collect())
}

fn nutrient_value(ingredient: &Ingredient, nutrient_idx: usize) -> f64 {
    match nutrient_idx {
        0 => ingredient.nutrition.protein,
        1 => ingredient.nutrition.fat,
        _ => ingredient.nutrition.fiber,
    }
}
