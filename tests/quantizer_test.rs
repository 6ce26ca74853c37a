// ABOUTME: Tests for the two-pass ratio quantizer - rounding, rescaling, and edge cases
// ABOUTME: Exercises the part floor, the rescale pass, and the degenerate all-zero input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use seedmix::quantizer::quantize;
use seedmix::{BlendError, Ingredient};

const EPSILON: f64 = 1e-9;

fn corn() -> Ingredient {
    Ingredient::new("Corn", 8.5, 3.8, 2.5)
}

fn white_peas() -> Ingredient {
    Ingredient::new("White Peas", 22.5, 1.5, 5.5)
}

#[test]
fn test_simple_three_to_one_ratio() {
    let ingredients = [corn(), white_peas()];
    let result = quantize(&[0.75, 0.25], &ingredients, 8).expect("quantize should succeed");

    assert_eq!(result.parts.get("Corn"), Some(&3));
    assert_eq!(result.parts.get("White Peas"), Some(&1));
    // Weighted average over 4 parts: (8.5*3 + 22.5) / 4 and so on.
    assert!((result.nutrition.protein - 12.0).abs() < EPSILON);
    assert!((result.nutrition.fat - 3.225).abs() < EPSILON);
    assert!((result.nutrition.fiber - 3.25).abs() < EPSILON);
}

#[test]
fn test_rescale_when_ratio_exceeds_bound() {
    let ingredients = [corn(), white_peas()];
    // 9:1 exceeds a bound of 8, so everything rescales by 8/9.
    let result = quantize(&[0.9, 0.1], &ingredients, 8).expect("quantize should succeed");

    assert_eq!(result.parts.get("Corn"), Some(&8));
    assert_eq!(result.parts.get("White Peas"), Some(&1));
}

#[test]
fn test_rescale_rounds_intermediate_ratios() {
    let ingredients = [
        corn(),
        white_peas(),
        Ingredient::new("Safflower", 14.0, 28.0, 25.0),
    ];
    // Initial ratios 16:3:1; factor 0.5 gives 8, 1.5 -> 2, 0.5 -> 1.
    let result =
        quantize(&[0.8, 0.15, 0.05], &ingredients, 8).expect("quantize should succeed");

    assert_eq!(result.parts.get("Corn"), Some(&8));
    assert_eq!(result.parts.get("White Peas"), Some(&2));
    assert_eq!(result.parts.get("Safflower"), Some(&1));
}

#[test]
fn test_zero_proportion_still_gets_one_part() {
    // Selected-but-weightless ingredients appear with 1 part so the
    // physical recipe includes everything the user chose.
    let ingredients = [corn(), white_peas()];
    let result = quantize(&[1.0, 0.0], &ingredients, 8).expect("quantize should succeed");

    assert_eq!(result.parts.get("Corn"), Some(&1));
    assert_eq!(result.parts.get("White Peas"), Some(&1));
    // The floor distorts the blend: nutrition is the 1:1 average.
    assert!((result.nutrition.protein - 15.5).abs() < EPSILON);
}

#[test]
fn test_all_zero_proportions_is_degenerate() {
    let ingredients = [corn(), white_peas()];
    let result = quantize(&[0.0, 0.0], &ingredients, 8);
    assert!(matches!(
        result,
        Err(BlendError::DegenerateSolution { ingredient_count: 2 })
    ));
}

#[test]
fn test_bound_of_one_collapses_to_equal_parts() {
    let ingredients = [corn(), white_peas()];
    let result = quantize(&[0.95, 0.05], &ingredients, 1).expect("quantize should succeed");
    assert_eq!(result.parts.get("Corn"), Some(&1));
    assert_eq!(result.parts.get("White Peas"), Some(&1));
}

#[test]
fn test_parts_keyed_by_ingredient_name_only() {
    let ingredients = [corn(), white_peas()];
    let result = quantize(&[0.5, 0.5], &ingredients, 8).expect("quantize should succeed");
    assert_eq!(result.parts.len(), 2);
    assert!(result.parts.contains_key("Corn"));
    assert!(result.parts.contains_key("White Peas"));
}

#[test]
fn test_near_equal_proportions_round_to_one_each() {
    let ingredients = [corn(), white_peas()];
    let result =
        quantize(&[0.500_000_01, 0.499_999_99], &ingredients, 8).expect("quantize should succeed");
    assert_eq!(result.parts.get("Corn"), Some(&1));
    assert_eq!(result.parts.get("White Peas"), Some(&1));
}
