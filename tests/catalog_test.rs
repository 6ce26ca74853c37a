// ABOUTME: Tests for the ingredient catalog - built-ins, custom entry validation, search
// ABOUTME: Verifies the case-insensitive uniqueness guarantee the blend core relies on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use seedmix::catalog::Catalog;
use seedmix::{CatalogError, Ingredient};

#[test]
fn test_builtin_table_is_present() {
    let catalog = Catalog::new();
    assert!(!catalog.is_empty());
    assert!(catalog.contains("Corn"));
    assert!(catalog.contains("White Peas"));
    assert!(catalog.custom().is_empty());
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = Catalog::new();
    let corn = catalog.get("corn").expect("lowercase lookup should find Corn");
    assert_eq!(corn.name, "Corn");
    assert!(catalog.get("WHITE PEAS").is_some());
    assert!(catalog.get("no such seed").is_none());
}

#[test]
fn test_add_custom_ingredient() {
    let mut catalog = Catalog::new();
    let before = catalog.len();
    catalog
        .add_custom(Ingredient::new("Popcorn", 12.0, 4.5, 2.2))
        .expect("valid custom ingredient should be accepted");

    assert_eq!(catalog.len(), before + 1);
    assert!(catalog.contains("popcorn"));
    // Custom entries come after built-ins in iteration order.
    let last = catalog.iter().last().expect("catalog is nonempty");
    assert_eq!(last.name, "Popcorn");
}

#[test]
fn test_duplicate_name_rejected_case_insensitively() {
    let mut catalog = Catalog::new();
    let result = catalog.add_custom(Ingredient::new("CORN", 1.0, 1.0, 1.0));
    assert!(matches!(result, Err(CatalogError::DuplicateName { .. })));
}

#[test]
fn test_name_validation() {
    let mut catalog = Catalog::new();

    let too_short = catalog.add_custom(Ingredient::new("X", 1.0, 1.0, 1.0));
    assert!(matches!(too_short, Err(CatalogError::InvalidName { .. })));

    let too_long = catalog.add_custom(Ingredient::new("a".repeat(33), 1.0, 1.0, 1.0));
    assert!(matches!(too_long, Err(CatalogError::InvalidName { .. })));

    let bad_chars = catalog.add_custom(Ingredient::new("seed<script>", 1.0, 1.0, 1.0));
    assert!(matches!(bad_chars, Err(CatalogError::InvalidName { .. })));

    let punctuation_ok = catalog.add_custom(Ingredient::new("Breeder's Mix No. 2", 14.0, 4.0, 5.0));
    assert!(punctuation_ok.is_ok());
}

#[test]
fn test_name_is_trimmed_before_validation() {
    let mut catalog = Catalog::new();
    catalog
        .add_custom(Ingredient::new("  Popcorn  ", 12.0, 4.5, 2.2))
        .expect("padded name should be trimmed and accepted");
    let stored = catalog.get("Popcorn").expect("trimmed name should be stored");
    assert_eq!(stored.name, "Popcorn");
}

#[test]
fn test_nutrient_range_validation() {
    let mut catalog = Catalog::new();

    let over = catalog.add_custom(Ingredient::new("Hot Seed", 150.0, 1.0, 1.0));
    assert!(matches!(
        over,
        Err(CatalogError::InvalidNutrient { nutrient: "protein", .. })
    ));

    let negative = catalog.add_custom(Ingredient::new("Cold Seed", 1.0, -0.5, 1.0));
    assert!(matches!(
        negative,
        Err(CatalogError::InvalidNutrient { nutrient: "fat", .. })
    ));

    let nan = catalog.add_custom(Ingredient::new("Nan Seed", 1.0, 1.0, f64::NAN));
    assert!(matches!(
        nan,
        Err(CatalogError::InvalidNutrient { nutrient: "fiber", .. })
    ));
}

#[test]
fn test_remove_custom_only() {
    let mut catalog = Catalog::new();
    catalog
        .add_custom(Ingredient::new("Popcorn", 12.0, 4.5, 2.2))
        .expect("add should succeed");

    let removed = catalog.remove_custom("popcorn").expect("custom removal should succeed");
    assert_eq!(removed.name, "Popcorn");
    assert!(!catalog.contains("Popcorn"));

    let builtin = catalog.remove_custom("Corn");
    assert!(matches!(builtin, Err(CatalogError::BuiltinImmutable { .. })));

    let missing = catalog.remove_custom("Popcorn");
    assert!(matches!(missing, Err(CatalogError::NotFound { .. })));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let catalog = Catalog::new();
    let hits = catalog.search("PEA");
    let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["White Peas", "Maple Peas"]);

    assert!(catalog.search("zzz").is_empty());
}

#[test]
fn test_with_custom_revalidates_entries() {
    let restored = Catalog::with_custom(vec![Ingredient::new("Popcorn", 12.0, 4.5, 2.2)])
        .expect("valid saved entries should restore");
    assert!(restored.contains("Popcorn"));

    let tampered = Catalog::with_custom(vec![Ingredient::new("Corn", 1.0, 1.0, 1.0)]);
    assert!(matches!(tampered, Err(CatalogError::DuplicateName { .. })));
}
