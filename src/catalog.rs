// ABOUTME: Ingredient catalog - built-in pigeon feed table plus validated custom entries
// ABOUTME: Guarantees case-insensitive name uniqueness before ingredients reach the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use crate::errors::CatalogError;
use crate::models::Ingredient;

/// Built-in feed table: (name, protein %, fat %, fiber %).
///
/// Standard feed-table figures for the grains, legumes, and oilseeds that
/// make up typical pigeon mixes.
const BUILTIN_FOODS: &[(&str, f64, f64, f64)] = &[
    ("Corn", 8.5, 3.8, 2.5),
    ("Wheat", 11.5, 2.0, 2.5),
    ("Red Milo", 9.0, 2.8, 2.0),
    ("Barley", 11.0, 2.0, 5.0),
    ("Oats", 11.5, 4.5, 10.5),
    ("White Peas", 22.5, 1.5, 5.5),
    ("Maple Peas", 22.0, 1.0, 6.0),
    ("Vetch", 26.0, 1.5, 6.5),
    ("Lentils", 24.0, 1.0, 4.0),
    ("Safflower", 14.0, 28.0, 25.0),
    ("Black Oil Sunflower", 16.0, 38.0, 20.0),
    ("White Millet", 11.0, 4.0, 8.0),
    ("Canary Seed", 14.0, 4.0, 7.0),
    ("Paddy Rice", 7.0, 2.0, 10.0),
    ("Buckwheat", 10.5, 2.5, 11.0),
    ("Hemp Seed", 22.0, 30.0, 18.0),
    ("Flax Seed", 22.0, 34.0, 9.0),
    ("Rapeseed", 20.0, 40.0, 7.0),
];

/// Shortest and longest accepted custom ingredient names.
const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 32;

/// The ordered ingredient list: built-in entries followed by custom ones.
///
/// Upholds the catalog-provider contract the blend core relies on: names
/// are unique case-insensitively, custom entries are validated on the way
/// in, and iteration order is stable (built-ins in table order, custom
/// entries in insertion order) so repeated solves see identical input.
#[derive(Debug, Clone)]
pub struct Catalog {
    builtin: Vec<Ingredient>,
    custom: Vec<Ingredient>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Catalog with the built-in feed table and no custom entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builtin: BUILTIN_FOODS
                .iter()
                .map(|&(name, protein, fat, fiber)| Ingredient::new(name, protein, fat, fiber))
                .collect(),
            custom: Vec::new(),
        }
    }

    /// Catalog restored with previously saved custom entries.
    ///
    /// Each entry goes through the same validation as [`Self::add_custom`],
    /// so a tampered or stale state file cannot smuggle in duplicates or
    /// out-of-range values.
    ///
    /// # Errors
    ///
    /// First [`CatalogError`] encountered while re-adding the entries.
    pub fn with_custom(custom: Vec<Ingredient>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for ingredient in custom {
            catalog.add_custom(ingredient)?;
        }
        Ok(catalog)
    }

    /// All ingredients: built-ins in table order, then custom entries in
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.builtin.iter().chain(self.custom.iter())
    }

    /// Custom entries only.
    #[must_use]
    pub fn custom(&self) -> &[Ingredient] {
        &self.custom
    }

    /// Total number of ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.builtin.len() + self.custom.len()
    }

    /// True when the catalog holds no ingredients at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builtin.is_empty() && self.custom.is_empty()
    }

    /// Look up an ingredient by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.iter().find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// True when an ingredient with this name exists (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Case-insensitive substring search over ingredient names.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Ingredient> {
        let query = query.to_lowercase();
        self.iter()
            .filter(|i| i.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Add a user-defined ingredient.
    ///
    /// The name is trimmed, must be 2-32 characters of letters, digits,
    /// spaces or `.,'-`, and must not collide (case-insensitively) with any
    /// existing entry. Every nutrient must be finite and within `[0, 100]`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidName`], [`CatalogError::DuplicateName`], or
    /// [`CatalogError::InvalidNutrient`].
    pub fn add_custom(&mut self, ingredient: Ingredient) -> Result<(), CatalogError> {
        let name = ingredient.name.trim().to_owned();
        validate_name(&name)?;
        if self.contains(&name) {
            return Err(CatalogError::DuplicateName { name });
        }
        validate_nutrient(&name, "protein", ingredient.nutrition.protein)?;
        validate_nutrient(&name, "fat", ingredient.nutrition.fat)?;
        validate_nutrient(&name, "fiber", ingredient.nutrition.fiber)?;
        self.custom.push(Ingredient {
            name,
            nutrition: ingredient.nutrition,
        });
        Ok(())
    }

    /// Remove a custom entry by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`CatalogError::BuiltinImmutable`] for built-in names,
    /// [`CatalogError::NotFound`] for unknown ones.
    pub fn remove_custom(&mut self, name: &str) -> Result<Ingredient, CatalogError> {
        if let Some(idx) = self
            .custom
            .iter()
            .position(|i| i.name.eq_ignore_ascii_case(name))
        {
            return Ok(self.custom.remove(idx));
        }
        if self
            .builtin
            .iter()
            .any(|i| i.name.eq_ignore_ascii_case(name))
        {
            return Err(CatalogError::BuiltinImmutable {
                name: name.to_owned(),
            });
        }
        Err(CatalogError::NotFound {
            name: name.to_owned(),
        })
    }
}

fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.len() < NAME_MIN_LEN {
        return Err(CatalogError::InvalidName {
            name: name.to_owned(),
            reason: "must be at least 2 characters",
        });
    }
    if name.len() > NAME_MAX_LEN {
        return Err(CatalogError::InvalidName {
            name: name.to_owned(),
            reason: "must be at most 32 characters",
        });
    }
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | ',' | '\'' | '-');
    if !name.chars().all(allowed) {
        return Err(CatalogError::InvalidName {
            name: name.to_owned(),
            reason: "only letters, digits, spaces, and .,'- are allowed",
        });
    }
    Ok(())
}

fn validate_nutrient(name: &str, nutrient: &'static str, value: f64) -> Result<(), CatalogError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CatalogError::InvalidNutrient {
            name: name.to_owned(),
            nutrient,
            value,
        });
    }
    Ok(())
}
