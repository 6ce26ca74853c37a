// ABOUTME: Structured error types for blend computation, catalog management, and session storage
// ABOUTME: All blend errors are terminal for the current invocation - no retries, no partial results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use std::path::PathBuf;

/// Errors from the blend computation core.
///
/// Each variant is terminal for the invocation that produced it. Retrying
/// with unchanged inputs will not change the outcome: the computation is
/// deterministic apart from solver tie-breaking among equally optimal
/// vertices, which never turns a failure into a success.
#[derive(Debug, thiserror::Error)]
pub enum BlendError {
    /// No ingredients were enabled; detected before any solver work.
    ///
    /// Callers should render an explicit "nothing selected" state rather
    /// than an empty numeric result.
    #[error("no ingredients selected for blending")]
    EmptySelection,

    /// The optimizer returned an all-zero proportion vector for a nonempty
    /// ingredient list. Indicates a solver or formulation anomaly; kept
    /// distinct from `EmptySelection` for diagnosis even though both leave
    /// the caller with no usable mix.
    #[error("optimizer returned all-zero proportions for {ingredient_count} ingredient(s)")]
    DegenerateSolution {
        /// Number of ingredients in the rejected solve
        ingredient_count: usize,
    },

    /// The solver failed where the formulation guarantees feasibility
    /// (any single-ingredient assignment satisfies the constraints, and the
    /// deviation slacks absorb any nutrient mismatch). A defect signal, not
    /// a recoverable condition.
    #[error("blend optimizer fault: {detail}")]
    OptimizerFault {
        /// Solver-reported failure description
        detail: String,
    },
}

/// Errors from ingredient catalog management.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An ingredient with this name already exists (case-insensitive match).
    #[error("an ingredient named '{name}' already exists")]
    DuplicateName {
        /// Name that collided with an existing entry
        name: String,
    },

    /// The ingredient name failed validation.
    #[error("invalid ingredient name '{name}': {reason}")]
    InvalidName {
        /// Rejected name
        name: String,
        /// Why the name was rejected
        reason: &'static str,
    },

    /// A nutrient percentage was outside `[0, 100]` or not finite.
    #[error("invalid {nutrient} value {value} for '{name}': must be between 0 and 100")]
    InvalidNutrient {
        /// Ingredient the value belongs to
        name: String,
        /// Which nutrient was out of range
        nutrient: &'static str,
        /// The rejected value
        value: f64,
    },

    /// No ingredient with this name exists in the catalog.
    #[error("no ingredient named '{name}' in the catalog")]
    NotFound {
        /// Name that was looked up
        name: String,
    },

    /// Attempted to remove a built-in ingredient; only custom entries can
    /// be removed.
    #[error("'{name}' is a built-in ingredient and cannot be removed")]
    BuiltinImmutable {
        /// Name of the built-in entry
        name: String,
    },
}

/// Errors from session state persistence.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("session storage I/O failed for {path}")]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Session state could not be serialized to JSON.
    #[error("failed to serialize session state")]
    Serialize {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// No platform data directory is available to store session state in.
    #[error("no platform data directory available for session storage")]
    DataDirUnavailable,
}
