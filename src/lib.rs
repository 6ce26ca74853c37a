// ABOUTME: Library entry point for seedmix, a feed blend optimizer for pigeon seed mixes
// ABOUTME: Finds the integer-part mix of ingredients best matching a target nutrient profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

#![deny(unsafe_code)]

//! # Seedmix
//!
//! Computes a blend of feed ingredients - each with fixed protein, fat, and
//! fiber percentages - that best matches a target nutrient profile, then
//! expresses that blend as a small integer ratio of parts suitable for
//! physically measuring out a mix ("3 parts corn, 1 part peas").
//!
//! Two components run in strict sequence for every invocation:
//!
//! - **Blend optimizer** ([`optimizer`]): a linear program over nonnegative
//!   proportions summing to 1, minimizing total absolute deviation from the
//!   target across the three nutrients.
//! - **Ratio quantizer** ([`quantizer`]): converts the continuous
//!   proportions to positive integer parts bounded by a caller-supplied
//!   maximum, and recomputes the exact nutrition of the rounded blend.
//!
//! Data flows one way; each call is stateless and independent. The single
//! public operation is [`compute_blend`] (or [`compute_blend_sync`] off the
//! async executor).
//!
//! ## Example
//!
//! ```rust
//! use seedmix::{compute_blend_sync, Ingredient, NutrientProfile};
//!
//! let ingredients = vec![
//!     Ingredient::new("Corn", 8.5, 3.8, 2.5),
//!     Ingredient::new("White Peas", 22.5, 1.5, 5.5),
//! ];
//! let target = NutrientProfile::new(14.0, 3.75, 4.25);
//!
//! let blend = compute_blend_sync(&target, &ingredients, 8)?;
//! for (name, parts) in &blend.parts {
//!     println!("{parts} part(s) {name}");
//! }
//! # Ok::<(), seedmix::BlendError>(())
//! ```
//!
//! The collaborating surfaces around the core - the ingredient [`catalog`],
//! deviation [`assessment`], and [`session`] persistence - are what the
//! `seedmix-cli` binary is built from; none of them are consulted by the
//! core itself.

/// Deviation assessment for finished blends
pub mod assessment;

/// Ingredient catalog: built-in feed table plus custom entries
pub mod catalog;

/// Default target, max parts, and assessment thresholds
pub mod constants;

/// The combined optimize-and-quantize operation
pub mod engine;

/// Error types for blending, catalog, and storage
pub mod errors;

/// Nutrient profiles, ingredients, and blend results
pub mod models;

/// Continuous blend proportion optimizer (linear programming)
pub mod optimizer;

/// Integer ratio quantizer
pub mod quantizer;

/// Session state persistence across runs
pub mod session;

pub use engine::{compute_blend, compute_blend_sync};
pub use errors::{BlendError, CatalogError, StorageError};
pub use models::{BlendResult, Ingredient, NutrientProfile};
