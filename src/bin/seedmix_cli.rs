// ABOUTME: Seedmix CLI - computes feed mixes and manages the ingredient selection
// ABOUTME: Presentation surface over the blend core; selection and target persist across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors
//!
//! Usage:
//! ```bash
//! # Pick ingredients, then compute the mix
//! seedmix-cli enable corn "white peas" safflower
//! seedmix-cli mix
//!
//! # One-off run with a different target and bound
//! seedmix-cli mix --protein 16 --fat 5 --fiber 4 --max-parts 6
//!
//! # Browse and extend the catalog
//! seedmix-cli foods list --search pea
//! seedmix-cli foods add --name "Popcorn" --protein 12 --fat 4.5 --fiber 2.2
//!
//! # Adjust the saved target, or start over
//! seedmix-cli target set --protein 15 --fat 4 --fiber 4.5
//! seedmix-cli reset
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use seedmix::assessment::{assess, DeviationSeverity, NutrientAssessment};
use seedmix::catalog::Catalog;
use seedmix::compute_blend;
use seedmix::models::{BlendResult, Ingredient, NutrientProfile};
use seedmix::session::{SessionState, SessionStore};

#[derive(Parser)]
#[command(
    name = "seedmix-cli",
    about = "Feed blend optimizer for pigeon seed mixes",
    long_about = "Computes the best integer-part mix of selected ingredients for a target \
                  nutrient profile. Selection, target, and custom foods persist between runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the mix for the currently enabled ingredients
    Mix(MixArgs),
    /// Browse and manage the ingredient catalog
    Foods {
        #[command(subcommand)]
        command: FoodsCommand,
    },
    /// Enable ingredients for the mix
    Enable {
        /// Ingredient names (case-insensitive)
        names: Vec<String>,
    },
    /// Disable ingredients
    Disable {
        /// Ingredient names (case-insensitive)
        names: Vec<String>,
    },
    /// Show or change the saved target profile
    Target {
        #[command(subcommand)]
        command: TargetCommand,
    },
    /// Discard all saved state (target, selection, custom foods)
    Reset,
}

#[derive(Args)]
struct MixArgs {
    /// Override the target protein percentage for this run
    #[arg(long)]
    protein: Option<f64>,
    /// Override the target fat percentage for this run
    #[arg(long)]
    fat: Option<f64>,
    /// Override the target fiber percentage for this run
    #[arg(long)]
    fiber: Option<f64>,
    /// Override the maximum parts per ingredient for this run
    #[arg(long)]
    max_parts: Option<u32>,
}

#[derive(Subcommand)]
enum FoodsCommand {
    /// List catalog ingredients and their selection state
    List {
        /// Filter by case-insensitive substring
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a custom ingredient
    Add {
        /// Ingredient name (2-32 characters)
        #[arg(long)]
        name: String,
        /// Protein percentage (0-100)
        #[arg(long)]
        protein: f64,
        /// Fat percentage (0-100)
        #[arg(long)]
        fat: f64,
        /// Fiber percentage (0-100)
        #[arg(long)]
        fiber: f64,
    },
    /// Remove a custom ingredient
    Remove {
        /// Ingredient name (case-insensitive)
        name: String,
    },
}

#[derive(Subcommand)]
enum TargetCommand {
    /// Show the saved target profile and max parts bound
    Show,
    /// Set the saved target profile
    Set {
        /// Target protein percentage
        #[arg(long)]
        protein: f64,
        /// Target fat percentage
        #[arg(long)]
        fat: f64,
        /// Target fiber percentage
        #[arg(long)]
        fiber: f64,
        /// Maximum parts per ingredient
        #[arg(long)]
        max_parts: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let store = SessionStore::default_location().context("locating session storage")?;
    let mut state = store.load();
    let mut catalog = Catalog::with_custom(state.custom_foods.clone())
        .context("restoring custom ingredients from saved session")?;

    match cli.command {
        Command::Mix(args) => run_mix(&state, &catalog, &args).await?,
        Command::Foods { command } => match command {
            FoodsCommand::List { search } => list_foods(&catalog, &state, search.as_deref()),
            FoodsCommand::Add {
                name,
                protein,
                fat,
                fiber,
            } => {
                catalog.add_custom(Ingredient::new(name.clone(), protein, fat, fiber))?;
                state.custom_foods = catalog.custom().to_vec();
                // The catalog trims the stored name; enable that form.
                let stored = name.trim().to_owned();
                state.enable(&stored);
                store.save(&state)?;
                println!("Added '{stored}' (enabled).");
            }
            FoodsCommand::Remove { name } => {
                let removed = catalog.remove_custom(&name)?;
                state.custom_foods = catalog.custom().to_vec();
                state.disable(&removed.name);
                store.save(&state)?;
                println!("Removed '{}'.", removed.name);
            }
        },
        Command::Enable { names } => {
            update_selection(&mut state, &catalog, &names, true)?;
            store.save(&state)?;
        }
        Command::Disable { names } => {
            update_selection(&mut state, &catalog, &names, false)?;
            store.save(&state)?;
        }
        Command::Target { command } => match command {
            TargetCommand::Show => {
                let t = state.target;
                println!(
                    "Target: protein {:.2}%  fat {:.2}%  fiber {:.2}%  (max {} parts)",
                    t.protein, t.fat, t.fiber, state.max_parts
                );
            }
            TargetCommand::Set {
                protein,
                fat,
                fiber,
                max_parts,
            } => {
                validate_percentage("protein", protein)?;
                validate_percentage("fat", fat)?;
                validate_percentage("fiber", fiber)?;
                state.target = NutrientProfile::new(protein, fat, fiber);
                if let Some(max_parts) = max_parts {
                    if max_parts < 1 {
                        bail!("--max-parts must be at least 1");
                    }
                    state.max_parts = max_parts;
                }
                store.save(&state)?;
                println!("Target saved.");
            }
        },
        Command::Reset => {
            store.reset()?;
            println!("Saved state discarded; defaults restored.");
        }
    }

    Ok(())
}

async fn run_mix(state: &SessionState, catalog: &Catalog, args: &MixArgs) -> Result<()> {
    let mut target = state.target;
    if let Some(protein) = args.protein {
        validate_percentage("protein", protein)?;
        target.protein = protein;
    }
    if let Some(fat) = args.fat {
        validate_percentage("fat", fat)?;
        target.fat = fat;
    }
    if let Some(fiber) = args.fiber {
        validate_percentage("fiber", fiber)?;
        target.fiber = fiber;
    }
    let max_parts = args.max_parts.unwrap_or(state.max_parts);
    if max_parts < 1 {
        bail!("--max-parts must be at least 1");
    }

    let ingredients = state.enabled_ingredients(catalog);
    if ingredients.is_empty() {
        println!("No ingredients selected. Enable some with `seedmix-cli enable <name>...`");
        return Ok(());
    }

    let blend = compute_blend(target, ingredients, max_parts)
        .await
        .context("computing blend")?;
    print_blend(&target, &blend);
    Ok(())
}

fn print_blend(target: &NutrientProfile, blend: &BlendResult) {
    println!("Mix ({} parts total):", blend.total_parts());
    for (name, parts) in &blend.parts {
        let plural = if *parts == 1 { "" } else { "s" };
        println!("  {parts} part{plural} {name}");
    }

    println!("\nNutrition comparison:");
    println!("  {:<8} {:>10} {:>10} {:>12}", "Nutrient", "Desired", "Result", "Difference");
    let assessment = assess(target, &blend.nutrition);
    print_nutrient_row("Protein", &assessment.protein);
    print_nutrient_row("Fat", &assessment.fat);
    print_nutrient_row("Fiber", &assessment.fiber);

    for (label, nutrient) in [
        ("Protein", &assessment.protein),
        ("Fat", &assessment.fat),
        ("Fiber", &assessment.fiber),
    ] {
        match nutrient.severity {
            DeviationSeverity::WithinIdeal => {}
            DeviationSeverity::Caution => println!(
                "\nWarning: {label} is {:.1}% away from your target. Try adjusting the selection.",
                nutrient.deviation
            ),
            DeviationSeverity::NotRecommended => println!(
                "\nNot recommended: {label} is {:.1}% away from your target.",
                nutrient.deviation
            ),
        }
    }
    if assessment.is_ideal() {
        println!("\nAll nutrients are within the ideal range of your target. This is an ideal mix.");
    }
}

fn print_nutrient_row(label: &str, nutrient: &NutrientAssessment) {
    let difference = nutrient.actual - nutrient.target;
    println!(
        "  {:<8} {:>9.1}% {:>9.1}% {:>+11.1}%",
        label, nutrient.target, nutrient.actual, difference
    );
}

fn list_foods(catalog: &Catalog, state: &SessionState, search: Option<&str>) {
    let foods = match search {
        Some(query) => catalog.search(query),
        None => catalog.iter().collect(),
    };
    if foods.is_empty() {
        println!("No matching ingredients.");
        return;
    }
    println!(
        "  {:<24} {:>8} {:>6} {:>7}  {}",
        "Food", "Protein", "Fat", "Fiber", "Enabled"
    );
    for food in foods {
        let enabled = if state.is_enabled(&food.name) { "yes" } else { "" };
        println!(
            "  {:<24} {:>7.1}% {:>5.1}% {:>6.1}%  {enabled}",
            food.name, food.nutrition.protein, food.nutrition.fat, food.nutrition.fiber
        );
    }
}

fn update_selection(
    state: &mut SessionState,
    catalog: &Catalog,
    names: &[String],
    enable: bool,
) -> Result<()> {
    if names.is_empty() {
        bail!("provide at least one ingredient name");
    }
    for name in names {
        let Some(found) = catalog.get(name) else {
            bail!("no ingredient named '{name}' - see `seedmix-cli foods list`");
        };
        if enable {
            state.enable(&found.name);
            println!("Enabled {}.", found.name);
        } else {
            state.disable(&found.name);
            println!("Disabled {}.", found.name);
        }
    }
    Ok(())
}

fn validate_percentage(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        bail!("--{label} must be between 0 and 100");
    }
    Ok(())
}
