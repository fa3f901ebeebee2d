use clap::{Parser, Subcommand};
use std::path::PathBuf;

use recipe_match_engine::{MatchEngine, PantryQuery, RecipeDraft, DEFAULT_CUTOFF};

#[derive(Parser)]
#[command(name = "match-engine-cli")]
#[command(about = "Recipe Match Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database path
    #[arg(short, long, default_value = "recipes.db")]
    db: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Match pantry ingredients against stored recipes
    Match {
        /// Pantry ingredients (raw, any naming variation)
        #[arg(required = true)]
        have: Vec<String>,

        /// Fuzzy similarity cutoff in (0.0, 1.0]
        #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: f64,
    },

    /// List stored recipes
    List {
        /// Number of recipes to skip
        #[arg(long, default_value = "0")]
        skip: usize,

        /// Maximum recipes to show
        #[arg(long, default_value = "100")]
        limit: usize,
    },

    /// Import recipes from a JSON file (array of {name, ingredients, steps})
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Get store statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let engine = MatchEngine::new(&cli.db).await?;

    match cli.command {
        Commands::Match { have, cutoff } => {
            let query = PantryQuery::new(have).with_cutoff(cutoff);
            let report = engine.match_pantry(query).await?;

            println!("Pantry interpreted as: {}", report.have.join(", "));
            println!(
                "{} recipe(s) matched in {:.2}ms (cutoff {})",
                report.results.len(),
                report.latency_ms,
                report.cutoff
            );

            for m in &report.results {
                let marker = if m.full_match { "complete" } else { "partial" };
                println!("\n{} [{}]", m.name, marker);
                println!("  have: {}", m.matched.join(", "));
                if !m.missing.is_empty() {
                    println!("  need: {}", m.missing.join(", "));
                }
            }
        }

        Commands::List { skip, limit } => {
            let recipes = engine.list_recipes(skip, limit).await?;
            println!("{} recipe(s):", recipes.len());
            for recipe in &recipes {
                println!(
                    "  {}. {} ({} ingredients)",
                    recipe.id,
                    recipe.name,
                    recipe.ingredients.len()
                );
            }
        }

        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let drafts: Vec<RecipeDraft> = serde_json::from_str(&text)?;

            let mut added = 0;
            for draft in &drafts {
                if draft.name.is_empty() {
                    continue;
                }
                if engine.get_recipe_by_name(&draft.name).await?.is_some() {
                    tracing::debug!("Skipping existing recipe '{}'", draft.name);
                    continue;
                }
                engine.add_recipe(draft).await?;
                added += 1;
            }

            println!("Imported {} recipe(s) from {}", added, file.display());
        }

        Commands::Stats => {
            let stats = engine.store_stats().await?;

            println!("Store statistics:");
            println!("  Total recipes: {}", stats.total_recipes);
            println!("  Total ingredients: {}", stats.total_ingredients);

            if let Some(oldest) = stats.oldest_entry {
                println!("  Oldest entry: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
            }
            if let Some(newest) = stats.newest_entry {
                println!("  Newest entry: {}", newest.format("%Y-%m-%d %H:%M:%S"));
            }
        }
    }

    Ok(())
}
