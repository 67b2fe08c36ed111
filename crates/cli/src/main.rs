use anyhow::{bail, Context, Result};
use catalog::{parser, Attribute, BreedCatalog, RawAttributeRecord};
use clap::{Parser, Subcommand};
use colored::Colorize;
use presenter::{Presenter, RecommendationResult};
use rand::Rng;
use recommender::{ModelContext, RecommendationEngine};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// BreedMatch - Dog Breed Recommendation Engine
#[derive(Parser)]
#[command(name = "breed-match")]
#[command(about = "Dog breed recommendations from group classification and similarity search")]
#[command(long_about = None)]
struct Cli {
    /// Path to the breed catalog JSON file
    #[arg(short, long, default_value = "data/breeds.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend breeds for a preferences file
    Recommend {
        /// JSON file with the eleven preference attributes
        #[arg(long)]
        preferences: PathBuf,

        /// Number of similar breeds / predictions to return
        #[arg(long, default_value = "5")]
        top_k: usize,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog breeds
    Breeds,

    /// Show feature columns, vocabularies and numeric ranges
    Features,

    /// Show model information
    ModelInfo,

    /// Print an example preferences file
    Example,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            preferences,
            top_k,
            json,
        } => handle_recommend(&cli.catalog, &preferences, top_k, json)?,
        Commands::Breeds => handle_breeds(&cli.catalog)?,
        Commands::Features => handle_features(&cli.catalog)?,
        Commands::ModelInfo => handle_model_info(&cli.catalog)?,
        Commands::Example => handle_example()?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&cli.catalog, requests, concurrent).await?,
    }

    Ok(())
}

/// Load the catalog and build the engine (one-time bootstrap).
///
/// Progress goes to stderr so `--json` output stays clean.
fn load_engine(catalog_path: &Path) -> Result<RecommendationEngine> {
    eprintln!("Loading breed catalog from {}...", catalog_path.display());
    let start = Instant::now();
    let catalog =
        BreedCatalog::load_from_file(catalog_path).context("Failed to load breed catalog")?;
    let context = ModelContext::build(catalog).context("Failed to build model context")?;
    eprintln!(
        "{} Loaded {} breeds in {:?}",
        "✓".green(),
        context.len(),
        start.elapsed()
    );
    Ok(RecommendationEngine::new(Arc::new(context)))
}

/// Handle the 'recommend' command
fn handle_recommend(catalog: &Path, preferences: &Path, top_k: usize, json: bool) -> Result<()> {
    let preferences =
        parser::parse_preferences(preferences).context("Failed to read preferences")?;
    let engine = load_engine(catalog)?;

    let raw = engine
        .recommend(&preferences, top_k)
        .context("Recommendation request rejected")?;
    let result = Presenter::new().present(&raw, engine.context().entries());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_recommendation(&result);
    }
    Ok(())
}

/// Handle the 'breeds' command
fn handle_breeds(catalog_path: &Path) -> Result<()> {
    let catalog =
        BreedCatalog::load_from_file(catalog_path).context("Failed to load breed catalog")?;

    println!("{}", format!("{} breeds:", catalog.len()).bold().blue());
    for breed in catalog.breeds() {
        println!(
            "  {} {} [{}, {}]",
            "•".green(),
            breed.name,
            breed.group(),
            breed.size()
        );
    }
    Ok(())
}

/// Handle the 'features' command
fn handle_features(catalog: &Path) -> Result<()> {
    let engine = load_engine(catalog)?;
    let info = engine.context().codec().feature_info();

    println!("{}", "Feature columns:".bold().blue());
    for (idx, column) in info.feature_columns.iter().enumerate() {
        println!("  {:>2}. {}", idx + 1, column);
    }

    println!("{}", "Categorical values:".bold().blue());
    for (column, values) in &info.categorical_values {
        println!("  {} {}: {}", "•".green(), column, values.join(", "));
    }

    println!("{}", "Numeric ranges:".bold().blue());
    for column in &info.numeric_columns {
        println!("  {} {}: {} - {}", "•".cyan(), column.name, column.min, column.max);
    }
    Ok(())
}

/// Handle the 'model-info' command
fn handle_model_info(catalog: &Path) -> Result<()> {
    let engine = load_engine(catalog)?;
    let info = engine.engine_info();

    println!("{}", "Model information:".bold().blue());
    println!("  Breeds: {}", info.breed_count);
    println!("  Groups: {}", info.groups.join(", "));
    println!("  Feature dimension: {}", info.features.feature_columns.len());
    for model in &info.models {
        println!("  {} {}: {}", "•".green(), model.name, model.description);
    }
    Ok(())
}

/// Handle the 'example' command
fn handle_example() -> Result<()> {
    let example = RawAttributeRecord::new()
        .with(Attribute::Size, "Medium")
        .with(Attribute::ExerciseRequirements, 2.0)
        .with(Attribute::GoodWithChildren, "Yes")
        .with(Attribute::IntelligenceRating, 7)
        .with(Attribute::TrainingDifficulty, 3)
        .with(Attribute::SheddingLevel, "Moderate")
        .with(Attribute::HealthIssuesRisk, "Low")
        .with(Attribute::Type, "Herding")
        .with(Attribute::FriendlyRating, 8)
        .with(Attribute::LifeSpan, 12)
        .with(Attribute::AverageWeight, 20);

    // serde_json::Value sorts keys, which keeps the output stable
    let value = serde_json::to_value(&example)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: &Path, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let engine = Arc::new(load_engine(catalog)?);
    let presenter = Arc::new(Presenter::new());

    let workload: Vec<RawAttributeRecord> =
        (0..requests).map(|_| random_preferences(&engine)).collect();
    info!(
        "Running {} requests with concurrency {}",
        requests, concurrent
    );

    let limiter = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    let mut handles = vec![];
    for preferences in workload {
        let engine = engine.clone();
        let presenter = presenter.clone();
        let limiter = limiter.clone();
        let handle = tokio::spawn(async move {
            let _permit = limiter.acquire_owned().await?;
            tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                let raw = engine.recommend(&preferences, engine.default_top_k())?;
                presenter.present(&raw, engine.context().entries());
                Ok::<_, anyhow::Error>(start.elapsed())
            })
            .await?
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / (timings.len() as u32);
    let percentile = |p: f64| {
        let idx = ((timings.len() as f64 * p) as usize).min(timings.len() - 1);
        timings[idx]
    };
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Random preferences drawn from the engine's vocabulary and plausible ranges
fn random_preferences(engine: &RecommendationEngine) -> RawAttributeRecord {
    let mut rng = rand::rng();
    let vocabulary = engine.context().codec().vocabulary();
    let mut record = RawAttributeRecord::new();

    for attr in Attribute::ALL {
        if attr.is_categorical() {
            let classes = vocabulary.classes(attr);
            if !classes.is_empty() {
                let pick = &classes[rng.random_range(0..classes.len())];
                record.insert(attr, pick.as_str());
            }
            continue;
        }

        let value = match attr {
            Attribute::ExerciseRequirements => (rng.random_range(1..=6) as f64) * 0.5,
            Attribute::LifeSpan => rng.random_range(8..=16) as f64,
            Attribute::AverageWeight => rng.random_range(3..=70) as f64,
            _ => rng.random_range(1..=10) as f64,
        };
        record.insert(attr, value);
    }
    record
}

/// Format and print a recommendation
fn print_recommendation(result: &RecommendationResult) {
    let breed = &result.breed;
    println!("{}", "Best match:".bold().blue());
    println!(
        "  {} ({}, {}) - {}% compatible",
        breed.name.bold(),
        breed.breed_group,
        breed.size,
        result.compatibility_score.to_string().green()
    );
    if let Some(description) = &breed.description {
        println!("  {}", description);
    }

    println!("{}", "Why:".bold().blue());
    for reason in &result.match_reasons {
        println!("  {} {}", "•".green(), reason);
    }

    println!("{}", "Top predictions:".bold().blue());
    for (idx, prediction) in result.top_predictions.iter().enumerate() {
        println!(
            "  {}. {} - {}%",
            (idx + 1).to_string().green(),
            prediction.name,
            prediction.score
        );
    }

    if !result.similar_breeds.is_empty() {
        println!("{}", "Similar breeds:".bold().blue());
        for similar in &result.similar_breeds {
            println!(
                "  {} {} - {}%",
                "•".cyan(),
                similar.breed,
                similar.similarity_score
            );
        }
    }
}
