use clap::Parser;
use simrec_core::{filter_by_categories, sort_results, Error, Recommender, SortMode};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Similarity-matrix title recommender
#[derive(Parser, Debug)]
#[command(name = "simrec")]
#[command(about = "Recommend items similar to a title", long_about = None)]
struct Args {
    /// Query title (case-insensitive)
    title: Option<String>,

    /// Path to the catalog JSON artifact
    #[arg(long, default_value = "./data/catalog.json")]
    catalog: PathBuf,

    /// Path to the similarity matrix JSON artifact
    #[arg(long, default_value = "./data/matrix.json")]
    matrix: PathBuf,

    /// Load a combined bincode snapshot instead of the JSON artifacts
    #[arg(long, conflicts_with_all = ["catalog", "matrix"])]
    snapshot: Option<PathBuf>,

    /// Number of recommendations to return
    #[arg(short = 'n', long, default_value_t = 5)]
    top_n: usize,

    /// Keep only results in this category (repeatable)
    #[arg(short, long)]
    category: Vec<String>,

    /// Sort order: similarity, rating, or popularity
    #[arg(long, default_value = "similarity")]
    sort: String,

    /// List all catalog titles and exit
    #[arg(long)]
    list_titles: bool,

    /// List all catalog categories and exit
    #[arg(long)]
    list_categories: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let engine: Recommender = match &args.snapshot {
        Some(path) => simrec_loader::load_from_snapshot(path)?,
        None => simrec_loader::load_recommender(&args.catalog, &args.matrix)?,
    };
    info!(items = engine.catalog().len(), "catalog loaded");

    if args.list_titles {
        for title in engine.catalog().all_titles() {
            println!("{title}");
        }
        return Ok(());
    }

    if args.list_categories {
        for category in engine.catalog().all_categories() {
            println!("{category}");
        }
        return Ok(());
    }

    let Some(title) = &args.title else {
        anyhow::bail!("no query title given (or pass --list-titles / --list-categories)");
    };

    let sort_mode = match args.sort.as_str() {
        "similarity" => SortMode::Similarity,
        "rating" => SortMode::Rating,
        "popularity" => SortMode::Popularity,
        other => anyhow::bail!("unknown sort mode: {other}"),
    };

    let results = match engine.recommend(title, args.top_n) {
        Ok(results) => results,
        // Unknown title is a user mistake, not a failure.
        Err(Error::TitleNotFound(t)) => {
            println!("Title not found: {t}. Try --list-titles.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let results = filter_by_categories(&results, &args.category);
    let results = sort_results(&results, sort_mode);

    if results.is_empty() {
        println!("No recommendations match the selected categories.");
        return Ok(());
    }

    for (rank, rec) in results.iter().enumerate() {
        println!("{}. {} (score {:.3})", rank + 1, rec.title, rec.score);
        match rec.rating {
            Some(rating) => println!("   rating: {rating}"),
            None => println!("   rating: n/a"),
        }
        if !rec.categories.is_empty() {
            println!("   categories: {}", rec.categories.join(", "));
        }
        if !rec.detail_url.is_empty() {
            println!("   {}", rec.detail_url);
        }
    }

    Ok(())
}
