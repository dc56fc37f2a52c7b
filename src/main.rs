use anyhow::Context;
use catalog_scraper::analysis;
use catalog_scraper::config::Config;
use catalog_scraper::fetcher::HttpFetcher;
use catalog_scraper::logging;
use catalog_scraper::pipeline;
use catalog_scraper::storage::Dataset;
use catalog_scraper::types::Product;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "catalog_scraper")]
#[command(about = "E-commerce catalog scraper and price/rating analyzer")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the configured page and print the analysis views
    Scrape {
        /// Path to the TOML config file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
        /// Override the configured target URL
        #[arg(long)]
        url: Option<String>,
        /// Which analysis view to print
        #[arg(long, value_enum, default_value = "all")]
        view: View,
        /// Emit the views as JSON instead of text tables
        #[arg(long)]
        json: bool,
        /// Maximum number of product rows to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Print the effective configuration
    ShowConfig {
        /// Path to the TOML config file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Distribution,
    Trend,
    TopRated,
    Categories,
    All,
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape {
            config,
            url,
            view,
            json,
            limit,
        } => {
            let mut config = Config::load(&config)?;
            if let Some(url) = url {
                config.url = url;
            }
            run_scrape(&config, view, json, limit)
        }
        Commands::ShowConfig { config } => {
            let config = Config::load(&config)?;
            println!("{:#?}", config);
            Ok(())
        }
    }
}

fn run_scrape(config: &Config, view: View, json: bool, limit: usize) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(Duration::from_secs(config.timeout_seconds))
        .context("failed to build HTTP client")?;
    let mut dataset = Dataset::new();

    match pipeline::run_scrape(&fetcher, config, &mut dataset) {
        Ok(summary) => {
            info!("Scrape cycle succeeded");
            println!("\n📊 Scrape results for {}:", config.url);
            println!("   Cards found: {}", summary.total_cards);
            println!("   Products built: {}", summary.built);
            println!("   Dropped: {}", summary.dropped);
        }
        Err(e) => {
            error!("Scrape failed: {}", e);
            println!("\n⚠️  Scrape failed: {}", e);
            // Prior data (none in a fresh process) stays untouched.
            return Ok(());
        }
    }

    let snapshot = dataset.snapshot();
    print_products(&snapshot, limit);
    print_views(&snapshot, config, view, json)?;
    Ok(())
}

fn print_products(snapshot: &[Product], limit: usize) {
    println!("\n🛒 Products ({} total):", snapshot.len());
    println!("   {:<40} {:>10} {:>7}  {}", "Name", "Price", "Rating", "Category");
    for product in snapshot.iter().take(limit) {
        println!(
            "   {:<40} {:>10.2} {:>7}  {}",
            truncate(&product.name, 40),
            product.price,
            product.rating,
            product.category
        );
    }
    if snapshot.len() > limit {
        println!("   ... and {} more", snapshot.len() - limit);
    }
}

fn print_views(snapshot: &[Product], config: &Config, view: View, json: bool) -> anyhow::Result<()> {
    if matches!(view, View::Distribution | View::All) {
        match analysis::price_distribution(snapshot, config.distribution_bin_count) {
            Some(histogram) if json => println!("{}", serde_json::to_string_pretty(&histogram)?),
            Some(histogram) => {
                println!("\n💰 Price distribution:");
                for (i, count) in histogram.counts.iter().enumerate() {
                    println!(
                        "   [{:>8.2} - {:>8.2}] {}",
                        histogram.edges[i],
                        histogram.edges[i + 1],
                        "#".repeat(*count)
                    );
                }
            }
            None => println!("\n💰 Price distribution: no data"),
        }
    }

    if matches!(view, View::Trend | View::All) {
        let trend = analysis::price_trend(snapshot);
        if json {
            println!("{}", serde_json::to_string_pretty(&trend)?);
        } else {
            println!("\n📈 Average price over time:");
            for point in &trend {
                println!("   {} {:.2}", point.date, point.mean_price);
            }
        }
    }

    if matches!(view, View::TopRated | View::All) {
        let top = analysis::top_rated(snapshot, config.top_rated_count);
        if json {
            println!("{}", serde_json::to_string_pretty(&top)?);
        } else {
            println!("\n⭐ Top rated products:");
            for product in &top {
                println!("   {} {}", product.rating, truncate(&product.name, 50));
            }
        }
    }

    if matches!(view, View::Categories | View::All) {
        let categories = analysis::category_counts(snapshot);
        if json {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        } else {
            println!("\n🗂  Category distribution:");
            for entry in &categories {
                println!("   {:<30} {}", entry.category, entry.count);
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
