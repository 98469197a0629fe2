use std::io;
use std::path::PathBuf;

use anyhow::Context;
use car_catalog::config::RoundingMode;
use car_catalog::{CatalogConfig, Menu, SortAlgorithm, load_catalog};
use clap::Parser;
use log::info;

/// Interactive browser for a vehicle catalog stored in JSON files
#[derive(Debug, Parser)]
#[command(name = "car-catalog", version)]
struct Args {
    /// Catalog files, each ending in .json
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Sort algorithm used when none is chosen in the menu
    #[arg(short, long, default_value = "MERGE_SORT", value_parser = parse_algorithm)]
    algorithm: SortAlgorithm,

    /// Decimal places kept in averages
    #[arg(long, default_value = "2")]
    average_scale: u32,

    /// Round average midpoints to even instead of away from zero
    #[arg(long)]
    round_half_even: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_algorithm(tag: &str) -> Result<SortAlgorithm, String> {
    tag.parse::<SortAlgorithm>().map_err(|err| err.to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let rounding = if args.round_half_even {
        RoundingMode::HalfEven
    } else {
        RoundingMode::HalfUp
    };
    let config = CatalogConfig::builder()
        .default_algorithm(args.algorithm)
        .average_scale(args.average_scale)
        .rounding(rounding)
        .build();

    let catalog = load_catalog(&args.files, config).with_context(|| {
        format!("Failed to load catalog from {} file(s)", args.files.len())
    })?;
    info!("Starting menu over {} car(s)", catalog.len());

    let stdin = io::stdin();
    let mut menu = Menu::new(catalog, stdin.lock(), io::stdout());
    menu.run().context("Menu terminated on an I/O error")?;

    Ok(())
}
