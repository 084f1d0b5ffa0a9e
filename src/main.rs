#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use trip_core::{SiteConfig, TripSession};

/// Birthday Trip - itinerary micro-site
#[derive(Parser, Debug)]
#[command(name = "birthday-trip")]
#[command(about = "Birthday trip itinerary with a guess-the-destination intro")]
struct Args {
    /// JSON site config (answer, marker layout, asset dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed seed for the background diamond layout
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of background diamonds
    #[arg(short, long)]
    markers: Option<usize>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("birthday_trip={default_level},trip_core={default_level}"))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(count) = args.markers {
        config.marker_count = i64::try_from(count).context("marker count out of range")?;
    }

    // Markers are drawn once here, before the first render.
    let session = TripSession::new(&config).context("invalid site config")?;

    tracing::info!(
        markers = session.markers().len(),
        seed = ?config.seed,
        "Starting birthday trip"
    );

    // Phone-sized window
    let window_width = 440.0;
    let window_height = 860.0;

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(trip_core::CHROME.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(session)
        .launch(app::App);

    Ok(())
}
