#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use guide_core::{AssetManifest, GuideConfig};
use tracing_subscriber::EnvFilter;

/// Global settings, set once from the command line
static SETTINGS: OnceLock<GuideConfig> = OnceLock::new();

/// Global asset root, set once from the command line
static ASSET_ROOT: OnceLock<PathBuf> = OnceLock::new();

/// Get the loaded guide settings (defaults when nothing was loaded)
pub fn get_settings() -> GuideConfig {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Get the directory images are read from
pub fn get_asset_root() -> PathBuf {
    ASSET_ROOT.get().cloned().unwrap_or_else(|| PathBuf::from("public"))
}

/// 분리배출 가이드 - Recycling guide
#[derive(Parser, Debug)]
#[command(name = "sseudam-guide")]
#[command(about = "Recycling guide - how to separate waste by material")]
struct Args {
    /// Directory the page's /Guide, /images and /icons paths are read from
    #[arg(short, long, default_value = "public")]
    assets: PathBuf,

    /// JSON file overriding the title or material images
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = match args.config {
        Some(ref path) => GuideConfig::load(path).unwrap_or_else(|e| {
            tracing::error!("Failed to load config {:?}: {}, using defaults", path, e);
            GuideConfig::default()
        }),
        None => GuideConfig::default(),
    };

    // Already validated by load(); a default config cannot fail here.
    let catalog = settings.catalog().unwrap_or_default();
    let missing = AssetManifest::for_catalog(&catalog).report_missing(&args.assets);
    if missing > 0 {
        tracing::warn!("{} guide asset(s) missing under {:?}", missing, args.assets);
    }

    let title = settings.title.clone();
    let _ = SETTINGS.set(settings);
    let _ = ASSET_ROOT.set(args.assets.clone());

    tracing::info!("Starting '{}' with assets from {:?}", title, args.assets);

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
