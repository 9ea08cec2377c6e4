// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod pipeline;
mod shared;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types outside of crate
pub use domain::{CandlestickPoint, TrendDirection, TrendSummary, WeighInRecord};
pub use pipeline::{SeriesWarning, TransformError, TransformResult, transform_weigh_ins};
pub use ui::WeighInApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file to load into the editor instead of the bundled sample series
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> WeighInApp {
    WeighInApp::new(cc, args)
}
