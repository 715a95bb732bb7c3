use clap::{ArgGroup, Subcommand};
use quire::layout::presets::{DEFAULT_PAPER, DEFAULT_TRIM};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum LayoutCommand {
    /// Compute page margins, gutter, spine and cover size
    #[command(group(ArgGroup::new("page_source").required(true).args(["pages", "manuscript"])))]
    Compute {
        /// Trim size key
        #[arg(long, default_value = DEFAULT_TRIM)]
        trim: String,
        /// Paper stock key
        #[arg(long, default_value = DEFAULT_PAPER)]
        paper: String,
        /// Page count
        #[arg(long)]
        pages: Option<u32>,
        /// Estimate the page count from a manuscript
        #[arg(long)]
        manuscript: Option<PathBuf>,
        /// Body font size used for the page estimate
        #[arg(long, default_value_t = 11.0)]
        font_size: f64,
        /// Add 0.125in bleed to the cover
        #[arg(long)]
        bleed: bool,
        /// Gutter width in inches (default: suggested from page count)
        #[arg(long)]
        gutter: Option<f64>,
        /// Also show dimensions in millimeters
        #[arg(long)]
        mm: bool,
    },
    /// Compute the full wrap-cover and spine size
    Cover {
        /// Page count
        #[arg(long)]
        pages: u32,
        /// Trim size key
        #[arg(long, default_value = DEFAULT_TRIM)]
        trim: String,
        /// Paper stock key
        #[arg(long, default_value = DEFAULT_PAPER)]
        paper: String,
        /// Add 0.125in bleed on every edge
        #[arg(long)]
        bleed: bool,
    },
    /// List trim sizes and paper stocks
    Presets,
}
