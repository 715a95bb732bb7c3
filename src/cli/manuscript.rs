use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ManuscriptCommand {
    /// Classify a manuscript into content blocks
    Parse {
        /// Path to the manuscript (.txt, .md or .html)
        file: PathBuf,
        /// Do not merge subtitle lines into chapter headings
        #[arg(long)]
        no_merge: bool,
        /// Keep doubled chapter labels as written
        #[arg(long)]
        raw_headings: bool,
    },
    /// Show the detected headings
    Outline {
        /// Path to the manuscript
        file: PathBuf,
        /// Maximum heading level to display
        #[arg(long)]
        depth: Option<u8>,
    },
    /// Show word, sentence and structure counts
    Stats {
        /// Path to the manuscript
        file: PathBuf,
        /// Body font size used for the page estimate
        #[arg(long, default_value_t = 11.0)]
        font_size: f64,
    },
}
