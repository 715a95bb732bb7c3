use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum BookCommand {
    /// Assemble a manuscript and config into a structured book document
    Assemble {
        /// Path to the manuscript
        file: PathBuf,
        /// Path to the YAML config
        #[arg(short, long)]
        config: PathBuf,
        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
