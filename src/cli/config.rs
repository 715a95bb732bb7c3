use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a config file with every setting at its default
    Init {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Book title
        #[arg(long)]
        title: Option<String>,
        /// Author name
        #[arg(long)]
        author: Option<String>,
    },
    /// Load, validate and show a config file
    Show {
        /// Path to the YAML config
        file: PathBuf,
    },
}
