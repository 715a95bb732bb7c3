pub mod book;
pub mod config;
pub mod layout;
pub mod manuscript;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "quire",
    version,
    about = "Structure raw manuscripts and compute print layout for books"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Resource,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Resource {
    /// Manuscript operations: parse, outline, stats
    Manuscript {
        #[command(subcommand)]
        command: manuscript::ManuscriptCommand,
    },
    /// Print layout: compute, cover, presets
    Layout {
        #[command(subcommand)]
        command: layout::LayoutCommand,
    },
    /// Book configuration files: init, show
    Config {
        #[command(subcommand)]
        command: config::ConfigCommand,
    },
    /// Whole-book operations: assemble
    Book {
        #[command(subcommand)]
        command: book::BookCommand,
    },
}
