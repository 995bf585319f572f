use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pubgen")]
#[command(about = "Generate publication pages with front matter from BibTeX databases")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log extraction details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Convert every configured database into publication pages")]
    Run {
        /// Configuration file (TOML, YAML or JSON); defaults to ./pubgen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory, overriding the configuration
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Build every page but write nothing
        #[arg(long)]
        dry_run: bool,
    },

    #[command(about = "Show the entries and fields extracted from a BibTeX file")]
    Parse {
        bib: PathBuf,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Write a sample configuration file")]
    Init {
        #[arg(default_value = "pubgen.toml")]
        path: PathBuf,
    },

    #[command(about = "Generate shell completion scripts")]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
