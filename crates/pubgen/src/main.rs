mod cli;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use colored::Colorize;
use pubgen_core::Config;
use pubgen_processor::{extract_file, DirectorySink, EntryOutcome, MemorySink, Pipeline};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const CONFIG_CANDIDATES: [&str; 3] = ["pubgen.toml", "pubgen.yaml", "pubgen.yml"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Run {
            config,
            output,
            dry_run,
        } => {
            let config_path = match config {
                Some(path) => path,
                None => find_config()?,
            };
            let mut config = Config::load(&config_path)
                .with_context(|| format!("failed to load config: {:?}", config_path))?;
            if let Some(output) = output {
                config.output_dir = output;
            }
            run(&config, dry_run)?;
        }

        Command::Parse { bib, json } => {
            let database = extract_file(&bib)
                .with_context(|| format!("failed to read citation database: {:?}", bib))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&database)?);
            } else {
                for (id, fields) in &database {
                    println!("{}", id.bold());
                    for (name, value) in fields.iter() {
                        println!("  {} = {}", name, value);
                    }
                }
                println!("{} entries", database.len());
            }
        }

        Command::Init { path } => {
            if path.exists() {
                bail!("refusing to overwrite existing file: {:?}", path);
            }
            Config::sample()
                .save(&path)
                .with_context(|| format!("failed to write config: {:?}", path))?;
            println!("Wrote sample configuration to {}", path.display());
        }

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn find_config() -> Result<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            anyhow::anyhow!("no configuration found (pass --config or run `pubgen init`)")
        })
}

fn run(config: &Config, dry_run: bool) -> Result<()> {
    let pipeline = Pipeline::new(config);

    let report = if dry_run {
        let mut sink = MemorySink::new();
        let report = pipeline.run(&mut sink, print_outcome)?;
        for filename in sink.documents().keys() {
            println!(
                "  [DRY RUN] Would write {}",
                config.output_dir.join(filename).display()
            );
        }
        report
    } else {
        let mut sink = DirectorySink::new(&config.output_dir);
        pipeline.run(&mut sink, print_outcome)?
    };

    println!("{} written, {} skipped", report.written(), report.skipped());
    Ok(())
}

fn print_outcome(outcome: &EntryOutcome) {
    match outcome {
        EntryOutcome::Written { .. } => println!("{}", outcome),
        EntryOutcome::Skipped { .. } => println!("{}", outcome.to_string().yellow()),
    }
}
