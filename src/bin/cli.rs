// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyscad CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use polyscad::dice::{Die, Dimple};
use polyscad::{encode, OutputConfig, Writer};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "polyscad")]
#[command(about = "Polyscad - write OpenSCAD module trees from typed Rust models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./polyscad.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the dice model
    Dice {
        /// Width of each face
        #[arg(long, default_value = "60")]
        width: f64,

        /// Depth of each dimple
        #[arg(long, default_value = "2")]
        depth: f64,

        /// Diameter of each dimple at the face
        #[arg(long, default_value = "10")]
        diameter: f64,

        /// Output directory (overrides the configuration)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Print the top-level file instead of writing
        #[arg(long, conflicts_with = "json")]
        print: bool,

        /// Print the encoded call tree as JSON instead of writing
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Dice {
            width,
            depth,
            diameter,
            out,
            print,
            json,
        } => {
            let config = load_config(cli.config.as_ref())?;
            let die = Die {
                dimple: Dimple::new(depth, diameter),
                width,
                ..Default::default()
            };
            dice_command(&die, &config, out, print, json, cli.verbose)?;
        }
        Commands::Version => {
            println!("Polyscad v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<OutputConfig> {
    match path {
        Some(path) => OutputConfig::from_file(path)?.with_env_overrides(),
        None => OutputConfig::load(),
    }
}

fn dice_command(
    die: &Die,
    config: &OutputConfig,
    out: Option<PathBuf>,
    print: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let start = std::time::Instant::now();
    let function = encode(die).context("Failed to encode die")?;

    if verbose {
        println!("Encoded in {:.2?}", start.elapsed());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&function)?);
        return Ok(());
    }

    let writer = Writer::new(config);
    if print {
        print!("{}", function.content_with_extension(writer.extension())?);
        return Ok(());
    }

    let output_dir = out.unwrap_or_else(|| config.output_dir.clone());
    writer
        .write(&function, &output_dir)
        .with_context(|| format!("Failed to write die to {}", output_dir.display()))?;

    let module_name = function.module_name.as_deref().unwrap_or_default();
    println!(
        "{} {}",
        "Wrote".green().bold(),
        output_dir
            .join(format!("{}.{}", module_name, writer.extension()))
            .display()
            .to_string()
            .cyan()
    );

    Ok(())
}
