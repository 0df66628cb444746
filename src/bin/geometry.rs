//! Geometry document CLI
//!
//! Validates, normalizes, and inspects wire-format geometry files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use json_geometry::GeometryDocument;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geometry")]
#[command(about = "Validate and inspect JSON geometry documents")]
struct Cli {
    /// Validate against this schema file instead of the bundled schema
    #[arg(short, long)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a geometry file against the schema
    Validate {
        /// File to validate
        file: PathBuf,
    },

    /// Rewrite a geometry file with canonical kind ordering and indentation
    Normalize {
        /// Input file
        input: PathBuf,
        /// Output file
        output: PathBuf,
    },

    /// Print per-kind object counts
    Stats {
        /// File to inspect
        file: PathBuf,
        /// Emit counts as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct DocumentStats {
    points: usize,
    lines: usize,
    segments: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut doc = match &cli.schema {
        Some(path) => GeometryDocument::with_schema_file(path),
        None => GeometryDocument::new(),
    };

    match cli.command {
        Commands::Validate { file } => {
            doc.load(&file)?;
            println!(
                "✅ {} is a valid geometry document ({} objects)",
                file.display(),
                doc.len()
            );
        }

        Commands::Normalize { input, output } => {
            doc.load(&input)?;
            doc.dump(&output)?;
            println!("Wrote {} objects to {}", doc.len(), output.display());
        }

        Commands::Stats { file, json } => {
            doc.load(&file)?;
            let stats = DocumentStats {
                points: doc.points.len(),
                lines: doc.lines.len(),
                segments: doc.segments.len(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("points:   {}", stats.points);
                println!("lines:    {}", stats.lines);
                println!("segments: {}", stats.segments);
            }
        }
    }

    Ok(())
}
