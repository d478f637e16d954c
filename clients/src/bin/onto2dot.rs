//! `onto2dot` — Renders an RDFS ontology as a Graphviz digraph.
//!
//! Reads a Turtle document, extracts its classes, attribute properties and
//! relations, and writes a DOT document (or the extracted model as JSON) to
//! standard output. Missing preferred-language labels are reported on
//! standard error.
//!
//! **Usage:**
//! ```
//! onto2dot --in <path> [--lang <tag>] [--format dot|json] [--escape-labels]
//! ```
//!
//! Exits 2 on usage errors and 1 if the input cannot be read or parsed or the
//! output cannot be written.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use onto2dot_extractor::{extract, ExtractorConfig, DEFAULT_LANGUAGE};
use onto2dot_render::{render_json, write_dot, RenderOptions};
use onto2dot_statements::read_turtle;
use tracing_subscriber::EnvFilter;

/// Render an RDFS ontology as a Graphviz digraph.
#[derive(Parser)]
#[command(
    name = "onto2dot",
    about = "Render an RDFS ontology in Turtle format as a Graphviz digraph"
)]
struct Args {
    /// Ontology in RDF Turtle format.
    #[arg(long = "in", value_name = "PATH")]
    input: PathBuf,

    /// Prefer labels with this language tag.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Dot)]
    format: Format,

    /// Escape markup-significant characters in labels.
    #[arg(long)]
    escape_labels: bool,
}

/// Output document kind.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Graphviz DOT.
    Dot,
    /// The extracted model as JSON.
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let statements = read_turtle(&args.input).context("Failed to load ontology")?;
    tracing::debug!(statements = statements.len(), "parsed {}", args.input.display());

    let extraction = extract(&statements, &ExtractorConfig::new(&args.lang));
    for warning in &extraction.warnings {
        tracing::warn!(role = warning.role.as_str(), "{warning}");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        Format::Dot => {
            let options = RenderOptions {
                escape_labels: args.escape_labels,
            };
            write_dot(&extraction.model, &options, &mut out)
                .context("Failed to write DOT output")?;
        }
        Format::Json => {
            let json = render_json(&extraction.model)?;
            out.write_all(json.as_bytes())
                .and_then(|()| out.flush())
                .context("Failed to write JSON output")?;
        }
    }

    Ok(())
}

/// Sends log events to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
