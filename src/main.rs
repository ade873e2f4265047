use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cypher_builder::config::{self, OutputFormat};
use cypher_builder::query_document::QueryDocument;

/// cypher-builder - Assemble a Cypher query from a YAML query document
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML query document
    file: PathBuf,

    /// Output format (overrides CYPHER_BUILDER_OUTPUT)
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Exit with a failure status if the query has errors
    #[arg(long)]
    strict: bool,

    /// Maximum CALL subquery nesting depth
    #[arg(long)]
    max_call_depth: Option<u32>,
}

impl From<&Cli> for config::CliOverrides {
    fn from(cli: &Cli) -> Self {
        config::CliOverrides {
            output: cli.output,
            strict: cli.strict,
            max_call_depth: cli.max_call_depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logger - defaults to WARN level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = config::ToolConfig::from_env()
        .and_then(|env_config| env_config.merge_cli((&cli).into()))
        .context("Configuration error")?;
    log::debug!("using configuration: {:?}", config);

    let document = QueryDocument::from_yaml_file(&cli.file)
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;
    document.ensure_call_depth(config.max_call_depth)?;

    let (query, error) = document.to_builder().execute();

    match config.output {
        OutputFormat::Text => {
            println!("{}", query);
            if let Some(err) = &error {
                eprintln!("{}", err);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": query,
                "error": error.as_ref().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if config.strict {
        if let Some(err) = error {
            anyhow::bail!("query has {} error(s)", err.len());
        }
    }

    Ok(())
}
