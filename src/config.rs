use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};
use thiserror::Error;
use validator::Validate;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// How the command line tool prints a finished query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The query text only; errors go to stderr
    #[default]
    Text,
    /// A JSON object with `query` and `error` fields
    Json,
}

#[derive(Debug, Error)]
#[error("unknown output format '{0}' (expected 'text' or 'json')")]
pub struct UnknownOutputFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Command line tool configuration with validation
#[derive(Clone, Debug, Validate, Serialize, Deserialize)]
pub struct ToolConfig {
    pub output: OutputFormat,

    /// Exit with a failure status when the query has errors
    pub strict: bool,

    /// Maximum CALL subquery nesting accepted from a query document
    #[validate(range(
        min = 1,
        max = 64,
        message = "Max CALL depth must be between 1 and 64"
    ))]
    pub max_call_depth: u32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            strict: false,
            max_call_depth: 8,
        }
    }
}

impl ToolConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            output: parse_env_var("CYPHER_BUILDER_OUTPUT", "text")?,
            strict: parse_env_var("CYPHER_BUILDER_STRICT", "false")?,
            max_call_depth: parse_env_var("CYPHER_BUILDER_MAX_CALL_DEPTH", "8")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of this configuration
    pub fn merge_cli(mut self, cli: CliOverrides) -> Result<Self, ConfigError> {
        if let Some(output) = cli.output {
            self.output = output;
        }
        if cli.strict {
            self.strict = true;
        }
        if let Some(depth) = cli.max_call_depth {
            self.max_call_depth = depth;
        }

        self.validate()?;
        Ok(self)
    }
}

/// Settings given on the command line; unset fields keep the environment value
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    pub output: Option<OutputFormat>,
    pub strict: bool,
    pub max_call_depth: Option<u32>,
}

/// Parse an environment variable with a default value
fn parse_env_var<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}
