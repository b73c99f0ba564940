use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::engine::config::{CompletionSettings, ConfigError, EngineConfig};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "action-snippets",
    version,
    about = "Snippet and flag completions for action-based test scripts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: action-snippets.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile every catalog action into snippets
    Snippets {
        /// Catalog file (.json, .yaml or .yml)
        #[arg(long)]
        catalog: String,

        /// Output format: console, json, yaml (default from config, else console)
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show action and flag completions at a cursor position
    Complete {
        /// Catalog file (.json, .yaml or .yml)
        #[arg(long)]
        catalog: String,

        /// Script document to complete in
        #[arg(long)]
        document: String,

        /// Zero-based line of the cursor
        #[arg(long)]
        line: usize,

        /// Zero-based character column of the cursor
        #[arg(long)]
        column: usize,
    },

    /// Resolve the action typed on a line to its catalog key
    Resolve {
        /// Catalog file (.json, .yaml or .yml)
        #[arg(long)]
        catalog: String,

        /// Line text, e.g. "click on element"
        #[arg(long)]
        text: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `action-snippets.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub completion: CompletionSettings,

    #[serde(default)]
    pub snippets: SnippetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetsConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for SnippetsConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
        }
    }
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("action-snippets.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed config '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Compile the completion section of the config into an `EngineConfig`.
pub fn build_engine_config(config: &AppConfig) -> Result<EngineConfig, ConfigError> {
    EngineConfig::from_settings(&config.completion)
}
