use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// Serializable settings (config file section)
// ============================================================================

/// Markers of the scripting language's flag-list syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxConfig {
    /// Sigil that opens a parameter list
    #[serde(default = "default_opener")]
    pub flag_list_opener: String,

    /// Token that introduces a single flag
    #[serde(default = "default_introducer")]
    pub flag_introducer: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            flag_list_opener: default_opener(),
            flag_introducer: default_introducer(),
        }
    }
}

/// Completion settings as they appear in the YAML config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default)]
    pub syntax: SyntaxConfig,

    /// Pattern whose first match on a line is the typed action name
    #[serde(default = "default_action_pattern")]
    pub action_pattern: String,

    /// Section in which full action completions are offered
    #[serde(default = "default_section")]
    pub section: String,

    /// Known section annotations (`@Name` lines)
    #[serde(default = "default_annotations")]
    pub annotations: Vec<String>,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            syntax: SyntaxConfig::default(),
            action_pattern: default_action_pattern(),
            section: default_section(),
            annotations: default_annotations(),
        }
    }
}

// Serde default helpers
fn default_opener() -> String { "::".to_string() }
fn default_introducer() -> String { "--".to_string() }
fn default_action_pattern() -> String { r"^\s*[A-Za-z]+(?:[ \t]+[A-Za-z]+)*".to_string() }
fn default_section() -> String { "Steps".to_string() }
fn default_annotations() -> Vec<String> {
    vec!["Steps".to_string(), "Setup".to_string(), "Teardown".to_string()]
}

// ============================================================================
// Compiled, immutable engine configuration
// ============================================================================

/// Everything a completion request needs besides the catalog.
///
/// Built once from `CompletionSettings` and passed by reference into every
/// request. Never mutated; to change settings, build a new value.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub syntax: SyntaxConfig,
    pub action_pattern: Regex,

    /// Flag-list opener followed eventually by the flag introducer
    pub flag_list_pattern: Regex,

    pub section: String,
    pub annotations: Vec<String>,
}

impl EngineConfig {
    pub fn from_settings(settings: &CompletionSettings) -> Result<Self, ConfigError> {
        let action_pattern = Regex::new(&settings.action_pattern).map_err(|source| {
            ConfigError::InvalidPattern {
                pattern: settings.action_pattern.clone(),
                source,
            }
        })?;

        let flag_list_source = format!(
            "{}.*{}",
            regex::escape(&settings.syntax.flag_list_opener),
            regex::escape(&settings.syntax.flag_introducer)
        );
        let flag_list_pattern =
            Regex::new(&flag_list_source).map_err(|source| ConfigError::InvalidPattern {
                pattern: flag_list_source.clone(),
                source,
            })?;

        Ok(Self {
            syntax: settings.syntax.clone(),
            action_pattern,
            flag_list_pattern,
            section: settings.section.clone(),
            annotations: settings.annotations.clone(),
        })
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    /// A configured regular expression does not compile
    InvalidPattern { pattern: String, source: regex::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid pattern '{}': {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPattern { source, .. } => Some(source),
        }
    }
}
