use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MatchError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "widget-migrate.yaml";

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `widget-migrate.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub rules: CollectRules,
    #[serde(default)]
    pub matching: MatchOptions,
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

/// Which snapshots belong to the app under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectRules {
    #[serde(default)]
    pub package_under_test: String,

    /// Packages containing this substring are launchers and never collected
    #[serde(default = "default_launcher")]
    pub launcher_package: String,

    #[serde(default = "default_excluded_prefixes")]
    pub excluded_activity_prefixes: Vec<String>,

    #[serde(default = "default_text_exceptions")]
    pub text_exceptions: Vec<TextException>,
}

impl Default for CollectRules {
    fn default() -> Self {
        Self {
            package_under_test: String::new(),
            launcher_package: default_launcher(),
            excluded_activity_prefixes: default_excluded_prefixes(),
            text_exceptions: default_text_exceptions(),
        }
    }
}

impl CollectRules {
    pub fn for_package(package_under_test: &str) -> Self {
        Self {
            package_under_test: package_under_test.to_string(),
            ..Self::default()
        }
    }
}

/// App-specific text rewrite, applied to widgets of states whose signature
/// contains `signature_contains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextException {
    pub signature_contains: String,
    pub text: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOptions {
    #[serde(default = "default_true")]
    pub use_stopwords: bool,

    /// Let Button/ImageButton sources match TextView targets
    #[serde(default)]
    pub expand_button_to_text: bool,

    #[serde(default)]
    pub weights: AttributeWeights,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            use_stopwords: true,
            expand_button_to_text: false,
            weights: AttributeWeights::default(),
        }
    }
}

/// Weight of each compared attribute in the similarity mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeWeights {
    #[serde(default = "default_weight")]
    pub resource_id: f64,
    #[serde(default = "default_weight")]
    pub text: f64,
    #[serde(default = "default_weight")]
    pub content_desc: f64,
    #[serde(default = "default_weight")]
    pub parent_text: f64,
    #[serde(default = "default_weight")]
    pub sibling_text: f64,
    #[serde(default = "default_weight")]
    pub filename: f64,
    #[serde(default = "default_weight")]
    pub neighbors: f64,
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self {
            resource_id: 1.0,
            text: 1.0,
            content_desc: 1.0,
            parent_text: 1.0,
            sibling_text: 1.0,
            filename: 1.0,
            neighbors: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleBackend {
    #[default]
    Lexical,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default)]
    pub backend: OracleBackend,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Memoize oracle answers for repeated word sequences
    #[serde(default = "default_true")]
    pub cache: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            backend: OracleBackend::Lexical,
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            cache: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    /// JSONL file receiving one event per ranking pass
    pub path: Option<String>,
}

// Serde default helpers
fn default_true() -> bool { true }
fn default_weight() -> f64 { 1.0 }
fn default_launcher() -> String { "com.android.launcher".to_string() }
fn default_excluded_prefixes() -> Vec<String> { vec!["com.facebook".to_string()] }
fn default_endpoint() -> String { "http://localhost:5000/w2v".to_string() }
fn default_timeout_ms() -> u64 { 5000 }
fn default_text_exceptions() -> Vec<TextException> {
    vec![TextException {
        signature_contains: "yelp".to_string(),
        text: "Sign up with Google".to_string(),
        replacement: "SIGN UP WITH GOOGLE".to_string(),
    }]
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> EngineConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "malformed config, using defaults");
            EngineConfig::default()
        }),
        Err(_) => EngineConfig::default(),
    }
}

/// Strict variant of [`load_config`] for callers that want to fail fast.
pub fn try_load_config(path: &str) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
        context: format!("reading {path}"),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|e| MatchError::Config(format!("{path}: {e}")))
}
