//! Core types and structures for fancy-forge

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{ForgeError, Result};

/// One target Unicode alphabet, identified by the codepoint of its capital `A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub name: String,
    pub start: u32,
}

impl StyleDefinition {
    pub fn new(name: impl Into<String>, start: u32) -> Self {
        Self {
            name: name.into(),
            start,
        }
    }
}

/// Coarse tag attached to every generated result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// The text was injected into a template
    Art,
    /// Any other composition
    Style,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Art => write!(f, "Art"),
            Category::Style => write!(f, "Style"),
        }
    }
}

/// A single generated rendering of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FancyText {
    /// Absolute iteration index; unique across a run and continuous across pages
    pub id: u64,
    pub text: String,
    pub style_name: String,
    pub category: Category,
}

/// How the command line renders a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Grid,
    Plain,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Grid => write!(f, "grid"),
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(OutputFormat::Grid),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(ForgeError::config(format!(
                "unknown output format '{}' (expected grid, plain or json)",
                other
            ))),
        }
    }
}

/// Environment variable holding the default start offset
pub const ENV_OFFSET: &str = "FANCY_FORGE_OFFSET";
/// Environment variable holding the default page size
pub const ENV_LIMIT: &str = "FANCY_FORGE_LIMIT";
/// Environment variable holding the default output format
pub const ENV_FORMAT: &str = "FANCY_FORGE_FORMAT";

/// Configuration for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub offset: u64,
    pub limit: usize,
    pub format: OutputFormat,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
            format: OutputFormat::Grid,
        }
    }
}

impl GenerationConfig {
    /// Build a configuration from `FANCY_FORGE_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GenerationConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_OFFSET) {
            config.offset = raw.trim().parse().map_err(|_| {
                ForgeError::config(format!("{} must be a non-negative integer, got '{}'", ENV_OFFSET, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_LIMIT) {
            config.limit = raw.trim().parse().map_err(|_| {
                ForgeError::config(format!("{} must be a non-negative integer, got '{}'", ENV_LIMIT, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_FORMAT) {
            config.format = raw.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert_eq!(config.limit, 50);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let lookup = lookup_from(&[(ENV_OFFSET, "100"), (ENV_LIMIT, " 20 "), (ENV_FORMAT, "JSON")]);
        let config = GenerationConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.offset, 100);
        assert_eq!(config.limit, 20);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = GenerationConfig::from_lookup(lookup_from(&[(ENV_LIMIT, "-3")])).unwrap_err();
        assert!(matches!(err, ForgeError::Config { .. }));

        let err = GenerationConfig::from_lookup(lookup_from(&[(ENV_FORMAT, "xml")])).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_fancy_text_serializes_camel_case() {
        let item = FancyText {
            id: 7,
            text: "x".to_string(),
            style_name: "Bold".to_string(),
            category: Category::Art,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["styleName"], "Bold");
        assert_eq!(json["category"], "Art");
        assert_eq!(json["id"], 7);
    }
}
