//! Settings for JSON output and model directory checks
//!
//! Settings come from a YAML file. Priority order (highest to lowest):
//!
//! 1. Explicit path (`--config FILE` on the CLI)
//! 2. `NLU_UTILS_CONFIG` environment variable
//! 3. Defaults
//!
//! ```yaml
//! json:
//!   indent: 4
//!   ensure_ascii: true
//! model_dir:
//!   allowed_extensions: [".json", ".pkl", ".dat", ".npy"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilsError};
use crate::util::constants::{CONFIG_ENV_VAR, DEFAULT_JSON_INDENT, MODEL_FILE_EXTENSIONS};

/// Top-level settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Formatting for JSON output
    #[serde(default)]
    pub json: JsonOptions,

    /// What counts as a model directory
    #[serde(default)]
    pub model_dir: ModelDirPolicy,
}

/// JSON formatting options
///
/// `indent: None` emits compact JSON, `Some(0)` emits one value per line
/// without indentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonOptions {
    #[serde(default = "default_indent")]
    pub indent: Option<usize>,

    /// Escape every non-ASCII character as `\uXXXX`
    #[serde(default)]
    pub ensure_ascii: bool,
}

fn default_indent() -> Option<usize> {
    Some(DEFAULT_JSON_INDENT)
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            ensure_ascii: false,
        }
    }
}

impl JsonOptions {
    /// Single-line output: `{"a": [1, 2]}`
    pub fn compact() -> Self {
        Self {
            indent: None,
            ensure_ascii: false,
        }
    }

    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_ensure_ascii(mut self, ensure_ascii: bool) -> Self {
        self.ensure_ascii = ensure_ascii;
        self
    }
}

/// Allow-list of file extensions a model directory may hold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDirPolicy {
    /// Extensions with their leading dot, matched case-sensitively
    #[serde(default = "default_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    MODEL_FILE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

impl Default for ModelDirPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: default_extensions(),
        }
    }
}

impl ModelDirPolicy {
    /// Check a file extension (with leading dot, `""` when absent)
    pub fn allows(&self, extension: &str) -> bool {
        self.allowed_extensions.iter().any(|allowed| allowed == extension)
    }
}

impl Settings {
    /// Load settings from a YAML file
    ///
    /// Returns error if the file is missing or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| UtilsError::Config {
            reason: format!("Failed to read settings file '{}': {}", path.display(), e),
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| UtilsError::Config {
            reason: format!("Failed to parse settings: {}", e),
        })
    }

    /// Load from `NLU_UTILS_CONFIG` if set, defaults otherwise
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Resolve settings with the CLI priority order
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.json.indent, Some(2));
        assert!(!settings.json.ensure_ascii);
        assert_eq!(
            settings.model_dir.allowed_extensions,
            vec![".json", ".pkl", ".dat"]
        );
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let settings = Settings::from_yaml("json:\n  ensure_ascii: true\n").unwrap();
        assert!(settings.json.ensure_ascii);
        assert_eq!(settings.json.indent, Some(2));
        assert!(settings.model_dir.allows(".pkl"));
    }

    #[test]
    fn null_indent_means_compact() {
        let settings = Settings::from_yaml("json:\n  indent: null\n").unwrap();
        assert_eq!(settings.json.indent, None);
    }

    #[test]
    fn custom_extensions_replace_defaults() {
        let yaml = r#"
            model_dir:
              allowed_extensions: [".npy"]
        "#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert!(settings.model_dir.allows(".npy"));
        assert!(!settings.model_dir.allows(".json"));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = Settings::from_yaml("json: [unclosed").unwrap_err();
        assert_eq!(err.code(), "NLU-030");
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "json:\n  indent: 4\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.json.indent, Some(4));
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Settings::load(Path::new("/nonexistent/settings.yaml")).unwrap_err();
        assert!(matches!(err, UtilsError::Config { .. }));
    }

    #[test]
    fn policy_is_case_sensitive() {
        let policy = ModelDirPolicy::default();
        assert!(policy.allows(".json"));
        assert!(!policy.allows(".JSON"));
        assert!(!policy.allows(""));
    }
}
