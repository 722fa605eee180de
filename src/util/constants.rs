//! Centralized constants shared by the helpers
//!
//! Everything here is immutable and initialized once per process.

// ═══════════════════════════════════════════════════════════════
// Model Directories
// ═══════════════════════════════════════════════════════════════

/// File extensions a persisted model directory may contain (leading dot, case-sensitive)
pub const MODEL_FILE_EXTENSIONS: &[&str] = &[".json", ".pkl", ".dat"];

// ═══════════════════════════════════════════════════════════════
// Entity Record Keys
// ═══════════════════════════════════════════════════════════════

pub const ENTITY_ATTRIBUTE_START: &str = "start";
pub const ENTITY_ATTRIBUTE_END: &str = "end";
pub const ENTITY_ATTRIBUTE_VALUE: &str = "value";
pub const ENTITY_ATTRIBUTE_TYPE: &str = "type";
pub const ENTITY_ATTRIBUTE_ROLE: &str = "role";
pub const ENTITY_ATTRIBUTE_GROUP: &str = "group";

// ═══════════════════════════════════════════════════════════════
// JSON Output
// ═══════════════════════════════════════════════════════════════

/// Default pretty-print indentation width
pub const DEFAULT_JSON_INDENT: usize = 2;

// ═══════════════════════════════════════════════════════════════
// Environment
// ═══════════════════════════════════════════════════════════════

/// Env var naming a YAML settings file
pub const CONFIG_ENV_VAR: &str = "NLU_UTILS_CONFIG";

// ═══════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════
