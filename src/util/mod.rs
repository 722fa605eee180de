//! Utilities Module - shared infrastructure
//!
//! - `constants`: Extension allow-list, entity record keys, env var names

pub mod constants;

pub use constants::{
    CONFIG_ENV_VAR, DEFAULT_JSON_INDENT, ENTITY_ATTRIBUTE_END, ENTITY_ATTRIBUTE_GROUP,
    ENTITY_ATTRIBUTE_ROLE, ENTITY_ATTRIBUTE_START, ENTITY_ATTRIBUTE_TYPE, ENTITY_ATTRIBUTE_VALUE,
    MODEL_FILE_EXTENSIONS,
};
