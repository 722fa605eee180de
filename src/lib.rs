//! nlu-utils - filesystem, JSON and entity helpers for NLU model tooling

pub mod config;
pub mod entity;
pub mod error;
pub mod json;
pub mod model_dir;
pub mod paths;
pub mod reflect;
pub mod text;
pub mod url;
pub mod util;

pub use config::{JsonOptions, ModelDirPolicy, Settings};
pub use entity::{build_entity, EntityBuilder, EntityRecord};
pub use error::{FixSuggestion, Result, UtilsError};
pub use json::{append_to_file, json_to_string, read_json_file, write_json_to_file, write_to_file};
pub use model_dir::{is_model_dir, is_model_dir_with, remove_model, remove_model_with};
pub use paths::{normalize_lexically, relative_normpath};
pub use reflect::{module_path_from_object, module_path_of};
pub use text::{list_to_str, ListStyle};
pub use url::is_url;
