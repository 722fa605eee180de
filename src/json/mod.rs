//! JSON serialization and whole-file text writes
//!
//! Every write opens the file, writes all content through a buffered writer
//! and flushes before returning. The handle is closed on every exit path,
//! including errors. Concurrent writers to one path are not coordinated:
//! the last writer wins.

mod finite;
mod formatter;

use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use self::formatter::SpacedFormatter;
use crate::config::JsonOptions;
use crate::error::{Result, UtilsError};

/// Serialize `value` to JSON text
///
/// Defaults (see [`JsonOptions::default`]) pretty-print with two spaces and
/// keep non-ASCII characters literal. `indent: None` renders a single line
/// with `", "` and `": "` separators.
///
/// NaN and infinities are rejected with `NLU-001` instead of being written
/// as `null`.
pub fn json_to_string<T>(value: &T, options: &JsonOptions) -> Result<String>
where
    T: Serialize + ?Sized,
{
    finite::ensure_finite(value)?;

    let mut buf = Vec::with_capacity(128);

    match options.indent {
        Some(width) => {
            let indent = " ".repeat(width);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut serializer)?;
        }
        None => {
            let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
            value.serialize(&mut serializer)?;
        }
    }

    let text = String::from_utf8(buf).map_err(|e| UtilsError::Serialization {
        details: e.to_string(),
    })?;

    if options.ensure_ascii {
        Ok(escape_non_ascii(&text))
    } else {
        Ok(text)
    }
}

/// Escape every non-ASCII char as `\uXXXX` (surrogate pairs above U+FFFF)
///
/// Only valid on serialized JSON: non-ASCII can only occur inside string
/// literals there, so the escapes land in strings.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];

    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out
}

/// Write `text` to `path`, replacing any existing content
pub fn write_to_file<P, T>(path: P, text: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Display + ?Sized,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| UtilsError::io(path, "create", e))?;
    write_all(path, file, text)?;

    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Append `text` to `path`, creating the file when missing
pub fn append_to_file<P, T>(path: P, text: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Display + ?Sized,
{
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| UtilsError::io(path, "open", e))?;
    write_all(path, file, text)?;

    tracing::debug!(path = %path.display(), "appended to file");
    Ok(())
}

fn write_all<T: Display + ?Sized>(path: &Path, file: File, text: &T) -> Result<()> {
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", text).map_err(|e| UtilsError::io(path, "write", e))?;
    writer.flush().map_err(|e| UtilsError::io(path, "flush", e))
}

/// Serialize `value` and write it to `path`
pub fn write_json_to_file<P, T>(path: P, value: &T, options: &JsonOptions) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let text = json_to_string(value, options)?;
    write_to_file(path, &text)
}

/// Read `path` and deserialize its JSON content
pub fn read_json_file<P, T>(path: P) -> Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| UtilsError::io(path, "read", e))?;

    serde_json::from_str(&content).map_err(|e| UtilsError::Deserialization {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}
