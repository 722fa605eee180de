//! Single-line formatter with `", "` and `": "` separators

use std::io;

use serde_json::ser::Formatter;

/// Writes `{"a": [1, 2]}` instead of serde_json's `{"a":[1,2]}`
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    #[inline]
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::{json, Serializer};

    fn render(value: &serde_json::Value) -> String {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
        value.serialize(&mut serializer).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn separators_are_spaced() {
        assert_eq!(render(&json!({"a": [1, 2], "b": null})), r#"{"a": [1, 2], "b": null}"#);
    }

    #[test]
    fn empty_containers_stay_tight() {
        assert_eq!(render(&json!([[], {}])), "[[], {}]");
    }

    #[test]
    fn separators_inside_strings_untouched() {
        assert_eq!(render(&json!(["a,b", "c:d"])), r#"["a,b", "c:d"]"#);
    }
}
