//! Rejects NaN and infinities before serialization
//!
//! serde_json writes non-finite floats as `null`. This pass walks the value
//! through a serializer that produces nothing and fails on the first
//! non-finite `f32`/`f64`.

use serde::ser::{self, Error as _, Serialize};

type Error = serde_json::Error;

/// Fail if `value` contains a non-finite float anywhere
pub(crate) fn ensure_finite<T>(value: &T) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    value.serialize(&mut FiniteCheck)
}

struct FiniteCheck;

fn check(value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::custom(format!(
            "float {} cannot be represented in JSON",
            value
        )))
    }
}

impl<'a> ser::Serializer for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_f32(self, v: f32) -> Result<(), Error> {
        check(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<(), Error> {
        check(v)
    }

    fn serialize_bool(self, _v: bool) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_char(self, _v: char) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self, Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, Error> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, Error> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self, Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, Error> {
        Ok(self)
    }
}

impl<'a> ser::SerializeSeq for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<(), Error> {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<(), Error> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<(), Error> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<(), Error> {
        Ok(())
    }
}

impl<'a> ser::SerializeMap for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        key.serialize(&mut **self)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<(), Error> {
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<(), Error> {
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(serde::Serialize)]
    struct Scored {
        label: String,
        confidence: f32,
    }

    #[test]
    fn finite_values_pass() {
        assert!(ensure_finite(&json!({"a": [1, 2.5, null, "x"]})).is_ok());
        assert!(ensure_finite(&vec![0.0f64, -1.5, f64::MAX]).is_ok());
        assert!(ensure_finite(&Some(3u128)).is_ok());
    }

    #[test]
    fn nan_is_rejected() {
        let err = ensure_finite(&f64::NAN).unwrap_err();
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn nested_infinity_is_rejected() {
        let mut scores = BTreeMap::new();
        scores.insert("greet", vec![0.9, f64::INFINITY]);
        assert!(ensure_finite(&scores).is_err());
    }

    #[test]
    fn struct_field_f32_is_checked() {
        let scored = Scored {
            label: "greet".into(),
            confidence: f32::NEG_INFINITY,
        };
        assert!(ensure_finite(&scored).is_err());

        let scored = Scored {
            label: "greet".into(),
            confidence: 0.5,
        };
        assert!(ensure_finite(&scored).is_ok());
    }
}
