//! Standard entity records
//!
//! An entity record is a JSON object describing one extracted span:
//!
//! ```json
//! { "start": 7, "end": 13, "value": "Berlin", "type": "city", "role": "destination" }
//! ```
//!
//! `role` and `group` only appear when given a non-empty value. Extra fields
//! are merged last and win over the standard keys on collision. Keys keep
//! insertion order: the standard keys first, then extras, with an overriding
//! extra staying in the slot of the key it replaces. Offsets and value are
//! not checked against each other.

use serde_json::{Map, Value};

use crate::util::constants::{
    ENTITY_ATTRIBUTE_END, ENTITY_ATTRIBUTE_GROUP, ENTITY_ATTRIBUTE_ROLE, ENTITY_ATTRIBUTE_START,
    ENTITY_ATTRIBUTE_TYPE, ENTITY_ATTRIBUTE_VALUE,
};

/// Entity record as a JSON object
pub type EntityRecord = Map<String, Value>;

/// Fluent builder for [`EntityRecord`]
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    start: usize,
    end: usize,
    value: String,
    entity_type: String,
    role: Option<String>,
    group: Option<String>,
    extra: Vec<(String, Value)>,
}

impl EntityBuilder {
    pub fn new(
        start: usize,
        end: usize,
        value: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            value: value.into(),
            entity_type: entity_type.into(),
            role: None,
            group: None,
            extra: Vec::new(),
        }
    }

    /// Set the role; an empty string counts as no role
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = non_empty(role.into());
        self
    }

    /// Set the group; an empty string counts as no group
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = non_empty(group.into());
        self
    }

    /// Add a caller-supplied field, merged after the standard keys
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    pub fn extras<I, K>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.extra
            .extend(fields.into_iter().map(|(key, value)| (key.into(), value)));
        self
    }

    pub fn build(self) -> EntityRecord {
        let mut entity = Map::new();
        entity.insert(ENTITY_ATTRIBUTE_START.to_string(), Value::from(self.start));
        entity.insert(ENTITY_ATTRIBUTE_END.to_string(), Value::from(self.end));
        entity.insert(ENTITY_ATTRIBUTE_VALUE.to_string(), Value::String(self.value));
        entity.insert(
            ENTITY_ATTRIBUTE_TYPE.to_string(),
            Value::String(self.entity_type),
        );

        if let Some(role) = self.role {
            entity.insert(ENTITY_ATTRIBUTE_ROLE.to_string(), Value::String(role));
        }
        if let Some(group) = self.group {
            entity.insert(ENTITY_ATTRIBUTE_GROUP.to_string(), Value::String(group));
        }

        for (key, value) in self.extra {
            entity.insert(key, value);
        }
        entity
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Build a standard entity record
///
/// `role`/`group` are omitted when `None` or `Some("")`.
pub fn build_entity<I, K>(
    start: usize,
    end: usize,
    value: &str,
    entity_type: &str,
    role: Option<&str>,
    group: Option<&str>,
    extra_fields: I,
) -> EntityRecord
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut builder = EntityBuilder::new(start, end, value, entity_type);
    if let Some(role) = role {
        builder = builder.role(role);
    }
    if let Some(group) = group {
        builder = builder.group(group);
    }
    builder.extras(extra_fields).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_extras() -> Vec<(String, Value)> {
        Vec::new()
    }

    #[test]
    fn minimal_entity_has_exactly_four_keys() {
        let entity = build_entity(0, 5, "Berlin", "city", None, None, no_extras());
        assert_eq!(
            Value::Object(entity),
            json!({"start": 0, "end": 5, "value": "Berlin", "type": "city"})
        );
    }

    #[test]
    fn role_is_included_when_given() {
        let entity = build_entity(0, 5, "Berlin", "city", Some("location"), None, no_extras());
        assert_eq!(entity["role"], json!("location"));
        assert!(!entity.contains_key("group"));
    }

    #[test]
    fn empty_role_and_group_are_omitted() {
        let entity = build_entity(0, 5, "Berlin", "city", Some(""), Some(""), no_extras());
        assert!(!entity.contains_key("role"));
        assert!(!entity.contains_key("group"));
        assert_eq!(entity.len(), 4);
    }

    #[test]
    fn extras_are_merged_and_override() {
        let extras = vec![
            ("confidence", json!(0.87)),
            ("extractor", json!("CRFEntityExtractor")),
            ("value", json!("BER")),
        ];
        let entity = build_entity(0, 5, "Berlin", "city", None, Some("1"), extras);

        assert_eq!(entity["confidence"], json!(0.87));
        assert_eq!(entity["extractor"], json!("CRFEntityExtractor"));
        assert_eq!(entity["value"], json!("BER"));
        assert_eq!(entity["group"], json!("1"));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let extras = vec![("confidence", json!(0.87)), ("value", json!("BER"))];
        let entity = build_entity(0, 5, "Berlin", "city", Some("to"), Some("1"), extras);

        let keys: Vec<&str> = entity.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["start", "end", "value", "type", "role", "group", "confidence"]
        );
        assert_eq!(entity["value"], json!("BER"));
    }

    #[test]
    fn builder_matches_function() {
        let built = EntityBuilder::new(7, 13, "Berlin", "city")
            .role("destination")
            .extra("processors", json!(["synonyms"]))
            .build();
        let direct = build_entity(
            7,
            13,
            "Berlin",
            "city",
            Some("destination"),
            None,
            vec![("processors", json!(["synonyms"]))],
        );
        assert_eq!(built, direct);
    }

    #[test]
    fn no_offset_validation() {
        let entity = EntityBuilder::new(10, 2, "", "").build();
        assert_eq!(entity["start"], json!(10));
        assert_eq!(entity["end"], json!(2));
    }
}
