//! Attribute normalization.
//!
//! Raw attribute data comes straight from saved host documents and may be
//! missing keys, hold strings or nulls, or carry keys from older data layouts.
//! Normalization always yields the three canonical entries and never fails.

use serde_json::Value;

use super::key::AttributeKey;
use super::set::{AttributeEntry, AttributeSet};
use crate::coerce;

/// Name of the record member holding the attribute mapping.
pub const ATTRIBUTES_FIELD: &str = "attributes";

/// Build the canonical attribute set from a raw attribute mapping.
///
/// Keys other than `muscles`, `brains` and `vibes` are dropped. A missing or
/// non-object mapping (or entry) counts as all zeros.
pub fn normalize(raw: Option<&Value>) -> AttributeSet {
    let raw = raw.and_then(Value::as_object);

    AttributeKey::ALL
        .into_iter()
        .fold(AttributeSet::default(), |set, key| {
            let entry = raw
                .and_then(|attrs| attrs.get(key.as_ref()))
                .and_then(Value::as_object)
                .map(|entry| {
                    AttributeEntry::new(
                        coerce::number(entry.get("magnitude")),
                        coerce::number(entry.get("units")),
                    )
                })
                .unwrap_or(AttributeEntry::ZERO);
            set.with(key, entry)
        })
}

/// Recompute derived data on a raw record in place.
///
/// The record's `attributes` member is replaced by the canonical set. A record
/// that is not a JSON object is replaced by one holding only the attributes.
pub fn prepare_derived_data(record: &mut Value) {
    let attributes = normalize(record.get(ATTRIBUTES_FIELD));
    let canonical = attributes_to_value(&attributes);

    match record.as_object_mut() {
        Some(object) => {
            object.insert(ATTRIBUTES_FIELD.to_string(), canonical);
        }
        None => {
            let mut object = serde_json::Map::new();
            object.insert(ATTRIBUTES_FIELD.to_string(), canonical);
            *record = Value::Object(object);
        }
    }
}

/// Chit count for one attribute of a raw record.
///
/// Walks record → `attributes` → key → `magnitude`; any missing level yields 0.
pub fn chit_count(record: Option<&Value>, key: AttributeKey) -> f64 {
    let magnitude = record
        .and_then(|record| record.get(ATTRIBUTES_FIELD))
        .and_then(|attrs| attrs.get(key.as_ref()))
        .and_then(|entry| entry.get("magnitude"));
    coerce::number(magnitude)
}

pub(crate) fn attributes_to_value(attributes: &AttributeSet) -> Value {
    let mut object = serde_json::Map::new();
    for (key, entry) in attributes.iter() {
        let mut fields = serde_json::Map::new();
        fields.insert("magnitude".to_string(), number_value(entry.magnitude));
        fields.insert("units".to_string(), number_value(entry.units));
        object.insert(key.to_string(), Value::Object(fields));
    }
    Value::Object(object)
}

/// Integral values are stored as JSON integers so saved data keeps its shape.
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(0))
    }
}
