//! Dialog form data and its conversion into a typed request.

use std::collections::BTreeMap;

use super::request::{ChitThrowRequest, ThrowStyle};
use crate::attributes::AttributeKey;
use crate::coerce;

/// Form field names used by the chit dialog.
pub mod fields {
    pub const SKUZ: &str = "skuz";
    pub const THROW_TYPE: &str = "throwType";
    pub const CHITS: &str = "chits";
    pub const POINTS: &str = "points";
    pub const TARGET: &str = "target";
    pub const NOTES: &str = "notes";
}

/// Untyped key/value bag submitted by a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`FormData::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Overlay every field of `other` onto this form.
    pub fn merge(&mut self, other: &FormData) {
        for (name, value) in &other.values {
            self.values.insert(name.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ChitThrowRequest {
    /// Convert submitted dialog fields into a request.
    ///
    /// Never fails: an unknown attribute or style falls back to the dialog's
    /// preselected option, numbers coerce to zero and a missing note is empty.
    pub fn from_form(form: &FormData) -> Self {
        let attribute = form
            .get(fields::SKUZ)
            .and_then(|raw| raw.trim().parse::<AttributeKey>().ok())
            .unwrap_or_default();
        let style = form
            .get(fields::THROW_TYPE)
            .and_then(|raw| raw.trim().parse::<ThrowStyle>().ok())
            .unwrap_or_default();
        let number = |name: &str| form.get(name).map(coerce::number_str).unwrap_or(0.0);

        Self {
            attribute,
            style,
            chit_count: coerce::chit_count(number(fields::CHITS)),
            points: number(fields::POINTS),
            target: number(fields::TARGET),
            note: form.get(fields::NOTES).unwrap_or_default().to_string(),
        }
    }
}
