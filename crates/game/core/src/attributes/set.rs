//! Canonical attribute values.

use serde::{Deserialize, Serialize};

use super::key::AttributeKey;

/// A single attribute's numbers.
///
/// `magnitude` is the number of chits the attribute lets a character throw;
/// `units` is the finer-grained progress toward the next magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub magnitude: f64,
    pub units: f64,
}

impl AttributeEntry {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(magnitude: f64, units: f64) -> Self {
        Self { magnitude, units }
    }
}

/// The three attributes of a character, always all present.
///
/// Holding one field per key makes the "exactly three keys" rule a property of
/// the type; serialization produces an object with exactly the keys
/// `muscles`, `brains` and `vibes`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub muscles: AttributeEntry,
    pub brains: AttributeEntry,
    pub vibes: AttributeEntry,
}

impl AttributeSet {
    pub const fn get(&self, key: AttributeKey) -> AttributeEntry {
        match key {
            AttributeKey::Muscles => self.muscles,
            AttributeKey::Brains => self.brains,
            AttributeKey::Vibes => self.vibes,
        }
    }

    /// Copy of this set with one entry replaced.
    #[must_use]
    pub const fn with(mut self, key: AttributeKey, entry: AttributeEntry) -> Self {
        match key {
            AttributeKey::Muscles => self.muscles = entry,
            AttributeKey::Brains => self.brains = entry,
            AttributeKey::Vibes => self.vibes = entry,
        }
        self
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, AttributeEntry)> + '_ {
        AttributeKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}
