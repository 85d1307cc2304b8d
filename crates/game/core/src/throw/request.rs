//! Chit-throw requests.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeKey;

/// How the chits leave the hand.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ThrowStyle {
    #[default]
    Drop,
    Toss,
    Flick,
}

impl ThrowStyle {
    pub const ALL: [ThrowStyle; 3] = [Self::Drop, Self::Toss, Self::Flick];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Drop => "Drop",
            Self::Toss => "Toss",
            Self::Flick => "Flick",
        }
    }
}

/// One throw, as gathered from the dialog.
///
/// Requests are built fresh for every throw and never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChitThrowRequest {
    pub attribute: AttributeKey,
    pub style: ThrowStyle,
    pub chit_count: u32,
    /// Sum of the points shown on the thrown chits.
    pub points: f64,
    /// Difficulty to meet; zero or less means the table decides.
    pub target: f64,
    pub note: String,
}

impl ChitThrowRequest {
    pub fn new(attribute: AttributeKey, style: ThrowStyle) -> Self {
        Self {
            attribute,
            style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_chit_count(mut self, chit_count: u32) -> Self {
        self.chit_count = chit_count;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}
