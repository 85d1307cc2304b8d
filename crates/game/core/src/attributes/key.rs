//! The closed set of attribute keys (the "skuz").

/// One of the three attributes every character carries.
///
/// - **Muscles**: brawn, lifting, hitting things
/// - **Brains**: wits, schemes, book learning
/// - **Vibes**: charm, nerve, weirdness
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeKey {
    #[default]
    Muscles,
    Brains,
    Vibes,
}

impl AttributeKey {
    /// All keys in canonical order.
    pub const ALL: [AttributeKey; 3] = [Self::Muscles, Self::Brains, Self::Vibes];

    /// Human-facing label used by dialogs and sheets.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Muscles => "Muscles",
            Self::Brains => "Brains",
            Self::Vibes => "Vibes",
        }
    }
}
