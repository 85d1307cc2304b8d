//! Character attributes.
//!
//! Every character carries exactly three attributes, each a magnitude (how many
//! chits it throws) and units. Saved data is untrusted, so the only way in is
//! [`normalize`], which degrades anything malformed to zero.

pub mod key;
pub mod normalize;
pub mod set;

pub use key::AttributeKey;
pub use normalize::{ATTRIBUTES_FIELD, chit_count, normalize, prepare_derived_data};
pub use set::{AttributeEntry, AttributeSet};
