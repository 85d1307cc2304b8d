//! Host-independent rules for the Repugnant tabletop system.
//!
//! `repugnant-core` turns untyped host documents into canonical character data
//! and resolves chit throws. Everything here is pure and synchronous: hosts
//! own storage, rendering and the chat log, and call into these APIs from
//! their own lifecycle hooks.
pub mod attributes;
pub mod coerce;
pub mod record;
pub mod sheet;
pub mod system;
pub mod throw;
pub use attributes::{
    AttributeEntry, AttributeKey, AttributeSet, chit_count, normalize, prepare_derived_data,
};
pub use record::{CharacterRecord, DEFAULT_ITEM_IMG, ItemData, ItemKind, ItemRecord};
pub use sheet::{ActorSheetData, ItemSheetData, SheetOptions, TabConfig};
pub use system::{
    DocumentType, Registration, Registry, RegistryError, SheetKind, SheetRegistry, init,
};
pub use throw::{
    ChatLog, ChatMessage, ChitDialog, ChitThrowOutcome, ChitThrowRequest, FormData,
    SelectOption, ThrowOutcome, ThrowStyle, ThrowSummary, resolve,
};
