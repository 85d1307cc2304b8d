//! Chit throws: request, resolution, summary and the dialog around them.
//!
//! ```text
//! FormData ──from_form──▶ ChitThrowRequest ──resolve──▶ ChitThrowOutcome
//!                                                          │
//!                                     ThrowSummary ◀───────┘──▶ ChatMessage
//! ```

pub mod dialog;
pub mod form;
pub mod request;
pub mod resolve;
pub mod summary;

pub use dialog::{ChatLog, ChatMessage, ChitDialog, DialogButton, SelectOption};
pub use form::{FormData, fields};
pub use request::{ChitThrowRequest, ThrowStyle};
pub use resolve::{ChitThrowOutcome, MANUAL_TARGET, ThrowOutcome, resolve};
pub use summary::{SummaryLine, ThrowSummary};
