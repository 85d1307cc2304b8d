//! The chit-throw dialog model.
//!
//! Hosts render the dialog however they like; this type supplies its title,
//! buttons and default field values, and turns a submitted form into a
//! resolved throw and a chat message.

use serde::{Deserialize, Serialize};

use super::form::{FormData, fields};
use super::request::{ChitThrowRequest, ThrowStyle};
use super::resolve::{ChitThrowOutcome, resolve};
use crate::attributes::AttributeKey;
use crate::coerce::format_number;
use crate::record::CharacterRecord;

pub const DIALOG_TITLE: &str = "Chit Throw";

/// A message appended to the shared chat log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the character who threw.
    pub speaker: String,
    /// Chat card markup.
    pub content: String,
}

/// Where resolved throws are posted. Hosts implement this over their chat.
pub trait ChatLog {
    fn post(&mut self, message: ChatMessage);
}

impl ChatLog for Vec<ChatMessage> {
    fn post(&mut self, message: ChatMessage) {
        self.push(message);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DialogButton {
    Throw,
    Cancel,
}

impl DialogButton {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Throw => "Throw",
            Self::Cancel => "Cancel",
        }
    }
}

/// One choice in a dialog select field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Submitted form value.
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    fn of_attribute(key: AttributeKey) -> Self {
        Self {
            value: key.into(),
            label: key.label(),
        }
    }

    fn of_style(style: ThrowStyle) -> Self {
        Self {
            value: style.into(),
            label: style.label(),
        }
    }
}

/// Dialog state for one actor.
#[derive(Clone, Debug, PartialEq)]
pub struct ChitDialog {
    actor_name: String,
    default_chits: u32,
}

impl ChitDialog {
    pub const BUTTONS: [DialogButton; 2] = [DialogButton::Throw, DialogButton::Cancel];
    pub const DEFAULT_BUTTON: DialogButton = DialogButton::Throw;

    /// Open the dialog for `actor`; the chit field starts at the actor's
    /// muscles magnitude.
    pub fn for_actor(actor: &CharacterRecord) -> Self {
        Self {
            actor_name: actor.name.clone(),
            default_chits: crate::coerce::chit_count(actor.chit_count(AttributeKey::Muscles)),
        }
    }

    pub fn title(&self) -> &'static str {
        DIALOG_TITLE
    }

    pub fn actor_name(&self) -> &str {
        &self.actor_name
    }

    /// Choices for the skuz select, muscles first.
    pub fn skuz_options() -> Vec<SelectOption> {
        AttributeKey::ALL.into_iter().map(SelectOption::of_attribute).collect()
    }

    /// Choices for the throw type select, drop first.
    pub fn throw_type_options() -> Vec<SelectOption> {
        ThrowStyle::ALL.into_iter().map(SelectOption::of_style).collect()
    }

    /// Field values the dialog opens with.
    pub fn defaults(&self) -> FormData {
        FormData::new()
            .with(fields::SKUZ, AttributeKey::default().as_ref())
            .with(fields::THROW_TYPE, ThrowStyle::default().as_ref())
            .with(fields::CHITS, self.default_chits.to_string())
            .with(fields::POINTS, format_number(0.0))
            .with(fields::TARGET, format_number(0.0))
            .with(fields::NOTES, "")
    }

    /// Resolve a submitted form.
    pub fn submit(&self, form: &FormData) -> ChitThrowOutcome {
        let request = ChitThrowRequest::from_form(form);
        resolve(&self.actor_name, &request)
    }

    /// Resolve a submitted form and post the chat card to `log`.
    pub fn submit_to<L: ChatLog + ?Sized>(&self, form: &FormData, log: &mut L) -> ChitThrowOutcome {
        let resolved = self.submit(form);
        log.post(ChatMessage {
            speaker: self.actor_name.clone(),
            content: resolved.summary.to_html(),
        });
        resolved
    }
}
