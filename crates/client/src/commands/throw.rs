//! Resolve a chit throw from the command line.
//!
//! Arguments are fed through the same form adapter a dialog uses, so odd
//! input degrades the same way (unknown skuz → muscles, bad numbers → 0).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use repugnant_content::ActorLoader;
use repugnant_core::throw::fields;
use repugnant_core::{
    AttributeSet, CharacterRecord, ChatMessage, ChitDialog, ChitThrowOutcome, FormData,
    SelectOption, ThrowOutcome,
};

use super::print_json;

/// Resolve a chit throw and print the chat card
#[derive(Parser, Debug)]
pub struct Throw {
    /// Character record JSON (first record is used)
    #[arg(short, long, value_name = "FILE")]
    actor: Option<PathBuf>,

    /// Character name (overrides the record's name)
    #[arg(short, long)]
    name: Option<String>,

    /// Attribute thrown: muscles, brains or vibes
    #[arg(long)]
    skuz: Option<String>,

    /// Throw style: drop, toss or flick
    #[arg(long = "throw-type")]
    throw_type: Option<String>,

    /// Chits thrown (defaults to the character's muscles)
    #[arg(long)]
    chits: Option<String>,

    /// Sum of the points on the thrown chits
    #[arg(long)]
    points: Option<String>,

    /// Target / difficulty (0 = decided by the table)
    #[arg(long)]
    target: Option<String>,

    /// Free-text notes for the chat card
    #[arg(long)]
    notes: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Plain summary lines
    Text,
    /// Chat card markup
    Html,
    /// Outcome and summary as JSON
    Json,
}

impl Throw {
    pub fn execute(self) -> Result<()> {
        let mut actor = match &self.actor {
            Some(path) => ActorLoader::load_one(path)?,
            None => CharacterRecord::new("Someone", AttributeSet::default()),
        };
        if let Some(name) = &self.name {
            actor.name = name.clone();
        }

        warn_unknown("skuz", self.skuz.as_deref(), &ChitDialog::skuz_options());
        warn_unknown(
            "throw type",
            self.throw_type.as_deref(),
            &ChitDialog::throw_type_options(),
        );

        let dialog = ChitDialog::for_actor(&actor);
        let mut form = dialog.defaults();
        form.merge(&self.overrides());

        let mut chat: Vec<ChatMessage> = Vec::new();
        let resolved = dialog.submit_to(&form, &mut chat);
        tracing::info!(
            actor = %dialog.actor_name(),
            outcome = %resolved.outcome,
            "Resolved chit throw"
        );

        match self.format {
            OutputFormat::Text => print_text(&resolved),
            OutputFormat::Html => {
                for message in &chat {
                    println!("{}", message.content);
                }
            }
            OutputFormat::Json => print_json(&resolved)?,
        }
        Ok(())
    }

    fn overrides(&self) -> FormData {
        let mut form = FormData::new();
        let given = [
            (fields::SKUZ, &self.skuz),
            (fields::THROW_TYPE, &self.throw_type),
            (fields::CHITS, &self.chits),
            (fields::POINTS, &self.points),
            (fields::TARGET, &self.target),
            (fields::NOTES, &self.notes),
        ];
        for (name, value) in given {
            if let Some(value) = value {
                form.set(name, value.clone());
            }
        }
        form
    }
}

/// Name the accepted choices when `given` matches none of them.
fn warn_unknown(field: &str, given: Option<&str>, options: &[SelectOption]) -> bool {
    let Some(given) = given else {
        return false;
    };
    if options.iter().any(|o| o.value.eq_ignore_ascii_case(given)) {
        return false;
    }

    let labels: Vec<_> = options.iter().map(|o| o.label).collect();
    tracing::warn!(
        "Unknown {field} '{given}', expected one of {}; using {}",
        labels.join(", "),
        options.first().map_or("the default", |o| o.label)
    );
    true
}

fn print_text(resolved: &ChitThrowOutcome) {
    println!("{}", style(&resolved.summary.title).bold());
    for line in &resolved.summary.lines {
        let value = if line.label == "Outcome" {
            match resolved.outcome {
                ThrowOutcome::Success => style(line.value.as_str()).green().bold(),
                ThrowOutcome::Fail => style(line.value.as_str()).red().bold(),
                ThrowOutcome::Undetermined => style(line.value.as_str()).dim(),
            }
        } else {
            style(line.value.as_str()).cyan()
        };
        println!("  {}: {}", line.label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_given_arguments_override() {
        let throw = Throw::parse_from(["throw", "--points", "7", "--target", "5"]);
        let overrides = throw.overrides();

        assert_eq!(overrides.get(fields::POINTS), Some("7"));
        assert_eq!(overrides.get(fields::TARGET), Some("5"));
        assert_eq!(overrides.get(fields::CHITS), None);
    }

    #[test]
    fn unknown_choices_are_flagged() {
        let options = ChitDialog::skuz_options();

        assert!(warn_unknown("skuz", Some("luck"), &options));
        assert!(!warn_unknown("skuz", Some("Brains"), &options));
        assert!(!warn_unknown("skuz", None, &options));
    }

    #[test]
    fn omitted_chits_come_from_the_actor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skuz.json");
        std::fs::write(
            &path,
            r#"{"name": "Skuz", "attributes": {"muscles": {"magnitude": 3}}}"#,
        )
        .unwrap();

        let throw = Throw::parse_from([
            "throw",
            "--actor",
            path.to_str().unwrap(),
            "--throw-type",
            "toss",
            "--points",
            "7",
            "--target",
            "5",
        ]);
        let actor = ActorLoader::load_one(&path).unwrap();
        let dialog = ChitDialog::for_actor(&actor);
        let mut form = dialog.defaults();
        form.merge(&throw.overrides());
        let resolved = dialog.submit(&form);

        assert_eq!(resolved.outcome, ThrowOutcome::Success);
        assert_eq!(resolved.summary.value("Chits"), Some("3"));
    }
}
