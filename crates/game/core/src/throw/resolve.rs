//! Chit-throw resolution.
//!
//! Resolution is a single threshold check. There is no randomness here: the
//! chits were thrown on a real table and the player reports the points.

use serde::Serialize;

use super::request::ChitThrowRequest;
use super::summary::ThrowSummary;
use crate::coerce::format_number;

/// Shown in place of the target when the table adjudicates by hand.
pub const MANUAL_TARGET: &str = "(manual)";

/// Result of comparing points against the target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, Serialize,
)]
pub enum ThrowOutcome {
    Success,
    Fail,
    /// No target was set.
    #[strum(serialize = "--")]
    Undetermined,
}

impl ThrowOutcome {
    /// Success when points reach the target; a tie succeeds.
    pub fn compare(points: f64, target: f64) -> Self {
        if target > 0.0 {
            if points >= target {
                Self::Success
            } else {
                Self::Fail
            }
        } else {
            Self::Undetermined
        }
    }
}

/// A resolved throw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChitThrowOutcome {
    pub outcome: ThrowOutcome,
    pub summary: ThrowSummary,
}

/// Resolve a throw made by `actor_name`.
pub fn resolve(actor_name: &str, request: &ChitThrowRequest) -> ChitThrowOutcome {
    let outcome = ThrowOutcome::compare(request.points, request.target);

    let target = if request.target > 0.0 {
        format_number(request.target)
    } else {
        MANUAL_TARGET.to_string()
    };

    let mut summary = ThrowSummary::new(format!("{actor_name} - Chit Throw"));
    summary.push("Skuz", request.attribute.to_string());
    summary.push("Throw", request.style.to_string());
    summary.push("Chits", request.chit_count.to_string());
    summary.push("Points", format_number(request.points));
    summary.push("Target", target);
    summary.push("Outcome", outcome.to_string());
    if !request.note.is_empty() {
        summary.push("Notes", request.note.clone());
    }

    ChitThrowOutcome { outcome, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeKey;
    use crate::throw::request::ThrowStyle;

    fn request(points: f64, target: f64) -> ChitThrowRequest {
        ChitThrowRequest::new(AttributeKey::Brains, ThrowStyle::Flick)
            .with_chit_count(2)
            .with_points(points)
            .with_target(target)
    }

    #[test]
    fn tie_counts_as_success() {
        assert_eq!(resolve("Gorb", &request(10.0, 10.0)).outcome, ThrowOutcome::Success);
        assert_eq!(resolve("Gorb", &request(9.0, 10.0)).outcome, ThrowOutcome::Fail);
    }

    #[test]
    fn unset_target_is_undetermined_and_manual() {
        for target in [0.0, -3.0] {
            let resolved = resolve("Gorb", &request(5.0, target));

            assert_eq!(resolved.outcome, ThrowOutcome::Undetermined);
            assert_eq!(resolved.summary.value("Target"), Some(MANUAL_TARGET));
            assert_eq!(resolved.summary.value("Outcome"), Some("--"));
        }
    }

    #[test]
    fn note_line_only_when_present() {
        let silent = resolve("Gorb", &request(1.0, 2.0));
        assert_eq!(silent.summary.value("Notes"), None);
        assert_eq!(silent.summary.lines.len(), 6);

        let noted = resolve("Gorb", &request(1.0, 2.0).with_note("careful"));
        assert_eq!(noted.summary.value("Notes"), Some("careful"));
        assert!(noted.summary.to_string().contains("careful"));
    }

    #[test]
    fn summary_order_is_fixed() {
        let resolved = resolve("Gorb", &request(3.5, 2.0));
        let labels: Vec<_> = resolved.summary.lines.iter().map(|line| line.label).collect();

        assert_eq!(labels, ["Skuz", "Throw", "Chits", "Points", "Target", "Outcome"]);
        assert_eq!(resolved.summary.title, "Gorb - Chit Throw");
        assert_eq!(resolved.summary.value("Points"), Some("3.5"));
        assert_eq!(resolved.summary.value("Throw"), Some("flick"));
    }
}
