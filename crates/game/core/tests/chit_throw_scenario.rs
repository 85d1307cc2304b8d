use repugnant_core::{
    AttributeEntry, AttributeKey, CharacterRecord, ChatMessage, ChitDialog, ChitThrowRequest,
    FormData, ThrowOutcome, ThrowStyle, normalize, prepare_derived_data, resolve,
};
use serde_json::json;

/// End-to-End Chit Throw Scenario
///
/// 1. A partially filled record arrives from the host
/// 2. Derived data is prepared (attributes normalized in place)
/// 3. The dialog opens with the actor's muscles as the chit count
/// 4. The player submits a toss that beats the target
/// 5. The chat card lists every line except notes
#[test]
fn test_complete_chit_throw_scenario() {
    // ================================================================
    // PHASE 1: Normalize the raw record
    // ================================================================
    let mut raw = json!({
        "name": "Skuz",
        "attributes": { "muscles": { "magnitude": 3 } },
    });
    prepare_derived_data(&mut raw);

    assert_eq!(
        raw["attributes"],
        json!({
            "muscles": { "magnitude": 3, "units": 0 },
            "brains": { "magnitude": 0, "units": 0 },
            "vibes": { "magnitude": 0, "units": 0 },
        })
    );

    let actor = CharacterRecord::from_value(&raw);
    assert_eq!(actor.attributes.muscles, AttributeEntry::new(3.0, 0.0));

    // ================================================================
    // PHASE 2: Open the dialog and submit
    // ================================================================
    let dialog = ChitDialog::for_actor(&actor);
    let mut form = dialog.defaults();
    assert_eq!(form.get("chits"), Some("3"));

    form.merge(
        &FormData::new()
            .with("throwType", "toss")
            .with("points", "7")
            .with("target", "5"),
    );

    let mut chat: Vec<ChatMessage> = Vec::new();
    let resolved = dialog.submit_to(&form, &mut chat);

    // ================================================================
    // PHASE 3: Verify outcome and summary
    // ================================================================
    assert_eq!(resolved.outcome, ThrowOutcome::Success);
    assert_eq!(
        resolved.summary.to_string(),
        "Skuz - Chit Throw\n\
         Skuz: muscles\n\
         Throw: toss\n\
         Chits: 3\n\
         Points: 7\n\
         Target: 5\n\
         Outcome: Success"
    );

    assert_eq!(chat.len(), 1);
    assert_eq!(chat[0].speaker, "Skuz");
    assert!(!chat[0].content.contains("Notes"));
}

#[test]
fn test_request_built_directly_matches_dialog() {
    let actor = CharacterRecord::from_value(&json!({
        "name": "Skuz",
        "attributes": { "muscles": { "magnitude": 3 } },
    }));

    let request = ChitThrowRequest::new(AttributeKey::Muscles, ThrowStyle::Toss)
        .with_chit_count(3)
        .with_points(7.0)
        .with_target(5.0);
    let direct = resolve(&actor.name, &request);

    let dialog = ChitDialog::for_actor(&actor);
    let mut form = dialog.defaults();
    form.merge(
        &FormData::new()
            .with("throwType", "toss")
            .with("points", "7")
            .with("target", "5"),
    );

    assert_eq!(direct, dialog.submit(&form));
}

#[test]
fn test_normalization_never_drifts() {
    let inputs = [
        json!(null),
        json!({}),
        json!({ "muscles": { "magnitude": "5", "units": null } }),
        json!({ "brains": { "magnitude": [1], "units": "2.5" }, "luck": 4 }),
        json!({ "vibes": "loud" }),
    ];

    for raw in inputs {
        let once = normalize(Some(&raw));
        let again = normalize(Some(&serde_json::to_value(once).unwrap()));
        assert_eq!(once, again, "normalization drifted for {raw}");

        let keys: Vec<String> = serde_json::to_value(once)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys.len(), 3);
        for key in AttributeKey::ALL {
            assert!(keys.contains(&key.to_string()));
        }
    }
}
