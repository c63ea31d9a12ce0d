use super::*;

fn briefing_json() -> serde_json::Value {
    serde_json::json!({
        "id": "b-1",
        "search_history_id": "sh-1",
        "city": "Austin",
        "country": "US",
        "script": "Here's the thing about AI regulation...",
        "audio_filename": "b-1.mp3",
        "query": "What's happening with AI regulation?",
        "persona": "optimist",
        "user_id": "u-1",
        "audio_url": "https://cdn.example.com/b-1.mp3",
        "created_at": "2026-08-20T12:00:00Z"
    })
}

// =============================================================
// Briefing deserialization
// =============================================================

#[test]
fn briefing_deserializes_full_payload() {
    let briefing: Briefing = serde_json::from_value(briefing_json()).expect("deserialize");
    assert_eq!(briefing.id, "b-1");
    assert_eq!(briefing.query, "What's happening with AI regulation?");
    assert_eq!(briefing.persona, crate::persona::Persona::Optimist);
    assert_eq!(briefing.city.as_deref(), Some("Austin"));
    assert_eq!(briefing.audio_url, "https://cdn.example.com/b-1.mp3");
}

#[test]
fn briefing_tolerates_missing_optional_fields() {
    let json = serde_json::json!({
        "id": "b-2",
        "script": "short",
        "query": "q",
        "persona": "skeptic",
        "audio_url": "https://cdn.example.com/b-2.mp3",
        "created_at": "2026-08-21T09:30:00Z"
    });
    let briefing: Briefing = serde_json::from_value(json).expect("deserialize");
    assert!(briefing.city.is_none());
    assert!(briefing.country.is_none());
    assert!(briefing.search_history_id.is_none());
}

#[test]
fn briefing_with_unknown_persona_resolves_to_default() {
    let mut json = briefing_json();
    json["persona"] = serde_json::json!("storyteller");
    let briefing: Briefing = serde_json::from_value(json).expect("deserialize");
    assert_eq!(briefing.persona, crate::persona::Persona::default());
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn create_request_serializes_persona_as_id() {
    let request = CreateBriefingRequest {
        query: "Should I invest in crypto?".to_owned(),
        persona: crate::persona::Persona::Skeptic,
    };
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["query"], "Should I invest in crypto?");
    assert_eq!(value["persona"], "skeptic");
}

#[test]
fn briefings_response_unwraps_list() {
    let json = serde_json::json!({ "briefings": [briefing_json()] });
    let response: BriefingsResponse = serde_json::from_value(json).expect("deserialize");
    assert_eq!(response.briefings.len(), 1);
}
