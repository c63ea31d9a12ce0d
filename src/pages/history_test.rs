use super::matches_filters;
use crate::net::types::Briefing;
use crate::persona::Persona;

fn briefing(query: &str, script: &str, persona: Persona) -> Briefing {
    Briefing {
        id: "b-1".to_owned(),
        search_history_id: None,
        city: None,
        country: None,
        script: script.to_owned(),
        audio_filename: None,
        query: query.to_owned(),
        persona,
        user_id: None,
        audio_url: "https://cdn.example.com/b-1.mp3".to_owned(),
        created_at: "2026-08-20T12:00:00Z".to_owned(),
    }
}

// =============================================================
// Search filter
// =============================================================

#[test]
fn empty_search_matches_everything() {
    let b = briefing("AI regulation", "The EU moved first.", Persona::Streetwise);
    assert!(matches_filters(&b, "", None));
    assert!(matches_filters(&b, "   ", None));
}

#[test]
fn search_is_case_insensitive_over_query() {
    let b = briefing("AI regulation", "script", Persona::Streetwise);
    assert!(matches_filters(&b, "ai REGUL", None));
    assert!(!matches_filters(&b, "quantum", None));
}

#[test]
fn search_also_covers_transcript() {
    let b = briefing("today's news", "The EU moved first.", Persona::Optimist);
    assert!(matches_filters(&b, "eu moved", None));
}

// =============================================================
// Persona filter
// =============================================================

#[test]
fn persona_filter_narrows_matches() {
    let b = briefing("AI regulation", "script", Persona::Skeptic);
    assert!(matches_filters(&b, "", Some(Persona::Skeptic)));
    assert!(!matches_filters(&b, "", Some(Persona::Optimist)));
}

#[test]
fn both_filters_must_pass() {
    let b = briefing("AI regulation", "script", Persona::Skeptic);
    assert!(matches_filters(&b, "regulation", Some(Persona::Skeptic)));
    assert!(!matches_filters(&b, "regulation", Some(Persona::Optimist)));
    assert!(!matches_filters(&b, "quantum", Some(Persona::Skeptic)));
}
