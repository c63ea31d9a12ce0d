use super::*;

// =============================================================
// Id mapping
// =============================================================

#[test]
fn from_id_resolves_known_ids() {
    assert_eq!(Persona::from_id("streetwise"), Persona::Streetwise);
    assert_eq!(Persona::from_id("optimist"), Persona::Optimist);
    assert_eq!(Persona::from_id("skeptic"), Persona::Skeptic);
}

#[test]
fn from_id_maps_unknown_ids_to_default() {
    assert_eq!(Persona::from_id("philosopher"), Persona::default());
    assert_eq!(Persona::from_id(""), Persona::default());
}

#[test]
fn id_round_trips_for_every_persona() {
    for persona in Persona::ALL {
        assert_eq!(Persona::from_id(persona.id()), persona);
    }
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_wire_id() {
    let json = serde_json::to_string(&Persona::Optimist).expect("serialize");
    assert_eq!(json, "\"optimist\"");
}

#[test]
fn deserializes_unknown_id_to_default() {
    let persona: Persona = serde_json::from_str("\"comedian\"").expect("deserialize");
    assert_eq!(persona, Persona::default());
}

// =============================================================
// Display metadata
// =============================================================

#[test]
fn every_persona_has_display_metadata() {
    for persona in Persona::ALL {
        assert!(!persona.label().is_empty());
        assert!(!persona.description().is_empty());
        assert!(!persona.emoji().is_empty());
        assert!(persona.color().starts_with('#'));
        assert_eq!(persona.color().len(), 7);
    }
}
