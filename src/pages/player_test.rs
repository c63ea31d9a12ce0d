use super::{PlayerViewState, location_label, view_state};

// =============================================================
// Loading vs not-found
// =============================================================

#[test]
fn unknown_id_is_loading_until_collection_arrives() {
    assert_eq!(view_state(false, false), PlayerViewState::Loading);
}

#[test]
fn unknown_id_is_not_found_after_fetch() {
    assert_eq!(view_state(true, false), PlayerViewState::NotFound);
}

#[test]
fn known_id_is_ready_regardless_of_fetch_flag() {
    // A freshly created briefing is findable before the first full fetch.
    assert_eq!(view_state(false, true), PlayerViewState::Ready);
    assert_eq!(view_state(true, true), PlayerViewState::Ready);
}

// =============================================================
// Location label
// =============================================================

#[test]
fn location_joins_city_and_country() {
    assert_eq!(
        location_label(Some("Lisbon"), Some("Portugal")).as_deref(),
        Some("Lisbon, Portugal")
    );
}

#[test]
fn location_uses_whichever_half_exists() {
    assert_eq!(location_label(Some("Lisbon"), None).as_deref(), Some("Lisbon"));
    assert_eq!(location_label(None, Some("Portugal")).as_deref(), Some("Portugal"));
}

#[test]
fn location_is_absent_without_data() {
    assert_eq!(location_label(None, None), None);
}
