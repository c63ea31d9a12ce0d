use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(
        ApiError::from_status(401, "ignored".to_owned()),
        ApiError::Unauthorized
    );
}

#[test]
fn status_400_and_422_map_to_bad_request_with_detail() {
    assert_eq!(
        ApiError::from_status(400, "query must not be empty".to_owned()),
        ApiError::BadRequest("query must not be empty".to_owned())
    );
    assert_eq!(
        ApiError::from_status(422, "invalid email".to_owned()),
        ApiError::BadRequest("invalid email".to_owned())
    );
}

#[test]
fn other_statuses_map_to_http() {
    assert_eq!(
        ApiError::from_status(503, "unavailable".to_owned()),
        ApiError::Http {
            status: 503,
            detail: "unavailable".to_owned()
        }
    );
}

// =============================================================
// Detail extraction
// =============================================================

#[test]
fn detail_from_body_reads_detail_field() {
    let body = r#"{"detail": "Incorrect username or password"}"#;
    assert_eq!(
        ApiError::detail_from_body(body, "fallback"),
        "Incorrect username or password"
    );
}

#[test]
fn detail_from_body_falls_back_on_non_json() {
    assert_eq!(ApiError::detail_from_body("<html>", "Bad Request"), "Bad Request");
}

#[test]
fn detail_from_body_falls_back_on_non_string_detail() {
    let body = r#"{"detail": [{"loc": ["body", "email"]}]}"#;
    assert_eq!(ApiError::detail_from_body(body, "Unprocessable"), "Unprocessable");
}

// =============================================================
// Display
// =============================================================

#[test]
fn bad_request_displays_detail_verbatim() {
    let error = ApiError::BadRequest("query must not be empty".to_owned());
    assert_eq!(error.to_string(), "query must not be empty");
}

#[test]
fn network_error_display_names_the_cause() {
    let error = ApiError::Network("connection refused".to_owned());
    assert_eq!(error.to_string(), "network error: connection refused");
}
