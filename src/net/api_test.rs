use super::*;

// =============================================================
// URL assembly
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(
        endpoint("http://127.0.0.1:8000", "/users/me"),
        "http://127.0.0.1:8000/users/me"
    );
}

#[test]
fn endpoint_strips_trailing_slash_from_base() {
    assert_eq!(
        endpoint("https://api.example.com/", "/auth/login"),
        "https://api.example.com/auth/login"
    );
}

// =============================================================
// Login form encoding
// =============================================================

#[test]
fn login_form_body_encodes_reserved_characters() {
    let body = login_form_body("a@b.com", "p&ss=word");
    assert_eq!(body, "username=a%40b.com&password=p%26ss%3Dword");
}

#[test]
fn login_form_body_passes_plain_values_through() {
    assert_eq!(
        login_form_body("user", "hunter2"),
        "username=user&password=hunter2"
    );
}

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_prefixes_the_token() {
    assert_eq!(bearer("tok-123"), "Bearer tok-123");
}

// =============================================================
// Credential-exchange failure mapping
// =============================================================

#[test]
fn credentials_401_stays_inline_as_bad_request() {
    // A rejected login must never tear down the (nonexistent) session.
    assert_eq!(
        credentials_error(401, "Incorrect username or password".to_owned()),
        ApiError::BadRequest("Incorrect username or password".to_owned())
    );
}

#[test]
fn credentials_422_is_bad_request() {
    assert_eq!(
        credentials_error(422, "invalid email".to_owned()),
        ApiError::BadRequest("invalid email".to_owned())
    );
}

#[test]
fn credentials_5xx_is_http_error() {
    assert_eq!(
        credentials_error(500, "Internal Server Error".to_owned()),
        ApiError::Http {
            status: 500,
            detail: "Internal Server Error".to_owned()
        }
    );
}
