use super::{redirect_target, validate_credentials};

// =============================================================
// Credential validation
// =============================================================

#[test]
fn accepts_and_trims_credentials() {
    let (email, password) = validate_credentials("  sam@example.com  ", "hunter2")
        .expect("valid credentials");
    assert_eq!(email, "sam@example.com");
    assert_eq!(password, "hunter2");
}

#[test]
fn rejects_blank_email() {
    assert!(validate_credentials("   ", "hunter2").is_err());
}

#[test]
fn rejects_email_without_at_sign() {
    assert!(validate_credentials("sam.example.com", "hunter2").is_err());
}

#[test]
fn rejects_empty_password() {
    assert!(validate_credentials("sam@example.com", "").is_err());
}

#[test]
fn password_is_not_trimmed() {
    let (_, password) =
        validate_credentials("sam@example.com", " spaced ").expect("valid credentials");
    assert_eq!(password, " spaced ");
}

// =============================================================
// Redirect target
// =============================================================

#[test]
fn honors_in_app_redirect() {
    assert_eq!(redirect_target(Some("/history".to_owned())), "/history");
    assert_eq!(
        redirect_target(Some("/player/b-42".to_owned())),
        "/player/b-42"
    );
}

#[test]
fn defaults_to_dashboard_without_redirect() {
    assert_eq!(redirect_target(None), "/dashboard");
    assert_eq!(redirect_target(Some(String::new())), "/dashboard");
}

#[test]
fn rejects_external_redirects() {
    assert_eq!(
        redirect_target(Some("https://evil.example".to_owned())),
        "/dashboard"
    );
    assert_eq!(
        redirect_target(Some("//evil.example".to_owned())),
        "/dashboard"
    );
}
