use super::{greeting_name, validate_query};

// =============================================================
// Query validation
// =============================================================

#[test]
fn accepts_and_trims_query() {
    assert_eq!(
        validate_query("  What's happening with AI regulation?  "),
        Ok("What's happening with AI regulation?".to_owned())
    );
}

#[test]
fn rejects_empty_query() {
    assert!(validate_query("").is_err());
    assert!(validate_query("   \t\n").is_err());
}

// =============================================================
// Greeting
// =============================================================

#[test]
fn greeting_uses_email_local_part() {
    assert_eq!(greeting_name("sam@example.com"), "sam");
}

#[test]
fn greeting_falls_back_to_full_value_without_at_sign() {
    assert_eq!(greeting_name("sam"), "sam");
}
