use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  admin@cci.bi  ", "secret"),
        Ok(("admin@cci.bi".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(validate_login_input("a@b.c", " pw "), Ok(("a@b.c".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("a@b.c", ""), Err(MISSING_FIELDS));
}
