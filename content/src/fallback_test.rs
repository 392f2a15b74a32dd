use super::*;

#[test]
fn present_filters_blank_values() {
    assert_eq!(present(Some("x")), Some("x"));
    assert_eq!(present(Some("   ")), None);
    assert_eq!(present(Some("")), None);
    assert_eq!(present(None), None);
}

#[test]
fn first_present_respects_order() {
    assert_eq!(first_present([Some("local"), Some("server")]), Some("local"));
    assert_eq!(first_present([None, Some("server"), Some("nested")]), Some("server"));
}

#[test]
fn first_present_skips_blank_candidates() {
    assert_eq!(first_present([Some(""), Some(" "), Some("nested")]), Some("nested"));
}

#[test]
fn first_present_of_nothing_is_none() {
    assert_eq!(first_present([None, Some("")]), None);
    assert_eq!(first_present(Vec::<Option<&str>>::new()), None);
}
