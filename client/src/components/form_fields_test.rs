use super::*;

#[test]
fn parse_optional_number_accepts_trimmed_integers() {
    assert_eq!(parse_optional_number::<i64>(" 12 "), Some(12));
    assert_eq!(parse_optional_number::<u32>("5"), Some(5));
}

#[test]
fn parse_optional_number_clears_on_blank_or_garbage() {
    assert_eq!(parse_optional_number::<i64>(""), None);
    assert_eq!(parse_optional_number::<i64>("abc"), None);
    assert_eq!(parse_optional_number::<u32>("-3"), None);
}

#[test]
fn format_optional_number_blank_when_none() {
    assert_eq!(format_optional_number::<i64>(None), "");
    assert_eq!(format_optional_number(Some(7_i64)), "7");
}

#[test]
fn options_pair_value_and_label() {
    assert_eq!(options(["a", "b"]), vec![("a".to_owned(), "a".to_owned()), ("b".to_owned(), "b".to_owned())]);
}
