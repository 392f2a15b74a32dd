use content::MediaKind;

use super::*;

fn entry(id: &str) -> MediaEntry {
    MediaEntry {
        id: id.to_owned(),
        kind: MediaKind::Image,
        urls: vec![format!("https://cdn/{id}.jpg")],
        filename: None,
        optimized: false,
        usage: None,
    }
}

fn ids(entries: &[MediaEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn prepend_puts_newest_first() {
    let store = prepend(&[entry("a"), entry("b")], entry("c"));
    assert_eq!(ids(&store), ["c", "a", "b"]);
}

#[test]
fn prepend_replaces_same_id() {
    let store = prepend(&[entry("a"), entry("b")], entry("b"));
    assert_eq!(ids(&store), ["b", "a"]);
}

#[test]
fn without_drops_only_matching_id() {
    let store = without(&[entry("a"), entry("b")], "a");
    assert_eq!(ids(&store), ["b"]);
    assert_eq!(without(&store, "zzz").len(), 1);
}

#[test]
fn load_is_empty_off_browser() {
    assert!(load().is_empty());
}
