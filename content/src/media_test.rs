use super::*;

fn entry(id: &str, urls: &[&str]) -> MediaEntry {
    MediaEntry {
        id: id.to_owned(),
        kind: MediaKind::Image,
        urls: urls.iter().map(|u| (*u).to_owned()).collect(),
        filename: None,
        optimized: false,
        usage: None,
    }
}

// =============================================================
// MediaKind / UsageTag
// =============================================================

#[test]
fn media_kind_from_mime() {
    assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
    assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
    assert_eq!(MediaKind::from_mime(""), MediaKind::Video);
}

#[test]
fn usage_tag_parses_known_names() {
    for tag in UsageTag::ALL {
        assert_eq!(tag.as_str().parse::<UsageTag>(), Ok(tag));
    }
    assert!("banner".parse::<UsageTag>().is_err());
}

// =============================================================
// FileRecord -> MediaEntry
// =============================================================

#[test]
fn file_record_maps_to_media_entry() {
    let file: FileRecord = serde_json::from_value(serde_json::json!({
        "id": 12,
        "mime": "image/jpeg",
        "url": "https://cdn/a.jpg",
        "filename": "a.jpg",
        "optimized": true,
        "usage": "hero"
    }))
    .unwrap();
    let media = MediaEntry::from(file);
    assert_eq!(media.id, "12");
    assert_eq!(media.kind, MediaKind::Image);
    assert_eq!(media.urls, vec!["https://cdn/a.jpg".to_owned()]);
    assert_eq!(media.filename.as_deref(), Some("a.jpg"));
    assert!(media.optimized);
    assert_eq!(media.usage, Some(UsageTag::Hero));
}

#[test]
fn file_record_with_unknown_usage_has_no_tag() {
    let file: FileRecord = serde_json::from_value(serde_json::json!({
        "id": "f1", "mime": "video/mp4", "url": "u", "usage": "banner"
    }))
    .unwrap();
    let media = MediaEntry::from(file);
    assert_eq!(media.kind, MediaKind::Video);
    assert_eq!(media.usage, None);
}

#[test]
fn media_entry_uses_type_field_name() {
    let json = serde_json::to_value(entry("m1", &["u1"])).unwrap();
    assert_eq!(json["type"], "image");
}

// =============================================================
// MediaPick
// =============================================================

#[test]
fn pick_from_empty_selection_is_none() {
    assert_eq!(MediaPick::from_selection(&[]), None);
}

#[test]
fn pick_uses_only_first_entry_first_url() {
    let selection = [entry("m1", &["u1a", "u1b"]), entry("m2", &["u2"])];
    let pick = MediaPick::from_selection(&selection).unwrap();
    assert_eq!(pick.file_id.as_deref(), Some("m1"));
    assert_eq!(pick.url.as_deref(), Some("u1a"));
}

#[test]
fn pick_from_entry_without_urls_has_no_url() {
    let pick = MediaPick::from_selection(&[entry("m1", &[])]).unwrap();
    assert_eq!(pick.url, None);
    assert_eq!(pick.file_id.as_deref(), Some("m1"));
}
