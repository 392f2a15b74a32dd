use serde_json::json;

use super::*;

#[test]
fn carousel_slide_tolerates_nulls() {
    let slide: CarouselSlide = serde_json::from_value(json!({
        "id": "s1", "title": "Welcome", "subtitle": null, "excerpt": null,
        "image_url": "", "image_file_id": null
    }))
    .unwrap();
    assert_eq!(slide.subtitle, "");
    assert_eq!(slide.image_url, None);
    assert_eq!(slide.resolved_image(), None);
}

#[test]
fn partner_image_falls_back_to_nested_object() {
    let partner: Partner = serde_json::from_value(json!({
        "id": 4, "title": "Acme", "image": { "url": "https://cdn/acme.png" }
    }))
    .unwrap();
    assert_eq!(partner.resolved_image(), Some("https://cdn/acme.png"));
}

#[test]
fn new_title_serializes_without_id() {
    let title = Title { name: "Président".into(), ordre: Some(1), ..Title::default() };
    let json = serde_json::to_value(&title).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["ordre"], 1);
}

#[test]
fn titles_sort_by_ordre_with_unordered_last() {
    let titles = [
        Title { name: "c".into(), ordre: None, ..Title::default() },
        Title { name: "b".into(), ordre: Some(2), ..Title::default() },
        Title { name: "a".into(), ordre: Some(1), ..Title::default() },
    ];
    let names: Vec<_> = titles_by_ordre(&titles).into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["a", "b", "c"]);
}
