use std::collections::HashSet;

use serde_json::json;

use super::*;
use crate::media::MediaEntry;
use crate::media::MediaKind;

fn sid(id: &str) -> SectionId {
    SectionId::from(id)
}

fn bid(id: &str) -> BlockId {
    BlockId::from(id)
}

fn doc_with_sections(ids: &[&str]) -> Document {
    ids.iter().fold(Document::default(), |doc, id| doc.add_section_with_id(sid(id)))
}

// =============================================================
// Defaults and wire shape
// =============================================================

#[test]
fn default_document_is_empty_draft() {
    let doc = Document::default();
    assert_eq!(doc.title, "");
    assert_eq!(doc.language, "fr");
    assert_eq!(doc.status, Status::Draft);
    assert_eq!(doc.version, 1);
    assert!(doc.tags.is_empty());
    assert!(doc.sections.is_empty());
    assert!(doc.meta.is_empty());
}

#[test]
fn new_document_serializes_without_id() {
    let json = serde_json::to_value(Document::default()).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["status"], "draft");
    assert_eq!(json["meta"], json!({}));
}

#[test]
fn fetched_document_tolerates_nulls_and_numeric_ids() {
    let doc: Document = serde_json::from_value(json!({
        "id": 42,
        "title": "Hello",
        "subtitle": "",
        "language": null,
        "status": "published",
        "tags": null,
        "version": null,
        "hero_file_id": 7,
        "sections": [
            { "id": 1, "title": null, "blocks": [ { "id": "b1", "type": "text", "value": "<p>x</p>" } ] }
        ]
    }))
    .unwrap();
    assert_eq!(doc.id.as_deref(), Some("42"));
    assert_eq!(doc.subtitle, None);
    assert_eq!(doc.language, "fr");
    assert_eq!(doc.status, Status::Published);
    assert!(doc.tags.is_empty());
    assert_eq!(doc.version, 1);
    assert_eq!(doc.hero_file_id.as_deref(), Some("7"));
    assert_eq!(doc.sections[0].id.as_str(), "1");
    assert_eq!(doc.sections[0].title, "");
    assert_eq!(doc.sections[0].blocks[0].content, BlockContent::Text("<p>x</p>".into()));
}

#[test]
fn status_parses_and_rejects() {
    assert_eq!("archived".parse::<Status>(), Ok(Status::Archived));
    assert!("Deleted".parse::<Status>().is_err());
}

// =============================================================
// set_field
// =============================================================

#[test]
fn set_field_coalesces_blank_optional_text() {
    let doc = Document::default().set_field(DocumentField::Subtitle("Sub".into()));
    assert_eq!(doc.subtitle.as_deref(), Some("Sub"));
    let doc = doc.set_field(DocumentField::Subtitle("   ".into()));
    assert_eq!(doc.subtitle, None);
}

#[test]
fn set_field_does_not_touch_original() {
    let original = Document::default();
    let next = original.set_field(DocumentField::Title("T".into()));
    assert_eq!(original.title, "");
    assert_eq!(next.title, "T");
}

#[test]
fn blank_language_falls_back_to_default() {
    let doc = Document::default().set_field(DocumentField::Language(String::new()));
    assert_eq!(doc.language, "fr");
}

#[test]
fn clearing_hero_url_clears_file_id() {
    let doc = Document { hero_url: Some("u".into()), hero_file_id: Some("f".into()), ..Document::default() };
    let doc = doc.set_field(DocumentField::HeroUrl(String::new()));
    assert_eq!(doc.hero_url, None);
    assert_eq!(doc.hero_file_id, None);
}

// =============================================================
// Sections
// =============================================================

#[test]
fn add_section_appends_empty_section_with_fresh_id() {
    let doc = Document::default().add_section().add_section();
    assert_eq!(doc.sections.len(), 2);
    assert_ne!(doc.sections[0].id, doc.sections[1].id);
    assert!(doc.sections.iter().all(|s| s.title.is_empty() && s.blocks.is_empty()));
}

#[test]
fn add_section_with_duplicate_id_is_noop() {
    let doc = doc_with_sections(&["a"]).add_section_with_id(sid("a"));
    assert_eq!(doc.sections.len(), 1);
}

#[test]
fn add_and_remove_sections_keep_ids_unique_and_blocks_intact() {
    let mut doc = doc_with_sections(&["a", "b"]);
    doc = doc.add_block_with_id(&sid("a"), bid("a1"), BlockKind::Quote);
    doc = doc.update_block(&sid("a"), &bid("a1"), "kept");
    for _ in 0..5 {
        doc = doc.add_section();
    }
    let third = doc.sections[2].id.clone();
    doc = doc.remove_section(&sid("b")).remove_section(&third).add_section();

    let ids: HashSet<_> = doc.sections.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids.len(), doc.sections.len());
    assert_eq!(doc.block(&sid("a"), &bid("a1")), Some(&BlockContent::Quote("kept".into())));
}

#[test]
fn remove_unknown_section_is_noop() {
    let doc = doc_with_sections(&["a"]);
    assert_eq!(doc.remove_section(&sid("zzz")), doc);
}

#[test]
fn rename_section_changes_only_title() {
    let doc = doc_with_sections(&["a", "b"]).rename_section(&sid("b"), "Intro");
    assert_eq!(doc.sections[1].title, "Intro");
    assert_eq!(doc.sections[0].title, "");
}

#[test]
fn reorder_sections_moves_one_element() {
    let doc = doc_with_sections(&["A", "B", "C", "D"]).reorder_sections(1, 3);
    let order: Vec<_> = doc.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, ["A", "C", "D", "B"]);
}

#[test]
fn reorder_sections_out_of_range_is_noop() {
    let doc = doc_with_sections(&["A", "B"]);
    assert_eq!(doc.reorder_sections(0, 9), doc);
}

#[test]
fn move_section_keeps_blocks_with_their_section() {
    let doc = doc_with_sections(&["A", "B", "C"])
        .add_block_with_id(&sid("A"), bid("x"), BlockKind::Text)
        .update_block(&sid("A"), &bid("x"), "first");
    let moved = doc.move_section(&sid("A"), Some(&sid("C")));
    let order: Vec<_> = moved.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, ["B", "C", "A"]);
    assert_eq!(moved.section(&sid("A")), doc.section(&sid("A")));
}

#[test]
fn move_section_onto_itself_or_nothing_is_identity() {
    let doc = doc_with_sections(&["A", "B"]);
    assert_eq!(doc.move_section(&sid("A"), Some(&sid("A"))), doc);
    assert_eq!(doc.move_section(&sid("A"), None), doc);
}

// =============================================================
// Blocks
// =============================================================

#[test]
fn block_count_spans_every_section() {
    let doc = doc_with_sections(&["a", "b"]);
    assert_eq!(doc.block_count(), 0);
    let doc = doc
        .add_block(&sid("a"), BlockKind::Text)
        .add_block(&sid("a"), BlockKind::Image)
        .add_block(&sid("b"), BlockKind::Quote);
    assert_eq!(doc.block_count(), 3);
}

#[test]
fn add_update_remove_block_restores_list() {
    let doc = doc_with_sections(&["s"]).add_block_with_id(&sid("s"), bid("t"), BlockKind::Text);
    let before = doc.section(&sid("s")).unwrap().blocks.clone();

    let with_quote = doc.add_block_with_id(&sid("s"), bid("q"), BlockKind::Quote);
    let updated = with_quote.update_block(&sid("s"), &bid("q"), "x");
    assert_eq!(updated.block(&sid("s"), &bid("q")), Some(&BlockContent::Quote("x".into())));

    let removed = updated.remove_block(&sid("s"), &bid("q"));
    assert_eq!(removed.section(&sid("s")).unwrap().blocks, before);
}

#[test]
fn add_block_to_unknown_section_is_noop() {
    let doc = doc_with_sections(&["s"]);
    assert_eq!(doc.add_block(&sid("nope"), BlockKind::Image), doc);
}

#[test]
fn update_unknown_block_is_noop() {
    let doc = doc_with_sections(&["s"]).add_block_with_id(&sid("s"), bid("b"), BlockKind::Text);
    assert_eq!(doc.update_block(&sid("s"), &bid("other"), "x"), doc);
    assert_eq!(doc.update_block(&sid("other"), &bid("b"), "x"), doc);
}

#[test]
fn update_markup_block_normalizes_nbsp() {
    let doc = doc_with_sections(&["s"])
        .add_block_with_id(&sid("s"), bid("b"), BlockKind::Text)
        .update_block(&sid("s"), &bid("b"), "a&nbsp;b");
    assert_eq!(doc.block(&sid("s"), &bid("b")).map(BlockContent::value), Some("a b"));
}

#[test]
fn update_media_block_keeps_url_verbatim() {
    let doc = doc_with_sections(&["s"])
        .add_block_with_id(&sid("s"), bid("v"), BlockKind::Video)
        .update_block(&sid("s"), &bid("v"), "https://x/?a=1&nbsp;");
    assert_eq!(doc.block(&sid("s"), &bid("v")).map(BlockContent::value), Some("https://x/?a=1&nbsp;"));
}

// =============================================================
// Tags, author, slug
// =============================================================

#[test]
fn tags_are_trimmed_unique_and_ordered() {
    let doc = Document::default().add_tag(" news ").add_tag("events").add_tag("news").add_tag("  ");
    assert_eq!(doc.tags, ["news", "events"]);
    assert_eq!(doc.remove_tag(0).tags, ["events"]);
    assert_eq!(doc.remove_tag(5).tags, doc.tags);
}

#[test]
fn with_author_ignores_blank_names() {
    let doc = Document::default().with_author("Ada");
    assert_eq!(doc.author_name.as_deref(), Some("Ada"));
    assert_eq!(doc.with_author(" ").author_name.as_deref(), Some("Ada"));
}

#[test]
fn derived_slug_follows_title() {
    let doc = Document::default().set_field(DocumentField::Title("Hello, World!  Foo_Bar".into()));
    assert_eq!(doc.with_derived_slug().slug, "hello-world-foobar");
}

// =============================================================
// Media picks
// =============================================================

fn media(id: &str, url: &str) -> MediaEntry {
    MediaEntry {
        id: id.into(),
        kind: MediaKind::Image,
        urls: vec![url.into()],
        filename: None,
        optimized: false,
        usage: None,
    }
}

#[test]
fn apply_media_to_hero_sets_url_and_file_id() {
    let pick = MediaPick::from_selection(&[media("f1", "https://cdn/h.jpg")]).unwrap();
    let doc = Document::default().apply_media(&MediaTarget::Hero, &pick);
    assert_eq!(doc.hero_url.as_deref(), Some("https://cdn/h.jpg"));
    assert_eq!(doc.hero_file_id.as_deref(), Some("f1"));
}

#[test]
fn apply_media_to_block_sets_value() {
    let doc = doc_with_sections(&["s"]).add_block_with_id(&sid("s"), bid("img"), BlockKind::Image);
    let target = MediaTarget::Block { section_id: sid("s"), block_id: bid("img") };
    let pick = MediaPick::from_selection(&[media("f1", "u1"), media("f2", "u2")]).unwrap();
    let doc = doc.apply_media(&target, &pick);
    assert_eq!(doc.block(&sid("s"), &bid("img")), Some(&BlockContent::Image("u1".into())));
}

#[test]
fn apply_media_to_profile_target_leaves_document() {
    let doc = Document::default();
    let pick = MediaPick::from_selection(&[media("f1", "u1")]).unwrap();
    assert_eq!(doc.apply_media(&MediaTarget::ProfileImage, &pick), doc);
}
