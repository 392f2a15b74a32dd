use super::*;

// =============================================================
// BlockKind
// =============================================================

#[test]
fn block_kind_parses_every_wire_name() {
    for kind in BlockKind::ALL {
        assert_eq!(kind.as_str().parse::<BlockKind>(), Ok(kind));
    }
}

#[test]
fn block_kind_rejects_unknown_names() {
    assert_eq!(
        "gallery".parse::<BlockKind>(),
        Err(ContentError::UnknownBlockKind("gallery".to_owned()))
    );
}

#[test]
fn only_image_and_video_are_media() {
    assert!(BlockKind::Image.is_media());
    assert!(BlockKind::Video.is_media());
    assert!(!BlockKind::Text.is_media());
    assert!(!BlockKind::Quote.is_media());
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn block_serializes_as_id_type_value() {
    let block = Block { id: BlockId::from("b1"), content: BlockContent::Quote("<p>hi</p>".to_owned()) };
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json, serde_json::json!({"id": "b1", "type": "quote", "value": "<p>hi</p>"}));
}

#[test]
fn block_reads_null_value_as_empty_text() {
    let block: Block = serde_json::from_value(serde_json::json!({"id": "b1", "type": "image", "value": null})).unwrap();
    assert_eq!(block.content, BlockContent::Image(String::new()));
}

#[test]
fn block_reads_numeric_id() {
    let block: Block = serde_json::from_value(serde_json::json!({"id": 7, "type": "text", "value": "x"})).unwrap();
    assert_eq!(block.id.as_str(), "7");
}

#[test]
fn unknown_block_kind_is_preserved_verbatim() {
    let raw = serde_json::json!({"id": "b9", "type": "gallery", "value": {"urls": ["a", "b"]}});
    let block: Block = serde_json::from_value(raw.clone()).unwrap();
    assert!(block.content.kind().is_none());
    assert_eq!(serde_json::to_value(&block).unwrap(), raw);
}

// =============================================================
// BlockContent
// =============================================================

#[test]
fn with_value_keeps_kind() {
    let content = BlockContent::empty(BlockKind::Video).with_value("https://v");
    assert_eq!(content, BlockContent::Video("https://v".to_owned()));
    assert_eq!(content.type_name(), "video");
}

#[test]
fn unknown_with_value_keeps_its_kind_name() {
    let content = BlockContent::Unknown { kind: "embed".to_owned(), value: Value::Null };
    let next = content.with_value("x");
    assert_eq!(next.type_name(), "embed");
    assert_eq!(next.value(), "x");
}

#[test]
fn normalize_rich_text_replaces_nbsp() {
    assert_eq!(normalize_rich_text("<p>a&nbsp;b&nbsp;&nbsp;c</p>"), "<p>a b  c</p>");
}
