use super::*;

// =============================================================================
// prepare_for_save
// =============================================================================

#[test]
fn prepare_for_save_derives_slug() {
    let doc = Document::default().set_field(DocumentField::Title("Hello, World!  Foo_Bar".into()));
    assert_eq!(prepare_for_save(&doc).slug, "hello-world-foobar");
}

#[test]
fn prepare_for_save_leaves_author_untouched() {
    let doc = Document { author_name: Some("Marie".into()), ..Document::default() }
        .set_field(DocumentField::Title("Typo fixed".into()));
    assert_eq!(prepare_for_save(&doc).author_name.as_deref(), Some("Marie"));
}

#[test]
fn prepare_for_save_overwrites_manual_slug() {
    let doc = Document::default()
        .set_field(DocumentField::Title("New Title".into()))
        .set_field(DocumentField::Slug("old-slug".into()));
    assert_eq!(prepare_for_save(&doc).slug, "new-title");
}

// =============================================================================
// stamp_section_edit
// =============================================================================

#[test]
fn section_edit_attributes_article_to_editor() {
    let doc = Document { author_name: Some("Marie".into()), ..Document::default() }.add_section();
    let stamped = stamp_section_edit(&doc, Some("Aline"));
    assert_eq!(stamped.author_name.as_deref(), Some("Aline"));
    assert_eq!(stamped.sections, doc.sections);
}

#[test]
fn section_edit_without_user_keeps_stored_author() {
    let doc = Document { author_name: Some("Marie".into()), ..Document::default() }.add_section();
    assert_eq!(stamp_section_edit(&doc, None).author_name.as_deref(), Some("Marie"));
}

#[test]
fn metadata_edit_does_not_stamp_author() {
    let doc = Document { author_name: Some("Marie".into()), ..Document::default() };
    let edited = doc.set_field(DocumentField::Title("Renamed".into()));
    assert_eq!(edited.author_name.as_deref(), Some("Marie"));
}
