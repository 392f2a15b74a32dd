use super::*;

use content::Document;

#[test]
fn sections_start_expanded() {
    let doc = Document::default().add_section();
    let folded = CollapsedSections::default();
    assert!(!folded.is_collapsed(&doc.sections[0].id));
}

#[test]
fn toggle_folds_and_unfolds_one_section() {
    let doc = Document::default().add_section().add_section();
    let (first, second) = (doc.sections[0].id.clone(), doc.sections[1].id.clone());
    let mut folded = CollapsedSections::default();

    folded.toggle(&first);
    assert!(folded.is_collapsed(&first));
    assert!(!folded.is_collapsed(&second));

    folded.toggle(&first);
    assert!(!folded.is_collapsed(&first));
}

#[test]
fn removed_sections_are_forgotten() {
    let doc = Document::default().add_section().add_section();
    let (first, second) = (doc.sections[0].id.clone(), doc.sections[1].id.clone());
    let mut folded = CollapsedSections::default();
    folded.toggle(&first);
    folded.toggle(&second);

    let doc = doc.remove_section(&first);
    folded.retain_existing(&doc.section_ids());
    assert!(!folded.is_collapsed(&first));
    assert!(folded.is_collapsed(&second));
}
