//! Which article sections are folded in the editor.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::collections::HashSet;

use content::SectionId;

/// Folding is view-only; it never touches the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapsedSections {
    ids: HashSet<SectionId>,
}

impl CollapsedSections {
    /// Fold an expanded section, or expand a folded one.
    pub fn toggle(&mut self, id: &SectionId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    pub fn is_collapsed(&self, id: &SectionId) -> bool {
        self.ids.contains(id)
    }

    /// Forget sections no longer in the document.
    pub fn retain_existing(&mut self, existing: &[SectionId]) {
        self.ids.retain(|id| existing.contains(id));
    }
}
