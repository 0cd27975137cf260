//! Modal selection state
//!
//! Which material's disposal guide is being viewed. Modelled as a two-state
//! machine so that an open modal always carries its material.

use crate::material::Material;

/// Closed/open state of the material modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No modal shown
    #[default]
    Closed,
    /// Modal shown for the given material
    Open(Material),
}

impl Selection {
    /// Open the modal for `material`, replacing any current selection.
    pub fn open_modal(&mut self, material: Material) {
        tracing::debug!(material = material.slug(), "Opening material guide");
        *self = Selection::Open(material);
    }

    /// Close the modal. Calling this while already closed is a no-op.
    pub fn close_modal(&mut self) {
        if let Selection::Open(material) = *self {
            tracing::debug!(material = material.slug(), "Closing material guide");
        }
        *self = Selection::Closed;
    }

    pub fn selected_material(&self) -> Option<Material> {
        match self {
            Selection::Closed => None,
            Selection::Open(material) => Some(*material),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// Modal heading, e.g. `유리 분리배출 가이드`
    pub fn modal_title(&self) -> Option<String> {
        self.selected_material()
            .map(|m| format!("{} 분리배출 가이드", m.label()))
    }

    /// Short caption under the modal image
    pub fn modal_caption(&self) -> Option<String> {
        self.selected_material()
            .map(|m| format!("{}에 대한 올바른 분리배출 방법을 확인하세요.", m.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let selection = Selection::default();
        assert_eq!(selection, Selection::Closed);
        assert!(!selection.is_open());
        assert_eq!(selection.selected_material(), None);
        assert_eq!(selection.modal_title(), None);
    }

    #[test]
    fn open_each_material() {
        for m in Material::ALL {
            let mut selection = Selection::default();
            selection.open_modal(m);
            assert!(selection.is_open());
            assert_eq!(selection.selected_material(), Some(m));
        }
    }

    #[test]
    fn open_replaces_previous() {
        let mut selection = Selection::default();
        selection.open_modal(Material::Paper);
        selection.open_modal(Material::Vinyl);
        assert_eq!(selection, Selection::Open(Material::Vinyl));
    }

    #[test]
    fn close_is_idempotent() {
        let mut selection = Selection::Open(Material::Metal);
        selection.close_modal();
        assert_eq!(selection, Selection::Closed);
        selection.close_modal();
        assert_eq!(selection, Selection::Closed);
    }

    #[test]
    fn title_and_caption() {
        let selection = Selection::Open(Material::Glass);
        assert_eq!(selection.modal_title().unwrap(), "유리 분리배출 가이드");
        assert_eq!(
            selection.modal_caption().unwrap(),
            "유리에 대한 올바른 분리배출 방법을 확인하세요."
        );
    }
}
