//! Disposal guide modal for the selected material.

use dioxus::prelude::*;
use guide_core::Selection;
use guide_ui::Modal;

use super::FallbackImage;
use crate::context::use_settings;

#[component]
pub fn MaterialModal(selection: Selection, on_close: EventHandler<()>) -> Element {
    let settings = use_settings();

    let Some(material) = selection.selected_material() else {
        return rsx! {};
    };
    let title = selection.modal_title().unwrap_or_default();
    let caption = selection.modal_caption().unwrap_or_default();

    rsx! {
        Modal {
            title,
            on_close: move |_| on_close.call(()),
            FallbackImage {
                src: settings.catalog.image(material).to_string(),
                alt: format!("{} 분리배출", material.label()),
                class: "modal-image".to_string(),
            }
            p { class: "modal-caption", "{caption}" }
        }
    }
}
