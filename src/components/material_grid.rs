//! Grid of material cards, one per catalog entry in catalog order.

use dioxus::prelude::*;
use guide_core::Material;
use guide_ui::{Button, ButtonVariant, Card};

use super::FallbackImage;
use crate::context::use_settings;

#[component]
pub fn MaterialGrid(on_select: EventHandler<Material>) -> Element {
    let settings = use_settings();

    rsx! {
        div { class: "material-grid",
            for entry in settings.catalog.iter() {
                Card {
                    key: "{entry.material.slug()}",
                    class: "material-card".to_string(),
                    FallbackImage {
                        src: entry.icon.clone(),
                        alt: format!("{} 아이콘", entry.material.label()),
                        class: "material-icon".to_string(),
                    }
                    div {
                        h3 { class: "material-label", "{entry.material.label()}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "mt-2".to_string(),
                            onclick: {
                                let material = entry.material;
                                move |_| on_select.call(material)
                            },
                            "가이드 보기"
                        }
                    }
                }
            }
        }
    }
}
