//! Guide page - illustrated recycling guide with per-material instructions.
//!
//! Four guide images reveal one after another as they scroll into view. The
//! material grid below opens a modal with the disposal illustration for the
//! chosen material.

use dioxus::prelude::*;
use guide_core::{GuideImage, Material, RevealPolicy, Selection};
use guide_ui::{BackgroundAnimation, Button, ButtonVariant};

use crate::components::{ControlCluster, GuideImageSection, MaterialGrid, MaterialModal, Reveal};

#[component]
pub fn GuidePage() -> Element {
    let navigator = use_navigator();
    let mut selection = use_signal(Selection::default);

    let open_modal = move |material: Material| selection.write().open_modal(material);
    let close_modal = move |_: ()| selection.write().close_modal();

    let guide_images = GuideImage::sequence();

    rsx! {
        div { class: "guide-page",
            BackgroundAnimation {}

            div { class: "back-nav",
                Button {
                    variant: ButtonVariant::Plain,
                    onclick: move |_| navigator.go_back(),
                    "← 뒤로 가기"
                }
            }

            div { class: "guide-images",
                for image in guide_images {
                    GuideImageSection {
                        key: "{image.index}",
                        image: image.clone(),
                        if image.has_controls() {
                            ControlCluster {}
                        }
                    }
                }

                section { id: "guide-section", class: "material-section",
                    Reveal {
                        id: "material-panel".to_string(),
                        policy: RevealPolicy::material_section(),
                        class: "material-panel".to_string(),
                        h2 { class: "section-title", "재질별 분리배출 가이드💡" }
                        MaterialGrid { on_select: open_modal }
                    }
                }
            }

            if let Selection::Open(material) = selection() {
                MaterialModal {
                    key: "{material.slug()}",
                    selection: selection(),
                    on_close: close_modal,
                }
            }
        }
    }
}
