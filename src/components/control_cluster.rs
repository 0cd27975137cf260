//! Controls anchored under the first guide image: jump to the material
//! grid, a bouncing scroll hint, and the not-yet-available 3D model button.

use dioxus::prelude::*;
use guide_core::ScrollRequest;
use guide_ui::{Button, ButtonVariant};

fn scroll_by(request: ScrollRequest) {
    tracing::debug!(factor = request.offset_factor, "Smooth scroll");
    let _ = document::eval(&request.script());
}

#[component]
pub fn ControlCluster() -> Element {
    rsx! {
        div { class: "control-cluster",
            Button {
                variant: ButtonVariant::Primary,
                class: "press-scale".to_string(),
                onclick: move |_| scroll_by(ScrollRequest::SECTION_JUMP),
                "재질별 분리배출 방법"
            }

            div {
                class: "scroll-hint",
                onclick: move |_| scroll_by(ScrollRequest::SCROLL_HINT),
                p { "아래로 스크롤하세요" }
                svg {
                    class: "scroll-chevron",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        d: "M19 9l-7 7-7-7",
                    }
                }
            }

            // TODO: enable once the 3D model viewer page exists
            Button {
                variant: ButtonVariant::Muted,
                disabled: true,
                "3D 모델로 분리배출 알아보기"
            }
        }
    }
}
