//! Landing page - entry point into the guide.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_settings;
use guide_ui::{BackgroundAnimation, Button, ButtonVariant};

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let settings = use_settings();

    rsx! {
        main { class: "landing",
            BackgroundAnimation {}

            header { class: "landing-header",
                h1 { class: "page-title", "{settings.title}" }
                p { class: "tagline", "버리는 방법만 알아도 자원이 됩니다" }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "btn-enter".to_string(),
                    onclick: move |_| {
                        navigator.push(Route::GuidePage {});
                    },
                    "분리배출 가이드 보기"
                }
            }
        }
    }
}
