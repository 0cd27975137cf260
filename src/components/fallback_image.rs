//! Image with placeholder fallback
//!
//! Reads the asset from the configured asset root and inlines it as a data
//! URI. A file that cannot be read, or that the webview fails to decode,
//! swaps to the default placeholder once and logs the failing path. Keyed by
//! the parent when the source changes.

use dioxus::prelude::*;
use guide_core::ImageSource;

use crate::context::use_settings;

#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let settings = use_settings();
    let root = settings.asset_root.clone();
    let mut image = use_signal(|| {
        let mut source = ImageSource::new(src);
        let uri = source.load(&root);
        (source, uri)
    });
    let class = class.unwrap_or_default();
    let uri = image.read().1.clone().unwrap_or_default();

    rsx! {
        img {
            class: "{class}",
            src: "{uri}",
            alt: "{alt}",
            onerror: move |_| {
                let root = settings.asset_root.clone();
                image.with_mut(|(source, uri)| {
                    if source.on_error() {
                        *uri = source.load(&root);
                    }
                });
            },
        }
    }
}
