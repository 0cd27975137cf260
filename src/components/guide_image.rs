//! One full-width guide image with its entrance animation.

use dioxus::prelude::*;
use guide_core::GuideImage;

use super::{FallbackImage, Reveal};

#[component]
pub fn GuideImageSection(
    image: GuideImage,
    /// Overlay anchored to this image (only the first one has any)
    children: Element,
) -> Element {
    rsx! {
        section { class: "guide-image-section",
            Reveal {
                id: format!("guide-image-{}", image.index),
                policy: image.reveal,
                class: "guide-image-wrap".to_string(),
                FallbackImage {
                    src: image.src.clone(),
                    alt: image.alt(),
                    class: "guide-image".to_string(),
                }
            }
            {children}
        }
    }
}
