//! Background Animation
//!
//! Soft green circles drifting upward behind the page content. Purely
//! decorative; hidden from assistive technology.

use dioxus::prelude::*;

/// One drifting circle: (left %, size px, duration s, delay s)
const BUBBLES: [(u32, u32, u32, u32); 8] = [
    (5, 80, 18, 0),
    (18, 40, 14, 3),
    (30, 120, 22, 6),
    (45, 60, 16, 1),
    (58, 90, 20, 8),
    (70, 50, 15, 4),
    (82, 110, 24, 2),
    (93, 70, 19, 7),
];

/// Inline style positioning and timing one bubble
fn bubble_style((left, size, duration, delay): (u32, u32, u32, u32)) -> String {
    format!(
        "left: {left}%; width: {size}px; height: {size}px; \
         animation-duration: {duration}s; animation-delay: {delay}s;"
    )
}

/// Renders the ambient bubbles as a fixed, non-interactive layer
#[component]
pub fn BackgroundAnimation() -> Element {
    rsx! {
        div {
            class: "background-animation",
            "aria-hidden": "true",
            for (i, bubble) in BUBBLES.into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: "bubble",
                    style: bubble_style(bubble),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_style_places_and_times() {
        assert_eq!(
            bubble_style((18, 40, 14, 3)),
            "left: 18%; width: 40px; height: 40px; animation-duration: 14s; animation-delay: 3s;"
        );
    }

    #[test]
    fn bubbles_stay_on_screen() {
        assert!(BUBBLES.iter().all(|(left, ..)| *left <= 100));
    }
}
