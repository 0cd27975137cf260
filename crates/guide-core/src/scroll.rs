//! Smooth-scroll requests
//!
//! Scrolling is a fire-and-forget effect in the webview. This module only
//! decides how far to go and produces the script that does it.

/// Relative smooth scroll, measured in viewport heights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset_factor: f64,
}

impl ScrollRequest {
    /// "재질별 분리배출 방법" jumps straight to the material grid
    pub const SECTION_JUMP: ScrollRequest = ScrollRequest { offset_factor: 1.5 };

    /// The bouncing "scroll down" hint
    pub const SCROLL_HINT: ScrollRequest = ScrollRequest { offset_factor: 1.48 };

    pub fn new(offset_factor: f64) -> Self {
        Self { offset_factor }
    }

    pub fn top_px(&self, viewport_height: f64) -> f64 {
        self.offset_factor * viewport_height
    }

    /// Script that performs the scroll against the live viewport height
    pub fn script(&self) -> String {
        format!(
            "window.scrollBy({{ top: window.innerHeight * {}, behavior: 'smooth' }});",
            self.offset_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_scales_with_viewport() {
        assert_eq!(ScrollRequest::SECTION_JUMP.top_px(800.0), 1200.0);
        assert_eq!(ScrollRequest::new(2.0).top_px(500.0), 1000.0);
    }

    #[test]
    fn script_embeds_factor() {
        assert_eq!(
            ScrollRequest::SCROLL_HINT.script(),
            "window.scrollBy({ top: window.innerHeight * 1.48, behavior: 'smooth' });"
        );
    }
}
