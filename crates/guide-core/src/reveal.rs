//! Scroll-triggered entrance animations
//!
//! Each guide image starts transparent and displaced, then eases into place
//! the first time it scrolls into view. The direction alternates per image
//! and the delay grows linearly with the index.

/// Number of guide images on the page
pub const GUIDE_IMAGE_COUNT: usize = 4;

/// Fraction of an element that must be visible before it reveals
pub const VIEWPORT_THRESHOLD: f32 = 0.1;

const GUIDE_DURATION_MS: u32 = 500;
const GUIDE_STAGGER_MS: u32 = 300;
const SECTION_DURATION_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Starting displacement of an element before it reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceOffset {
    pub axis: Axis,
    /// Pixels; positive is right/down
    pub px: i32,
}

impl EntranceOffset {
    pub const fn rise(px: i32) -> Self {
        Self { axis: Axis::Y, px }
    }

    pub const fn slide(px: i32) -> Self {
        Self { axis: Axis::X, px }
    }

    /// Offset for the guide image at `index`.
    pub fn for_guide_index(index: usize) -> Self {
        match index {
            0 => Self::rise(50),
            1 => Self::slide(-100),
            2 => Self::slide(100),
            3 => Self::rise(100),
            _ => Self::rise(0),
        }
    }

    fn translate(&self) -> String {
        match self.axis {
            Axis::X => format!("translate({}px, 0px)", self.px),
            Axis::Y => format!("translate(0px, {}px)", self.px),
        }
    }
}

/// How and when an element animates into view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPolicy {
    pub offset: EntranceOffset,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Visible fraction that triggers the reveal
    pub threshold: f32,
    /// Reveal only on the first intersection
    pub once: bool,
}

impl RevealPolicy {
    pub fn for_guide_index(index: usize) -> Self {
        Self {
            offset: EntranceOffset::for_guide_index(index),
            duration_ms: GUIDE_DURATION_MS,
            delay_ms: index as u32 * GUIDE_STAGGER_MS,
            threshold: VIEWPORT_THRESHOLD,
            once: true,
        }
    }

    /// Policy for the material grid panel
    pub fn material_section() -> Self {
        Self {
            offset: EntranceOffset::rise(50),
            duration_ms: SECTION_DURATION_MS,
            delay_ms: 0,
            threshold: VIEWPORT_THRESHOLD,
            once: true,
        }
    }

    fn transition(&self) -> String {
        format!(
            "transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            d = self.duration_ms,
            delay = self.delay_ms
        )
    }

    /// Inline style before the element has been seen
    pub fn initial_style(&self) -> String {
        format!(
            "opacity: 0; transform: {}; {}",
            self.offset.translate(),
            self.transition()
        )
    }

    /// Inline style once the element has been revealed
    pub fn revealed_style(&self) -> String {
        format!("opacity: 1; transform: translate(0px, 0px); {}", self.transition())
    }

    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            self.revealed_style()
        } else {
            self.initial_style()
        }
    }
}

/// One entry of the guide image sequence
#[derive(Debug, Clone, PartialEq)]
pub struct GuideImage {
    pub index: usize,
    pub src: String,
    pub reveal: RevealPolicy,
}

impl GuideImage {
    /// The fixed four-image sequence, `/Guide/1.png` through `/Guide/4.png`.
    pub fn sequence() -> Vec<GuideImage> {
        (0..GUIDE_IMAGE_COUNT)
            .map(|index| GuideImage {
                index,
                src: format!("/Guide/{}.png", index + 1),
                reveal: RevealPolicy::for_guide_index(index),
            })
            .collect()
    }

    pub fn alt(&self) -> String {
        format!("가이드 이미지 {}", self.index + 1)
    }

    /// Only the first image anchors the call-to-action controls
    pub fn has_controls(&self) -> bool {
        self.index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_four_in_order() {
        let seq = GuideImage::sequence();
        assert_eq!(seq.len(), GUIDE_IMAGE_COUNT);
        let srcs: Vec<_> = seq.iter().map(|g| g.src.as_str()).collect();
        assert_eq!(srcs, vec!["/Guide/1.png", "/Guide/2.png", "/Guide/3.png", "/Guide/4.png"]);
    }

    #[test]
    fn offsets_per_index() {
        assert_eq!(EntranceOffset::for_guide_index(0), EntranceOffset::rise(50));
        assert_eq!(EntranceOffset::for_guide_index(1), EntranceOffset::slide(-100));
        assert_eq!(EntranceOffset::for_guide_index(2), EntranceOffset::slide(100));
        assert_eq!(EntranceOffset::for_guide_index(3), EntranceOffset::rise(100));
    }

    #[test]
    fn delay_is_linear_in_index() {
        let delays: Vec<_> = GuideImage::sequence().iter().map(|g| g.reveal.delay_ms).collect();
        assert_eq!(delays, vec![0, 300, 600, 900]);
        assert!(GuideImage::sequence().iter().all(|g| g.reveal.once));
    }

    #[test]
    fn only_first_has_controls() {
        let with_controls: Vec<_> = GuideImage::sequence()
            .into_iter()
            .filter(|g| g.has_controls())
            .map(|g| g.index)
            .collect();
        assert_eq!(with_controls, vec![0]);
    }

    #[test]
    fn styles() {
        let policy = RevealPolicy::for_guide_index(1);
        assert_eq!(
            policy.initial_style(),
            "opacity: 0; transform: translate(-100px, 0px); \
             transition: opacity 500ms ease-out 300ms, transform 500ms ease-out 300ms;"
        );
        assert!(policy.revealed_style().starts_with("opacity: 1; transform: translate(0px, 0px);"));
        assert_eq!(policy.style(false), policy.initial_style());
    }

    #[test]
    fn section_policy() {
        let policy = RevealPolicy::material_section();
        assert_eq!(policy.offset, EntranceOffset::rise(50));
        assert_eq!(policy.duration_ms, 600);
        assert_eq!(policy.delay_ms, 0);
    }
}
