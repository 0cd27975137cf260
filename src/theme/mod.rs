//! Theme for the recycling guide.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

#[cfg(test)]
mod tests {
    use super::colors::*;
    use super::GLOBAL_STYLES;

    #[test]
    fn palette_matches_stylesheet() {
        for color in [LEAF, LEAF_DARK, PAPER, INK, INK_MUTED, STONE, OVERLAY] {
            assert!(GLOBAL_STYLES.contains(color), "missing {color}");
        }
    }
}
