/// Default offset (px) past which the navbar switches to its compact presentation
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether the page has scrolled past the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    is_scrolled: bool,
}

impl ScrollState {
    pub const TOP: ScrollState = ScrollState { is_scrolled: false };
    pub const SCROLLED: ScrollState = ScrollState { is_scrolled: true };

    /// Strictly greater than the threshold counts as scrolled.
    /// NaN offsets compare false and keep the expanded presentation.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        ScrollState {
            is_scrolled: offset > threshold,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary() {
        let t = DEFAULT_SCROLL_THRESHOLD_PX;
        assert!(!ScrollState::from_offset(50.0, t).is_scrolled());
        assert!(ScrollState::from_offset(51.0, t).is_scrolled());
        assert!(ScrollState::from_offset(50.5, t).is_scrolled());
    }

    #[test]
    fn test_offsets_at_or_below_threshold_are_top() {
        for offset in [0.0, 1.0, 25.0, 49.9, 50.0, -10.0] {
            assert_eq!(
                ScrollState::from_offset(offset, DEFAULT_SCROLL_THRESHOLD_PX),
                ScrollState::TOP,
                "offset {}",
                offset
            );
        }
    }

    #[test]
    fn test_offsets_above_threshold_are_scrolled() {
        for offset in [51.0, 100.0, 5000.0] {
            assert_eq!(
                ScrollState::from_offset(offset, DEFAULT_SCROLL_THRESHOLD_PX),
                ScrollState::SCROLLED
            );
        }
    }

    #[test]
    fn test_nan_offset_is_top() {
        assert_eq!(ScrollState::from_offset(f64::NAN, 50.0), ScrollState::TOP);
    }

    #[test]
    fn test_default_is_top() {
        assert_eq!(ScrollState::default(), ScrollState::TOP);
    }
}
