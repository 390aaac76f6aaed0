use serde::{Deserialize, Serialize};

use crate::core::{CENTER_PAGE_INDEX, DaySpan, WINDOW_BUFFER_SIZE};

/// Horizontal scroll position reported once momentum scrolling stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTelemetry {
    pub offset_x: f64,
    pub content_width: f64,
}

impl ScrollTelemetry {
    #[must_use]
    pub fn new(offset_x: f64, content_width: f64) -> Self {
        Self {
            offset_x,
            content_width,
        }
    }

    /// Telemetry of a surface resting on `page` of a buffer `content_width` wide.
    #[must_use]
    pub fn at_page(page: f64, content_width: f64) -> Self {
        Self::new(
            page * content_width / WINDOW_BUFFER_SIZE as f64,
            content_width,
        )
    }

    /// Telemetry that cannot be mapped to a page: empty or negative content,
    /// or non-finite values.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.offset_x.is_finite() || !self.content_width.is_finite() || self.content_width <= 0.0
    }

    /// Continuous page position in `[0, 5)` for in-bounds offsets; `2.0` is
    /// the center window.
    ///
    /// Finite inputs whose ratio overflows (a huge offset over a tiny width)
    /// have no page either.
    #[must_use]
    pub fn logical_page(self) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        let page = self.offset_x / self.content_width * WINDOW_BUFFER_SIZE as f64;
        page.is_finite().then_some(page)
    }

    /// Signed number of pages between the settle point and the center window.
    ///
    /// Saturates at the `i64` bounds; callers reject such deltas when they
    /// turn them into days.
    #[must_use]
    pub fn page_delta(self) -> Option<i64> {
        self.logical_page()
            .map(|page| resolve_page_band(page).saturating_sub(CENTER_PAGE_INDEX as i64))
    }
}

/// Classifies a logical page into its half-open band `[k - 0.5, k + 0.5)`.
///
/// Paging surfaces settle on page boundaries but offset/width division can
/// land a hair off the integer; banding absorbs that error.
#[must_use]
pub fn resolve_page_band(logical_page: f64) -> i64 {
    (logical_page + 0.5).floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Previous,
    Next,
}

impl SwipeDirection {
    #[must_use]
    pub fn from_page_delta(page_delta: i64) -> Option<Self> {
        match page_delta.signum() {
            -1 => Some(Self::Previous),
            1 => Some(Self::Next),
            _ => None,
        }
    }
}

/// Request to reposition the scroll surface on the center window.
///
/// Hosts must apply it after the current render/layout pass, never inline
/// with the state change that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecenterRequest {
    pub page_index: usize,
    pub day_span: DaySpan,
}

impl RecenterRequest {
    #[must_use]
    pub fn center(day_span: DaySpan) -> Self {
        Self {
            page_index: CENTER_PAGE_INDEX,
            day_span,
        }
    }

    /// Horizontal offset to scroll to when each window is `page_width` wide.
    #[must_use]
    pub fn offset_for_page_width(self, page_width: f64) -> f64 {
        self.page_index as f64 * page_width
    }

    /// Horizontal offset to scroll to for the full buffer width.
    #[must_use]
    pub fn offset_for_content_width(self, content_width: f64) -> f64 {
        self.offset_for_page_width(content_width / WINDOW_BUFFER_SIZE as f64)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{RecenterRequest, ScrollTelemetry, SwipeDirection, resolve_page_band};
    use crate::core::DaySpan;

    #[test]
    fn logical_page_scales_offset_by_buffer_size() {
        let telemetry = ScrollTelemetry::new(600.0, 1500.0);
        assert_relative_eq!(telemetry.logical_page().expect("page"), 2.0);

        let telemetry = ScrollTelemetry::new(0.0, 1500.0);
        assert_relative_eq!(telemetry.logical_page().expect("page"), 0.0);

        let telemetry = ScrollTelemetry::at_page(3.0, 1575.0);
        assert_relative_eq!(telemetry.logical_page().expect("page"), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_widths_have_no_logical_page() {
        assert!(ScrollTelemetry::new(100.0, 0.0).logical_page().is_none());
        assert!(ScrollTelemetry::new(100.0, -20.0).logical_page().is_none());
        assert!(ScrollTelemetry::new(f64::NAN, 100.0).logical_page().is_none());
        assert!(
            ScrollTelemetry::new(10.0, f64::INFINITY)
                .logical_page()
                .is_none()
        );
    }

    #[test]
    fn bands_absorb_rounding_error() {
        assert_eq!(resolve_page_band(1.999_999_9), 2);
        assert_eq!(resolve_page_band(2.000_000_1), 2);
        assert_eq!(resolve_page_band(0.999_999), 1);
        assert_eq!(resolve_page_band(3.000_001), 3);
        assert_eq!(resolve_page_band(1.5), 2);
        assert_eq!(resolve_page_band(2.5), 3);
        assert_eq!(resolve_page_band(0.0), 0);
    }

    #[test]
    fn page_delta_is_relative_to_center() {
        assert_eq!(ScrollTelemetry::at_page(0.0, 1000.0).page_delta(), Some(-2));
        assert_eq!(ScrollTelemetry::at_page(1.0, 1000.0).page_delta(), Some(-1));
        assert_eq!(ScrollTelemetry::at_page(2.0, 1000.0).page_delta(), Some(0));
        assert_eq!(ScrollTelemetry::at_page(4.0, 1000.0).page_delta(), Some(2));
        assert_eq!(ScrollTelemetry::new(5.0, 0.0).page_delta(), None);
    }

    #[test]
    fn overflowing_ratios_have_no_page() {
        assert!(ScrollTelemetry::new(-f64::MAX, 1.0).logical_page().is_none());
        assert!(ScrollTelemetry::new(f64::MAX, 1e-300).logical_page().is_none());
        assert_eq!(ScrollTelemetry::new(-f64::MAX, 1.0).page_delta(), None);
    }

    #[test]
    fn huge_finite_pages_saturate_instead_of_wrapping() {
        assert_eq!(ScrollTelemetry::new(-1e300, 1.0).page_delta(), Some(i64::MIN));
        assert_eq!(ScrollTelemetry::new(1e300, 1.0).page_delta(), Some(i64::MAX - 2));
    }

    #[test]
    fn direction_follows_delta_sign() {
        assert_eq!(SwipeDirection::from_page_delta(-2), Some(SwipeDirection::Previous));
        assert_eq!(SwipeDirection::from_page_delta(1), Some(SwipeDirection::Next));
        assert_eq!(SwipeDirection::from_page_delta(0), None);
    }

    #[test]
    fn recenter_offset_targets_page_two() {
        let request = RecenterRequest::center(DaySpan::Seven);
        assert_eq!(request.page_index, 2);
        assert_relative_eq!(request.offset_for_page_width(315.0), 630.0);
        assert_relative_eq!(request.offset_for_content_width(1575.0), 630.0);
    }
}
