// Scroll position tracking for the grid viewport
// Turns raw geometry into an edge-triggered "at bottom" signal

use tracing::{debug, trace};

/// Distance from the bottom edge, in viewport units, under which the grid
/// counts as scrolled to the bottom.
pub const DEFAULT_BOTTOM_THRESHOLD: f64 = 50.0;

/// Viewport geometry sampled on each scroll frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub content_height: f64,
    pub viewport_height: f64,
    pub offset_from_top: f64,
}

impl GeometrySnapshot {
    pub fn new(content_height: f64, viewport_height: f64, offset_from_top: f64) -> Self {
        Self {
            content_height,
            viewport_height,
            offset_from_top,
        }
    }

    pub fn distance_from_bottom(&self) -> f64 {
        self.content_height - (self.offset_from_top + self.viewport_height)
    }

    fn is_finite(&self) -> bool {
        self.content_height.is_finite()
            && self.viewport_height.is_finite()
            && self.offset_from_top.is_finite()
    }
}

#[derive(Debug, Clone)]
pub struct ScrollPositionTracker {
    threshold: f64,
    at_bottom: bool,
}

/// Non-finite or negative thresholds fall back to the default.
pub fn sanitize_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() && threshold >= 0.0 {
        threshold
    } else {
        DEFAULT_BOTTOM_THRESHOLD
    }
}

impl ScrollPositionTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
            at_bottom: false,
        }
    }

    /// Feed one geometry sample.
    ///
    /// Returns `Some(at_bottom)` only when the signal flips; repeated samples at
    /// a stable position return `None`. Non-finite samples are ignored.
    pub fn observe(&mut self, snapshot: GeometrySnapshot) -> Option<bool> {
        if !snapshot.is_finite() {
            trace!(?snapshot, "Ignoring non-finite scroll geometry");
            return None;
        }

        let at_bottom = snapshot.distance_from_bottom() < self.threshold;
        if at_bottom == self.at_bottom {
            return None;
        }

        self.at_bottom = at_bottom;
        debug!("At-bottom signal: {}", at_bottom);
        Some(at_bottom)
    }

    pub fn is_at_bottom(&self) -> bool {
        self.at_bottom
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ScrollPositionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_BOTTOM_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_at_bottom() {
        let tracker = ScrollPositionTracker::default();
        assert!(!tracker.is_at_bottom());
        assert_eq!(tracker.threshold(), 50.0);
    }

    #[test]
    fn test_threshold_boundary() {
        let mut tracker = ScrollPositionTracker::default();

        // Exactly 50 away is not at the bottom
        assert_eq!(tracker.observe(GeometrySnapshot::new(1000.0, 400.0, 550.0)), None);
        assert!(!tracker.is_at_bottom());

        // 49 away is
        assert_eq!(
            tracker.observe(GeometrySnapshot::new(1000.0, 400.0, 551.0)),
            Some(true)
        );
        assert!(tracker.is_at_bottom());
    }

    #[test]
    fn test_emits_once_per_flip() {
        let mut tracker = ScrollPositionTracker::default();
        let bottom = GeometrySnapshot::new(2000.0, 800.0, 1200.0);
        let top = GeometrySnapshot::new(2000.0, 800.0, 0.0);

        let emitted: Vec<bool> = [bottom, bottom, bottom, top, top, bottom]
            .into_iter()
            .filter_map(|s| tracker.observe(s))
            .collect();

        assert_eq!(emitted, vec![true, false, true]);
    }

    #[test]
    fn test_short_content_is_at_bottom() {
        // Content shorter than the viewport has a negative distance
        let mut tracker = ScrollPositionTracker::default();
        assert_eq!(
            tracker.observe(GeometrySnapshot::new(300.0, 800.0, 0.0)),
            Some(true)
        );
    }

    #[test]
    fn test_non_finite_ignored() {
        let mut tracker = ScrollPositionTracker::default();
        tracker.observe(GeometrySnapshot::new(1000.0, 400.0, 600.0));
        assert!(tracker.is_at_bottom());

        assert_eq!(
            tracker.observe(GeometrySnapshot::new(f64::NAN, 400.0, 0.0)),
            None
        );
        assert!(tracker.is_at_bottom());
    }

    #[test]
    fn test_invalid_threshold_uses_default() {
        for threshold in [f64::NAN, f64::INFINITY, -10.0] {
            let mut tracker = ScrollPositionTracker::new(threshold);
            assert_eq!(tracker.threshold(), DEFAULT_BOTTOM_THRESHOLD);
            assert_eq!(
                tracker.observe(GeometrySnapshot::new(100.0, 800.0, 0.0)),
                Some(true)
            );
        }
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = ScrollPositionTracker::new(200.0);
        assert_eq!(
            tracker.observe(GeometrySnapshot::new(1000.0, 400.0, 450.0)),
            Some(true)
        );
    }
}
