//! Section pager and swipe recognition for the grouped-orders views.

/// Minimum horizontal travel before a gesture counts as a swipe.
pub const SWIPE_MIN_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDir {
    Left,
    Right,
}

/// Tracks one touch/mouse gesture from its start point and classifies it on
/// release. Vertical scrolls (|dy| >= |dx|) are not swipes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn end(&mut self, x: f64, y: f64) -> Option<SwipeDir> {
        let (sx, sy) = self.start.take()?;
        let dx = x - sx;
        let dy = y - sy;
        if dx.abs() < SWIPE_MIN_PX || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0.0 { SwipeDir::Left } else { SwipeDir::Right })
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Current section index, clamped to the section list; no wrap-around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionPager {
    pub index: usize,
}

impl SectionPager {
    pub fn advance(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let next = self.index as i64 + delta as i64;
        self.index = next.clamp(0, len as i64 - 1) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_clamps_at_both_ends() {
        let mut p = SectionPager::default();
        p.advance(-1, 4);
        assert_eq!(p.index, 0);
        p.advance(1, 4);
        p.advance(1, 4);
        p.advance(1, 4);
        p.advance(1, 4);
        assert_eq!(p.index, 3);
    }

    #[test]
    fn pager_with_no_sections_stays_at_zero() {
        let mut p = SectionPager { index: 2 };
        p.advance(1, 0);
        assert_eq!(p.index, 0);
    }

    #[test]
    fn horizontal_travel_left_is_a_left_swipe() {
        let mut t = SwipeTracker::default();
        t.begin(300.0, 100.0);
        assert_eq!(t.end(200.0, 110.0), Some(SwipeDir::Left));
        // The gesture is consumed.
        assert_eq!(t.end(100.0, 110.0), None);
    }

    #[test]
    fn short_or_vertical_travel_is_not_a_swipe() {
        let mut t = SwipeTracker::default();
        t.begin(100.0, 100.0);
        assert_eq!(t.end(120.0, 100.0), None);
        t.begin(100.0, 100.0);
        assert_eq!(t.end(180.0, 300.0), None);
    }

    #[test]
    fn cancel_discards_the_start_point() {
        let mut t = SwipeTracker::default();
        t.begin(300.0, 100.0);
        t.cancel();
        assert_eq!(t.end(100.0, 100.0), None);
    }
}
