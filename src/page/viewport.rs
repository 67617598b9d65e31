// Viewport - scroll offset over the virtual document
//
// Owns the vertical scroll position and the eased smooth-scroll animation
// used when the user jumps to a section from the nav dots or the menu.
// Manual scrolling moves the offset immediately and cancels any glide in
// flight; the glide itself is fire-and-forget, advanced from the event-loop
// tick until it lands.

use std::time::{Duration, Instant};

/// How long a programmatic jump takes to settle.
pub const GLIDE_DURATION: Duration = Duration::from_millis(450);

/// An in-flight smooth scroll.
#[derive(Debug, Clone)]
struct Glide {
    from: usize,
    to: usize,
    started: Instant,
}

/// Symmetric ease-in-out, quadratic on both halves.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Debug)]
pub struct Viewport {
    scroll_y: usize,
    height: usize,
    doc_height: usize,
    glide: Option<Glide>,
}

impl Viewport {
    pub fn new(height: usize, doc_height: usize) -> Self {
        Self {
            scroll_y: 0,
            height,
            doc_height,
            glide: None,
        }
    }

    pub fn scroll_y(&self) -> usize {
        self.scroll_y
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    fn max_scroll(&self) -> usize {
        self.doc_height.saturating_sub(self.height)
    }

    /// Adopt new dimensions after a relayout. The offset is re-clamped;
    /// any glide keeps running toward its (re-clamped) target.
    pub fn resize(&mut self, height: usize, doc_height: usize) {
        self.height = height;
        self.doc_height = doc_height;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Manual scroll by a signed row delta. Cancels any glide: the user
    /// took control. Returns true when the offset actually moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.glide = None;
        let target = if delta < 0 {
            self.scroll_y.saturating_sub(delta.unsigned_abs())
        } else {
            (self.scroll_y + delta as usize).min(self.max_scroll())
        };
        let moved = target != self.scroll_y;
        self.scroll_y = target;
        moved
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-(self.height.max(1) as isize))
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_by(self.height.max(1) as isize)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.glide = None;
        let moved = self.scroll_y != 0;
        self.scroll_y = 0;
        moved
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.glide = None;
        let bottom = self.max_scroll();
        let moved = self.scroll_y != bottom;
        self.scroll_y = bottom;
        moved
    }

    /// Start a fire-and-forget eased scroll toward `target`. A new request
    /// replaces any glide already in flight. The caller does not await
    /// completion; `tick` advances the animation.
    pub fn smooth_scroll_to(&mut self, target: usize, now: Instant) {
        let to = target.min(self.max_scroll());
        if to == self.scroll_y {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            from: self.scroll_y,
            to,
            started: now,
        });
    }

    /// Advance the glide, if any. Returns true when the offset changed,
    /// which the caller treats like an organic scroll signal.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(glide) = self.glide.clone() else {
            return false;
        };

        let elapsed = now.saturating_duration_since(glide.started);
        let next = if elapsed >= GLIDE_DURATION {
            self.glide = None;
            glide.to
        } else {
            let t = elapsed.as_secs_f64() / GLIDE_DURATION.as_secs_f64();
            let eased = ease_in_out(t);
            let from = glide.from as f64;
            let to = glide.to as f64;
            (from + (to - from) * eased).round() as usize
        };

        let moved = next != self.scroll_y;
        self.scroll_y = next;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_document() {
        let mut v = Viewport::new(40, 200);
        assert!(!v.scroll_by(-5)); // already at top
        assert!(v.scroll_by(1000));
        assert_eq!(v.scroll_y(), 160); // doc 200 - viewport 40
        assert!(!v.scroll_by(1)); // pinned at bottom
    }

    #[test]
    fn document_shorter_than_viewport_never_scrolls() {
        let mut v = Viewport::new(40, 20);
        assert!(!v.scroll_by(10));
        assert_eq!(v.scroll_y(), 0);
    }

    #[test]
    fn paging_moves_by_viewport_height() {
        let mut v = Viewport::new(40, 400);
        assert!(v.page_down());
        assert_eq!(v.scroll_y(), 40);
        assert!(v.page_up());
        assert_eq!(v.scroll_y(), 0);
    }

    #[test]
    fn glide_lands_on_target() {
        let mut v = Viewport::new(800, 3200);
        let t0 = Instant::now();

        v.smooth_scroll_to(1600, t0);
        assert!(v.is_gliding());

        // Partway through: strictly between start and target
        v.tick(t0 + GLIDE_DURATION / 2);
        assert!(v.scroll_y() > 0 && v.scroll_y() < 1600);

        // After the full duration: exactly at target, glide finished
        assert!(v.tick(t0 + GLIDE_DURATION));
        assert_eq!(v.scroll_y(), 1600);
        assert!(!v.is_gliding());
        assert!(!v.tick(t0 + GLIDE_DURATION * 2));
    }

    #[test]
    fn manual_scroll_cancels_glide() {
        let mut v = Viewport::new(800, 3200);
        let t0 = Instant::now();

        v.smooth_scroll_to(2400, t0);
        v.scroll_by(1);
        assert!(!v.is_gliding());
        assert_eq!(v.scroll_y(), 1);
    }

    #[test]
    fn glide_target_clamped_to_document() {
        let mut v = Viewport::new(800, 1000);
        let t0 = Instant::now();
        v.smooth_scroll_to(5000, t0);
        v.tick(t0 + GLIDE_DURATION);
        assert_eq!(v.scroll_y(), 200);
    }

    #[test]
    fn glide_to_current_offset_is_a_no_op() {
        let mut v = Viewport::new(800, 3200);
        v.smooth_scroll_to(0, Instant::now());
        assert!(!v.is_gliding());
    }

    #[test]
    fn easing_is_monotonic_and_bounded() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let e = ease_in_out(t);
            assert!((0.0..=1.0).contains(&e));
            assert!(e >= prev);
            prev = e;
        }
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
    }
}
