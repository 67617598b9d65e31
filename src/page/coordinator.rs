// Section navigation and reveal coordinator
//
// Owns the notion of "which section is active", mirrors it into the nav-dot
// rail, and drives the one-time reveal animation per section. The coordinator
// never touches the terminal: it consumes scroll offsets and emits state that
// the render layer reads back.
//
// All state here is mutated from the single event-loop task, so there is no
// locking. Absence conditions (empty section list, out-of-range indices,
// probe outside every section) degrade to silent no-ops.

use super::visibility::visibility_ratio;
use std::time::{Duration, Instant};

/// Visibility ratio at which a pending section reveals itself.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Trailing-edge debounce window for scroll-driven recomputation.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Duration of the enter animation once a section reveals.
pub const REVEAL_ANIMATION: Duration = Duration::from_millis(600);

/// Reveal lifecycle of a single section. The transition is one-way:
/// once revealed, a section never goes back to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// One page section: a fixed row span plus its reveal state.
#[derive(Debug, Clone)]
pub struct Section {
    top: usize,
    height: usize,
    reveal: RevealState,
    revealed_at: Option<Instant>,
}

impl Section {
    pub fn new(top: usize, height: usize) -> Self {
        Self {
            top,
            height,
            reveal: RevealState::Pending,
            revealed_at: None,
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    /// Whether the probe row falls inside this section's span `[top, top + height)`.
    fn contains(&self, probe: usize) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Index of the section whose span contains the viewport midpoint.
///
/// The probe point is `scroll_y + viewport_height / 2`. Sections are scanned
/// in document order and the first match wins, so overlapping spans favor the
/// earlier section. Returns `None` when the probe lands in the gap above the
/// first section or below the last.
pub fn compute_active_section(
    scroll_y: usize,
    viewport_height: usize,
    sections: &[Section],
) -> Option<usize> {
    let probe = scroll_y + viewport_height / 2;
    sections.iter().position(|s| s.contains(probe))
}

pub struct Coordinator {
    sections: Vec<Section>,
    /// Index of the active nav dot. At most one is active; `None` only
    /// before the first recomputation lands on a section.
    active: Option<usize>,
    /// Single-slot debounce: rearmed on every scroll signal, fires once
    /// after the page has been still for the debounce window.
    debounce_deadline: Option<Instant>,
}

impl Coordinator {
    /// Build from `(top, height)` row spans in document order.
    ///
    /// The first section is the hero: it starts revealed and is never
    /// watched for visibility, matching a page where the top of the
    /// document is visible from the first paint.
    pub fn new(geometry: &[(usize, usize)]) -> Self {
        let mut sections: Vec<Section> = geometry
            .iter()
            .map(|&(top, height)| Section::new(top, height))
            .collect();

        if let Some(hero) = sections.first_mut() {
            hero.reveal = RevealState::Revealed;
            // No revealed_at: the hero never animates in.
        }

        Self {
            sections,
            active: None,
            debounce_deadline: None,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Total height of the virtual document in rows.
    pub fn doc_height(&self) -> usize {
        self.sections
            .last()
            .map(|s| s.top + s.height)
            .unwrap_or(0)
    }

    /// Replace section geometry after a relayout (terminal resize).
    /// Reveal state survives; a mismatched count falls back to a rebuild.
    pub fn update_geometry(&mut self, geometry: &[(usize, usize)]) {
        if geometry.len() != self.sections.len() {
            *self = Self::new(geometry);
            return;
        }
        for (section, &(top, height)) in self.sections.iter_mut().zip(geometry) {
            section.top = top;
            section.height = height;
        }
    }

    /// Synchronous recomputation: resolve the active section for the current
    /// scroll position and mirror it into the nav dots. Called once at
    /// startup so the correct dot is lit before any scroll event fires.
    pub fn recompute(&mut self, scroll_y: usize, viewport_height: usize) {
        let index = compute_active_section(scroll_y, viewport_height, &self.sections);
        self.set_active_indicator(index);
    }

    /// Mirror `index` into the nav-dot rail.
    ///
    /// A valid index clears every dot and lights exactly one. `None` and
    /// out-of-range indices leave the previous state untouched: this is a
    /// deliberate idempotent no-op, not an error.
    pub fn set_active_indicator(&mut self, index: Option<usize>) {
        match index {
            Some(i) if i < self.sections.len() => self.active = Some(i),
            _ => {}
        }
    }

    /// Row offset a smooth scroll should target when the user picks a nav
    /// dot. Does not touch the active flag; that updates asynchronously via
    /// the scroll-driven recomputation once the scroll settles. `None` for
    /// indices without a section.
    pub fn indicator_target(&self, index: usize) -> Option<usize> {
        self.sections.get(index).map(|s| s.top)
    }

    /// Register a scroll signal: rearm the trailing-edge debounce timer.
    /// Bursts of scrolling collapse into a single recomputation once the
    /// page has been still for the debounce window.
    pub fn on_scroll(&mut self, now: Instant) {
        if self.sections.is_empty() {
            return;
        }
        self.debounce_deadline = Some(now + SCROLL_DEBOUNCE);
    }

    /// Fire the pending recomputation if its deadline has passed.
    /// Returns true when a recomputation ran.
    pub fn poll_debounce(&mut self, now: Instant, scroll_y: usize, viewport_height: usize) -> bool {
        match self.debounce_deadline {
            Some(deadline) if now >= deadline => {
                self.debounce_deadline = None;
                self.recompute(scroll_y, viewport_height);
                true
            }
            _ => false,
        }
    }

    /// Process a visibility report for one section.
    ///
    /// Crossing the threshold flips `Pending -> Revealed` exactly once;
    /// later reports, including a ratio of zero, never reverse it. The hero
    /// is already revealed so reports for index 0 are naturally ignored.
    /// Returns true when the section transitioned on this call.
    pub fn reveal_on_visible(&mut self, index: usize, ratio: f64, now: Instant) -> bool {
        let Some(section) = self.sections.get_mut(index) else {
            return false;
        };
        if section.reveal == RevealState::Pending && ratio >= REVEAL_THRESHOLD {
            section.reveal = RevealState::Revealed;
            section.revealed_at = Some(now);
            tracing::debug!(section = index, "section revealed");
            return true;
        }
        false
    }

    /// Report visibility for every watched section at the current scroll
    /// position. Sections at index > 0 are watched; the hero is excluded.
    pub fn observe(&mut self, scroll_y: usize, viewport_height: usize, now: Instant) {
        for index in 1..self.sections.len() {
            let (top, height) = {
                let s = &self.sections[index];
                (s.top, s.height)
            };
            let ratio = visibility_ratio(top, height, scroll_y, viewport_height);
            self.reveal_on_visible(index, ratio, now);
        }
    }

    /// Enter-animation progress for a section, `0.0..=1.0`.
    ///
    /// `None` while pending (the section renders as empty space). Sections
    /// revealed without a timestamp (the hero) report full progress.
    pub fn reveal_progress(&self, index: usize, now: Instant) -> Option<f64> {
        let section = self.sections.get(index)?;
        match (section.reveal, section.revealed_at) {
            (RevealState::Pending, _) => None,
            (RevealState::Revealed, None) => Some(1.0),
            (RevealState::Revealed, Some(at)) => {
                let elapsed = now.saturating_duration_since(at);
                if elapsed >= REVEAL_ANIMATION {
                    Some(1.0)
                } else {
                    Some(elapsed.as_secs_f64() / REVEAL_ANIMATION.as_secs_f64())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four full-height sections, viewport of 800 rows.
    /// Matches the worked scenario: spans [0,800) [800,1600) [1600,2400) [2400,3200).
    fn four_sections() -> Coordinator {
        Coordinator::new(&[(0, 800), (800, 800), (1600, 800), (2400, 800)])
    }

    #[test]
    fn probe_point_picks_midpoint_section() {
        let c = four_sections();

        // Scroll 1000 -> probe 1400 -> section 1
        assert_eq!(compute_active_section(1000, 800, c.sections()), Some(1));
        // Scroll 1600 -> probe 2000 -> section 2
        assert_eq!(compute_active_section(1600, 800, c.sections()), Some(2));
        // Scroll 0 -> probe 400 -> section 0
        assert_eq!(compute_active_section(0, 800, c.sections()), Some(0));
    }

    #[test]
    fn probe_outside_every_section_returns_none() {
        // Document starts at row 100: probe above the first section
        let c = Coordinator::new(&[(100, 50), (150, 50)]);
        assert_eq!(compute_active_section(0, 40, c.sections()), None);

        // Probe below the last section
        assert_eq!(compute_active_section(500, 40, c.sections()), None);
    }

    #[test]
    fn overlapping_spans_favor_document_order() {
        let c = Coordinator::new(&[(0, 100), (50, 100)]);
        // Probe 60 is inside both; the earlier section wins
        assert_eq!(compute_active_section(10, 100, c.sections()), Some(0));
    }

    #[test]
    fn recompute_lights_exactly_one_dot() {
        let mut c = four_sections();
        c.recompute(1000, 800);
        assert_eq!(c.active(), Some(1));

        c.recompute(1600, 800);
        assert_eq!(c.active(), Some(2));
    }

    #[test]
    fn none_and_out_of_range_leave_previous_dot() {
        let mut c = four_sections();
        c.recompute(1000, 800);
        assert_eq!(c.active(), Some(1));

        // None: no-op
        c.set_active_indicator(None);
        assert_eq!(c.active(), Some(1));

        // Out of range: no-op
        c.set_active_indicator(Some(99));
        assert_eq!(c.active(), Some(1));
    }

    #[test]
    fn zero_dots_active_before_first_hit() {
        // Document starts well below row 0; the startup probe misses
        let mut c = Coordinator::new(&[(5000, 100)]);
        c.recompute(0, 40);
        assert_eq!(c.active(), None);
    }

    #[test]
    fn indicator_target_is_section_top() {
        let c = four_sections();
        // Selecting dot 2 targets offset 1600 regardless of scroll position
        assert_eq!(c.indicator_target(2), Some(1600));
        assert_eq!(c.indicator_target(7), None);
    }

    #[test]
    fn debounce_coalesces_scroll_bursts() {
        let mut c = four_sections();
        let t0 = Instant::now();

        // A burst of scroll signals inside one window
        c.on_scroll(t0);
        c.on_scroll(t0 + Duration::from_millis(30));
        c.on_scroll(t0 + Duration::from_millis(60));

        // Still inside the window of the last signal: nothing fires
        assert!(!c.poll_debounce(t0 + Duration::from_millis(120), 1000, 800));
        assert_eq!(c.active(), None);

        // 100ms after the last signal: fires exactly once
        assert!(c.poll_debounce(t0 + Duration::from_millis(160), 1000, 800));
        assert_eq!(c.active(), Some(1));

        // No pending timer left
        assert!(!c.poll_debounce(t0 + Duration::from_millis(500), 0, 800));
        assert_eq!(c.active(), Some(1));
    }

    #[test]
    fn debounce_uses_state_at_fire_time() {
        let mut c = four_sections();
        let t0 = Instant::now();

        // Scroll signals arrive while the offset keeps moving; the
        // recomputation sees whatever offset is current when it fires.
        c.on_scroll(t0);
        c.on_scroll(t0 + Duration::from_millis(50));
        assert!(c.poll_debounce(t0 + Duration::from_millis(200), 2500, 800));
        assert_eq!(c.active(), Some(3));
    }

    #[test]
    fn reveal_is_irreversible() {
        let mut c = four_sections();
        let now = Instant::now();

        assert_eq!(c.section(1).unwrap().reveal(), RevealState::Pending);

        // 0.35 crosses the threshold
        assert!(c.reveal_on_visible(1, 0.35, now));
        assert_eq!(c.section(1).unwrap().reveal(), RevealState::Revealed);

        // A later report of zero does not revert it, and does not
        // restart the animation
        assert!(!c.reveal_on_visible(1, 0.0, now + Duration::from_secs(1)));
        assert_eq!(c.section(1).unwrap().reveal(), RevealState::Revealed);
        assert_eq!(c.reveal_progress(1, now + Duration::from_secs(1)), Some(1.0));
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut c = four_sections();
        assert!(!c.reveal_on_visible(2, 0.29, Instant::now()));
        assert_eq!(c.section(2).unwrap().reveal(), RevealState::Pending);
        assert_eq!(c.reveal_progress(2, Instant::now()), None);
    }

    #[test]
    fn hero_starts_revealed_and_is_not_watched() {
        let mut c = four_sections();
        assert_eq!(c.section(0).unwrap().reveal(), RevealState::Revealed);
        assert_eq!(c.reveal_progress(0, Instant::now()), Some(1.0));

        // Scrolled to the bottom, the hero is fully outside the viewport;
        // observing must not disturb it
        c.observe(2400, 800, Instant::now());
        assert_eq!(c.section(0).unwrap().reveal(), RevealState::Revealed);
    }

    #[test]
    fn observe_reveals_sufficiently_visible_sections() {
        let mut c = four_sections();
        let now = Instant::now();

        // Viewport [600, 1400): section 1 shows 600 of 800 rows = 0.75
        c.observe(600, 800, now);
        assert_eq!(c.section(1).unwrap().reveal(), RevealState::Revealed);
        // Section 2 shows nothing yet
        assert_eq!(c.section(2).unwrap().reveal(), RevealState::Pending);
    }

    #[test]
    fn reveal_progress_advances_with_time() {
        let mut c = four_sections();
        let t0 = Instant::now();
        c.reveal_on_visible(1, 0.5, t0);

        let halfway = c.reveal_progress(1, t0 + Duration::from_millis(300)).unwrap();
        assert!(halfway > 0.4 && halfway < 0.6);
        assert_eq!(c.reveal_progress(1, t0 + Duration::from_secs(2)), Some(1.0));
    }

    #[test]
    fn empty_page_is_inert() {
        let mut c = Coordinator::new(&[]);
        let now = Instant::now();

        c.recompute(0, 40);
        c.on_scroll(now);
        assert!(!c.poll_debounce(now + Duration::from_secs(1), 0, 40));
        c.observe(0, 40, now);
        assert!(!c.reveal_on_visible(0, 1.0, now));

        assert_eq!(c.active(), None);
        assert_eq!(c.indicator_target(0), None);
        assert_eq!(c.doc_height(), 0);
    }

    #[test]
    fn geometry_update_preserves_reveals() {
        let mut c = four_sections();
        let now = Instant::now();
        c.reveal_on_visible(1, 0.5, now);
        c.recompute(1000, 800);

        // Relayout after a resize: smaller rows, same sections
        c.update_geometry(&[(0, 40), (40, 40), (80, 40), (120, 40)]);
        assert_eq!(c.section(1).unwrap().reveal(), RevealState::Revealed);
        assert_eq!(c.section(2).unwrap().reveal(), RevealState::Pending);
        assert_eq!(c.active(), Some(1));
        assert_eq!(c.doc_height(), 160);
    }
}
