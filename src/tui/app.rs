// TUI application state
//
// One `App` owns every piece of mutable UI state: the page coordinator,
// the viewport, the open modal, the discount popup, search, and the
// carousel. All mutation happens from the event-loop task; components and
// views only read from here while rendering.

use super::components::toast::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use crate::catalog::{self, Product, SectionDef};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::page::coordinator::Coordinator;
use crate::page::viewport::Viewport;
use crate::search::{filter_products, SearchHit};
use crate::theme::{Theme, ThemeKind};
use std::time::Instant;

/// Fallback content height before the first layout pass.
const NOMINAL_VIEWPORT_ROWS: usize = 24;

pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (uptime display, popup timer)
    pub start_time: Instant,

    /// Page content, fixed at load
    pub section_defs: &'static [SectionDef],
    pub products: &'static [Product],

    /// Active-section tracking and reveal lifecycle
    pub coordinator: Coordinator,

    /// Scroll offset over the virtual document
    pub viewport: Viewport,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Effective configuration (written back on theme toggle)
    pub config: Config,

    /// Input handler for flexible key behavior
    pub input: InputHandler,

    /// Open modal, if any (absorbs all input)
    pub modal: Option<Modal>,

    /// Active toast overlay, if any
    pub toast: Option<Toast>,

    /// Discount popup session state: fired once per run, and once
    /// dismissed it stays dismissed for the rest of the run
    popup_fired: bool,
    popup_dismissed: bool,

    /// Product search
    pub search_active: bool,
    pub search_query: String,

    /// Product carousel: first visible card, and whether the "more" hint
    /// has served its purpose
    pub carousel_offset: usize,
    pub carousel_hint_seen: bool,

    /// Monotonic frame counter driving the hero animation
    pub animation_tick: u64,

    /// Captured tracing output for the logs overlay
    pub log_buffer: LogBuffer,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer) -> Self {
        let section_defs = catalog::sections();
        let geometry: Vec<(usize, usize)> = catalog::layout(section_defs, NOMINAL_VIEWPORT_ROWS)
            .iter()
            .map(|g| (g.top, g.height))
            .collect();

        let mut coordinator = Coordinator::new(&geometry);
        let viewport = Viewport::new(NOMINAL_VIEWPORT_ROWS, coordinator.doc_height());

        // One synchronous recomputation before any scroll event, so the
        // correct nav dot is lit from the first frame
        coordinator.recompute(viewport.scroll_y(), viewport.height());
        coordinator.observe(viewport.scroll_y(), viewport.height(), Instant::now());

        let theme_kind = ThemeKind::from_name(&config.theme);

        Self {
            should_quit: false,
            start_time: Instant::now(),
            section_defs,
            products: catalog::products(),
            coordinator,
            viewport,
            theme_kind,
            theme: theme_kind.theme(),
            config,
            input: InputHandler::default(),
            modal: None,
            toast: None,
            popup_fired: false,
            popup_dismissed: false,
            search_active: false,
            search_query: String::new(),
            carousel_offset: 0,
            carousel_hint_seen: false,
            animation_tick: 0,
            log_buffer,
        }
    }

    // ── layout ──────────────────────────────────────────────────────

    /// Relayout the page for a new content height. Called before the first
    /// frame and on terminal resize; reveal state and scroll position
    /// survive, and the active dot is recomputed immediately.
    pub fn sync_layout(&mut self, content_rows: usize, now: Instant) {
        let rows = content_rows.max(1);
        if rows == self.viewport.height() {
            return;
        }

        let geometry: Vec<(usize, usize)> = catalog::layout(self.section_defs, rows)
            .iter()
            .map(|g| (g.top, g.height))
            .collect();

        self.coordinator.update_geometry(&geometry);
        self.viewport.resize(rows, self.coordinator.doc_height());
        self.coordinator
            .recompute(self.viewport.scroll_y(), self.viewport.height());
        self.coordinator
            .observe(self.viewport.scroll_y(), self.viewport.height(), now);
    }

    // ── scrolling ───────────────────────────────────────────────────

    /// Bookkeeping after any scroll offset change, organic or glide:
    /// rearm the debounce and feed the reveal observer.
    fn after_scroll(&mut self, now: Instant) {
        self.coordinator.on_scroll(now);
        self.coordinator
            .observe(self.viewport.scroll_y(), self.viewport.height(), now);
    }

    pub fn scroll_by(&mut self, delta: isize, now: Instant) {
        if self.viewport.scroll_by(delta) {
            self.after_scroll(now);
        }
    }

    pub fn page_up(&mut self, now: Instant) {
        if self.viewport.page_up() {
            self.after_scroll(now);
        }
    }

    pub fn page_down(&mut self, now: Instant) {
        if self.viewport.page_down() {
            self.after_scroll(now);
        }
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        if self.viewport.scroll_to_top() {
            self.after_scroll(now);
        }
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) {
        if self.viewport.scroll_to_bottom() {
            self.after_scroll(now);
        }
    }

    /// Jump to a section the way a nav-dot click does: request a smooth
    /// scroll to its top edge. The active dot is not touched here; it
    /// updates through the debounced recomputation as the glide scrolls.
    /// Unknown indices are a silent no-op.
    pub fn select_section(&mut self, index: usize, now: Instant) {
        if let Some(top) = self.coordinator.indicator_target(index) {
            tracing::debug!(section = index, target = top, "nav jump");
            self.viewport.smooth_scroll_to(top, now);
        }
    }

    /// Tab order: jump to the section after the active one, clamped.
    pub fn select_next_section(&mut self, now: Instant) {
        let next = self.coordinator.active().map_or(0, |i| i + 1);
        if next < self.coordinator.len() {
            self.select_section(next, now);
        }
    }

    pub fn select_prev_section(&mut self, now: Instant) {
        if let Some(active) = self.coordinator.active() {
            if active > 0 {
                self.select_section(active - 1, now);
            }
        }
    }

    /// Whether the header should render its scrolled "shadow" rule.
    pub fn is_scrolled(&self) -> bool {
        self.viewport.scroll_y() > 0
    }

    // ── per-frame tick ──────────────────────────────────────────────

    /// Advance time-driven state: the glide, the debounce, the popup
    /// timer, toast expiry and the hero animation.
    pub fn tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);

        // A glide step counts as a scroll signal, same as organic input
        if self.viewport.tick(now) {
            self.after_scroll(now);
        }

        self.coordinator
            .poll_debounce(now, self.viewport.scroll_y(), self.viewport.height());

        // Expire first so the offer can replace a finished confirmation
        // on the same tick
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        self.maybe_fire_popup(now);
    }

    // ── discount popup ──────────────────────────────────────────────

    fn maybe_fire_popup(&mut self, now: Instant) {
        if self.popup_fired
            || self.popup_dismissed
            || !self.config.features.discount_popup
        {
            return;
        }
        let uptime = now.saturating_duration_since(self.start_time);
        // If a confirmation toast occupies the corner at the deadline, the
        // offer waits and retries on a later tick rather than being lost
        if uptime.as_secs() >= self.config.popup_delay_secs && self.toast.is_none() {
            self.popup_fired = true;
            self.toast = Some(Toast::sticky(
                "✶ 10% off your first order with code AURORA10 · x to close",
            ));
            tracing::debug!("discount popup shown");
        }
    }

    /// Dismiss the sticky discount popup. Stays dismissed for the rest of
    /// the run. No-op when no sticky toast is showing.
    pub fn dismiss_popup(&mut self) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_sticky()) {
            self.toast = None;
            self.popup_dismissed = true;
            return true;
        }
        false
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    // ── theme ───────────────────────────────────────────────────────

    /// Flip dark/light and persist the choice immediately.
    pub fn toggle_theme(&mut self) {
        self.theme_kind = self.theme_kind.toggle();
        self.theme = self.theme_kind.theme();
        self.config.theme = self.theme_kind.name().to_string();
        match self.config.save() {
            Ok(()) => tracing::info!(theme = self.theme_kind.name(), "theme saved"),
            Err(e) => tracing::warn!("could not persist theme: {e}"),
        }
    }

    // ── search ──────────────────────────────────────────────────────

    pub fn open_search(&mut self) {
        self.search_active = true;
    }

    /// Close the input; `keep` leaves the filter applied (Enter) while
    /// `!keep` restores the full grid (Esc).
    pub fn close_search(&mut self, keep: bool) {
        self.search_active = false;
        if !keep {
            self.search_query.clear();
        }
    }

    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
        self.carousel_offset = 0;
    }

    pub fn search_pop(&mut self) {
        self.search_query.pop();
        self.carousel_offset = 0;
    }

    /// The grid after the current filter. An empty query yields everything.
    pub fn filtered_products(&self) -> Vec<SearchHit> {
        filter_products(self.products, &self.search_query)
    }

    // ── carousel ────────────────────────────────────────────────────

    pub fn carousel_left(&mut self) {
        if self.carousel_offset > 0 {
            self.carousel_offset -= 1;
            self.carousel_hint_seen = true;
        }
    }

    pub fn carousel_right(&mut self) {
        let count = self.filtered_products().len();
        if count > 0 && self.carousel_offset + 1 < count {
            self.carousel_offset += 1;
            self.carousel_hint_seen = true;
        }
    }

    // ── display helpers ─────────────────────────────────────────────

    pub fn active_section_title(&self) -> Option<&'static str> {
        let index = self.coordinator.active()?;
        self.section_defs.get(index).map(|s| s.title)
    }

    /// Uptime as HH:MM:SS for the status bar
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::coordinator::RevealState;
    use std::time::Duration;

    fn app() -> App {
        App::new(Config::default(), LogBuffer::new())
    }

    #[test]
    fn first_dot_is_lit_before_any_scroll() {
        let app = app();
        assert_eq!(app.coordinator.active(), Some(0));
    }

    #[test]
    fn popup_fires_after_the_configured_delay() {
        let mut app = app();
        let start = app.start_time;

        app.tick(start + Duration::from_secs(2));
        assert!(app.toast.is_none());

        app.tick(start + Duration::from_secs(6));
        assert!(app.toast.as_ref().is_some_and(|t| t.is_sticky()));
    }

    #[test]
    fn dismissed_popup_stays_dismissed() {
        let mut app = app();
        let start = app.start_time;

        app.tick(start + Duration::from_secs(6));
        assert!(app.dismiss_popup());

        app.tick(start + Duration::from_secs(60));
        assert!(app.toast.is_none());
        // Dismissing again is a no-op
        assert!(!app.dismiss_popup());
    }

    #[test]
    fn popup_waits_out_a_confirmation_toast() {
        let mut app = app();
        let start = app.start_time;

        // A confirmation is showing when the 5s deadline passes: the
        // offer must not be silently dropped
        app.show_toast("theme saved");
        app.tick(start + Duration::from_secs(6));
        assert!(app.toast.as_ref().is_some_and(|t| !t.is_sticky()));

        // Once the confirmation is gone, the offer appears
        app.toast = None;
        app.tick(start + Duration::from_secs(7));
        assert!(app.toast.as_ref().is_some_and(|t| t.is_sticky()));
    }

    #[test]
    fn popup_respects_the_feature_flag() {
        let mut config = Config::default();
        config.features.discount_popup = false;
        let mut app = App::new(config, LogBuffer::new());
        let start = app.start_time;

        app.tick(start + Duration::from_secs(30));
        assert!(app.toast.is_none());
    }

    #[test]
    fn selecting_a_dot_glides_without_touching_the_active_flag() {
        let mut app = app();
        let now = Instant::now();

        app.select_section(2, now);
        assert!(app.viewport.is_gliding());
        // Active dot unchanged until the debounced recomputation lands
        assert_eq!(app.coordinator.active(), Some(0));

        // Let the glide finish and the debounce fire
        app.tick(now + Duration::from_secs(1));
        app.tick(now + Duration::from_secs(2));
        assert_eq!(app.coordinator.active(), Some(2));
        assert_eq!(
            app.viewport.scroll_y(),
            app.coordinator.indicator_target(2).unwrap()
        );
    }

    #[test]
    fn selecting_a_missing_section_is_a_no_op() {
        let mut app = app();
        app.select_section(42, Instant::now());
        assert!(!app.viewport.is_gliding());
    }

    #[test]
    fn search_filters_and_esc_restores() {
        let mut app = app();
        app.open_search();
        for c in "lam".chars() {
            app.search_push(c);
        }
        let filtered = app.filtered_products();
        assert!(!filtered.is_empty());
        assert!(filtered.len() < app.products.len());

        app.close_search(false);
        assert_eq!(app.filtered_products().len(), app.products.len());
    }

    #[test]
    fn enter_keeps_the_filter_applied() {
        let mut app = app();
        app.open_search();
        app.search_push('x');
        app.close_search(true);
        assert!(!app.search_active);
        assert_eq!(app.search_query, "x");
    }

    #[test]
    fn carousel_hint_hides_after_first_page() {
        let mut app = app();
        assert!(!app.carousel_hint_seen);

        app.carousel_left(); // at the left edge: no move, hint stays
        assert!(!app.carousel_hint_seen);

        app.carousel_right();
        assert!(app.carousel_hint_seen);
        assert_eq!(app.carousel_offset, 1);
    }

    #[test]
    fn resize_preserves_reveals_and_relights_a_dot() {
        let mut app = app();
        let now = Instant::now();

        // Scroll far enough that section 1 reveals
        app.scroll_by(app.viewport.height() as isize, now);
        assert_eq!(
            app.coordinator.section(1).unwrap().reveal(),
            RevealState::Revealed
        );

        app.sync_layout(48, now);

        assert_eq!(app.viewport.height(), 48);
        assert!(app.coordinator.active().is_some());
        assert_eq!(
            app.coordinator.section(1).unwrap().reveal(),
            RevealState::Revealed
        );
    }

    #[test]
    fn header_shadow_follows_scroll_position() {
        let mut app = app();
        assert!(!app.is_scrolled());
        app.scroll_by(3, Instant::now());
        assert!(app.is_scrolled());
        app.scroll_to_top(Instant::now());
        assert!(!app.is_scrolled());
    }
}
