// Page model - the virtual document behind the TUI
//
// A vitrine page is a tall virtual document of full-height sections,
// measured in terminal rows. This module owns everything about that
// document that is independent of rendering:
// - coordinator: active-section tracking, nav-dot state, reveal lifecycle
// - viewport: scroll offset, clamping, eased smooth-scroll animation
// - visibility: pure intersection math feeding the reveal lifecycle

pub mod coordinator;
pub mod viewport;
pub mod visibility;
