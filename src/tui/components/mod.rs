// Reusable UI components
//
// Each component renders one region of the frame from `App` state. None of
// them mutate state; input routing stays in the event loop.

mod nav_dots;
mod sections;
mod status_bar;
mod title_bar;
pub mod toast;

pub use nav_dots::render_nav_dots;
pub use sections::render_sections;
pub use status_bar::render_status;
pub use title_bar::render_title;
