// Frame composition
//
// One draw path: header, the scrolling page with its nav rail, the status
// bar, then whichever overlay is open (modal first, toast on top of it).

mod modal;

use crate::tui::app::App;
use crate::tui::components::{render_nav_dots, render_sections, render_status, render_title};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};
use std::time::Instant;

pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme.clone();
    f.render_widget(Block::default().style(theme.base_style()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(chunks[1]);

    // Geometry follows the real content area, so a resize re-lays the page
    // before anything is painted
    app.sync_layout(content[0].height as usize, Instant::now());

    render_title(f, chunks[0], app);
    render_sections(f, content[0], app);
    render_nav_dots(f, content[1], app);
    render_status(f, chunks[2], app);

    if let Some(active) = &app.modal {
        modal::render(f, app, active);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &theme);
    }
}
