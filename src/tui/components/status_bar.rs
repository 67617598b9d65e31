// Bottom status bar: uptime, active section, theme, key hints

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let section = match app.coordinator.active() {
        Some(i) => format!(
            "{}/{} {}",
            i + 1,
            app.coordinator.len(),
            app.active_section_title().unwrap_or_default()
        ),
        None => format!("-/{}", app.coordinator.len()),
    };

    let status = format!(
        " {} │ {} │ {} │ j/k scroll · Tab section · / search · c call · t theme · q quit",
        app.uptime(),
        section,
        app.theme_kind.name(),
    );

    let bar = Paragraph::new(Line::styled(status, app.theme.status_style())).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(app.theme.border_style()),
    );
    f.render_widget(bar, area);
}
