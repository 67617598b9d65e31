// Nav-dot rail component
//
// One dot per section, index-aligned with the section list, centered
// vertically in the content area. Exactly one dot renders as active, or
// none when the coordinator has not landed on a section yet.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render_nav_dots(f: &mut Frame, area: Rect, app: &App) {
    let count = app.coordinator.len();
    if count == 0 || area.height == 0 {
        return;
    }

    let theme = &app.theme;
    let active = app.coordinator.active();

    // One dot per row with a blank row between, centered vertically
    let rail_rows = count * 2 - 1;
    let pad_top = (area.height as usize).saturating_sub(rail_rows) / 2;

    let mut lines: Vec<Line> = Vec::with_capacity(pad_top + rail_rows);
    lines.resize(pad_top, Line::default());

    for index in 0..count {
        let (glyph, style) = if active == Some(index) {
            ("●", Style::default().fg(theme.dot_active))
        } else {
            ("○", Style::default().fg(theme.dot))
        };
        lines.push(Line::styled(glyph, style));
        if index + 1 < count {
            lines.push(Line::default());
        }
    }

    f.render_widget(Paragraph::new(lines).centered(), area);
}
