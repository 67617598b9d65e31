// Title bar component
//
// The fixed page header. Once the page scrolls away from the top it picks
// up a rule under the text, the terminal stand-in for the header's
// drop shadow.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut block = Block::default();
    if app.is_scrolled() {
        block = block
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.shadow));
    }

    let line = Line::from(vec![
        Span::styled(" ✦ AURORA ATELIER", theme.title_style()),
        Span::styled("  handmade lighting", theme.hint_style()),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}
