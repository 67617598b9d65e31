// Modal overlays: nav menu, call menu, log viewer, help

use crate::catalog::call_lines;
use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, modal: &Modal) {
    match modal {
        Modal::NavMenu { selected } => render_nav_menu(f, app, *selected),
        Modal::CallMenu { selected } => render_call_menu(f, app, *selected),
        Modal::Logs => render_logs(f, app),
        Modal::Help => render_help(f, app),
    }
}

fn render_nav_menu(f: &mut Frame, app: &App, selected: usize) {
    let lines: Vec<Line> = app
        .section_defs
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let marker = if Some(i) == app.coordinator.active() {
                "● "
            } else {
                "  "
            };
            let style = if i == selected {
                app.theme.selected_style()
            } else {
                app.theme.base_style()
            };
            Line::styled(format!(" {marker}{}  ", def.title), style)
        })
        .collect();
    render_box(f, app, " Sections ", lines, 34);
}

fn render_call_menu(f: &mut Frame, app: &App, selected: usize) {
    let mut lines: Vec<Line> = call_lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == selected {
                app.theme.selected_style()
            } else {
                app.theme.base_style()
            };
            Line::styled(format!(" {:<10} {}  ", line.label, line.number), style)
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(" Enter dial · Esc close", app.theme.hint_style()));
    render_box(f, app, " Call Us ", lines, 36);
}

fn render_logs(f: &mut Frame, app: &App) {
    let entries = app.log_buffer.get_all();
    let height = (f.area().height.saturating_sub(6) as usize).max(3);
    let start = entries.len().saturating_sub(height);

    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => Color::Red,
                LogLevel::Warn => Color::Yellow,
                LogLevel::Info => Color::Green,
                LogLevel::Debug => Color::Blue,
                LogLevel::Trace => Color::DarkGray,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(app.theme.dim),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(entry.message.clone(), app.theme.base_style()),
            ])
        })
        .collect();

    let lines = if lines.is_empty() {
        vec![Line::styled(" nothing logged yet", app.theme.hint_style())]
    } else {
        lines
    };
    let width = f.area().width.saturating_sub(8).max(30);
    render_box(f, app, " Logs ", lines, width);
}

fn render_help(f: &mut Frame, app: &App) {
    let key = |k: &str, what: &str| {
        Line::from(vec![
            Span::styled(format!(" {k:<12}"), app.theme.title_style()),
            Span::styled(what.to_string(), app.theme.base_style()),
        ])
    };
    let lines = vec![
        key("j/k ↑/↓", "scroll the page"),
        key("PgUp/PgDn", "scroll a screen"),
        key("g/G Home/End", "top / bottom"),
        key("Tab / S-Tab", "next / previous section"),
        key("1-5", "jump to section"),
        key("h/l ←/→", "browse the collection"),
        key("/", "search products"),
        key("m", "section menu"),
        key("c", "call menu"),
        key("t", "toggle theme"),
        key("`", "log viewer"),
        key("x", "dismiss offer"),
        key("q", "quit"),
    ];
    render_box(f, app, " Keys ", lines, 42);
}

fn render_box(f: &mut Frame, app: &App, title: &str, lines: Vec<Line>, width: u16) {
    let area = centered(f.area(), width.min(f.area().width), lines.len() as u16 + 2);
    let block = Block::default()
        .title(title)
        .title_style(app.theme.title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(app.theme.border_style())
        .style(app.theme.base_style());

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
