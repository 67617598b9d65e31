// Section renderer - the scrolling page itself
//
// Projects the virtual document onto the content area: every section whose
// row span intersects the viewport gets a sub-rect, clipped at the top via
// paragraph scroll. Pending sections render as empty space (the page
// equivalent of opacity 0); revealing sections ease in with a shrinking
// vertical offset and brightening text.

use crate::catalog::{Product, SectionDef, SectionKind};
use crate::search::MatchSpan;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Rows of vertical offset at the start of the enter animation
/// (the page's translateY(30px)).
const REVEAL_OFFSET_ROWS: f64 = 4.0;

/// Width of one product card in the carousel.
const CARD_WIDTH: usize = 26;

/// Hero glow animation frames, advanced from the event-loop tick.
const HERO_FRAMES: [&str; 4] = ["·   ✶   ·", " ·  ✶  · ", "  · ✶ ·  ", " ·  ✶  · "];

pub fn render_sections(f: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();
    let scroll = app.viewport.scroll_y();
    let view_h = area.height as usize;
    let view_end = scroll + view_h;

    for index in 0..app.section_defs.len() {
        let Some(section) = app.coordinator.section(index) else {
            continue;
        };
        let top = section.top();
        let sec_end = top + section.height();
        if sec_end <= scroll || top >= view_end {
            continue;
        }

        // Pending sections take up their rows but paint nothing
        let progress = match app.coordinator.reveal_progress(index, now) {
            None => continue,
            Some(_) if !app.config.features.reveal_animations => 1.0,
            Some(p) => p,
        };

        let y = area.y + top.saturating_sub(scroll) as u16;
        let skip = scroll.saturating_sub(top) as u16;
        let rows = (sec_end.min(view_end) - top.max(scroll)) as u16;
        let rect = Rect::new(area.x, y, area.width, rows);

        let def = &app.section_defs[index];
        let lines = section_lines(app, def, section.height(), area.width as usize, progress);
        f.render_widget(Paragraph::new(lines).scroll((skip, 0)), rect);
    }
}

/// Build the full line list for one section, vertically centered in its
/// row span, shifted down by the enter-animation offset.
fn section_lines(
    app: &App,
    def: &SectionDef,
    section_height: usize,
    width: usize,
    progress: f64,
) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let body_style = theme.reveal_style(progress);

    let mut content: Vec<Line<'static>> = Vec::new();

    // Title block: heading plus a short rule
    content.push(Line::styled(def.title.to_uppercase(), theme.heading_style()));
    content.push(Line::styled(
        "─".repeat(def.title.len().min(width.saturating_sub(2))),
        Style::default().fg(theme.rule),
    ));
    content.push(Line::default());

    match def.kind {
        SectionKind::Hero => {
            let frame = HERO_FRAMES[(app.animation_tick / 8) as usize % HERO_FRAMES.len()];
            content.push(Line::styled(frame.to_string(), theme.title_style()));
            content.push(Line::default());
            push_body(&mut content, def, body_style);
            content.push(Line::default());
            content.push(Line::styled("? keys · m menu", theme.hint_style()));
        }
        SectionKind::Promo => {
            for (i, text) in def.body.iter().enumerate() {
                let style = if i == 0 {
                    Style::default()
                        .fg(theme.badge)
                        .add_modifier(Modifier::BOLD)
                } else {
                    body_style
                };
                content.push(Line::styled(*text, style));
            }
        }
        SectionKind::Products => {
            product_grid_lines(app, &mut content, width, body_style);
        }
        SectionKind::Story | SectionKind::Contact => {
            push_body(&mut content, def, body_style);
        }
    }

    // Vertical centering plus the easing offset
    let offset = ((1.0 - progress) * REVEAL_OFFSET_ROWS).round() as usize;
    let pad_top = section_height.saturating_sub(content.len()) / 2 + offset;

    let mut lines = Vec::with_capacity(pad_top + content.len());
    lines.resize(pad_top, Line::default());
    lines.extend(content);
    lines
}

fn push_body(lines: &mut Vec<Line<'static>>, def: &SectionDef, style: Style) {
    for text in def.body {
        lines.push(Line::styled(*text, style));
    }
}

/// The collection grid: search bar, a horizontal window of product cards,
/// and the carousel hint until the user pages once.
fn product_grid_lines(app: &App, lines: &mut Vec<Line<'static>>, width: usize, body_style: Style) {
    let theme = &app.theme;

    // Search bar
    let search_line = if app.search_active {
        Line::from(vec![
            Span::styled("/ ", theme.hint_style()),
            Span::styled(app.search_query.clone(), theme.base_style()),
            Span::styled("▌", Style::default().fg(theme.search_match)),
        ])
    } else if app.search_query.is_empty() {
        Line::styled("press / to search the collection", theme.hint_style())
    } else {
        Line::from(vec![
            Span::styled("filter: ", theme.hint_style()),
            Span::styled(app.search_query.clone(), theme.base_style()),
            Span::styled("  (/ to edit, Esc clears)", theme.hint_style()),
        ])
    };
    lines.push(search_line);
    lines.push(Line::default());

    let hits = app.filtered_products();
    if hits.is_empty() {
        lines.push(Line::styled(
            format!("no pieces match \"{}\"", app.search_query.trim()),
            Style::default().fg(theme.dim),
        ));
        return;
    }

    let visible = (width.saturating_sub(4) / CARD_WIDTH).max(1);
    let start = app.carousel_offset.min(hits.len().saturating_sub(1));
    let window = &hits[start..(start + visible).min(hits.len())];

    let mut names: Vec<Span<'static>> = Vec::new();
    let mut taglines: Vec<Span<'static>> = Vec::new();
    let mut prices: Vec<Span<'static>> = Vec::new();

    for hit in window {
        let product = &app.products[hit.index];
        push_name_spans(&mut names, product, hit.span, theme, body_style);
        taglines.push(padded(product.tagline, Style::default().fg(theme.dim)));
        prices.push(padded(
            &format!("€ {}", product.price),
            Style::default().fg(theme.price),
        ));
    }

    lines.push(Line::from(names));
    lines.push(Line::from(taglines));
    lines.push(Line::from(prices));
    lines.push(Line::default());

    // Position and hint row
    let more_right = start + window.len() < hits.len();
    let mut footer: Vec<Span<'static>> = vec![Span::styled(
        format!("{}-{} of {}", start + 1, start + window.len(), hits.len()),
        theme.hint_style(),
    )];
    if more_right && !app.carousel_hint_seen {
        footer.push(Span::styled(
            "   →  scroll right for more",
            Style::default()
                .fg(theme.search_match)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(footer));
}

/// Product name padded to the card width, with the matched fragment
/// highlighted when a search filter is active.
fn push_name_spans(
    spans: &mut Vec<Span<'static>>,
    product: &Product,
    span: Option<MatchSpan>,
    theme: &Theme,
    body_style: Style,
) {
    let name = clip(product.name, CARD_WIDTH - 2);
    let name_style = body_style.add_modifier(Modifier::BOLD);

    // Spans index into the original name; a clipped name may end in an
    // ellipsis the span can cut through, so only highlight when both ends
    // land on char boundaries
    match span {
        Some(m)
            if m.end <= name.len()
                && name.is_char_boundary(m.start)
                && name.is_char_boundary(m.end) =>
        {
            spans.push(Span::styled(name[..m.start].to_string(), name_style));
            spans.push(Span::styled(
                name[m.start..m.end].to_string(),
                Style::default()
                    .fg(theme.search_match)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
            spans.push(Span::styled(name[m.end..].to_string(), name_style));
        }
        _ => spans.push(Span::styled(name.to_string(), name_style)),
    }

    let pad = CARD_WIDTH.saturating_sub(name.width());
    spans.push(Span::raw(" ".repeat(pad)));
}

/// Pad (or clip) text to the card width.
fn padded(text: &str, style: Style) -> Span<'static> {
    let clipped = clip(text, CARD_WIDTH - 2);
    let pad = CARD_WIDTH.saturating_sub(clipped.width());
    Span::styled(format!("{clipped}{}", " ".repeat(pad)), style)
}

/// Clip a string to a display width (catalog text is ASCII, so byte and
/// display widths agree; this stays width-aware anyway).
fn clip(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 1 >= max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_leaves_short_text_alone() {
        assert_eq!(clip("Halo Pendant", 24), "Halo Pendant");
    }

    #[test]
    fn clip_truncates_with_ellipsis() {
        let clipped = clip("An Unreasonably Long Product Name", 10);
        assert!(clipped.ends_with('…'));
        assert!(clipped.width() <= 10);
    }

    #[test]
    fn highlight_skips_spans_cut_by_the_clip() {
        let product = Product {
            name: "An Unreasonably Long Product Name",
            tagline: "",
            price: "0",
        };
        let theme = Theme::dark();

        // The clipped name ends in a multi-byte ellipsis; a span ending
        // inside it must fall back to an unhighlighted name
        let span = MatchSpan { start: 20, end: 25 };
        let mut spans = Vec::new();
        push_name_spans(&mut spans, &product, Some(span), &theme, Style::default());
        assert_eq!(spans.len(), 2); // name + padding, no highlight split

        // A span fully inside the clipped name still highlights
        let span = MatchSpan { start: 3, end: 15 };
        let mut spans = Vec::new();
        push_name_spans(&mut spans, &product, Some(span), &theme, Style::default());
        assert_eq!(spans.len(), 4);
    }

    #[test]
    fn padded_spans_have_card_width() {
        let span = padded("Ash wood, linen shade", Style::default());
        assert_eq!(span.content.width(), CARD_WIDTH);
    }
}
