//! Toast notification component
//!
//! A non-blocking overlay in the bottom-right corner. Two flavors:
//! short-lived confirmations that auto-dismiss, and the sticky discount
//! popup that stays until the user closes it.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub struct Toast {
    pub message: String,
    created_at: Instant,
    /// None = sticky: stays until explicitly dismissed
    duration: Option<Duration>,
}

impl Toast {
    /// Auto-dismissing toast with the default 2-second lifetime
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Some(Duration::from_secs(2)),
        }
    }

    /// Sticky toast: lives until the user dismisses it
    pub fn sticky(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: None,
        }
    }

    pub fn is_sticky(&self) -> bool {
        self.duration.is_none()
    }

    /// Whether the toast should be removed
    pub fn is_expired(&self) -> bool {
        match self.duration {
            Some(duration) => self.created_at.elapsed() >= duration,
            None => false,
        }
    }

    /// Render in the bottom-right corner, on top of all other content
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 2 cells of padding each side plus the border
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.toast_border))
            .style(Style::default().bg(theme.bg));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg))
            .block(block);

        // Clear first so the toast sits above page content
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
