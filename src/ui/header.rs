use crate::registry::Summary;
use crate::ui::theme::{BRAND, DANGER, FRAME, INK, MUTED, SUCCESS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Smart Parking Lot System";
pub const SUBTITLE: &str = "Manage your parking spaces efficiently";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, summary: Summary) -> Paragraph<'static> {
        let text_style = Style::default().fg(INK);
        let separator_style = Style::default().fg(MUTED);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(TITLE, Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(SUBTITLE, text_style.add_modifier(Modifier::DIM)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} slots", summary.total), text_style),
            Span::styled("  ", text_style),
            Span::styled(
                format!("{} available", summary.available),
                Style::default().fg(SUCCESS),
            ),
            Span::styled("  ", text_style),
            Span::styled(
                format!("{} occupied", summary.occupied),
                Style::default().fg(DANGER),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(FRAME)),
        )
    }
}
