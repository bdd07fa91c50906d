//! Bottom bar: key hints for the focused control, version on the right.

use crate::ui::form::{Card, FieldKind, FormState};
use crate::ui::theme::{FRAME, INK};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = concat!("slotkeeper v", env!("CARGO_PKG_VERSION"), " ");

/// Hints for the focused field; Enter always submits the field's card.
pub fn footer_hints(form: &FormState) -> String {
    let edit = match form.focused.kind() {
        FieldKind::Text => "0-9: Type │ Backspace: Erase",
        FieldKind::Checkbox => "Space: Toggle",
        FieldKind::Button => "Space: Press",
    };
    format!(
        " {} │ Enter: {} │ Tab/↑↓: Move │ Esc: Quit",
        edit,
        submit_action(form.focused.card())
    )
}

fn submit_action(card: Card) -> &'static str {
    match card {
        Card::AddSlot => "Add Slot",
        Card::Park => "Park Vehicle",
        Card::Remove => "Remove Vehicle",
    }
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let version_width = VERSION.chars().count() as u16;
    let [hints_area, version_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(version_width)]).areas(inner);

    let style = Style::default().fg(INK).add_modifier(Modifier::DIM);
    frame.render_widget(Paragraph::new(footer_hints(form)).style(style), hints_area);
    frame.render_widget(
        Paragraph::new(VERSION)
            .style(style)
            .alignment(Alignment::Right),
        version_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::Field;

    #[test]
    fn text_field_hints_typing_and_card_action() {
        let hints = footer_hints(&FormState::default());
        assert!(hints.contains("0-9: Type"));
        assert!(hints.contains("Enter: Add Slot"));
    }

    #[test]
    fn checkbox_hints_follow_focus() {
        let form = FormState {
            focused: Field::ParkEv,
            ..FormState::default()
        };
        let hints = footer_hints(&form);
        assert!(hints.contains("Space: Toggle"));
        assert!(hints.contains("Enter: Park Vehicle"));
        assert!(!hints.contains("Backspace"));
    }
}
