use crate::registry::{yes_no, Slot};
use crate::script::EMPTY_LISTING;
use crate::ui::theme::{DANGER, FRAME, INK, SUCCESS};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const COLUMNS: [&str; 4] = ["Slot No", "Covered", "EV Charging", "Occupied"];

/// Slot table, ascending by slot number.
pub fn render_listing(frame: &mut Frame<'_>, area: Rect, slots: &[Slot]) {
    let block = Block::default()
        .title(" Slot Listing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME));

    if slots.is_empty() {
        let empty = Paragraph::new(EMPTY_LISTING)
            .style(Style::default().fg(INK).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title)))
        .style(Style::default().fg(INK).add_modifier(Modifier::BOLD));
    let rows = slots.iter().map(|slot| {
        let status_color = if slot.occupied { DANGER } else { SUCCESS };
        Row::new(vec![
            Cell::from(slot.slot_no.to_string())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(yes_no(slot.covered)),
            Cell::from(yes_no(slot.ev_charging)),
            Cell::from(slot.status_label()).style(Style::default().fg(status_color)),
        ])
        .style(Style::default().fg(INK))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(13),
            Constraint::Min(9),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);
    frame.render_widget(table, area);
}
