use crate::command::StatusMessage;
use crate::ui::app::App;
use crate::ui::footer::render_footer;
use crate::ui::form::{Card, Field, FieldKind, FormState, MAX_SLOT_INPUT_LEN};
use crate::ui::header::Header;
use crate::ui::layout::{card_rects, layout_regions};
use crate::ui::listing::render_listing;
use crate::ui::theme::{BRAND, DANGER, FOCUS_BG, FRAME, INK, SUCCESS};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const CARDS: [(Card, &str); 3] = [
    (Card::AddSlot, " Add Parking Slot "),
    (Card::Park, " Park Vehicle "),
    (Card::Remove, " Remove Vehicle "),
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(Header::new().widget(app.registry().summary()), regions.header);
    render_message(frame, regions.message, app.message());

    frame.render_widget(Clear, regions.controls);
    for ((card, title), rect) in CARDS.iter().zip(card_rects(regions.controls)) {
        render_card(frame, rect, *card, title, app.form());
    }

    render_listing(frame, regions.listing, &app.registry().list());
    render_footer(frame, regions.footer, app.form());
}

fn render_message(frame: &mut Frame<'_>, area: Rect, message: Option<&StatusMessage>) {
    let Some(message) = message else {
        frame.render_widget(Clear, area);
        return;
    };
    let color = if message.is_error() {
        DANGER
    } else {
        SUCCESS
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(paragraph, area);
}

fn render_card(frame: &mut Frame<'_>, area: Rect, card: Card, title: &str, form: &FormState) {
    let focused_card = form.focused.card() == card;
    let border = if focused_card { BRAND } else { FRAME };

    let lines: Vec<Line> = Field::ALL
        .iter()
        .filter(|field| field.card() == card)
        .map(|field| field_line(*field, form))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);
}

fn field_line(field: Field, form: &FormState) -> Line<'static> {
    let focused = form.focused == field;
    let style = if focused {
        Style::default()
            .fg(BRAND)
            .bg(FOCUS_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(INK)
    };

    let text = match field.kind() {
        FieldKind::Text => {
            let mut value = form.text(field).to_string();
            if focused {
                value.push('_');
            }
            format!(
                " {}: [{:<width$}]",
                field_label(field),
                value,
                width = MAX_SLOT_INPUT_LEN + 1
            )
        }
        FieldKind::Checkbox => {
            let mark = if form.checkbox(field) { 'x' } else { ' ' };
            format!(" [{}] {}", mark, field_label(field))
        }
        FieldKind::Button => format!(" [ {} ]", field_label(field)),
    };
    Line::from(Span::styled(text, style))
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::AddSlotNo | Field::RemoveSlotNo => "Slot Number",
        Field::AddCovered => "Covered Parking",
        Field::AddEv => "EV Charging Station",
        Field::AddSubmit => "Add Slot",
        Field::ParkCovered => "Needs Covered Parking",
        Field::ParkEv => "Needs EV Charging",
        Field::ParkSubmit => "Find & Allocate Slot",
        Field::RemoveSubmit => "Remove Vehicle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_line_shows_mark() {
        let form = FormState {
            add_ev: true,
            ..FormState::default()
        };
        let line = field_line(Field::AddEv, &form);
        assert_eq!(line.spans[0].content, " [x] EV Charging Station");
    }

    #[test]
    fn focused_text_field_shows_caret() {
        let form = FormState {
            add_slot_no: "42".to_string(),
            ..FormState::default()
        };
        let line = field_line(Field::AddSlotNo, &form);
        assert!(line.spans[0].content.starts_with(" Slot Number: [42_"));
    }
}
