use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub message: Rect,
    pub controls: Rect,
    pub listing: Rect,
    pub footer: Rect,
}

pub const HEADER_HEIGHT: u16 = 3;
pub const MESSAGE_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Card heights including borders: add, park, remove.
pub const CARD_HEIGHTS: [u16; 3] = [6, 5, 4];

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let message_height =
        MESSAGE_HEIGHT.min(area.height.saturating_sub(header_height + footer_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let message = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: message_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: message.y + message_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + message_height + footer_height),
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body);

    Regions {
        header,
        message,
        controls: columns[0],
        listing: columns[1],
        footer,
    }
}

/// Splits the controls column into the add, park and remove cards.
pub fn card_rects(controls: Rect) -> [Rect; 3] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARD_HEIGHTS[0]),
            Constraint::Length(CARD_HEIGHTS[1]),
            Constraint::Length(CARD_HEIGHTS[2]),
            Constraint::Min(0),
        ])
        .split(controls);
    [rows[0], rows[1], rows[2]]
}
