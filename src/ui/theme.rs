//! Screen palette. Availability colors double as message colors.

use ratatui::style::Color;

/// Title and focused controls.
pub const BRAND: Color = Color::Rgb(0x0e, 0xa5, 0xe9);
pub const FRAME: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const INK: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const MUTED: Color = Color::Rgb(0x94, 0xa3, 0xb8);
/// Available slots and success messages.
pub const SUCCESS: Color = Color::Rgb(0x10, 0xb9, 0x81);
/// Occupied slots and rejections.
pub const DANGER: Color = Color::Rgb(0xf4, 0x3f, 0x5e);
pub const FOCUS_BG: Color = Color::Rgb(0x1e, 0x29, 0x3b);
