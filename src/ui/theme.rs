use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const REGION_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LOADING_TEXT: Color = Color::Rgb(0xfa, 0xcc, 0x15);
