use ratatui::style::Color;

pub const HEADER_BG: Color = Color::Rgb(23, 23, 23);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 34);
pub const ACCENT: Color = Color::Rgb(96, 165, 250);
pub const SEPARATOR: Color = Color::Rgb(64, 64, 64);
pub const BORDER_COLOR: Color = Color::Rgb(38, 38, 38);
pub const SELECTED_BORDER: Color = Color::Rgb(59, 130, 246);
pub const TITLE_FG: Color = Color::White;
pub const BODY_FG: Color = Color::Rgb(163, 163, 163);
pub const DIM_TEXT: Color = Color::Rgb(115, 115, 115);
pub const FAINT_TEXT: Color = Color::Rgb(82, 82, 82);
pub const SKELETON: Color = Color::Rgb(38, 38, 38);
pub const LANGUAGE_DOT: Color = Color::Rgb(59, 130, 246);
pub const LIVE_FG: Color = Color::Rgb(212, 212, 212);
pub const KEY_FG: Color = Color::Cyan;
pub const ERROR_FG: Color = Color::LightRed;
pub const WARN_FG: Color = Color::Yellow;
