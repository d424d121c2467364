use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const KEY: Color = Color::BrightBlue;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const DETAIL: Color = Color::BrightBlack;
pub const NOTICE: Color = Color::Yellow;
