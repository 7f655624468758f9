use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const CHECK_OK: Color = Color::Green;
pub const CHECK_FAIL: Color = Color::Red;
pub const VERSION: Color = Color::Yellow;
