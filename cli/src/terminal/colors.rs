use colored::Color;

pub const TEXT_DEFAULT: Color = Color::White;
pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TARGET_ADDR: Color = Color::BrightCyan;
pub const ONLINE: Color = Color::Green;
pub const OFFLINE: Color = Color::Red;
