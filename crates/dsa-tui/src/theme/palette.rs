//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const CODE_BG: Color = Color::Rgb(18, 21, 28);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Difficulty badges ---
pub const EASY: Color = Color::Green;
pub const MEDIUM: Color = Color::Yellow;
pub const HARD: Color = Color::Red;

// --- Callouts ---
pub const TIP: Color = Color::Green;
pub const NOTE: Color = Color::Blue;
pub const WARNING: Color = Color::Yellow;

// --- Key hints ---
pub const KEY_HINT: Color = Color::Yellow;
