//! Semantic style builders

use dsa_core::{CalloutKind, Difficulty};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Selected tab: inverted accent
pub fn tab_active() -> Style {
    Style::default()
        .fg(palette::DEEPEST_BG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::KEY_HINT)
}

pub fn code() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY).bg(palette::CODE_BG)
}

pub fn line_number() -> Style {
    Style::default().fg(palette::TEXT_MUTED).bg(palette::CODE_BG)
}

pub fn difficulty(difficulty: Difficulty) -> Style {
    let color = match difficulty {
        Difficulty::Easy => palette::EASY,
        Difficulty::Medium => palette::MEDIUM,
        Difficulty::Hard => palette::HARD,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn callout(kind: CalloutKind) -> Style {
    let color = match kind {
        CalloutKind::Tip => palette::TIP,
        CalloutKind::Note => palette::NOTE,
        CalloutKind::Warning => palette::WARNING,
    };
    Style::default().fg(color)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

/// Rounded panel used for every bordered container
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
