//! Help overlay listing every key binding

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{palette, styles};

const BINDINGS: &[(&str, &str)] = &[
    ("q / Esc / Ctrl+C", "Quit"),
    ("p / P", "Next / previous page"),
    ("Tab / →", "Next section"),
    ("Shift+Tab / ←", "Previous section"),
    ("1-9", "Jump to section"),
    ("j / ↓", "Focus next problem"),
    ("k / ↑", "Focus previous problem"),
    ("Enter / Space", "Show or hide solution"),
    ("s / a", "Solution / Approach tab"),
    ("] / [", "Next / previous language"),
    ("J / K", "Scroll a line"),
    ("PgDn / PgUp", "Scroll a page"),
    ("g / G", "Top / bottom"),
    ("?", "Close this help"),
];

/// Center a fixed-size rect within an area, clamped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = BINDINGS.len() as u16 + 2;
        let modal = centered_rect(52, height, area);
        Clear.render(modal, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!(" {:<18}", keys), styles::keybinding()),
                    Span::styled(*action, styles::text_primary()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                styles::glass_block(true)
                    .title(" Keys ")
                    .style(ratatui::style::Style::default().bg(palette::POPUP_BG)),
            )
            .render(modal, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(100, 30, area), area);
    }

    #[test]
    fn test_help_lists_bindings() {
        let mut term = TestTerminal::new();
        term.render_widget(HelpOverlay, term.area());
        assert!(term.buffer_contains("Keys"));
        assert!(term.buffer_contains("Show or hide solution"));
    }
}
