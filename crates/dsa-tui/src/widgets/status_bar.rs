//! Status bar with key hints and the focused problem

use dsa_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const HINTS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("p", "page"),
    ("Tab", "section"),
    ("j/k", "problem"),
    ("Enter", "reveal"),
    ("s/a", "tab"),
    ("[/]", "lang"),
    ("?", "help"),
];

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn position(&self) -> Span<'static> {
        match self.state.problem_count() {
            0 => Span::styled("no problems ", styles::text_muted()),
            count => Span::styled(
                format!("problem {}/{} ", self.state.focus + 1, count),
                styles::text_secondary(),
            ),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in HINTS {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        Paragraph::new(Line::from(self.position()))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dsa_app::config::Settings;
    use dsa_content::Page;

    #[test]
    fn test_shows_problem_position() {
        let mut state = AppState::with_page(Page::Strings, Settings::default());
        state.view_mut().select_section_id("basic-problems");
        state.focus_next();

        let mut term = TestTerminal::with_size(140, 1);
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("problem 2/3"));
        assert!(term.buffer_contains("quit"));
    }

    #[test]
    fn test_no_problems() {
        let state = AppState::with_page(Page::Strings, Settings::default());
        let mut term = TestTerminal::with_size(140, 1);
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("no problems"));
    }
}
