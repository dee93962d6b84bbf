//! Lines for one problem: title, description and, when revealed, the
//! solution panel with its sub-tabs and language selector

use dsa_app::{ProblemView, SolutionPanel, SolutionTab};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::text::wrap;
use crate::theme::styles;

const INDENT: &str = "  ";

pub struct ProblemCard<'a> {
    view: &'a ProblemView,
    focused: bool,
    show_line_numbers: bool,
}

impl<'a> ProblemCard<'a> {
    pub fn new(view: &'a ProblemView) -> Self {
        Self {
            view,
            focused: false,
            show_line_numbers: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let entry = self.view.entry();
        let inner = (width as usize).saturating_sub(INDENT.len());
        let mut lines = Vec::new();

        let marker = if self.focused { "▶ " } else { "  " };
        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::heading()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(entry.title, title_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", entry.difficulty.label()),
                styles::difficulty(entry.difficulty),
            ),
        ]));

        if !entry.description.is_empty() {
            push_wrapped(&mut lines, entry.description, inner, styles::text_secondary());
        }

        let hint = if self.view.is_revealed() {
            "▾ Hide solution"
        } else {
            "▸ Show solution"
        };
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(hint, styles::accent()),
        ]));

        if let Some(panel) = self.view.panel() {
            self.panel_lines(&mut lines, panel, inner);
        }
        lines
    }

    fn panel_lines(&self, lines: &mut Vec<Line<'static>>, panel: &SolutionPanel, inner: usize) {
        if panel.tabs.shows_tab_bar() {
            let mut spans = vec![Span::raw(INDENT)];
            for tab in panel.tabs.tabs() {
                let style = if tab == panel.tabs.active() {
                    styles::tab_active()
                } else {
                    styles::text_muted()
                };
                spans.push(Span::styled(format!(" {} ", tab.label()), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        match panel.tabs.active() {
            SolutionTab::Solution => self.solution_lines(lines, panel, inner),
            SolutionTab::Approach => approach_lines(lines, self.view, inner),
        }
    }

    fn solution_lines(&self, lines: &mut Vec<Line<'static>>, panel: &SolutionPanel, inner: usize) {
        let active = panel.code.active_language();
        let mut spans = vec![Span::raw(INDENT)];
        for label in panel.code.languages() {
            let style = if !panel.code.is_switchable() {
                styles::text_muted()
            } else if Some(label) == active {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(label.to_string(), style));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));

        let code = panel.code.current_text();
        let total = code.lines().count();
        let number_width = total.to_string().len();
        for (i, code_line) in code.lines().enumerate() {
            let mut spans = vec![Span::raw(INDENT)];
            if self.show_line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} ", i + 1, width = number_width),
                    styles::line_number(),
                ));
            }
            spans.push(Span::styled(format!(" {}", code_line), styles::code()));
            lines.push(Line::from(spans));
        }

        let explanation = self.view.entry().explanation;
        if !explanation.is_empty() {
            lines.push(Line::default());
            push_wrapped(lines, explanation, inner, styles::text_primary());
        }
    }
}

fn approach_lines(lines: &mut Vec<Line<'static>>, view: &ProblemView, inner: usize) {
    let Some(approach) = &view.entry().approach else {
        return;
    };

    for (i, step) in approach.steps.iter().enumerate() {
        let prefix = format!("{}. ", i + 1);
        let body = wrap(step, inner.saturating_sub(prefix.len()));
        for (j, part) in body.into_iter().enumerate() {
            let lead = if j == 0 {
                prefix.clone()
            } else {
                " ".repeat(prefix.len())
            };
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(lead, styles::accent()),
                Span::styled(part, styles::text_primary()),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("Time: ", styles::text_muted()),
        Span::styled(approach.time, styles::text_primary()),
        Span::styled("   Space: ", styles::text_muted()),
        Span::styled(approach.space, styles::text_primary()),
    ]));
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for part in wrap(text, width) {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(part, style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsa_core::{CodeContent, Difficulty, ProblemEntry};

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn view() -> ProblemView {
        ProblemView::new(
            ProblemEntry::new("1. Palindrome Check", Difficulty::Easy)
                .description("Reads the same both ways")
                .code(CodeContent::multi([
                    ("JavaScript", "function isPalindrome(s) {\n}"),
                    ("Java", "public boolean isPalindrome(String s) {\n}"),
                ]))
                .explanation("Two pointers")
                .approach(vec!["Compare ends"], "O(n)", "O(1)"),
            "JavaScript",
        )
    }

    #[test]
    fn test_hidden_shows_title_and_hint_only() {
        let text = text_of(&ProblemCard::new(&view()).lines(60));
        assert!(text.contains("1. Palindrome Check"));
        assert!(text.contains("[Easy]"));
        assert!(text.contains("Show solution"));
        assert!(!text.contains("isPalindrome"));
    }

    #[test]
    fn test_revealed_shows_code_and_tabs() {
        let mut view = view();
        view.toggle();
        let text = text_of(&ProblemCard::new(&view).lines(60));
        assert!(text.contains("Solution"));
        assert!(text.contains("Approach"));
        assert!(text.contains("function isPalindrome"));
        assert!(text.contains("Two pointers"));
        assert!(!text.contains("public boolean"));
    }

    #[test]
    fn test_approach_tab_shows_steps_and_complexity() {
        let mut view = view();
        view.toggle();
        view.select_tab(SolutionTab::Approach);
        let text = text_of(&ProblemCard::new(&view).lines(60));
        assert!(text.contains("1. Compare ends"));
        assert!(text.contains("Time: O(n)"));
        assert!(!text.contains("function isPalindrome"));
    }

    #[test]
    fn test_line_numbers_toggle() {
        let mut view = view();
        view.toggle();
        let with = text_of(&ProblemCard::new(&view).lines(60));
        let without = text_of(&ProblemCard::new(&view).line_numbers(false).lines(60));
        assert!(with.contains("1  function"));
        assert!(without.contains("   function"));
        assert!(!without.contains("1  function"));
    }

    #[test]
    fn test_focused_marker() {
        let text = text_of(&ProblemCard::new(&view()).focused(true).lines(60));
        assert!(text.starts_with("▶ "));
    }
}
