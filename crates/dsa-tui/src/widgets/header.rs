//! Header bar with the app title and page tabs

use dsa_content::Page;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

pub struct MainHeader {
    page: Page,
}

impl MainHeader {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [title_area, tabs_area] =
            Layout::horizontal([Constraint::Length(13), Constraint::Min(0)]).areas(inner);

        Line::from(vec![
            Span::styled("◆ ", styles::accent()),
            Span::styled("DSA Guide", styles::accent_bold()),
        ])
        .render(title_area, buf);

        let titles = Page::ALL
            .iter()
            .map(|page| format!("{} {}", page.icon(), page.title()));
        Tabs::new(titles)
            .select(self.page.index())
            .style(styles::text_secondary())
            .highlight_style(styles::tab_active())
            .divider(Span::styled("│", styles::text_muted()))
            .render(tabs_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_lists_every_page() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new(Page::Strings), term.area());
        assert!(term.buffer_contains("DSA Guide"));
        assert!(term.buffer_contains("Recursion"));
        assert!(term.buffer_contains("Strings"));
        assert!(term.buffer_contains("Trees"));
    }
}
