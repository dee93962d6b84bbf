//! Section tab row for the current page

use dsa_app::PageView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

pub struct SectionTabs<'a> {
    view: &'a dyn PageView,
}

impl<'a> SectionTabs<'a> {
    pub fn new(view: &'a dyn PageView) -> Self {
        Self { view }
    }
}

impl Widget for SectionTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = self
            .view
            .sections()
            .into_iter()
            .enumerate()
            .map(|(i, info)| format!("{} {}", i + 1, info.label));

        Tabs::new(titles)
            .select(self.view.active_index())
            .style(styles::text_secondary())
            .highlight_style(styles::tab_active())
            .divider(Span::styled("│", styles::text_muted()))
            .render(area, buf);
    }
}
