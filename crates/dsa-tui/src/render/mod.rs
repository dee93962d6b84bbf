//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use dsa_app::AppState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI
///
/// Besides drawing, this reports the content height and viewport back into
/// `state.scroll` and scrolls the focused problem into view when requested.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state.page), areas.header);
    frame.render_widget(widgets::SectionTabs::new(state.view()), areas.sections);
    render_content(frame, areas.content, state);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.show_help {
        frame.render_widget(widgets::HelpOverlay, area);
    }
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let section = state.view().active_section();
    let block = styles::glass_block(true).title(format!(
        " {} · {} ",
        state.page.title(),
        section.label
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 2 || inner.height == 0 {
        return;
    }

    // Last column is kept for the scrollbar
    let text_area = Rect {
        width: inner.width - 1,
        ..inner
    };
    let content = widgets::build_content(
        state.mounted(),
        state.focus,
        text_area.width,
        state.settings.ui.show_line_numbers,
    );
    let total = content.height();

    state.scroll.update_metrics(inner.height, total);
    if state.scroll.follow_focus {
        if let Some(rows) = content.problems.get(state.focus) {
            state.scroll.reveal(rows.start, rows.end);
        }
        state.scroll.follow_focus = false;
    }

    let offset = state.scroll.offset;
    frame.render_widget(
        Paragraph::new(content.lines).scroll((offset, 0)),
        text_area,
    );

    if total > inner.height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("│"))
            .thumb_symbol("█");
        let mut scrollbar_state =
            ScrollbarState::new(state.scroll.max_offset() as usize).position(offset as usize);
        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}
