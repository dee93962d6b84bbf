//! Application state (Model in TEA pattern)

use dsa_content::Page;
use tracing::debug;

use crate::config::Settings;
use crate::page_state::{mount_page, MountedSection, PageView};
use crate::problem::ProblemView;

/// Lifecycle of the running frontend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Vertical scroll of the content pane
///
/// `viewport` and `content_height` are reported by the renderer each frame.
/// When `follow_focus` is set, the renderer scrolls the focused problem into
/// view and clears the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub viewport: u16,
    pub content_height: u16,
    pub follow_focus: bool,
}

impl ScrollState {
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow_focus = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.follow_focus = false;
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.saturating_sub(1).max(1));
    }

    pub fn to_top(&mut self) {
        self.follow_focus = false;
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.follow_focus = false;
        self.offset = self.max_offset();
    }

    pub fn update_metrics(&mut self, viewport: u16, content_height: u16) {
        self.viewport = viewport;
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Adjust the offset so lines `start..end` are visible, preferring `start`
    pub fn reveal(&mut self, start: u16, end: u16) {
        if end.saturating_sub(self.offset) > self.viewport {
            self.offset = end.saturating_sub(self.viewport);
        }
        if start < self.offset || end.saturating_sub(start) > self.viewport {
            self.offset = start;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.follow_focus = false;
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    view: Box<dyn PageView>,
    pub settings: Settings,

    /// Index of the focused problem in the mounted section
    pub focus: usize,
    pub scroll: ScrollState,
    pub show_help: bool,
    pub phase: AppPhase,
}

impl AppState {
    /// Open on the configured start page
    pub fn new(settings: Settings) -> Self {
        let page = settings.ui.start_page;
        Self::with_page(page, settings)
    }

    pub fn with_page(page: Page, settings: Settings) -> Self {
        let view = mount_page(page, &settings.code.fallback_language);
        Self {
            page,
            view,
            settings,
            focus: 0,
            scroll: ScrollState::default(),
            show_help: false,
            phase: AppPhase::Running,
        }
    }

    pub fn view(&self) -> &dyn PageView {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> &mut dyn PageView {
        self.view.as_mut()
    }

    pub fn mounted(&self) -> &MountedSection {
        self.view.mounted()
    }

    pub fn problem_count(&self) -> usize {
        self.view.mounted().problem_count()
    }

    pub fn problem(&self, n: usize) -> Option<&ProblemView> {
        self.view.mounted().problem(n)
    }

    pub fn problem_mut(&mut self, n: usize) -> Option<&mut ProblemView> {
        self.view.mounted_mut().problem_mut(n)
    }

    pub fn focused_problem(&self) -> Option<&ProblemView> {
        self.problem(self.focus)
    }

    /// Switch pages. Staying on the same page keeps its state.
    pub fn switch_page(&mut self, page: Page) -> bool {
        if page == self.page {
            return false;
        }
        debug!("Switching page {} -> {}", self.page, page);
        self.page = page;
        self.view = mount_page(page, &self.settings.code.fallback_language);
        self.on_section_changed();
        true
    }

    /// Reset focus and scroll for a freshly mounted section
    pub fn on_section_changed(&mut self) {
        self.focus = 0;
        self.scroll.reset();
    }

    pub fn focus_next(&mut self) -> bool {
        let count = self.problem_count();
        if self.focus + 1 >= count {
            return false;
        }
        self.focus += 1;
        self.scroll.follow_focus = true;
        true
    }

    pub fn focus_prev(&mut self) -> bool {
        if self.focus == 0 {
            return false;
        }
        self.focus = self.focus.min(self.problem_count()).saturating_sub(1);
        self.scroll.follow_focus = true;
        true
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_opens_configured_start_page() {
        let mut settings = Settings::default();
        settings.ui.start_page = Page::Trees;
        let state = AppState::new(settings);
        assert_eq!(state.page, Page::Trees);
        assert_eq!(state.view().active_section().id, "fundamentals");
        assert!(!state.should_quit());
    }

    #[test]
    fn test_switch_to_same_page_is_noop() {
        let mut state = AppState::with_page(Page::Strings, Settings::default());
        state.view_mut().select_section_id("basic-problems");
        assert!(!state.switch_page(Page::Strings));
        assert_eq!(state.view().active_section().id, "basic-problems");
    }

    #[test]
    fn test_switch_page_resets_to_first_section() {
        let mut state = AppState::with_page(Page::Strings, Settings::default());
        state.view_mut().select_section_id("practice");
        state.switch_page(Page::Recursion);
        state.switch_page(Page::Strings);
        assert_eq!(state.view().active_section().id, "fundamentals");
    }

    #[test]
    fn test_focus_clamped_to_problems() {
        let mut state = AppState::with_page(Page::Strings, Settings::default());
        state.view_mut().select_section_id("basic-problems");
        let count = state.problem_count();
        for _ in 0..count + 3 {
            state.focus_next();
        }
        assert_eq!(state.focus, count - 1);
        assert!(state.scroll.follow_focus);
    }

    #[test]
    fn test_focus_without_problems_stays_zero() {
        let mut state = AppState::with_page(Page::Strings, Settings::default());
        assert_eq!(state.problem_count(), 0);
        assert!(!state.focus_next());
        assert!(!state.focus_prev());
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut scroll = ScrollState::default();
        scroll.update_metrics(10, 25);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset, 15);
        scroll.scroll_up(100);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_reveal_brings_range_into_view() {
        let mut scroll = ScrollState::default();
        scroll.update_metrics(10, 100);
        scroll.reveal(40, 45);
        assert_eq!(scroll.offset, 35);
        scroll.reveal(20, 22);
        assert_eq!(scroll.offset, 20);
        scroll.reveal(50, 80);
        assert_eq!(scroll.offset, 50);
    }
}
