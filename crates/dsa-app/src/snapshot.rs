//! Serializable view of the interactive state
//!
//! Used by headless mode for its NDJSON output and by tests to assert on the
//! whole state at once.

use dsa_content::Page;
use dsa_core::{Difficulty, SectionInfo};
use serde::Serialize;

use crate::problem::{ProblemView, SolutionTab};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub page: Page,
    pub title: &'static str,
    pub sections: Vec<SectionInfo>,
    pub active_section: &'static str,
    pub focus: usize,
    pub problems: Vec<ProblemSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemSnapshot {
    pub index: usize,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub revealed: bool,

    /// Present only while revealed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSnapshot {
    pub tabs: Vec<SolutionTab>,
    pub tab: SolutionTab,
    pub languages: Vec<String>,
    pub language: Option<String>,
    pub code: &'static str,
}

impl Snapshot {
    pub fn capture(state: &AppState) -> Self {
        let view = state.view();
        Self {
            page: state.page,
            title: state.page.title(),
            sections: view.sections(),
            active_section: view.active_section().id,
            focus: state.focus,
            problems: view
                .mounted()
                .problems()
                .enumerate()
                .map(|(index, problem)| ProblemSnapshot::capture(index, problem))
                .collect(),
        }
    }

    pub fn problem(&self, n: usize) -> Option<&ProblemSnapshot> {
        self.problems.get(n)
    }
}

impl ProblemSnapshot {
    fn capture(index: usize, problem: &ProblemView) -> Self {
        let entry = problem.entry();
        Self {
            index,
            title: entry.title,
            difficulty: entry.difficulty,
            revealed: problem.is_revealed(),
            panel: problem.panel().map(|panel| PanelSnapshot {
                tabs: panel.tabs.tabs(),
                tab: panel.tabs.active(),
                languages: panel
                    .code
                    .languages()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                language: panel.code.active_language().map(str::to_string),
                code: panel.code.current_text(),
            }),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.panel.as_ref().and_then(|p| p.language.as_deref())
    }

    pub fn tab(&self) -> Option<SolutionTab> {
        self.panel.as_ref().map(|p| p.tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_capture_hidden_problems_have_no_panel() {
        let mut state = AppState::with_page(Page::Strings, Settings::default());
        state.view_mut().select_section_id("basic-problems");
        let snapshot = Snapshot::capture(&state);

        assert_eq!(snapshot.active_section, "basic-problems");
        assert_eq!(snapshot.problems.len(), 3);
        assert!(snapshot.problems.iter().all(|p| p.panel.is_none()));
    }

    #[test]
    fn test_serializes_with_slugs() {
        let mut state = AppState::with_page(Page::Strings, Settings::default());
        state.view_mut().select_section_id("basic-problems");
        state.problem_mut(0).unwrap().toggle();

        let json = serde_json::to_value(Snapshot::capture(&state)).unwrap();
        assert_eq!(json["page"], "strings");
        assert_eq!(json["problems"][0]["panel"]["tab"], "solution");
        assert_eq!(json["problems"][0]["panel"]["language"], "JavaScript");
        assert_eq!(json["problems"][0]["difficulty"], "easy");
        assert!(json["problems"][1].get("panel").is_none());
    }
}
