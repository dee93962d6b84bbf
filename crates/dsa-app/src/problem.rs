//! Per-problem interactive state
//!
//! A [`ProblemView`] owns a [`Disclosure`]. While revealed it also owns a
//! [`SolutionPanel`] holding the active [`SolutionTabs`] entry and a
//! [`CodeSnippetSelector`]. Hiding drops the panel, so revealing again always
//! starts from the first language on the solution tab.
//!
//! Every selection method silently ignores values it does not know and
//! reports whether anything changed.

use dsa_core::{CodeContent, ProblemEntry};
use serde::Serialize;

// ─────────────────────────────────────────────────────────────────
// Disclosure
// ─────────────────────────────────────────────────────────────────

/// Revealed/hidden flag for a solution panel. Starts hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    revealed: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

// ─────────────────────────────────────────────────────────────────
// Solution / Approach tabs
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionTab {
    #[default]
    Solution,
    Approach,
}

impl SolutionTab {
    pub fn id(self) -> &'static str {
        match self {
            SolutionTab::Solution => "solution",
            SolutionTab::Approach => "approach",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SolutionTab::Solution => "Solution",
            SolutionTab::Approach => "Approach",
        }
    }

    /// Exact, lowercase match only
    pub fn from_id(id: &str) -> Option<SolutionTab> {
        match id {
            "solution" => Some(SolutionTab::Solution),
            "approach" => Some(SolutionTab::Approach),
            _ => None,
        }
    }
}

/// Active sub-tab of a revealed problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionTabs {
    active: SolutionTab,
    approach_available: bool,
}

impl SolutionTabs {
    pub fn new(approach_available: bool) -> Self {
        Self {
            active: SolutionTab::Solution,
            approach_available,
        }
    }

    pub fn for_entry(entry: &ProblemEntry) -> Self {
        Self::new(entry.has_approach())
    }

    pub fn active(&self) -> SolutionTab {
        self.active
    }

    /// Tabs that can be selected, in display order
    pub fn tabs(&self) -> Vec<SolutionTab> {
        if self.approach_available {
            vec![SolutionTab::Solution, SolutionTab::Approach]
        } else {
            vec![SolutionTab::Solution]
        }
    }

    /// Without an approach there is nothing to switch between
    pub fn shows_tab_bar(&self) -> bool {
        self.approach_available
    }

    pub fn select(&mut self, tab: SolutionTab) -> bool {
        if tab == SolutionTab::Approach && !self.approach_available {
            return false;
        }
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    pub fn select_named(&mut self, name: &str) -> bool {
        match SolutionTab::from_id(name) {
            Some(tab) => self.select(tab),
            None => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Code snippet selector
// ─────────────────────────────────────────────────────────────────

/// Chooses which language of a problem's code is shown
///
/// Multi content starts on its first label. Single content is shown under
/// the fallback label and cannot be switched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippetSelector {
    content: CodeContent,
    fallback_language: String,
    active: usize,
}

impl CodeSnippetSelector {
    pub fn new(content: CodeContent, fallback_language: impl Into<String>) -> Self {
        Self {
            content,
            fallback_language: fallback_language.into(),
            active: 0,
        }
    }

    pub fn select_language(&mut self, label: &str) -> bool {
        let CodeContent::Multi(pairs) = &self.content else {
            return false;
        };
        match pairs.iter().position(|(existing, _)| *existing == label) {
            Some(idx) => {
                let changed = self.active != idx;
                self.active = idx;
                changed
            }
            None => false,
        }
    }

    pub fn next_language(&mut self) -> bool {
        self.cycle(1)
    }

    pub fn prev_language(&mut self) -> bool {
        self.cycle(-1)
    }

    fn cycle(&mut self, step: isize) -> bool {
        let len = match &self.content {
            CodeContent::Multi(pairs) if pairs.len() > 1 => pairs.len() as isize,
            _ => return false,
        };
        self.active = (self.active as isize + step).rem_euclid(len) as usize;
        true
    }

    /// Label of the code being shown. `None` only for an empty Multi.
    pub fn active_language(&self) -> Option<&str> {
        match &self.content {
            CodeContent::Single(_) => Some(self.fallback_language.as_str()),
            CodeContent::Multi(pairs) => pairs.get(self.active).map(|(label, _)| *label),
        }
    }

    pub fn current_text(&self) -> &'static str {
        match &self.content {
            CodeContent::Single(text) => *text,
            CodeContent::Multi(pairs) => pairs.get(self.active).map_or("", |(_, text)| *text),
        }
    }

    pub fn languages(&self) -> Vec<&str> {
        match &self.content {
            CodeContent::Single(_) => vec![self.fallback_language.as_str()],
            CodeContent::Multi(pairs) => pairs.iter().map(|(label, _)| *label).collect(),
        }
    }

    pub fn is_switchable(&self) -> bool {
        matches!(&self.content, CodeContent::Multi(pairs) if pairs.len() > 1)
    }
}

// ─────────────────────────────────────────────────────────────────
// Problem view
// ─────────────────────────────────────────────────────────────────

/// State that only exists while a solution is revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPanel {
    pub tabs: SolutionTabs,
    pub code: CodeSnippetSelector,
}

impl SolutionPanel {
    pub fn new(entry: &ProblemEntry, fallback_language: &str) -> Self {
        Self {
            tabs: SolutionTabs::for_entry(entry),
            code: CodeSnippetSelector::new(entry.code.clone(), fallback_language),
        }
    }
}

/// One rendered problem and its interactive state
#[derive(Debug, Clone)]
pub struct ProblemView {
    entry: ProblemEntry,
    fallback_language: String,
    disclosure: Disclosure,
    panel: Option<SolutionPanel>,
}

impl ProblemView {
    pub fn new(entry: ProblemEntry, fallback_language: impl Into<String>) -> Self {
        Self {
            entry,
            fallback_language: fallback_language.into(),
            disclosure: Disclosure::new(),
            panel: None,
        }
    }

    pub fn entry(&self) -> &ProblemEntry {
        &self.entry
    }

    pub fn is_revealed(&self) -> bool {
        self.disclosure.is_revealed()
    }

    /// Reveal or hide the solution. Returns the new revealed flag.
    pub fn toggle(&mut self) -> bool {
        let revealed = self.disclosure.toggle();
        self.panel = revealed.then(|| SolutionPanel::new(&self.entry, &self.fallback_language));
        revealed
    }

    pub fn panel(&self) -> Option<&SolutionPanel> {
        self.panel.as_ref()
    }

    pub fn active_tab(&self) -> Option<SolutionTab> {
        self.panel.as_ref().map(|panel| panel.tabs.active())
    }

    pub fn select_tab(&mut self, tab: SolutionTab) -> bool {
        self.panel
            .as_mut()
            .is_some_and(|panel| panel.tabs.select(tab))
    }

    pub fn select_tab_named(&mut self, name: &str) -> bool {
        self.panel
            .as_mut()
            .is_some_and(|panel| panel.tabs.select_named(name))
    }

    pub fn select_language(&mut self, label: &str) -> bool {
        self.panel
            .as_mut()
            .is_some_and(|panel| panel.code.select_language(label))
    }

    pub fn next_language(&mut self) -> bool {
        self.panel
            .as_mut()
            .is_some_and(|panel| panel.code.next_language())
    }

    pub fn prev_language(&mut self) -> bool {
        self.panel
            .as_mut()
            .is_some_and(|panel| panel.code.prev_language())
    }
}
