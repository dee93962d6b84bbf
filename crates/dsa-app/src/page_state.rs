//! A page's router plus its currently mounted section
//!
//! Exactly one section is mounted at a time. Mounting turns the section's
//! static blocks into [`Node`]s, wrapping every problem in a fresh
//! [`ProblemView`]. Switching away drops those views, so coming back shows
//! every problem hidden again.

use std::fmt;

use dsa_content::{FrameworksSection, Page, RecursionSection, StringsSection, TreesSection};
use dsa_core::{Block, Section, SectionInfo};
use tracing::debug;

use crate::problem::ProblemView;
use crate::router::SectionRouter;

/// One rendered item of the mounted section
#[derive(Debug, Clone)]
pub enum Node {
    Static(Block),
    Problem(ProblemView),
}

/// The live content of the active section
#[derive(Debug, Clone, Default)]
pub struct MountedSection {
    nodes: Vec<Node>,
}

impl MountedSection {
    pub fn mount(blocks: Vec<Block>, fallback_language: &str) -> Self {
        let nodes = blocks
            .into_iter()
            .map(|block| match block {
                Block::Problem(entry) => Node::Problem(ProblemView::new(entry, fallback_language)),
                other => Node::Static(other),
            })
            .collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn problems(&self) -> impl Iterator<Item = &ProblemView> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Problem(view) => Some(view),
            Node::Static(_) => None,
        })
    }

    pub fn problem_count(&self) -> usize {
        self.problems().count()
    }

    /// The `n`th problem, counting only problem nodes
    pub fn problem(&self, n: usize) -> Option<&ProblemView> {
        self.problems().nth(n)
    }

    pub fn problem_mut(&mut self, n: usize) -> Option<&mut ProblemView> {
        self.nodes
            .iter_mut()
            .filter_map(|node| match node {
                Node::Problem(view) => Some(view),
                Node::Static(_) => None,
            })
            .nth(n)
    }
}

/// Router and mounted section of one page
#[derive(Debug, Clone)]
pub struct PageState<S: Section> {
    router: SectionRouter<S>,
    mounted: MountedSection,
    fallback_language: String,
}

impl<S: Section> PageState<S> {
    pub fn new(fallback_language: impl Into<String>) -> Self {
        let fallback_language = fallback_language.into();
        let router = SectionRouter::<S>::new();
        let mounted = MountedSection::mount(router.active().blocks(), &fallback_language);
        Self {
            router,
            mounted,
            fallback_language,
        }
    }

    pub fn router(&self) -> &SectionRouter<S> {
        &self.router
    }

    /// Remount only when the router reports a change
    fn remount_if(&mut self, changed: bool) -> bool {
        if changed {
            let active = self.router.active();
            debug!("Mounting section {}", active.id());
            self.mounted = MountedSection::mount(active.blocks(), &self.fallback_language);
        }
        changed
    }

    pub fn select(&mut self, section: S) -> bool {
        let changed = self.router.select(section);
        self.remount_if(changed)
    }
}

/// Object-safe view of a [`PageState`] so frontends can hold any page
pub trait PageView: fmt::Debug + Send {
    fn sections(&self) -> Vec<SectionInfo>;
    fn active_section(&self) -> SectionInfo;
    fn active_index(&self) -> usize;

    fn select_section_id(&mut self, id: &str) -> bool;
    fn select_section_index(&mut self, index: usize) -> bool;
    fn next_section(&mut self) -> bool;
    fn prev_section(&mut self) -> bool;

    fn mounted(&self) -> &MountedSection;
    fn mounted_mut(&mut self) -> &mut MountedSection;
}

impl<S: Section> PageView for PageState<S> {
    fn sections(&self) -> Vec<SectionInfo> {
        S::infos()
    }

    fn active_section(&self) -> SectionInfo {
        self.router.active().info()
    }

    fn active_index(&self) -> usize {
        self.router.active_index()
    }

    fn select_section_id(&mut self, id: &str) -> bool {
        let changed = self.router.select_id(id);
        self.remount_if(changed)
    }

    fn select_section_index(&mut self, index: usize) -> bool {
        let changed = self.router.select_index(index);
        self.remount_if(changed)
    }

    fn next_section(&mut self) -> bool {
        let changed = self.router.next();
        self.remount_if(changed)
    }

    fn prev_section(&mut self) -> bool {
        let changed = self.router.prev();
        self.remount_if(changed)
    }

    fn mounted(&self) -> &MountedSection {
        &self.mounted
    }

    fn mounted_mut(&mut self) -> &mut MountedSection {
        &mut self.mounted
    }
}

/// Build a fresh page state, opened on its first section
pub fn mount_page(page: Page, fallback_language: &str) -> Box<dyn PageView> {
    match page {
        Page::Frameworks => Box::new(PageState::<FrameworksSection>::new(fallback_language)),
        Page::Recursion => Box::new(PageState::<RecursionSection>::new(fallback_language)),
        Page::Strings => Box::new(PageState::<StringsSection>::new(fallback_language)),
        Page::Trees => Box::new(PageState::<TreesSection>::new(fallback_language)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_opens_on_first_section() {
        let view = mount_page(Page::Strings, "JavaScript");
        assert_eq!(view.active_section().id, "fundamentals");
        assert_eq!(view.sections().len(), StringsSection::ALL.len());
    }

    #[test]
    fn test_mount_wraps_problems_hidden() {
        let mut page = PageState::<StringsSection>::new("JavaScript");
        page.select(StringsSection::BasicProblems);
        let mounted = page.mounted();
        assert!(mounted.problem_count() >= 3);
        assert!(mounted.problems().all(|p| !p.is_revealed()));
        assert_eq!(mounted.problem(0).unwrap().entry().title, "1. Palindrome Check");
    }

    #[test]
    fn test_reselecting_active_section_keeps_state() {
        let mut page = PageState::<StringsSection>::new("JavaScript");
        page.select(StringsSection::BasicProblems);
        page.mounted_mut().problem_mut(0).unwrap().toggle();

        assert!(!page.select_section_id("basic-problems"));
        assert!(page.mounted().problem(0).unwrap().is_revealed());
    }

    #[test]
    fn test_leaving_and_returning_resets_problems() {
        let mut page = PageState::<StringsSection>::new("JavaScript");
        page.select(StringsSection::BasicProblems);
        page.mounted_mut().problem_mut(0).unwrap().toggle();
        page.mounted_mut().problem_mut(1).unwrap().toggle();

        page.select_section_id("practice");
        page.select_section_id("basic-problems");
        assert!(page.mounted().problems().all(|p| !p.is_revealed()));
    }

    #[test]
    fn test_unknown_section_keeps_mounted_state() {
        let mut page = PageState::<StringsSection>::new("JavaScript");
        page.select(StringsSection::BasicProblems);
        page.mounted_mut().problem_mut(0).unwrap().toggle();

        assert!(!page.select_section_id("dynamic-programming"));
        assert_eq!(page.active_section().id, "basic-problems");
        assert!(page.mounted().problem(0).unwrap().is_revealed());
    }

    #[test]
    fn test_problem_index_skips_static_nodes() {
        let mounted = MountedSection::mount(
            vec![
                Block::Paragraph("intro"),
                Block::Problem(dsa_core::ProblemEntry::new("A", dsa_core::Difficulty::Easy)),
                Block::tip("tip"),
                Block::Problem(dsa_core::ProblemEntry::new("B", dsa_core::Difficulty::Hard)),
            ],
            "JavaScript",
        );
        assert_eq!(mounted.nodes().len(), 4);
        assert_eq!(mounted.problem_count(), 2);
        assert_eq!(mounted.problem(1).unwrap().entry().title, "B");
        assert!(mounted.problem(2).is_none());
    }
}
