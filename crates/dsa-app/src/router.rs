//! Single-select router over a page's sections

use dsa_core::Section;

/// Holds the active section of one page
///
/// The active value is a variant of `S`, so it is always one of `S::ALL`.
/// Each `select*` method returns whether the active section changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRouter<S: Section> {
    active: S,
}

impl<S: Section> Default for SectionRouter<S> {
    fn default() -> Self {
        Self { active: S::first() }
    }
}

impl<S: Section> SectionRouter<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> S {
        self.active
    }

    pub fn active_index(&self) -> usize {
        self.active.index()
    }

    pub fn select(&mut self, section: S) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    /// Unknown ids are ignored
    pub fn select_id(&mut self, id: &str) -> bool {
        match S::from_id(id) {
            Some(section) => self.select(section),
            None => false,
        }
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        match S::ALL.get(index) {
            Some(section) => self.select(*section),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        let len = S::ALL.len();
        self.select_index((self.active_index() + 1) % len)
    }

    pub fn prev(&mut self) -> bool {
        let len = S::ALL.len();
        self.select_index((self.active_index() + len - 1) % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsa_content::StringsSection;

    #[test]
    fn test_defaults_to_first_section() {
        let router = SectionRouter::<StringsSection>::new();
        assert_eq!(router.active(), StringsSection::Fundamentals);
    }

    #[test]
    fn test_select_id_unknown_is_noop() {
        let mut router = SectionRouter::<StringsSection>::new();
        router.select_id("basic-problems");
        assert!(!router.select_id("graphs"));
        assert!(!router.select_id(""));
        assert_eq!(router.active(), StringsSection::BasicProblems);
    }

    #[test]
    fn test_select_same_section_reports_no_change() {
        let mut router = SectionRouter::<StringsSection>::new();
        assert!(!router.select(StringsSection::Fundamentals));
        assert!(router.select(StringsSection::Practice));
    }

    #[test]
    fn test_select_index_out_of_range_is_noop() {
        let mut router = SectionRouter::<StringsSection>::new();
        assert!(router.select_index(2));
        assert!(!router.select_index(StringsSection::ALL.len()));
        assert_eq!(router.active_index(), 2);
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut router = SectionRouter::<StringsSection>::new();
        router.prev();
        assert_eq!(router.active(), *StringsSection::ALL.last().unwrap());
        router.next();
        assert_eq!(router.active(), StringsSection::Fundamentals);
    }

    #[test]
    fn test_active_always_in_all() {
        let mut router = SectionRouter::<StringsSection>::new();
        for id in ["two-pointers", "nope", "practice", "PRACTICE"] {
            router.select_id(id);
            assert!(StringsSection::ALL.contains(&router.active()));
        }
    }
}
