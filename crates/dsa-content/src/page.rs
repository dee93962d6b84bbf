//! The tutorial pages and their type-erased metadata

use std::fmt;
use std::str::FromStr;

use dsa_core::{Error, Section, SectionInfo};
use serde::{Deserialize, Serialize};

use crate::{FrameworksSection, RecursionSection, StringsSection, TreesSection};

/// A top-level tutorial page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Frameworks,
    Recursion,
    Strings,
    Trees,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Frameworks, Page::Recursion, Page::Strings, Page::Trees];

    /// URL and command slug (`/strings`, `page strings`)
    pub fn slug(self) -> &'static str {
        match self {
            Page::Frameworks => "frameworks",
            Page::Recursion => "recursion",
            Page::Strings => "strings",
            Page::Trees => "trees",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Frameworks => "Problem-Solving Frameworks",
            Page::Recursion => "Recursion",
            Page::Strings => "Strings",
            Page::Trees => "Trees",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Frameworks => "🧭",
            Page::Recursion => "🔁",
            Page::Strings => "🔤",
            Page::Trees => "🌳",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Page::Frameworks => {
                "A repeatable process for turning an unfamiliar problem into working code."
            }
            Page::Recursion => "Solve a problem by trusting a smaller copy of itself.",
            Page::Strings => {
                "Character arrays, two pointers, sliding windows and pattern matching."
            }
            Page::Trees => "Hierarchical data, traversal orders and binary search trees.",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }

    /// Sections of this page in display order
    pub fn sections(self) -> Vec<SectionInfo> {
        match self {
            Page::Frameworks => FrameworksSection::infos(),
            Page::Recursion => RecursionSection::infos(),
            Page::Strings => StringsSection::infos(),
            Page::Trees => TreesSection::infos(),
        }
    }

    pub fn next(self) -> Page {
        let idx = self.index();
        Page::ALL[(idx + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Page {
        let idx = self.index();
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_slug(&s.trim().to_ascii_lowercase()).ok_or_else(|| Error::unknown_page(s))
    }
}
