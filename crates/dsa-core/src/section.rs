//! Page sections as closed enums
//!
//! Every page declares its sections once with [`sections!`]. The active
//! section is then a value of that enum, so it can never name a section the
//! page does not have. String ids only appear at the edges (clicks, headless
//! commands) and resolve through [`Section::from_id`].

use std::fmt::Debug;

use serde::Serialize;

use crate::content::Block;

/// A top-level tab on a tutorial page
pub trait Section: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every section of the page in display order. Never empty.
    const ALL: &'static [Self];

    /// Stable id used by links, commands and tests (e.g. `"basic-problems"`)
    fn id(self) -> &'static str;

    /// Tab label shown to the reader (e.g. `"🔤 Basic Problems"`)
    fn label(self) -> &'static str;

    /// Build this section's static content tree
    fn blocks(self) -> Vec<Block>;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|section| section.id() == id)
    }

    /// The default section a page opens on
    fn first() -> Self {
        Self::ALL[0]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    fn info(self) -> SectionInfo {
        SectionInfo {
            id: self.id(),
            label: self.label(),
        }
    }

    fn infos() -> Vec<SectionInfo> {
        Self::ALL.iter().map(|section| section.info()).collect()
    }
}

/// Type-erased id/label pair for frontends that list sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    pub id: &'static str,
    pub label: &'static str,
}

/// Declare a page's section enum and its [`Section`] impl.
///
/// ```
/// use dsa_core::{sections, Block, Section};
///
/// fn intro() -> Vec<Block> {
///     vec![Block::Paragraph("Hello")]
/// }
///
/// sections! {
///     pub enum DemoSection {
///         Intro => ("intro", "Intro", intro),
///     }
/// }
///
/// assert_eq!(DemoSection::first().id(), "intro");
/// ```
#[macro_export]
macro_rules! sections {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($id:literal, $label:literal, $content:path)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::Section for $name {
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn id(self) -> &'static str {
                match self {
                    $( $name::$variant => $id ),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            fn blocks(self) -> ::std::vec::Vec<$crate::Block> {
                match self {
                    $( $name::$variant => $content() ),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha() -> Vec<Block> {
        vec![Block::Heading("Alpha")]
    }

    fn beta() -> Vec<Block> {
        vec![Block::Paragraph("Beta body"), Block::Paragraph("More")]
    }

    sections! {
        enum TestSection {
            Alpha => ("alpha", "🅰 Alpha", alpha),
            Beta => ("beta", "🅱 Beta", beta),
        }
    }

    #[test]
    fn test_all_in_declaration_order() {
        assert_eq!(TestSection::ALL, &[TestSection::Alpha, TestSection::Beta]);
        assert_eq!(TestSection::first(), TestSection::Alpha);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(TestSection::from_id("beta"), Some(TestSection::Beta));
        assert_eq!(TestSection::from_id("gamma"), None);
        assert_eq!(TestSection::from_id("Beta"), None);
    }

    #[test]
    fn test_index_and_info() {
        assert_eq!(TestSection::Beta.index(), 1);
        assert_eq!(
            TestSection::Alpha.info(),
            SectionInfo {
                id: "alpha",
                label: "🅰 Alpha"
            }
        );
        assert_eq!(TestSection::infos().len(), 2);
    }

    #[test]
    fn test_blocks_dispatch_to_content_fn() {
        assert_eq!(TestSection::Beta.blocks().len(), 2);
        assert_eq!(TestSection::Alpha.blocks(), vec![Block::Heading("Alpha")]);
    }
}
