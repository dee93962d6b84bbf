//! Static content tree types
//!
//! Everything here is authored data compiled into the binary. The state layer
//! indexes into it by position or label and never inspects the text.

use serde::Serialize;

/// Problem difficulty shown as a badge next to the title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Example source code for a problem
///
/// Either a single snippet with no language label, or an ordered list of
/// `(label, text)` pairs. Labels are unique and keep their authoring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeContent {
    Single(&'static str),
    Multi(Vec<(&'static str, &'static str)>),
}

impl CodeContent {
    pub fn single(text: &'static str) -> Self {
        CodeContent::Single(text)
    }

    /// Build a multi-language snippet. A repeated label keeps its first text.
    pub fn multi<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut unique: Vec<(&'static str, &'static str)> = Vec::new();
        for (label, text) in pairs {
            if !unique.iter().any(|(existing, _)| *existing == label) {
                unique.push((label, text));
            }
        }
        CodeContent::Multi(unique)
    }

    /// Language labels in authoring order. Single snippets have none.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            CodeContent::Single(_) => Vec::new(),
            CodeContent::Multi(pairs) => pairs.iter().map(|(label, _)| *label).collect(),
        }
    }

    /// Text for a label, if this is a multi-language snippet that has it
    pub fn get(&self, label: &str) -> Option<&'static str> {
        match self {
            CodeContent::Single(_) => None,
            CodeContent::Multi(pairs) => pairs
                .iter()
                .find(|(existing, _)| *existing == label)
                .map(|(_, text)| *text),
        }
    }

    /// Number of selectable snippets (a single snippet counts as one)
    pub fn len(&self) -> usize {
        match self {
            CodeContent::Single(_) => 1,
            CodeContent::Multi(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CodeContent::Multi(pairs) if pairs.is_empty())
    }
}

/// Structured breakdown of how to approach a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Approach {
    pub steps: Vec<&'static str>,
    pub time: &'static str,
    pub space: &'static str,
}

/// A single tutorial problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemEntry {
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub code: CodeContent,
    pub explanation: &'static str,
    pub approach: Option<Approach>,
}

impl ProblemEntry {
    pub fn new(title: &'static str, difficulty: Difficulty) -> Self {
        Self {
            title,
            difficulty,
            description: "",
            code: CodeContent::Multi(Vec::new()),
            explanation: "",
            approach: None,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn code(mut self, code: CodeContent) -> Self {
        self.code = code;
        self
    }

    pub fn explanation(mut self, explanation: &'static str) -> Self {
        self.explanation = explanation;
        self
    }

    pub fn approach(
        mut self,
        steps: Vec<&'static str>,
        time: &'static str,
        space: &'static str,
    ) -> Self {
        self.approach = Some(Approach { steps, time, space });
        self
    }

    pub fn has_approach(&self) -> bool {
        self.approach.is_some()
    }
}

/// A small titled card, usually laid out in a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

impl Card {
    pub fn new(icon: &'static str, title: &'static str, body: &'static str) -> Self {
        Self { icon, title, body }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Tip,
    Note,
    Warning,
}

impl CalloutKind {
    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Tip => "Tip",
            CalloutKind::Note => "Note",
            CalloutKind::Warning => "Watch out",
        }
    }
}

/// One node of a section's static content tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
    Cards(Vec<Card>),
    List {
        title: Option<&'static str>,
        items: Vec<&'static str>,
        ordered: bool,
    },
    Table {
        headers: Vec<&'static str>,
        rows: Vec<Vec<&'static str>>,
    },
    Callout {
        kind: CalloutKind,
        text: &'static str,
    },
    /// A standalone snippet outside of any problem
    Code {
        language: &'static str,
        code: &'static str,
    },
    Problem(ProblemEntry),
}

impl Block {
    pub fn bullets(items: Vec<&'static str>) -> Self {
        Block::List {
            title: None,
            items,
            ordered: false,
        }
    }

    pub fn titled_bullets(title: &'static str, items: Vec<&'static str>) -> Self {
        Block::List {
            title: Some(title),
            items,
            ordered: false,
        }
    }

    pub fn steps(title: &'static str, items: Vec<&'static str>) -> Self {
        Block::List {
            title: Some(title),
            items,
            ordered: true,
        }
    }

    pub fn table(headers: Vec<&'static str>, rows: Vec<Vec<&'static str>>) -> Self {
        Block::Table { headers, rows }
    }

    pub fn tip(text: &'static str) -> Self {
        Block::Callout {
            kind: CalloutKind::Tip,
            text,
        }
    }

    pub fn note(text: &'static str) -> Self {
        Block::Callout {
            kind: CalloutKind::Note,
            text,
        }
    }

    pub fn warning(text: &'static str) -> Self {
        Block::Callout {
            kind: CalloutKind::Warning,
            text,
        }
    }
}
