//! Parsing of headless stdin commands

use dsa_app::Message;
use dsa_content::Page;
use dsa_core::prelude::*;

/// One line of headless input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Page(Page),
    Section(String),
    Toggle(usize),
    Tab { problem: usize, tab: String },
    Lang { problem: usize, label: String },
    State,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines give `Ok(None)`.
    ///
    /// Only the shape of the line is checked here. An unknown section id,
    /// tab name or language label parses fine and is ignored by the state.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("page", [slug]) => Command::Page(slug.parse()?),
            ("section", [id]) => Command::Section(id.to_string()),
            ("toggle", [n]) => Command::Toggle(parse_index(n)?),
            ("tab", [n, tab]) => Command::Tab {
                problem: parse_index(n)?,
                tab: tab.to_string(),
            },
            ("lang", [n, rest @ ..]) if !rest.is_empty() => Command::Lang {
                problem: parse_index(n)?,
                label: rest.join(" "),
            },
            ("state", []) => Command::State,
            ("quit" | "q", []) => Command::Quit,
            ("page" | "section" | "toggle" | "tab" | "lang" | "state" | "quit" | "q", _) => {
                return Err(Error::command(format!("usage: {}", usage(name))));
            }
            _ => return Err(Error::command(format!("unknown command '{}'", name))),
        };
        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Page(_) => "page",
            Command::Section(_) => "section",
            Command::Toggle(_) => "toggle",
            Command::Tab { .. } => "tab",
            Command::Lang { .. } => "lang",
            Command::State => "state",
            Command::Quit => "quit",
        }
    }

    /// The message this command applies, if it changes anything
    pub fn to_message(&self) -> Option<Message> {
        match self {
            Command::Page(page) => Some(Message::SelectPage(*page)),
            Command::Section(id) => Some(Message::SelectSection(id.clone())),
            Command::Toggle(problem) => Some(Message::ToggleSolution { problem: *problem }),
            Command::Tab { problem, tab } => Some(Message::SelectSubTab {
                problem: *problem,
                tab: tab.clone(),
            }),
            Command::Lang { problem, label } => Some(Message::SelectLanguage {
                problem: *problem,
                label: label.clone(),
            }),
            Command::State => None,
            Command::Quit => Some(Message::Quit),
        }
    }
}

fn parse_index(text: &str) -> Result<usize> {
    text.parse()
        .map_err(|_| Error::command(format!("'{}' is not a problem index", text)))
}

fn usage(name: &str) -> &'static str {
    match name {
        "page" => "page <frameworks|recursion|strings|trees>",
        "section" => "section <id>",
        "toggle" => "toggle <n>",
        "tab" => "tab <n> <solution|approach>",
        "lang" => "lang <n> <label>",
        "state" => "state",
        _ => "quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("page strings").unwrap(),
            Some(Command::Page(Page::Strings))
        );
        assert_eq!(
            Command::parse("  section   basic-problems ").unwrap(),
            Some(Command::Section("basic-problems".into()))
        );
        assert_eq!(Command::parse("toggle 2").unwrap(), Some(Command::Toggle(2)));
        assert_eq!(
            Command::parse("tab 0 approach").unwrap(),
            Some(Command::Tab {
                problem: 0,
                tab: "approach".into()
            })
        );
        assert_eq!(
            Command::parse("lang 1 C++").unwrap(),
            Some(Command::Lang {
                problem: 1,
                label: "C++".into()
            })
        );
        assert_eq!(Command::parse("state").unwrap(), Some(Command::State));
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
    }

    #[test]
    fn test_malformed_lines() {
        for line in ["toggle", "toggle x", "toggle -1", "tab 0", "lang 0", "state now", "jump 3"] {
            assert!(
                matches!(Command::parse(line), Err(Error::Command { .. })),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_unknown_page_is_an_error() {
        assert!(matches!(
            Command::parse("page heaps"),
            Err(Error::UnknownPage { .. })
        ));
    }

    #[test]
    fn test_unknown_ids_still_parse() {
        assert!(Command::parse("section heaps").unwrap().is_some());
        assert!(Command::parse("tab 0 hints").unwrap().is_some());
    }

    #[test]
    fn test_state_has_no_message() {
        assert_eq!(Command::State.to_message(), None);
        assert_eq!(Command::Quit.to_message(), Some(Message::Quit));
    }
}
