//! Section content as a flat list of lines
//!
//! The mounted section is laid out once per frame. [`ContentLines`] also
//! records which rows each problem occupies so the renderer can scroll the
//! focused one into view.

use std::ops::Range;

use dsa_app::{MountedSection, Node};
use dsa_core::{Block, Card};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::problem_card::ProblemCard;
use super::text::{fit, wrap};
use crate::theme::styles;

#[derive(Debug, Default)]
pub struct ContentLines {
    pub lines: Vec<Line<'static>>,
    /// Row range of each problem, in problem order
    pub problems: Vec<Range<u16>>,
}

impl ContentLines {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

pub fn build(
    mounted: &MountedSection,
    focus: usize,
    width: u16,
    show_line_numbers: bool,
) -> ContentLines {
    let mut out = ContentLines::default();
    let mut problem_index = 0;

    for (i, node) in mounted.nodes().iter().enumerate() {
        if i > 0 {
            out.lines.push(Line::default());
        }
        match node {
            Node::Static(block) => block_lines(&mut out.lines, block, width as usize),
            Node::Problem(view) => {
                let start = out.height();
                let card = ProblemCard::new(view)
                    .focused(problem_index == focus)
                    .line_numbers(show_line_numbers);
                out.lines.extend(card.lines(width));
                out.problems.push(start..out.height());
                problem_index += 1;
            }
        }
    }
    out
}

fn block_lines(lines: &mut Vec<Line<'static>>, block: &Block, width: usize) {
    match block {
        Block::Heading(text) => {
            lines.push(Line::styled(*text, styles::accent_bold()));
            lines.push(Line::styled(
                "─".repeat(text.width().min(width)),
                styles::text_muted(),
            ));
        }
        Block::Paragraph(text) => {
            for part in wrap(text, width) {
                lines.push(Line::styled(part, styles::text_primary()));
            }
        }
        Block::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                card_lines(lines, card, width);
            }
        }
        Block::List {
            title,
            items,
            ordered,
        } => {
            if let Some(title) = title {
                lines.push(Line::styled(*title, styles::heading()));
            }
            for (i, item) in items.iter().enumerate() {
                let prefix = if *ordered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                let indent = prefix.width();
                for (j, part) in wrap(item, width.saturating_sub(indent)).into_iter().enumerate() {
                    let lead = if j == 0 {
                        prefix.clone()
                    } else {
                        " ".repeat(indent)
                    };
                    lines.push(Line::from(vec![
                        Span::styled(lead, styles::accent()),
                        Span::styled(part, styles::text_primary()),
                    ]));
                }
            }
        }
        Block::Table { headers, rows } => table_lines(lines, headers, rows, width),
        Block::Callout { kind, text } => {
            let label = format!("{}: ", kind.label());
            let body_width = width.saturating_sub(2);
            let mut parts = wrap(&format!("{}{}", label, text), body_width).into_iter();
            if let Some(first) = parts.next() {
                lines.push(Line::from(vec![
                    Span::styled("▌ ", styles::callout(*kind)),
                    Span::styled(first, styles::callout(*kind)),
                ]));
            }
            for part in parts {
                lines.push(Line::from(vec![
                    Span::styled("▌ ", styles::callout(*kind)),
                    Span::styled(part, styles::text_primary()),
                ]));
            }
        }
        Block::Code { language, code } => {
            lines.push(Line::styled(*language, styles::text_muted()));
            for code_line in code.lines() {
                lines.push(Line::styled(format!(" {}", code_line), styles::code()));
            }
        }
        // Problems are wrapped in a ProblemView when mounted
        Block::Problem(_) => {}
    }
}

fn card_lines(lines: &mut Vec<Line<'static>>, card: &Card, width: usize) {
    lines.push(Line::from(vec![
        Span::raw(card.icon),
        Span::raw(" "),
        Span::styled(card.title, styles::heading()),
    ]));
    for part in wrap(card.body, width.saturating_sub(3)) {
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(part, styles::text_secondary()),
        ]));
    }
}

fn table_lines(
    lines: &mut Vec<Line<'static>>,
    headers: &[&'static str],
    rows: &[Vec<&'static str>],
    width: usize,
) {
    let columns = headers.len();
    if columns == 0 {
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate().take(columns) {
            widths[col] = widths[col].max(cell.width());
        }
    }

    // Shrink the widest columns until the row fits, " │ " between cells
    let separators = 3 * (columns - 1);
    let budget = width.saturating_sub(separators).max(columns);
    while widths.iter().sum::<usize>() > budget {
        let Some(widest) = widths.iter_mut().max() else {
            break;
        };
        if *widest <= 1 {
            break;
        }
        *widest -= 1;
    }

    let render_row = |cells: &[&'static str], style: Style| {
        let mut spans = Vec::with_capacity(columns * 2);
        for (col, col_width) in widths.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let cell = cells.get(col).copied().unwrap_or("");
            spans.push(Span::styled(fit(cell, *col_width), style));
        }
        Line::from(spans)
    };

    lines.push(render_row(headers, styles::heading()));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(Line::styled(rule.join("─┼─"), styles::text_muted()));
    for row in rows {
        lines.push(render_row(row.as_slice(), styles::text_primary()));
    }
}
