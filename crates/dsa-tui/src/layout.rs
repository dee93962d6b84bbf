//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and page tabs (bordered)
    pub header: Rect,

    /// One row of section tabs
    pub sections: Rect,

    /// Scrollable section content (bordered)
    pub content: Rect,

    /// One row of key hints
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(1), // Section tabs
        Constraint::Min(3),    // Content (glass container)
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        sections: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let layout = create(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.sections.y, 3);
        assert_eq!(layout.content.height, 19);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_tiny_terminal_keeps_content() {
        let layout = create(Rect::new(0, 0, 40, 8));
        assert!(layout.content.height >= 3);
    }
}
