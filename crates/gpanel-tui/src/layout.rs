//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Sidebar width when open
pub const SIDEBAR_WIDTH: u16 = 22;

/// Key hint bar at the bottom
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// `None` while the sidebar is collapsed
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub footer: Rect,
}

/// Split the screen into header, optional sidebar, content and footer.
pub fn create(area: Rect, sidebar_open: bool) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    let (sidebar, content) = if sidebar_open {
        let cols =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                .split(rows[1]);
        (Some(cols[0]), cols[1])
    } else {
        (None, rows[1])
    };

    ScreenAreas {
        header: rows[0],
        sidebar,
        content,
        footer: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_sidebar() {
        let layout = create(Rect::new(0, 0, 100, 30), true);
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.sidebar.map(|s| s.width), Some(SIDEBAR_WIDTH));
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.content.height, 30 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_collapsed_sidebar_gives_content_full_width() {
        let layout = create(Rect::new(0, 0, 80, 24), false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 80);
        assert_eq!(layout.footer.y, 23);
    }
}
