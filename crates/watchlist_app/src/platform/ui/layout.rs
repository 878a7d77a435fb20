use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions: navigation bar, two side-by-side boxes, star widget, key hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub nav: Rect,
    pub results: Rect,
    pub side: Rect,
    pub rating: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    ScreenLayout {
        nav: rows[0],
        results: main[0],
        side: main[1],
        rating: rows[2],
        footer: rows[3],
    }
}
