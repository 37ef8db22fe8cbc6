use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Stacked converter layout:
/// - Number input (3 rows)
/// - Source / target base selectors side by side (3 rows)
/// - Result panel (3 rows)
/// - History list (remaining rows)
/// - Status bar (bottom row)
pub struct AppLayout {
    pub input_area: Rect,
    pub source_area: Rect,
    pub target_area: Rect,
    pub result_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let bases = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        Self {
            input_area: rows[0],
            source_area: bases[0],
            target_area: bases[1],
            result_area: rows[2],
            history_area: rows[3],
            status_area: rows[4],
        }
    }
}
