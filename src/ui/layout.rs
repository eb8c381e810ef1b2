use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Label of the clickable submit control.
pub const CALCULATE_LABEL: &str = "[ Calculate ]";

/// The fixed regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    /// Input field (bordered, one text row).
    pub input: Rect,
    /// Clickable calculate control.
    pub button: Rect,
    /// Primary display region: result / loading / error message.
    pub result: Rect,
    /// Secondary display region: postfix trace and reconstructed infix.
    pub trace: Rect,
    /// Key hints.
    pub footer: Rect,
}

pub fn screen_regions(area: Rect) -> ScreenRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    // The clickable area is just the label, not the whole row.
    let button_row = rows[1];
    let button = Rect {
        x: button_row.x + 2,
        y: button_row.y,
        width: (CALCULATE_LABEL.len() as u16).min(button_row.width.saturating_sub(2)),
        height: button_row.height,
    };

    ScreenRegions {
        input: rows[0],
        button,
        result: rows[2],
        trace: rows[3],
        footer: rows[4],
    }
}

impl ScreenRegions {
    /// Hit test for mouse clicks on the calculate control.
    pub fn hits_button(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }
}
