//! Layout helpers for the wizard modal

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions inside the modal
pub struct ModalLayout {
    /// Step body
    pub body: Rect,
    /// Status or error line
    pub status: Rect,
    /// Key hints
    pub hints: Rect,
}

impl ModalLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            body: chunks[0],
            status: chunks[1],
            hints: chunks[2],
        }
    }
}

/// Fixed-size rect centered in `r`, shrunk to fit
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
