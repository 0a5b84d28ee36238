//! Input events and pointer hit testing.
//!
//! Views register [`ClickTarget`]s while they render. The pointer handler
//! maps a DOM position to a grid cell with [`ClickState::cell_at`] and asks
//! [`ClickState::hit_test`] which target is on top there.

use ratzilla::event::{KeyCode, KeyEvent};
use ratzilla::ratatui::layout::{Position, Rect};

/// Keyboard and pointer input after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A plain key press, lowercased.
    Key(char),
    /// Escape: close the topmost panel or leave the current page.
    Back,
    /// A click/tap on a registered target, by action ID.
    Click(u16),
    /// The pointer moved; carries the action ID of the target under it, if any.
    Hover(Option<u16>),
}

impl InputEvent {
    /// Chords with Ctrl or Alt are left to the browser.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.ctrl || key.alt {
            return None;
        }
        match key.code {
            KeyCode::Char(c) => Some(InputEvent::Key(c.to_ascii_lowercase())),
            KeyCode::Esc => Some(InputEvent::Back),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTarget {
    pub rect: Rect,
    /// See [`crate::actions`].
    pub action_id: u16,
}

/// Targets registered during the last frame, and the grid they were laid
/// out on.
#[derive(Debug, Default)]
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's targets and record the new grid size.
    pub fn reset(&mut self, cols: u16, rows: u16) {
        self.targets.clear();
        self.terminal_cols = cols;
        self.terminal_rows = rows;
    }

    /// Zero-sized rects are dropped.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        if !rect.is_empty() {
            self.targets.push(ClickTarget { rect, action_id });
        }
    }

    /// Register one full-width row of `area`. Rows outside `area` are dropped.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if (area.top()..area.bottom()).contains(&row) {
            self.add_click_target(Rect { y: row, height: 1, ..area }, action_id);
        }
    }

    /// Split `row` between buttons laid out left to right.
    ///
    /// `buttons` holds `(padded label width, action_id)` pairs and
    /// `separator` the width drawn between neighbours. Each boundary falls
    /// in the middle of a separator and the outer buttons reach the edges
    /// of `row`, so no column of the row is dead.
    pub fn register_button_targets(&mut self, row: Rect, buttons: &[(u16, u16)], separator: u16) {
        let mut left = row.left();
        let mut label_start = row.left();
        for (i, &(width, action_id)) in buttons.iter().enumerate() {
            if left >= row.right() {
                break;
            }
            let label_end = label_start.saturating_add(width);
            let right = if i + 1 == buttons.len() {
                row.right()
            } else {
                label_end.saturating_add(separator / 2).min(row.right())
            };
            self.add_click_target(
                Rect::new(left, row.y, right.saturating_sub(left), row.height),
                action_id,
            );
            left = right;
            label_start = label_end.saturating_add(separator);
        }
    }

    /// The topmost target at a cell. Later registrations sit on top.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        let pos = Position::new(col, row);
        self.targets
            .iter()
            .rev()
            .find(|t| t.rect.contains(pos))
            .map(|t| t.action_id)
    }

    /// Map a pointer position, in pixels from the grid's top-left corner,
    /// to `(col, row)`. `grid_px` is the grid's rendered `(width, height)`.
    pub fn cell_at(&self, x: f64, y: f64, grid_px: (f64, f64)) -> Option<(u16, u16)> {
        let col = cell_index(x, grid_px.0, self.terminal_cols)?;
        let row = cell_index(y, grid_px.1, self.terminal_rows)?;
        Some((col, row))
    }
}

fn cell_index(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if cells == 0 || !(0.0..extent).contains(&offset) {
        return None;
    }
    let index = (offset * f64::from(cells) / extent) as u16;
    Some(index.min(cells - 1))
}

/// Whether `width` columns call for the single-column layout.
pub fn is_narrow_layout(width: u16, breakpoint: u16) -> bool {
    width < breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::*;

    /// Header button row: " [H] History " (13) │ " [S] Settings " (14).
    fn header_row() -> ClickState {
        let mut cs = ClickState::new();
        cs.register_button_targets(
            Rect::new(40, 1, 30, 2),
            &[(13, SHOW_HISTORY), (14, SHOW_SETTINGS)],
            3,
        );
        cs
    }

    /// Overlay layering as the settings panel registers it.
    fn panel_layers() -> ClickState {
        let mut cs = ClickState::new();
        let screen = Rect::new(0, 0, 80, 30);
        let panel = Rect::new(17, 10, 46, 8);
        cs.add_click_target(screen, CLOSE_PANEL);
        cs.add_click_target(panel, PANEL_BODY);
        cs.add_row_target(panel, 16, CLOSE_PANEL);
        cs
    }

    #[test]
    fn header_buttons_meet_mid_separator() {
        let cs = header_row();
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(40, 1), Some(SHOW_HISTORY));
        assert_eq!(cs.hit_test(53, 2), Some(SHOW_HISTORY));
        assert_eq!(cs.hit_test(54, 1), Some(SHOW_SETTINGS));
        assert_eq!(cs.hit_test(69, 2), Some(SHOW_SETTINGS));
    }

    #[test]
    fn header_buttons_stay_inside_their_row() {
        let cs = header_row();
        assert_eq!(cs.hit_test(39, 1), None);
        assert_eq!(cs.hit_test(70, 1), None);
        assert_eq!(cs.hit_test(50, 0), None);
        assert_eq!(cs.hit_test(50, 3), None);
    }

    #[test]
    fn buttons_wider_than_row_are_clipped() {
        let mut cs = ClickState::new();
        cs.register_button_targets(
            Rect::new(0, 0, 10, 1),
            &[(13, SHOW_HISTORY), (14, SHOW_SETTINGS)],
            3,
        );
        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(9, 0), Some(SHOW_HISTORY));
    }

    #[test]
    fn panel_layers_resolve_topmost() {
        let cs = panel_layers();
        assert_eq!(cs.hit_test(0, 0), Some(CLOSE_PANEL));
        assert_eq!(cs.hit_test(30, 12), Some(PANEL_BODY));
        assert_eq!(cs.hit_test(30, 16), Some(CLOSE_PANEL));
        assert_eq!(cs.hit_test(30, 17), Some(PANEL_BODY));
    }

    #[test]
    fn row_targets_outside_card_are_dropped() {
        let mut cs = ClickState::new();
        let card = Rect::new(0, 6, 39, 11);
        cs.add_row_target(card, 5, START_MODE_BASE);
        cs.add_row_target(card, 17, START_MODE_BASE);
        assert!(cs.targets.is_empty());

        cs.add_row_target(card, 15, START_MODE_BASE);
        assert_eq!(cs.targets[0].rect, Rect::new(0, 15, 39, 1));
    }

    #[test]
    fn collapsed_card_registers_nothing() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 6, 39, 0), START_MODE_BASE);
        cs.add_click_target(Rect::new(0, 6, 0, 11), START_MODE_BASE + 1);
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn reset_starts_a_new_frame() {
        let mut cs = panel_layers();
        cs.reset(40, 50);
        assert_eq!(cs.hit_test(0, 0), None);
        assert_eq!((cs.terminal_cols, cs.terminal_rows), (40, 50));
    }

    fn key(code: KeyCode, ctrl: bool, alt: bool, shift: bool) -> KeyEvent {
        KeyEvent { code, ctrl, alt, shift }
    }

    #[test]
    fn plain_and_shifted_keys_are_lowercased() {
        let plain = key(KeyCode::Char('s'), false, false, false);
        let shifted = key(KeyCode::Char('H'), false, false, true);
        assert_eq!(InputEvent::from_key(&plain), Some(InputEvent::Key('s')));
        assert_eq!(InputEvent::from_key(&shifted), Some(InputEvent::Key('h')));
        assert_eq!(
            InputEvent::from_key(&key(KeyCode::Esc, false, false, false)),
            Some(InputEvent::Back)
        );
    }

    #[test]
    fn browser_chords_are_ignored() {
        assert_eq!(InputEvent::from_key(&key(KeyCode::Char('s'), true, false, false)), None);
        assert_eq!(InputEvent::from_key(&key(KeyCode::Char('h'), false, true, false)), None);
        assert_eq!(InputEvent::from_key(&key(KeyCode::Esc, true, false, false)), None);
        assert_eq!(InputEvent::from_key(&key(KeyCode::Enter, false, false, false)), None);
    }

    #[test]
    fn narrow_below_breakpoint_only() {
        assert!(is_narrow_layout(59, 60));
        assert!(!is_narrow_layout(60, 60));
    }

    // 80x30 grid drawn at 800x450 px: 10x15 px cells.

    #[test]
    fn cell_at_maps_pixels_to_cells() {
        let mut cs = ClickState::new();
        cs.reset(80, 30);
        let grid = (800.0, 450.0);
        assert_eq!(cs.cell_at(0.0, 0.0, grid), Some((0, 0)));
        assert_eq!(cs.cell_at(9.9, 14.9, grid), Some((0, 0)));
        assert_eq!(cs.cell_at(10.0, 15.0, grid), Some((1, 1)));
        assert_eq!(cs.cell_at(799.0, 449.0, grid), Some((79, 29)));
    }

    #[test]
    fn cell_at_rejects_outside_or_unsized_grid() {
        let mut cs = ClickState::new();
        assert_eq!(cs.cell_at(10.0, 10.0, (800.0, 450.0)), None);

        cs.reset(80, 30);
        assert_eq!(cs.cell_at(800.0, 10.0, (800.0, 450.0)), None);
        assert_eq!(cs.cell_at(10.0, 450.0, (800.0, 450.0)), None);
        assert_eq!(cs.cell_at(-1.0, 10.0, (800.0, 450.0)), None);
        assert_eq!(cs.cell_at(10.0, 10.0, (0.0, 450.0)), None);
    }

    #[test]
    fn pointer_on_settings_resolves_to_settings() {
        let mut cs = header_row();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;
        // Cell (60, 1) spans x 600..610, y 15..30.
        let (col, row) = cs.cell_at(605.0, 22.0, (800.0, 450.0)).unwrap();
        assert_eq!(cs.hit_test(col, row), Some(SHOW_SETTINGS));
    }
}
