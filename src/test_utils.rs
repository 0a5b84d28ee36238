//! Test helpers for rendering into ratatui's `TestBackend`.
//!
//! Rendering tests draw a full frame, then inspect the buffer text and the
//! click targets registered along the way. Clicks are simulated by locating
//! a label in the buffer and hit-testing its cell.

use ratzilla::ratatui::backend::TestBackend;
use ratzilla::ratatui::buffer::Buffer;
use ratzilla::ratatui::{Frame, Terminal};

use crate::input::ClickState;

/// Standard test terminal size.
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 30;

/// Narrow terminal for responsive layouts (phone-sized).
pub const NARROW_WIDTH: u16 = 40;
pub const NARROW_HEIGHT: u16 = 50;

/// Draw one frame and return the buffer plus the click targets registered.
pub fn render_with(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut Frame, &mut ClickState),
) -> (Buffer, ClickState) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut cs = ClickState::new();
    cs.reset(width, height);
    terminal.draw(|f| draw(f, &mut cs)).unwrap();
    (terminal.backend().buffer().clone(), cs)
}

/// Text of row `y`.
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.x..area.x + area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Whole buffer as newline-separated rows.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| buffer_line(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cell position of the first occurrence of `needle`.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    (area.y..area.y + area.height).find_map(|y| {
        let line = buffer_line(buffer, y);
        line.find(needle)
            .map(|byte_idx| (area.x + line[..byte_idx].chars().count() as u16, y))
    })
}

/// Number of occurrences of `needle` across the buffer rows.
pub fn count_text(buffer: &Buffer, needle: &str) -> usize {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| buffer_line(buffer, y).matches(needle).count())
        .sum()
}

/// Action ID under the first cell of `label`.
pub fn click_label(buffer: &Buffer, cs: &ClickState, label: &str) -> Option<u16> {
    let (x, y) = find_text(buffer, label)?;
    cs.hit_test(x, y)
}
