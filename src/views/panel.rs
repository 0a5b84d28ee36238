//! Overlay panels opened from the header.
//!
//! Panel contents are placeholders. The overlay covers the page, and a
//! click outside it or on its close control dismisses it.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Modifier;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::actions::{CLOSE_PANEL, PANEL_BODY};
use crate::input::{ClickState, InputEvent};
use crate::theme::{ColorRole, Theme};
use crate::widgets::ClickableList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Settings,
    History,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Panel::Settings => " Settings ",
            Panel::History => " History ",
        }
    }

    fn body(self) -> &'static [&'static str] {
        match self {
            Panel::Settings => &[
                "Keyboard shortcuts",
                "  1 / 2   choose a practice mode",
                "  H       session history",
                "  S       settings",
                "  Esc     close or go back",
            ],
            Panel::History => &["No practice sessions recorded yet."],
        }
    }

    /// Returns true if the event closes the panel. Clicks inside the panel
    /// body are swallowed without closing.
    pub fn closes_on(event: &InputEvent) -> bool {
        matches!(
            event,
            InputEvent::Back | InputEvent::Key('x') | InputEvent::Click(CLOSE_PANEL)
        )
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState, theme: &Theme, hovered: Option<u16>) {
        let mut cl = ClickableList::new();
        for (i, text) in self.body().iter().enumerate() {
            let style = if i == 0 && self == Panel::Settings {
                theme.text(ColorRole::Brand).add_modifier(Modifier::BOLD)
            } else {
                theme.text(ColorRole::Text)
            };
            cl.push(Line::from(Span::styled(*text, style)));
        }
        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(Span::styled(
                " [X] Close ",
                theme.style(ColorRole::Accent, hovered == Some(CLOSE_PANEL)),
            )),
            CLOSE_PANEL,
        );

        let width = area.width.saturating_sub(4).min(46);
        let height = (cl.len() as u16 + 2).min(area.height);
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        // Outside dismisses, the body swallows, the close row closes.
        cs.add_click_target(area, CLOSE_PANEL);
        cs.add_click_target(rect, PANEL_BODY);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text(ColorRole::Brand))
            .title(Span::styled(
                self.title(),
                theme.text(ColorRole::Brand).add_modifier(Modifier::BOLD),
            ));
        cl.register_targets(cs, rect, block.inner(rect), false);
        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(cl.into_lines()).block(block), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn render_panel(panel: Panel) -> (ratzilla::ratatui::buffer::Buffer, ClickState) {
        let theme = Theme::default();
        render_with(TEST_WIDTH, TEST_HEIGHT, |f, cs| {
            let area = f.area();
            panel.render(f, area, cs, &theme, None)
        })
    }

    #[test]
    fn close_events() {
        assert!(Panel::closes_on(&InputEvent::Back));
        assert!(Panel::closes_on(&InputEvent::Key('x')));
        assert!(Panel::closes_on(&InputEvent::Click(CLOSE_PANEL)));
        assert!(!Panel::closes_on(&InputEvent::Click(PANEL_BODY)));
        assert!(!Panel::closes_on(&InputEvent::Key('h')));
    }

    #[test]
    fn click_targets_layered() {
        let (buffer, cs) = render_panel(Panel::History);
        assert!(buffer_text(&buffer).contains("History"));
        assert_eq!(click_label(&buffer, &cs, "Close"), Some(CLOSE_PANEL));
        assert_eq!(click_label(&buffer, &cs, "No practice"), Some(PANEL_BODY));
        assert_eq!(cs.hit_test(0, 0), Some(CLOSE_PANEL));
    }

    #[test]
    fn settings_lists_shortcuts() {
        let (buffer, _) = render_panel(Panel::Settings);
        let text = buffer_text(&buffer);
        assert!(text.contains("Keyboard shortcuts"));
        assert!(text.contains("Esc"));
    }

    #[test]
    fn fits_tiny_area() {
        let theme = Theme::default();
        let (_, cs) = render_with(10, 4, |f, cs| {
            let area = f.area();
            Panel::Settings.render(f, area, cs, &theme, None)
        });
        assert_eq!(cs.hit_test(0, 0), Some(CLOSE_PANEL));
    }
}
