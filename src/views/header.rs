//! Page header: branding plus the History and Settings triggers.
//!
//! The header owns nothing. Both triggers call straight into the
//! capabilities it was built with, once per activation.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::Modifier;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::actions::{SHOW_HISTORY, SHOW_SETTINGS};
use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::nav::{Action, NavTarget};
use crate::theme::{ColorRole, SizeRole, Theme};
use crate::widgets::ButtonRow;

pub const BRAND: &str = "Communication Coach";
pub const TAGLINE: &str = "AI speaking practice for English learners";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    History,
    Settings,
}

impl HeaderControl {
    /// Display order, left to right.
    pub const ALL: [HeaderControl; 2] = [HeaderControl::History, HeaderControl::Settings];

    pub fn label(self) -> &'static str {
        match self {
            HeaderControl::History => "[H] History",
            HeaderControl::Settings => "[S] Settings",
        }
    }

    pub fn key(self) -> char {
        match self {
            HeaderControl::History => 'h',
            HeaderControl::Settings => 's',
        }
    }

    pub fn action_id(self) -> u16 {
        match self {
            HeaderControl::History => SHOW_HISTORY,
            HeaderControl::Settings => SHOW_SETTINGS,
        }
    }

    pub fn target(self) -> NavTarget {
        match self {
            HeaderControl::History => NavTarget::Action(Action::ShowHistory),
            HeaderControl::Settings => NavTarget::Action(Action::ShowSettings),
        }
    }

    fn from_event(event: &InputEvent) -> Option<HeaderControl> {
        Self::ALL.into_iter().find(|c| match event {
            InputEvent::Key(k) => *k == c.key(),
            InputEvent::Click(id) => *id == c.action_id(),
            _ => false,
        })
    }
}

pub struct Header<S, H> {
    on_show_settings: S,
    on_show_history: H,
}

impl<S: Fn(), H: Fn()> Header<S, H> {
    pub fn new(on_show_settings: S, on_show_history: H) -> Self {
        Self {
            on_show_settings,
            on_show_history,
        }
    }

    /// Invoke the capability behind `control`. No debouncing: every call
    /// is one invocation.
    pub fn activate(&self, control: HeaderControl) {
        control.target().dispatch(
            |route| log::warn!("header control routed to {}", route),
            |action| match action {
                Action::ShowHistory => (self.on_show_history)(),
                Action::ShowSettings => (self.on_show_settings)(),
            },
        );
    }

    /// Returns true if the event was one of the header's controls.
    pub fn handle_input(&self, event: &InputEvent) -> bool {
        match HeaderControl::from_event(event) {
            Some(control) => {
                self.activate(control);
                true
            }
            None => false,
        }
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        cs: &mut ClickState,
        theme: &Theme,
        hovered: Option<u16>,
    ) {
        let is_narrow = is_narrow_layout(area.width, theme.size(SizeRole::NarrowBreakpoint));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text(ColorRole::Border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let buttons = HeaderControl::ALL.into_iter().fold(ButtonRow::new(" │ ", theme.text(ColorRole::Border)), |row, c| {
            let is_hot = hovered == Some(c.action_id());
            row.button(c.label(), theme.style(ColorRole::Accent, is_hot), c.action_id())
        });

        let brand = Line::from(vec![
            Span::styled("◆ ", theme.text(ColorRole::Accent)),
            Span::styled(
                BRAND,
                theme.text(ColorRole::Brand).add_modifier(Modifier::BOLD),
            ),
        ]);

        if is_narrow {
            // Brand on the first row, controls on the second.
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(inner);
            f.render_widget(Paragraph::new(brand), rows[0]);
            buttons.render(f, rows[1], cs);
        } else {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(1), Constraint::Length(buttons.width())])
                .split(inner);
            let lines = vec![
                brand,
                Line::from(Span::styled(format!("  {}", TAGLINE), theme.text(ColorRole::Muted))),
            ];
            f.render_widget(Paragraph::new(lines), cols[0]);
            buttons.render(f, cols[1], cs);
        }
    }
}
