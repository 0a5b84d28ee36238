//! Application shell: owns all real state and composes the views.
//!
//! The header and home page are leaf views. The shell hands the header
//! its two capabilities on every render or dispatch, and gives pages a
//! [`Navigator`] to request transitions through.

use std::cell::Cell;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::nav::{Navigator, Route};
use crate::theme::{ColorRole, SizeRole, Theme};
use crate::views::header::Header;
use crate::views::home::HomePage;
use crate::views::panel::Panel;
use crate::views::practice::PracticePage;

pub struct App<N> {
    router: N,
    theme: Theme,
    panel: Cell<Option<Panel>>,
    hovered: Option<u16>,
}

impl<N: Navigator> App<N> {
    pub fn new(router: N, theme: Theme) -> Self {
        Self {
            router,
            theme,
            panel: Cell::new(None),
            hovered: None,
        }
    }

    #[cfg(test)]
    pub fn router(&self) -> &N {
        &self.router
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn panel(&self) -> Option<Panel> {
        self.panel.get()
    }

    fn open_panel(&self, panel: Panel) {
        log::info!("open panel: {:?}", panel);
        self.panel.set(Some(panel));
    }

    fn header(&self) -> Header<impl Fn() + '_, impl Fn() + '_> {
        Header::new(
            move || self.open_panel(Panel::Settings),
            move || self.open_panel(Panel::History),
        )
    }

    /// Dispatch one input event. Returns true if anything consumed it.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Hover(id) = event {
            let changed = self.hovered != *id;
            self.hovered = *id;
            return changed;
        }

        let panel_open = self.panel.get().is_some();
        if panel_open && Panel::closes_on(event) {
            log::info!("close panel");
            self.panel.set(None);
            return true;
        }

        // The header stays live under a panel so H/S can switch panels.
        if self.header().handle_input(event) {
            return true;
        }

        if panel_open {
            // Everything else is covered by the overlay.
            return matches!(event, InputEvent::Click(_));
        }

        match self.router.current() {
            Route::Home => HomePage::handle_input(event, &mut self.router),
            route => PracticePage::for_route(route)
                .is_some_and(|page| page.handle_input(event, &mut self.router)),
        }
    }

    pub fn render(&self, f: &mut Frame, cs: &mut ClickState) {
        let size = f.area();
        let theme = &self.theme;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(theme.size(SizeRole::HeaderHeight)),
                Constraint::Min(6),
                Constraint::Length(theme.size(SizeRole::HelpHeight)),
            ])
            .split(size);

        self.header().render(f, chunks[0], cs, theme, self.hovered);

        let route = self.router.current();
        match PracticePage::for_route(route) {
            Some(page) => page.render(f, chunks[1], cs, theme, self.hovered),
            None => HomePage::render(f, chunks[1], cs, theme, self.hovered),
        }

        self.render_help(f, chunks[2], route);

        if let Some(panel) = self.panel.get() {
            panel.render(f, size, cs, theme, self.hovered);
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect, route: Route) {
        let help_text = match (self.panel.get(), route) {
            (Some(_), _) => "X or Esc to close",
            (None, Route::Home) => "1/2 choose a mode · H history · S settings",
            (None, _) => "B or Esc back to home · H history · S settings",
        };
        let help = Paragraph::new(Line::from(Span::styled(
            help_text,
            self.theme.text(ColorRole::Muted),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.text(ColorRole::Border)),
        )
        .alignment(Alignment::Center);
        f.render_widget(help, area);
    }
}
