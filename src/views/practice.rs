//! Landing view for a practice route.
//!
//! Speech capture and scoring live outside this app; the page names the
//! mode the user picked and offers the way back home.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Modifier;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::actions::BACK_HOME;
use crate::input::{ClickState, InputEvent};
use crate::nav::{Navigator, Route};
use crate::theme::{ColorRole, Theme};
use crate::views::home::{HomePage, ModeCard};
use crate::widgets::ClickableList;

pub struct PracticePage {
    card: &'static ModeCard,
}

impl PracticePage {
    /// The page for `route`, if it is one of the practice routes.
    pub fn for_route(route: Route) -> Option<Self> {
        HomePage::entries()
            .iter()
            .find(|c| c.route == route)
            .map(|card| Self { card })
    }

    /// Returns true if the event led back home.
    pub fn handle_input(&self, event: &InputEvent, nav: &mut dyn Navigator) -> bool {
        let back = matches!(
            event,
            InputEvent::Back | InputEvent::Key('b') | InputEvent::Click(BACK_HOME)
        );
        if back {
            nav.navigate(Route::Home);
        }
        back
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        cs: &mut ClickState,
        theme: &Theme,
        hovered: Option<u16>,
    ) {
        let card = self.card;
        let mut cl = ClickableList::new();
        cl.push(Line::from(Span::styled(
            card.title,
            theme.text(card.color).add_modifier(Modifier::BOLD),
        )));
        cl.push(Line::from(Span::styled(card.subtitle, theme.text(ColorRole::Muted))));
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            "Microphone sessions are not available in this build.",
            theme.text(ColorRole::Text),
        )));
        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(Span::styled(
                " [B] Back to home ",
                theme.style(ColorRole::Accent, hovered == Some(BACK_HOME)),
            )),
            BACK_HOME,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(card.color, false))
            .title(Span::styled(
                format!(" {} ", card.badge),
                theme.text(card.color).add_modifier(Modifier::BOLD),
            ));
        cl.register_targets(cs, area, block.inner(area), true);

        let widget = Paragraph::new(cl.into_lines())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(widget, area);
    }
}
