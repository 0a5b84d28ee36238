//! Landing page: one card per practice mode.
//!
//! The cards are a fixed table. Activating a card requests navigation to
//! its route and does nothing else.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::Modifier;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::actions::START_MODE_BASE;
use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::nav::{NavTarget, Navigator, Route};
use crate::theme::{ColorRole, SizeRole, Theme};
use crate::widgets::wrapped_height;

/// A navigable entry: a route plus everything shown on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCard {
    pub route: Route,
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub color: ColorRole,
}

impl ModeCard {
    pub fn target(&self) -> NavTarget {
        NavTarget::Route(self.route)
    }
}

pub const MODES: [ModeCard; 2] = [
    ModeCard {
        route: Route::Basic,
        badge: "Basic Mode",
        title: "Practice & Analysis",
        subtitle: "Free conversation practice with instant feedback",
        features: &[
            "Real-time speech analysis",
            "Pronunciation and fluency feedback",
            "Grammar and vocabulary suggestions",
            "Session history tracking",
        ],
        cta: "Start Basic Mode",
        color: ColorRole::Basic,
    },
    ModeCard {
        route: Route::Ielts,
        badge: "IELTS Speaking Test",
        title: "Official Test Simulation",
        subtitle: "Full three-part speaking exam with an AI examiner",
        features: &[
            "Part 1: Introduction and interview",
            "Part 2: Individual long turn",
            "Part 3: Two-way discussion",
            "Band score estimate per criterion",
        ],
        cta: "Start IELTS Test",
        color: ColorRole::Ielts,
    },
];

const INTRO: &str = "Choose how you want to practice today.";

pub struct HomePage;

impl HomePage {
    /// Both entries, basic mode first.
    pub fn entries() -> &'static [ModeCard] {
        &MODES
    }

    /// Request navigation to card `index`'s route. Out-of-range indices
    /// request nothing.
    pub fn activate(index: usize, nav: &mut dyn Navigator) -> Option<Route> {
        let card = MODES.get(index)?;
        let mut requested = None;
        card.target().dispatch(
            |route| {
                nav.navigate(route);
                requested = Some(route);
            },
            |action| log::warn!("home card bound to action {:?}", action),
        );
        requested
    }

    /// Returns true if the event selected a card.
    pub fn handle_input(event: &InputEvent, nav: &mut dyn Navigator) -> bool {
        let index = match event {
            InputEvent::Key(c) => c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)),
            InputEvent::Click(id) => id
                .checked_sub(START_MODE_BASE)
                .map(|i| i as usize)
                .filter(|i| *i < MODES.len()),
            _ => None,
        };
        index.and_then(|i| Self::activate(i, nav)).is_some()
    }

    pub fn render(
        f: &mut Frame,
        area: Rect,
        cs: &mut ClickState,
        theme: &Theme,
        hovered: Option<u16>,
    ) {
        let is_narrow = is_narrow_layout(area.width, theme.size(SizeRole::NarrowBreakpoint));
        let gap = theme.size(SizeRole::CardGap);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);
        let intro = Paragraph::new(Line::from(Span::styled(
            format!(" {}", INTRO),
            theme.text(ColorRole::Text),
        )))
        .wrap(Wrap { trim: false });
        f.render_widget(intro, chunks[0]);

        let cards: Vec<(Vec<Line>, Line)> = MODES
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let is_hot = hovered == Some(START_MODE_BASE + i as u16);
                (card_body(card, theme), card_cta(i, card, theme, is_hot))
            })
            .collect();

        let slots = if is_narrow {
            // Stacked. Each card gets the rows it needs when they all fit,
            // otherwise the cards share the height evenly.
            let inner_width = chunks[1].width.saturating_sub(2);
            let gap = gap / 2;
            let heights: Vec<u16> = cards
                .iter()
                .map(|(body, _)| wrapped_height(body, inner_width) + CTA_ROWS + 2)
                .collect();
            let needed = heights.iter().sum::<u16>() + gap * (heights.len() as u16 - 1);
            let constraints = if needed <= chunks[1].height {
                vec![
                    Constraint::Length(heights[0]),
                    Constraint::Length(gap),
                    Constraint::Length(heights[1]),
                    Constraint::Min(0),
                ]
            } else {
                vec![Constraint::Fill(1), Constraint::Length(gap), Constraint::Fill(1)]
            };
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(chunks[1]);
            [rows[0], rows[2]]
        } else {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(gap),
                    Constraint::Fill(1),
                ])
                .split(chunks[1]);
            [cols[0], cols[2]]
        };

        for (i, ((body, cta), slot)) in cards.into_iter().zip(slots).enumerate() {
            let card = &MODES[i];
            let id = START_MODE_BASE + i as u16;
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(card.color, hovered == Some(id)))
                .title(Span::styled(
                    format!(" {} ", card.badge),
                    theme.text(card.color).add_modifier(Modifier::BOLD),
                ));
            // The call to action keeps the bottom row; the body is clipped first.
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(block.inner(slot));

            // Whole card first, the call-to-action row on top.
            cs.add_click_target(slot, id);
            if parts[1].height > 0 {
                cs.add_row_target(slot, parts[1].y, id);
            }

            f.render_widget(block, slot);
            f.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), parts[0]);
            f.render_widget(Paragraph::new(cta), parts[1]);
        }
    }
}

/// Rows under the body: a spacer and the call to action.
const CTA_ROWS: u16 = 2;

fn card_body(card: &ModeCard, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.title,
            theme.text(card.color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.subtitle, theme.text(ColorRole::Muted))),
        Line::from(""),
    ];
    lines.extend(card.features.iter().map(|feature| {
        Line::from(vec![
            Span::styled(" • ", theme.text(card.color)),
            Span::styled(*feature, theme.text(ColorRole::Text)),
        ])
    }));
    lines
}

fn card_cta(index: usize, card: &ModeCard, theme: &Theme, is_hot: bool) -> Line<'static> {
    Line::from(Span::styled(
        format!(" [{}] {} ▶ ", index + 1, card.cta),
        theme.style(card.color, is_hot),
    ))
}
