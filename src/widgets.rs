//! Widgets that draw themselves and register their own click targets, so
//! what is drawn and what is clickable cannot drift apart.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

/// Rows `line` takes when wrapped to `width` columns (`0` = no wrapping).
///
/// Counts display width only, so word wrapping that breaks early can take
/// an extra row.
pub fn wrapped_rows(line: &Line, width: u16) -> u16 {
    match width {
        0 => 1,
        w => line.width().div_ceil(usize::from(w)).max(1) as u16,
    }
}

/// Sum of [`wrapped_rows`] over `lines`.
pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    lines.iter().map(|l| wrapped_rows(l, width)).sum()
}

/// One row of labelled buttons with a separator between neighbours.
///
/// ```ignore
/// ButtonRow::new(" │ ", theme.text(ColorRole::Border))
///     .button("[H] History", theme.style(ColorRole::Accent, false), SHOW_HISTORY)
///     .button("[S] Settings", theme.style(ColorRole::Accent, true), SHOW_SETTINGS)
///     .render(f, area, &mut cs);
/// ```
pub struct ButtonRow<'a> {
    buttons: Vec<(String, Style, u16)>,
    separator: Span<'a>,
}

impl<'a> ButtonRow<'a> {
    pub fn new(separator: &'a str, style: Style) -> Self {
        Self {
            buttons: Vec::new(),
            separator: Span::styled(separator, style),
        }
    }

    pub fn button(mut self, label: &str, style: Style, action_id: u16) -> Self {
        self.buttons.push((format!(" {label} "), style, action_id));
        self
    }

    /// Columns the row needs.
    pub fn width(&self) -> u16 {
        let labels: usize = self.buttons.iter().map(|(l, _, _)| Span::raw(l.as_str()).width()).sum();
        let gaps = self.buttons.len().saturating_sub(1) * self.separator.width();
        (labels + gaps) as u16
    }

    /// Draw on the first row of `area`; every row of `area` is clickable.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let targets: Vec<(u16, u16)> = self
            .buttons
            .iter()
            .map(|(label, _, id)| (Span::raw(label.as_str()).width() as u16, *id))
            .collect();
        cs.register_button_targets(area, &targets, self.separator.width() as u16);

        let mut spans = Vec::with_capacity(self.buttons.len() * 2);
        for (i, (label, style, _)) in self.buttons.into_iter().enumerate() {
            if i > 0 {
                spans.push(self.separator.clone());
            }
            spans.push(Span::styled(label, style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Lines for a bordered paragraph, some of which are clickable rows.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Practice & Analysis"));
/// cl.push_clickable(Line::from(" [B] Back to home "), BACK_HOME);
/// cl.register_targets(cs, area, block.inner(area), true);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block).wrap(wrap), area);
/// ```
pub struct ClickableList<'a> {
    entries: Vec<(Line<'a>, Option<u16>)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.entries.push((line, None));
    }

    /// The action follows the line to whichever rows it ends up on.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.entries.push((line, Some(action_id)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.entries.into_iter().map(|(line, _)| line).collect()
    }

    /// Register every row a clickable line covers.
    ///
    /// Lines are laid out from the top of `content` (the paragraph's inner
    /// area), wrapped to its width when `wrap` is set. Targets span the full
    /// width of `area` so the border columns stay tappable. Rows past the
    /// bottom of `content` are clipped.
    pub fn register_targets(&self, cs: &mut ClickState, area: Rect, content: Rect, wrap: bool) {
        let width = if wrap { content.width } else { 0 };
        let mut y = content.top();
        for (line, action) in &self.entries {
            if y >= content.bottom() {
                break;
            }
            let rows = wrapped_rows(line, width);
            if let Some(id) = *action {
                for row in y..y.saturating_add(rows).min(content.bottom()) {
                    cs.add_row_target(area, row, id);
                }
            }
            y = y.saturating_add(rows);
        }
    }
}
