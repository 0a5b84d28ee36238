//! Typed theme: colour and size roles resolved to concrete tokens.
//!
//! Views never look styles up by string. They ask the [`Theme`] for a
//! [`ColorRole`] or [`SizeRole`], and user overrides from the config are
//! parsed into the same typed maps up front.

use std::collections::BTreeMap;

use ratzilla::ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Brand,
    Accent,
    Text,
    Muted,
    Border,
    Basic,
    Ielts,
    Hover,
}

pub const ALL_COLOR_ROLES: [ColorRole; 8] = [
    ColorRole::Brand,
    ColorRole::Accent,
    ColorRole::Text,
    ColorRole::Muted,
    ColorRole::Border,
    ColorRole::Basic,
    ColorRole::Ielts,
    ColorRole::Hover,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeRole {
    HeaderHeight,
    HelpHeight,
    CardGap,
    NarrowBreakpoint,
}

pub const ALL_SIZE_ROLES: [SizeRole; 4] = [
    SizeRole::HeaderHeight,
    SizeRole::HelpHeight,
    SizeRole::CardGap,
    SizeRole::NarrowBreakpoint,
];

fn default_color(role: ColorRole) -> Color {
    match role {
        ColorRole::Brand => Color::Cyan,
        ColorRole::Accent => Color::Yellow,
        ColorRole::Text => Color::White,
        ColorRole::Muted => Color::Gray,
        ColorRole::Border => Color::DarkGray,
        ColorRole::Basic => Color::Green,
        ColorRole::Ielts => Color::Magenta,
        ColorRole::Hover => Color::Yellow,
    }
}

fn default_size(role: SizeRole) -> u16 {
    match role {
        SizeRole::HeaderHeight => 4,
        SizeRole::HelpHeight => 3,
        SizeRole::CardGap => 2,
        SizeRole::NarrowBreakpoint => 60,
    }
}

/// Parse a colour token: a named terminal colour or `#rrggbb`.
///
/// Names are case-insensitive and accept `_`, `-` or nothing between words
/// (`dark_gray`, `dark-gray`, `darkgray`).
pub fn parse_token(token: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidToken(token.to_string());

    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        return Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    let name: String = token
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase();
    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return Err(invalid()),
    };
    Ok(color)
}

/// User-supplied overrides as they appear in the config JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub colors: BTreeMap<ColorRole, String>,
    pub sizes: BTreeMap<SizeRole, u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: BTreeMap<ColorRole, Color>,
    sizes: BTreeMap<SizeRole, u16>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ALL_COLOR_ROLES
                .iter()
                .map(|r| (*r, default_color(*r)))
                .collect(),
            sizes: ALL_SIZE_ROLES.iter().map(|r| (*r, default_size(*r))).collect(),
        }
    }
}

impl Theme {
    /// Default theme with `overrides` applied on top.
    ///
    /// All tokens are validated before anything is applied, so a bad token
    /// leaves no half-applied theme behind.
    pub fn with_overrides(overrides: &ThemeOverrides) -> Result<Self, ConfigError> {
        let mut theme = Self::default();
        let parsed = overrides
            .colors
            .iter()
            .map(|(role, token)| parse_token(token).map(|c| (*role, c)))
            .collect::<Result<Vec<_>, _>>()?;
        theme.colors.extend(parsed);
        theme.sizes.extend(overrides.sizes.iter().map(|(r, v)| (*r, *v)));
        Ok(theme)
    }

    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.get(&role).copied().unwrap_or_else(|| default_color(role))
    }

    pub fn size(&self, role: SizeRole) -> u16 {
        self.sizes.get(&role).copied().unwrap_or_else(|| default_size(role))
    }

    /// Style for an interactive element in `role`'s colour.
    ///
    /// Hovered elements are drawn inverted on the hover colour; the result
    /// only ever differs in presentation.
    pub fn style(&self, role: ColorRole, hovered: bool) -> Style {
        if hovered {
            Style::default()
                .fg(Color::Black)
                .bg(self.color(ColorRole::Hover))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.color(role))
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Plain foreground style for non-interactive text.
    pub fn text(&self, role: ColorRole) -> Style {
        Style::default().fg(self.color(role))
    }

    /// Border style, switching to the hover colour when `hovered`.
    pub fn border(&self, role: ColorRole, hovered: bool) -> Style {
        if hovered {
            Style::default().fg(self.color(ColorRole::Hover))
        } else {
            Style::default().fg(self.color(role))
        }
    }
}
