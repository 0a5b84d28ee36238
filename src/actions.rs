//! Semantic action IDs for click targets.
//!
//! Each constant represents a distinct clickable control. The IDs are
//! registered during render and dispatched back via `InputEvent::Click`.

// ── Header controls ─────────────────────────────────────────────
pub const SHOW_HISTORY: u16 = 10;
pub const SHOW_SETTINGS: u16 = 11;

// ── Home page cards (base + card index) ─────────────────────────
pub const START_MODE_BASE: u16 = 100;

// ── Practice pages ──────────────────────────────────────────────
pub const BACK_HOME: u16 = 200;

// ── Overlay panels ──────────────────────────────────────────────
pub const CLOSE_PANEL: u16 = 300;
pub const PANEL_BODY: u16 = 301;
