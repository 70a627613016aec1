//! Color palette shared across the UI.

use ratatui::style::Color;

/// Primary accent color used for titles and highlighted keys.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Color for success states and freshly updated balances.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Color for errors and unreachable-server states.
pub const ERROR_COLOR: Color = Color::Red;

/// Color for secondary text (hints, separators, timestamps).
pub const MUTED_COLOR: Color = Color::DarkGray;

/// Color for in-progress states (mining gauge).
pub const PROGRESS_COLOR: Color = Color::Yellow;

/// Border color for the focused panel.
pub const FOCUSED_BORDER_COLOR: Color = Color::Cyan;

/// Border color for unfocused panels.
pub const BORDER_COLOR: Color = Color::DarkGray;
