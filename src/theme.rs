//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Home tiles --
    pub tile_normal: Style,
    pub tile_selected: Style,
    pub tile_icon: Style,
    pub tile_hint: Style,

    // -- Results list --
    pub results_title: Style,
    pub result_name: Style,
    pub result_selected: Style,
    pub result_description: Style,
    pub result_link: Style,
    pub placeholder: Style,

    // -- Load states --
    pub loading: Style,
    pub load_error: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub clear_hint: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,

    // -- Picker overlay --
    pub picker_normal: Style,
    pub picker_selected: Style,

    // -- Search --
    pub search_prompt: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            tile_normal: Style::default(),
            tile_selected: Style::default().fg(Color::Cyan),
            tile_icon: Style::default().fg(Color::Yellow),
            tile_hint: Style::default().fg(Color::DarkGray),

            results_title: Style::default().add_modifier(Modifier::BOLD),
            result_name: Style::default().add_modifier(Modifier::BOLD),
            result_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            result_description: Style::default(),
            result_link: Style::default().fg(Color::Blue),
            placeholder: Style::default().fg(Color::DarkGray),

            loading: Style::default().fg(Color::DarkGray),
            load_error: Style::default().fg(Color::Red),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            clear_hint: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),

            picker_normal: Style::default(),
            picker_selected: Style::default().bg(Color::DarkGray).fg(Color::White),

            search_prompt: Style::default().fg(Color::Cyan),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            tile_normal: Style::default().fg(Color::Black),
            tile_selected: Style::default().fg(Color::Blue),
            tile_icon: Style::default().fg(Color::Magenta),
            tile_hint: Style::default().fg(Color::DarkGray),

            results_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            result_name: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            result_selected: Style::default().bg(Color::Blue).fg(Color::White),
            result_description: Style::default().fg(Color::Black),
            result_link: Style::default().fg(Color::Blue),
            placeholder: Style::default().fg(Color::DarkGray),

            loading: Style::default().fg(Color::DarkGray),
            load_error: Style::default().fg(Color::Red),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            clear_hint: Style::default()
                .bg(Color::White)
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),

            picker_normal: Style::default().fg(Color::Black),
            picker_selected: Style::default().bg(Color::Blue).fg(Color::White),

            search_prompt: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`, resolving role
/// names (e.g. `"tile_selected"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 19] = [
    "tile_normal",
    "tile_selected",
    "tile_icon",
    "tile_hint",
    "results_title",
    "result_name",
    "result_selected",
    "result_description",
    "result_link",
    "placeholder",
    "loading",
    "load_error",
    "status_bar",
    "clear_hint",
    "panel_border",
    "panel_border_focused",
    "picker_normal",
    "picker_selected",
    "search_prompt",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 19] = [
            p.tile_normal,
            p.tile_selected,
            p.tile_icon,
            p.tile_hint,
            p.results_title,
            p.result_name,
            p.result_selected,
            p.result_description,
            p.result_link,
            p.placeholder,
            p.loading,
            p.load_error,
            p.status_bar,
            p.clear_hint,
            p.panel_border,
            p.panel_border_focused,
            p.picker_normal,
            p.picker_selected,
            p.search_prompt,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
