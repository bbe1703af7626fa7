//! Light and dark colour palettes injected into rendered pages.

use serde::{Deserialize, Serialize};

/// Colour scheme selected in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Palette consumed by the templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub menu_bg: &'static str,
    pub button_text: &'static str,
    pub button_green: &'static str,
    pub button_red: &'static str,
    pub button_menu_hover: &'static str,
}

const LIGHT: ThemeColors = ThemeColors {
    background: "#ffffff",
    text: "#212529",
    border: "#dee2e6",
    primary: "#0d6efd",
    menu_bg: "#f8f9fa",
    button_text: "#ffffff",
    button_green: "#198754",
    button_red: "#dc3545",
    button_menu_hover: "#e9ecef",
};

const DARK: ThemeColors = ThemeColors {
    background: "#1e1e2e",
    text: "#e6e6e6",
    border: "#3a3a4a",
    primary: "#6ea8fe",
    menu_bg: "#2a2a3a",
    button_text: "#ffffff",
    button_green: "#2fb673",
    button_red: "#e35d6a",
    button_menu_hover: "#34344a",
};

impl Theme {
    pub const fn colors(self) -> ThemeColors {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}
