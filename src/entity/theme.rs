// src/entity/theme.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Romantic,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Romantic, Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Romantic => "romantic",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Human label used by the theme selector.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Romantic => "Romantic",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(&self) -> ThemePalette {
        match self {
            Theme::Romantic => ThemePalette {
                page: "bg-gradient-to-br from-[#ffdde1] to-[#ee9ca7] text-gray-800",
                section: "bg-white bg-opacity-80 text-gray-800",
                card: "bg-white text-gray-800",
                header: "bg-white bg-opacity-80 text-[#e91e63]",
                button: "bg-[#e91e63] hover:bg-[#d81b60] text-white",
                select: "bg-white text-gray-800",
            },
            Theme::Light => ThemePalette {
                page: "bg-gray-50 text-gray-800",
                section: "bg-white text-gray-800",
                card: "bg-white text-gray-800",
                header: "bg-white text-gray-800",
                button: "bg-blue-500 hover:bg-blue-600 text-white",
                select: "bg-white text-gray-800",
            },
            Theme::Dark => ThemePalette {
                page: "bg-gray-900 text-gray-200",
                section: "bg-gray-800 text-gray-200",
                card: "bg-gray-700 text-gray-200",
                header: "bg-gray-800 text-[#ff79c6]",
                button: "bg-[#ff79c6] hover:bg-[#d81b60] text-white",
                select: "bg-gray-700 text-gray-200",
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "romantic" => Ok(Theme::Romantic),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

/// Style classes for each themed surface of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub page: &'static str,
    pub section: &'static str,
    pub card: &'static str,
    pub header: &'static str,
    pub button: &'static str,
    pub select: &'static str,
}
