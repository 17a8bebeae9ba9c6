use ratatui::style::Color;

/// Which of the two color schemes is active. Mirrors the persisted
/// preference: `"dark"` or `"light"` on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Concrete colors for the active theme, shared by every UI module.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub favorite: Color,
    pub error: Color,
    pub highlight: Color,
}

impl ThemeMode {
    /// Parses the stored preference. Anything other than `"dark"` falls back
    /// to the light theme.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => Palette {
                background: Color::White,
                text: Color::Black,
                dim: Color::DarkGray,
                accent: Color::Blue,
                favorite: Color::Magenta,
                error: Color::Red,
                highlight: Color::Gray,
            },
            ThemeMode::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                dim: Color::Gray,
                accent: Color::Cyan,
                favorite: Color::Yellow,
                error: Color::Red,
                highlight: Color::DarkGray,
            },
        }
    }
}
