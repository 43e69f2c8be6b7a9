use ratatui::style::Color;

use crate::config::ThemeChoice;

/// Light/dark flag, toggled by explicit user action. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

/// Colors for one theme, lifted from the original newsprint styling:
/// ivory paper and black ink in light mode, slate tones in dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub panel_bg: Color,
    pub accent: Color,
    pub status_ok: Color,
    pub status_error: Color,
}

const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xf5, 0xf5, 0xf0),
    fg: Color::Rgb(0x00, 0x00, 0x00),
    muted: Color::Rgb(0x4b, 0x55, 0x63),
    border: Color::Rgb(0x00, 0x00, 0x00),
    panel_bg: Color::Rgb(0xe5, 0xe7, 0xeb),
    accent: Color::Rgb(0x1f, 0x29, 0x37),
    status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
    status_error: Color::Rgb(0xdc, 0x26, 0x26),
};

const DARK: Palette = Palette {
    bg: Color::Rgb(0x11, 0x18, 0x27),
    fg: Color::Rgb(0xf3, 0xf4, 0xf6),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    border: Color::Rgb(0xf3, 0xf4, 0xf6),
    panel_bg: Color::Rgb(0x1f, 0x29, 0x37),
    accent: Color::Rgb(0xe5, 0xe7, 0xeb),
    status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
    status_error: Color::Rgb(0xdc, 0x26, 0x26),
};
