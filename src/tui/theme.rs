// Theme system for the TUI
//
// Each theme is a small base palette; every UI role color is derived from it.
// Tab cycles themes at runtime.

use crate::component::ContentKind;
use ratatui::style::{Color, Modifier, Style};
use tracing::Level;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Dracula,
    Nord,
    Solarized,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Dracula,
            ThemeKind::Nord,
            ThemeKind::Solarized,
        ]
    }

    /// Look up a theme by display name (case-insensitive), falling back to Dark
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// Next theme in the cycle (wraps)
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Dracula => "Dracula",
            ThemeKind::Nord => "Nord",
            ThemeKind::Solarized => "Solarized",
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_palette(self.palette())
    }

    fn palette(&self) -> Palette {
        match self {
            ThemeKind::Dark => Palette {
                bg: Color::Reset,
                fg: Color::White,
                surface: Color::DarkGray,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                green: Color::Green,
                blue: Color::Blue,
                purple: Color::Magenta,
                yellow: Color::Yellow,
                red: Color::Red,
            },
            ThemeKind::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                surface: Color::Rgb(220, 220, 220),
                dim: Color::Gray,
                accent: Color::Blue,
                green: Color::Rgb(0, 128, 0),
                blue: Color::Blue,
                purple: Color::Magenta,
                yellow: Color::Rgb(184, 134, 11),
                red: Color::Red,
            },
            ThemeKind::Monokai => Palette {
                bg: Color::Rgb(39, 40, 34),
                fg: Color::Rgb(248, 248, 242),
                surface: Color::Rgb(73, 72, 62),
                dim: Color::Rgb(117, 113, 94),
                accent: Color::Rgb(166, 226, 46),
                green: Color::Rgb(166, 226, 46),
                blue: Color::Rgb(102, 217, 239),
                purple: Color::Rgb(174, 129, 255),
                yellow: Color::Rgb(230, 219, 116),
                red: Color::Rgb(249, 38, 114),
            },
            ThemeKind::Dracula => Palette {
                bg: Color::Rgb(40, 42, 54),
                fg: Color::Rgb(248, 248, 242),
                surface: Color::Rgb(68, 71, 90),
                dim: Color::Rgb(98, 114, 164),
                accent: Color::Rgb(189, 147, 249),
                green: Color::Rgb(80, 250, 123),
                blue: Color::Rgb(139, 233, 253),
                purple: Color::Rgb(255, 121, 198),
                yellow: Color::Rgb(241, 250, 140),
                red: Color::Rgb(255, 85, 85),
            },
            ThemeKind::Nord => Palette {
                bg: Color::Rgb(46, 52, 64),
                fg: Color::Rgb(236, 239, 244),
                surface: Color::Rgb(67, 76, 94),
                dim: Color::Rgb(76, 86, 106),
                accent: Color::Rgb(136, 192, 208),
                green: Color::Rgb(163, 190, 140),
                blue: Color::Rgb(129, 161, 193),
                purple: Color::Rgb(180, 142, 173),
                yellow: Color::Rgb(235, 203, 139),
                red: Color::Rgb(191, 97, 106),
            },
            ThemeKind::Solarized => Palette {
                bg: Color::Rgb(0, 43, 54),
                fg: Color::Rgb(131, 148, 150),
                surface: Color::Rgb(7, 54, 66),
                dim: Color::Rgb(88, 110, 117),
                accent: Color::Rgb(38, 139, 210),
                green: Color::Rgb(133, 153, 0),
                blue: Color::Rgb(42, 161, 152),
                purple: Color::Rgb(108, 113, 196),
                yellow: Color::Rgb(181, 137, 0),
                red: Color::Rgb(220, 50, 47),
            },
        }
    }
}

/// Base colors a theme is derived from
#[derive(Debug, Clone, Copy)]
struct Palette {
    bg: Color,
    fg: Color,
    /// Selection background
    surface: Color,
    /// Borders and secondary text
    dim: Color,
    accent: Color,
    green: Color,
    blue: Color,
    purple: Color,
    yellow: Color,
    red: Color,
}

/// UI role colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub status_bar: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub muted: Color,
    pub error: Color,
    pub warn: Color,
    pub info: Color,

    // Slot content kinds
    pub image: Color,
    pub video: Color,
    pub note: Color,
    pub todo: Color,
}

impl Theme {
    fn from_palette(p: Palette) -> Self {
        Self {
            bg: p.bg,
            fg: p.fg,
            border: p.dim,
            border_focused: p.accent,
            title: p.accent,
            status_bar: p.green,
            selected_bg: p.surface,
            selected_fg: p.yellow,
            muted: p.dim,
            error: p.red,
            warn: p.yellow,
            info: p.blue,

            image: p.green,
            video: p.purple,
            note: p.blue,
            todo: p.yellow,
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Border style, highlighted when the panel has focus
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent color for a slot's content kind
    pub fn kind_color(&self, kind: Option<ContentKind>) -> Color {
        match kind {
            Some(ContentKind::Image) => self.image,
            Some(ContentKind::Video) => self.video,
            Some(ContentKind::Note) => self.note,
            Some(ContentKind::Todo) => self.todo,
            None => self.muted,
        }
    }

    pub fn log_level_style(&self, level: Level) -> Style {
        match level {
            Level::ERROR => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
            Level::WARN => Style::default().fg(self.warn),
            Level::INFO => Style::default().fg(self.info),
            _ => Style::default().fg(self.muted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_wraps() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
        assert_eq!(ThemeKind::Solarized.next(), ThemeKind::Dark);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ThemeKind::from_name("nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name(" Dracula "), ThemeKind::Dracula);
        assert_eq!(ThemeKind::from_name("Neon"), ThemeKind::Dark);
    }

    #[test]
    fn test_kind_colors_differ() {
        let theme = ThemeKind::Nord.theme();
        assert_ne!(
            theme.kind_color(Some(ContentKind::Image)),
            theme.kind_color(Some(ContentKind::Video))
        );
        assert_eq!(theme.kind_color(None), theme.muted);
    }
}
