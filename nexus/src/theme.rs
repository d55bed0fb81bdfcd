use iced::theme::Palette;
use iced::{Color, Theme};
use nexus_core::ProjectStatus;

use crate::config::ThemeChoice;

/// Raw hex palette, as a theme author writes it.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: &'static str,
    pub(crate) background: &'static str,
    pub(crate) surface: &'static str,
    pub(crate) sidebar: &'static str,
    pub(crate) border: &'static str,
    pub(crate) overlay: &'static str,
    pub(crate) dim_foreground: &'static str,
    pub(crate) accent: &'static str,
    pub(crate) on_accent: &'static str,
    pub(crate) green: &'static str,
    pub(crate) yellow: &'static str,
    pub(crate) red: &'static str,
    pub(crate) blue: &'static str,
}

impl ColorPalette {
    pub(crate) fn dark() -> Self {
        Self {
            foreground: "#E5E7EB",
            background: "#111318",
            surface: "#1A1D24",
            sidebar: "#0B0D11",
            border: "#2A2E38",
            overlay: "#000000B3",
            dim_foreground: "#8B93A3",
            accent: "#6366F1",
            on_accent: "#FFFFFF",
            green: "#34D399",
            yellow: "#FBBF24",
            red: "#F87171",
            blue: "#60A5FA",
        }
    }

    pub(crate) fn light() -> Self {
        Self {
            foreground: "#111827",
            background: "#F5F6FA",
            surface: "#FFFFFF",
            sidebar: "#1F2330",
            border: "#E2E5EC",
            overlay: "#1118278C",
            dim_foreground: "#6B7280",
            accent: "#4F46E5",
            on_accent: "#FFFFFF",
            green: "#059669",
            yellow: "#D97706",
            red: "#DC2626",
            blue: "#2563EB",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) sidebar: Color,
    pub(crate) border: Color,
    pub(crate) overlay: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) on_accent: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) red: Color,
    pub(crate) blue: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(p.foreground),
            background: parse_hex_color(p.background),
            surface: parse_hex_color(p.surface),
            sidebar: parse_hex_color(p.sidebar),
            border: parse_hex_color(p.border),
            overlay: parse_hex_color(p.overlay),
            dim_foreground: parse_hex_color(p.dim_foreground),
            accent: parse_hex_color(p.accent),
            on_accent: parse_hex_color(p.on_accent),
            green: parse_hex_color(p.green),
            yellow: parse_hex_color(p.yellow),
            red: parse_hex_color(p.red),
            blue: parse_hex_color(p.blue),
        }
    }
}

impl IcedColorPalette {
    /// Badge color keyed by project status.
    pub(crate) fn status(&self, status: ProjectStatus) -> Color {
        match status {
            ProjectStatus::Active => self.green,
            ProjectStatus::AtRisk => self.yellow,
            ProjectStatus::OnHold => self.dim_foreground,
            ProjectStatus::Completed => self.blue,
        }
    }
}

/// Application theme shared by every widget.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn new(choice: ThemeChoice) -> Self {
        let (id, raw_palette) = match choice {
            ThemeChoice::Dark => ("nexus-dark", ColorPalette::dark()),
            ThemeChoice::Light => ("nexus-light", ColorPalette::light()),
        };

        Self {
            id: String::from(id),
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeChoice::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            warning: palette.yellow,
            danger: palette.red,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

/// Theme props passed from the app root down to views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`; malformed input yields magenta.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    let hex = value.trim_start_matches('#');
    let channel = |index: usize| {
        hex.get(index..index + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    let rgb = (channel(0), channel(2), channel(4));
    let alpha = match hex.len() {
        6 => Some(u8::MAX),
        8 => channel(6),
        _ => None,
    };

    match (rgb, alpha) {
        ((Some(r), Some(g), Some(b)), Some(a)) => {
            Color::from_rgba8(r, g, b, f32::from(a) / 255.0)
        },
        _ => {
            log::warn!("invalid color {value:?}");
            Color::from_rgb8(0xFF, 0x00, 0xFF)
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::parse_hex_color;

    #[test]
    fn given_six_digit_hex_when_parsing_then_color_is_opaque() {
        assert_eq!(
            parse_hex_color("#34D399"),
            Color::from_rgb8(0x34, 0xD3, 0x99)
        );
    }

    #[test]
    fn given_eight_digit_hex_when_parsing_then_alpha_is_applied() {
        let color = parse_hex_color("#00000080");
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_garbage_when_parsing_then_fallback_is_magenta() {
        let magenta = Color::from_rgb8(0xFF, 0x00, 0xFF);
        assert_eq!(parse_hex_color("#12"), magenta);
        assert_eq!(parse_hex_color("zzzzzz"), magenta);
    }
}
