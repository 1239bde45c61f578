//! Theme configuration

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.07, 0.09, 0.13);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.14, 0.19);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.27, 0.32);
    pub const PRIMARY: Color = Color::from_rgb(0.38, 0.65, 0.98);
    pub const TEXT: Color = Color::from_rgb(0.9, 0.91, 0.93);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.6, 0.62, 0.66);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.42, 0.44, 0.48);
    pub const ERROR_BACKGROUND: Color = Color::from_rgb(0.3, 0.08, 0.08);
    pub const ERROR_BORDER: Color = Color::from_rgb(0.72, 0.11, 0.11);
    pub const ERROR_TEXT: Color = Color::from_rgb(0.99, 0.65, 0.65);
}

/// Window background
pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::BACKGROUND)),
        ..Default::default()
    }
}

/// Bordered card used for the answer and source panels
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::ERROR_BACKGROUND)),
        border: Border {
            color: DarkTheme::ERROR_BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
