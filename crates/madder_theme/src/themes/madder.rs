//! The built-in Madder theme
//!
//! Warm paper neutrals around an alizarin primary scale, with four flat
//! accents and semantic background/text groups that indirect onto the
//! neutral scale. The sans stack is Inter with generic fallbacks.

use madder_color::Color;

use crate::theme::Theme;
use crate::tokens::{
    AccentTokens, BackgroundTokens, ColorScale, ColorTokens, FontTokens, TextTokens,
};

/// Madder palette constants.
pub mod palette {
    use madder_color::Color;

    // Primary (alizarin) scale
    pub const PRIMARY_50: Color = Color::rgb(254.0 / 255.0, 247.0 / 255.0, 246.0 / 255.0);
    pub const PRIMARY_100: Color = Color::rgb(253.0 / 255.0, 238.0 / 255.0, 237.0 / 255.0);
    pub const PRIMARY_200: Color = Color::rgb(251.0 / 255.0, 213.0 / 255.0, 209.0 / 255.0);
    pub const PRIMARY_300: Color = Color::rgb(248.0 / 255.0, 188.0 / 255.0, 181.0 / 255.0);
    pub const PRIMARY_400: Color = Color::rgb(252.0 / 255.0, 86.0 / 255.0, 71.0 / 255.0);
    pub const PRIMARY_500: Color = Color::rgb(231.0 / 255.0, 76.0 / 255.0, 60.0 / 255.0);
    pub const PRIMARY_600: Color = Color::rgb(192.0 / 255.0, 57.0 / 255.0, 43.0 / 255.0);
    pub const PRIMARY_700: Color = Color::rgb(169.0 / 255.0, 50.0 / 255.0, 38.0 / 255.0);
    pub const PRIMARY_800: Color = Color::rgb(146.0 / 255.0, 43.0 / 255.0, 32.0 / 255.0);
    pub const PRIMARY_900: Color = Color::rgb(123.0 / 255.0, 36.0 / 255.0, 26.0 / 255.0);

    // Neutral scale
    pub const NEUTRAL_50: Color = Color::rgb(244.0 / 255.0, 243.0 / 255.0, 240.0 / 255.0);
    pub const NEUTRAL_100: Color = Color::rgb(232.0 / 255.0, 230.0 / 255.0, 225.0 / 255.0);
    pub const NEUTRAL_200: Color = Color::rgb(209.0 / 255.0, 205.0 / 255.0, 195.0 / 255.0);
    pub const NEUTRAL_300: Color = Color::rgb(186.0 / 255.0, 180.0 / 255.0, 165.0 / 255.0);
    pub const NEUTRAL_400: Color = Color::rgb(163.0 / 255.0, 155.0 / 255.0, 135.0 / 255.0);
    pub const NEUTRAL_500: Color = Color::rgb(140.0 / 255.0, 130.0 / 255.0, 105.0 / 255.0);
    pub const NEUTRAL_600: Color = Color::rgb(102.0 / 255.0, 102.0 / 255.0, 102.0 / 255.0);
    pub const NEUTRAL_700: Color = Color::rgb(74.0 / 255.0, 74.0 / 255.0, 74.0 / 255.0);
    pub const NEUTRAL_800: Color = Color::rgb(45.0 / 255.0, 45.0 / 255.0, 45.0 / 255.0);
    pub const NEUTRAL_900: Color = Color::BLACK;

    // Accents
    pub const ACCENT_BLUE: Color = Color::rgb(28.0 / 255.0, 127.0 / 255.0, 242.0 / 255.0);
    pub const ACCENT_GREEN: Color = Color::rgb(28.0 / 255.0, 155.0 / 255.0, 72.0 / 255.0);
    pub const ACCENT_LIME: Color = Color::rgb(225.0 / 255.0, 243.0 / 255.0, 124.0 / 255.0);
    pub const ACCENT_PURPLE: Color = Color::rgb(218.0 / 255.0, 184.0 / 255.0, 244.0 / 255.0);
}

/// Build the built-in theme.
pub fn theme() -> Theme {
    Theme {
        plugins: Vec::new(),
        fonts: FontTokens::default(),
        colors: ColorTokens {
            primary: ColorScale {
                c50: palette::PRIMARY_50,
                c100: palette::PRIMARY_100,
                c200: palette::PRIMARY_200,
                c300: palette::PRIMARY_300,
                c400: palette::PRIMARY_400,
                c500: palette::PRIMARY_500,
                c600: palette::PRIMARY_600,
                c700: palette::PRIMARY_700,
                c800: palette::PRIMARY_800,
                c900: palette::PRIMARY_900,
            },
            neutral: ColorScale {
                c50: palette::NEUTRAL_50,
                c100: palette::NEUTRAL_100,
                c200: palette::NEUTRAL_200,
                c300: palette::NEUTRAL_300,
                c400: palette::NEUTRAL_400,
                c500: palette::NEUTRAL_500,
                c600: palette::NEUTRAL_600,
                c700: palette::NEUTRAL_700,
                c800: palette::NEUTRAL_800,
                c900: palette::NEUTRAL_900,
            },
            accent: AccentTokens {
                blue: palette::ACCENT_BLUE,
                green: palette::ACCENT_GREEN,
                lime: palette::ACCENT_LIME,
                purple: palette::ACCENT_PURPLE,
            },
            // Semantic groups duplicate neutral tones on purpose; the
            // indirection is by value, not by reference.
            background: BackgroundTokens {
                primary: Color::WHITE,
                secondary: palette::NEUTRAL_50,
                tertiary: palette::NEUTRAL_100,
            },
            text: TextTokens {
                primary: palette::NEUTRAL_900,
                secondary: palette::NEUTRAL_600,
                tertiary: palette::NEUTRAL_500,
                inverse: Color::WHITE,
            },
        },
    }
}
