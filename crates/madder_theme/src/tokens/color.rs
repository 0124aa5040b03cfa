//! Color tokens: scales, accents, and semantic groups
//!
//! Two group shapes coexist, matching the table the styling pipeline
//! consumes: scaled groups keyed by the ten-step numeric scale, and flat
//! groups keyed by role name.

use madder_color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric key of a ten-step color scale.
///
/// Steps ascend from lightest (50) to darkest (900). The serialized key is
/// the decimal literal ("50" .. "900").
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ScaleStep {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ScaleStep {
    /// All steps in ascending order.
    pub const ALL: [ScaleStep; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// The decimal value of this step.
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }

    /// Step for a decimal value, if it is one of the canonical ten.
    pub fn from_value(value: u16) -> Option<Self> {
        match value {
            50 => Some(Self::S50),
            100 => Some(Self::S100),
            200 => Some(Self::S200),
            300 => Some(Self::S300),
            400 => Some(Self::S400),
            500 => Some(Self::S500),
            600 => Some(Self::S600),
            700 => Some(Self::S700),
            800 => Some(Self::S800),
            900 => Some(Self::S900),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Ten tonal variants of one hue, keyed 50 to 900.
///
/// Keys are unique by construction; convention is monotonic darkness as the
/// key increases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub c50: Color,
    #[serde(rename = "100")]
    pub c100: Color,
    #[serde(rename = "200")]
    pub c200: Color,
    #[serde(rename = "300")]
    pub c300: Color,
    #[serde(rename = "400")]
    pub c400: Color,
    #[serde(rename = "500")]
    pub c500: Color,
    #[serde(rename = "600")]
    pub c600: Color,
    #[serde(rename = "700")]
    pub c700: Color,
    #[serde(rename = "800")]
    pub c800: Color,
    #[serde(rename = "900")]
    pub c900: Color,
}

impl ColorScale {
    /// Get the color at a scale step.
    pub fn get(&self, step: ScaleStep) -> Color {
        match step {
            ScaleStep::S50 => self.c50,
            ScaleStep::S100 => self.c100,
            ScaleStep::S200 => self.c200,
            ScaleStep::S300 => self.c300,
            ScaleStep::S400 => self.c400,
            ScaleStep::S500 => self.c500,
            ScaleStep::S600 => self.c600,
            ScaleStep::S700 => self.c700,
            ScaleStep::S800 => self.c800,
            ScaleStep::S900 => self.c900,
        }
    }

    /// Iterate all steps in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (ScaleStep, Color)> + '_ {
        ScaleStep::ALL.into_iter().map(move |step| (step, self.get(step)))
    }
}

/// Accent color keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AccentToken {
    Blue,
    Green,
    Lime,
    Purple,
}

impl AccentToken {
    pub const ALL: [AccentToken; 4] = [Self::Blue, Self::Green, Self::Lime, Self::Purple];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Lime => "lime",
            Self::Purple => "purple",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Flat accent color group: single values, no numeric scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccentTokens {
    pub blue: Color,
    pub green: Color,
    pub lime: Color,
    pub purple: Color,
}

impl AccentTokens {
    pub fn get(&self, token: AccentToken) -> Color {
        match token {
            AccentToken::Blue => self.blue,
            AccentToken::Green => self.green,
            AccentToken::Lime => self.lime,
            AccentToken::Purple => self.purple,
        }
    }
}

/// Semantic surface color keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BackgroundToken {
    Primary,
    Secondary,
    Tertiary,
}

impl BackgroundToken {
    pub const ALL: [BackgroundToken; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Semantic surface colors, indirecting onto the neutral scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTokens {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
}

impl BackgroundTokens {
    pub fn get(&self, token: BackgroundToken) -> Color {
        match token {
            BackgroundToken::Primary => self.primary,
            BackgroundToken::Secondary => self.secondary,
            BackgroundToken::Tertiary => self.tertiary,
        }
    }
}

/// Semantic text color keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextToken {
    Primary,
    Secondary,
    Tertiary,
    Inverse,
}

impl TextToken {
    pub const ALL: [TextToken; 4] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Inverse,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Inverse => "inverse",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Semantic text colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextTokens {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub inverse: Color,
}

impl TextTokens {
    pub fn get(&self, token: TextToken) -> Color {
        match token {
            TextToken::Primary => self.primary,
            TextToken::Secondary => self.secondary,
            TextToken::Tertiary => self.tertiary,
            TextToken::Inverse => self.inverse,
        }
    }
}

/// The color half of the token table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: ColorScale,
    pub neutral: ColorScale,
    pub accent: AccentTokens,
    pub background: BackgroundTokens,
    pub text: TextTokens,
}

impl ColorTokens {
    /// Get a color by token key.
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary(step) => self.primary.get(step),
            ColorToken::Neutral(step) => self.neutral.get(step),
            ColorToken::Accent(key) => self.accent.get(key),
            ColorToken::Background(key) => self.background.get(key),
            ColorToken::Text(key) => self.text.get(key),
        }
    }
}

/// Typed key addressing any color in the table.
///
/// The name form is the hyphenated `group-key` spelling the styling
/// pipeline uses ("primary-500", "accent-blue", "text-inverse");
/// [`fmt::Display`] and [`FromStr`] are inverses.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Primary(ScaleStep),
    Neutral(ScaleStep),
    Accent(AccentToken),
    Background(BackgroundToken),
    Text(TextToken),
}

impl ColorToken {
    /// Every color token, in table order.
    pub fn all() -> impl Iterator<Item = ColorToken> {
        ScaleStep::ALL
            .into_iter()
            .map(Self::Primary)
            .chain(ScaleStep::ALL.into_iter().map(Self::Neutral))
            .chain(AccentToken::ALL.into_iter().map(Self::Accent))
            .chain(BackgroundToken::ALL.into_iter().map(Self::Background))
            .chain(TextToken::ALL.into_iter().map(Self::Text))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(step) => write!(f, "primary-{step}"),
            Self::Neutral(step) => write!(f, "neutral-{step}"),
            Self::Accent(key) => write!(f, "accent-{}", key.name()),
            Self::Background(key) => write!(f, "background-{}", key.name()),
            Self::Text(key) => write!(f, "text-{}", key.name()),
        }
    }
}

/// Error parsing a hyphenated token name such as "primary-500".
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseTokenError {
    #[error("token name {0:?} has no group-key separator")]
    MissingSeparator(String),
    #[error("unknown token group {0:?}")]
    UnknownGroup(String),
    #[error("unknown key {key:?} in token group {group:?}")]
    UnknownKey { group: String, key: String },
}

impl FromStr for ColorToken {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, key) = s
            .split_once('-')
            .ok_or_else(|| ParseTokenError::MissingSeparator(s.to_string()))?;

        let unknown_key = || ParseTokenError::UnknownKey {
            group: group.to_string(),
            key: key.to_string(),
        };

        match group {
            "primary" | "neutral" => {
                let step = key
                    .parse::<u16>()
                    .ok()
                    .and_then(ScaleStep::from_value)
                    .ok_or_else(unknown_key)?;
                if group == "primary" {
                    Ok(Self::Primary(step))
                } else {
                    Ok(Self::Neutral(step))
                }
            }
            "accent" => AccentToken::from_name(key)
                .map(Self::Accent)
                .ok_or_else(unknown_key),
            "background" => BackgroundToken::from_name(key)
                .map(Self::Background)
                .ok_or_else(unknown_key),
            "text" => TextToken::from_name(key)
                .map(Self::Text)
                .ok_or_else(unknown_key),
            _ => Err(ParseTokenError::UnknownGroup(group.to_string())),
        }
    }
}
