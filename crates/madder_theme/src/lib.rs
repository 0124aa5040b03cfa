//! Madder Design Tokens
//!
//! The Madder theme token table: a color palette and font-family stack
//! consumed by a build-time styling pipeline.
//!
//! # Overview
//!
//! The crate exposes:
//! - **Design tokens**: ten-step color scales, accent colors, semantic
//!   background/text groups, and the sans font fallback stack
//! - **The built-in table**: [`Theme::madder`], an exact transcription of
//!   the Madder palette
//! - **Config round-trip**: TOML (de)serialization of the whole table
//! - **Build-step export**: CSS custom properties and a name → value map
//! - **A plugin slot**: ordered extension references, empty by default,
//!   resolved by the consuming pipeline
//!
//! # Quick Start
//!
//! ```
//! use madder_theme::{ColorToken, ScaleStep, Theme};
//!
//! let theme = Theme::madder();
//!
//! let brand = theme.color(ColorToken::Primary(ScaleStep::S500));
//! assert_eq!(brand.to_hex_string(), "#e74c3c");
//!
//! // Name-keyed resolution, as the styling pipeline sees it
//! assert_eq!(theme.resolve("primary-500"), Some(brand));
//! ```
//!
//! # Tokens
//!
//! Tokens are the atomic values of the table:
//!
//! - [`ColorTokens`]: scaled groups (primary, neutral) and flat groups
//!   (accent, background, text)
//! - [`FontTokens`]: font fallback stacks (currently the single "sans"
//!   slot)
//!
//! The table is immutable: it is defined once, read by the build step, and
//! never modified afterwards. [`state::install`] pins one table for the
//! process; [`state::current`] falls back to the built-in one.

pub mod error;
pub mod export;
pub mod plugin;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use error::ThemeError;
pub use export::{css_variable_map, to_css};
pub use madder_color::Color;
pub use plugin::{PluginRef, PluginRegistry, ThemePlugin};
pub use theme::Theme;
pub use tokens::*;
