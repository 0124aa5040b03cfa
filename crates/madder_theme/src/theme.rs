//! The theme configuration object

use std::fs;
use std::path::Path;
use std::str::FromStr;

use madder_color::Color;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::plugin::{PluginRef, PluginRegistry, ThemePlugin};
use crate::tokens::{ColorToken, ColorTokens, FontTokens};

/// Root design-token configuration consumed by the styling build step.
///
/// The whole structure is immutable data: defined once, read at build
/// time, never modified afterwards. `plugins` is declared first so the
/// serialized TOML keeps the plugin list ahead of the token tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Build-step extension references. Empty in the built-in table; the
    /// field is always present in the serialized form.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
    pub fonts: FontTokens,
    pub colors: ColorTokens,
}

impl Theme {
    /// The built-in Madder token table.
    pub fn madder() -> Self {
        crate::themes::madder::theme()
    }

    /// Get a color by typed token key.
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Resolve a hyphenated token name ("primary-500", "text-inverse").
    ///
    /// This is the lookup utility-class generation runs on.
    pub fn resolve(&self, name: &str) -> Option<Color> {
        ColorToken::from_str(name).ok().map(|token| self.color(token))
    }

    /// Parse a theme from its TOML form.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(input)?)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a theme configuration file.
    pub fn load_from_path(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded theme configuration");
        Ok(theme)
    }

    /// Map each plugin reference to its registered implementation.
    ///
    /// Fails on the first reference with no registered implementation.
    pub fn resolve_plugins<'a>(
        &self,
        registry: &'a PluginRegistry,
    ) -> Result<Vec<&'a dyn ThemePlugin>, ThemeError> {
        self.plugins
            .iter()
            .map(|reference| {
                registry
                    .get(&reference.name)
                    .ok_or_else(|| ThemeError::UnknownPlugin(reference.name.clone()))
            })
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::madder()
    }
}
