//! Build-step extension slot
//!
//! The configuration carries an ordered list of plugin references; the
//! consuming pipeline registers implementations and binds them by name at
//! resolution time. The built-in table ships with no plugins — the slot is
//! a forward-compatibility hook, and the field stays present in the
//! serialized form so downstream consumers can rely on it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Serializable reference to a build-step extension.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginRef {
    pub name: String,
    #[serde(default)]
    pub options: toml::Table,
}

impl PluginRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: toml::Table::new(),
        }
    }
}

/// A build-step extension: contributes extra variables to the export.
pub trait ThemePlugin {
    /// Name the configuration references this plugin by.
    fn name(&self) -> &str;

    /// Add or override exported variables.
    fn extend(&self, vars: &mut FxHashMap<String, String>);
}

/// Plugin implementations known to the consuming pipeline, keyed by name.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: FxHashMap<String, Box<dyn ThemePlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an implementation under its own name. A later registration
    /// under the same name replaces the earlier one.
    pub fn register(&mut self, plugin: Box<dyn ThemePlugin>) {
        self.plugins.insert(plugin.name().to_string(), plugin);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ThemePlugin> {
        self.plugins.get(name).map(Box::as_ref)
    }
}
