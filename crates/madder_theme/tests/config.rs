use std::fs;

use madder_theme::{
    css_variable_map, state, to_css, Color, PluginRef, PluginRegistry, Theme, ThemeError,
    ThemePlugin,
};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

#[test]
fn toml_round_trips_identically() {
    let theme = Theme::madder();
    let toml = theme.to_toml().unwrap();
    let back = Theme::from_toml_str(&toml).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn json_round_trips_identically() {
    let theme = Theme::madder();
    let json = serde_json::to_string(&theme).unwrap();
    let back: Theme = serde_json::from_str(&json).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn serialized_form_keeps_the_plugin_slot() {
    let toml = Theme::madder().to_toml().unwrap();
    assert!(toml.contains("plugins = []"), "toml was:\n{toml}");
    assert!(toml.contains("[colors.primary]"));
    assert!(toml.contains("\"#fef7f6\""));
}

#[test]
fn malformed_color_values_fail_to_parse() {
    let toml = Theme::madder().to_toml().unwrap();
    let bad = toml.replace("#e74c3c", "e74c3c");
    assert!(matches!(
        Theme::from_toml_str(&bad),
        Err(ThemeError::Parse(_))
    ));
}

#[test]
fn config_files_load_from_disk() {
    let theme = Theme::madder();
    let path = std::env::temp_dir().join("madder_theme_config_test.toml");
    fs::write(&path, theme.to_toml().unwrap()).unwrap();

    let loaded = Theme::load_from_path(&path);
    fs::remove_file(&path).ok();
    assert_eq!(loaded.unwrap(), theme);

    let missing = std::env::temp_dir().join("madder_theme_missing.toml");
    assert!(matches!(
        Theme::load_from_path(&missing),
        Err(ThemeError::Io { .. })
    ));
}

#[test]
fn variable_map_covers_every_token() {
    let theme = Theme::madder();
    let vars = css_variable_map(&theme);

    // 31 color tokens plus the font stack
    assert_eq!(vars.len(), 32);
    assert_eq!(vars["primary-500"], "#e74c3c");
    assert_eq!(vars["neutral-900"], "#000000");
    assert_eq!(vars["accent-lime"], "#e1f37c");
    assert_eq!(vars["background-primary"], "#ffffff");
    assert_eq!(vars["text-inverse"], "#ffffff");
    assert_eq!(vars["font-sans"], "Inter, ui-sans-serif, system-ui");
}

#[test]
fn stylesheet_is_emitted_in_table_order() {
    let theme = Theme::madder();
    let css = to_css(&theme);

    assert!(css.starts_with(":root {\n"));
    assert!(css.ends_with("}\n"));
    assert_eq!(css.lines().count(), 34);
    assert!(css.contains("--madder-font-sans: Inter, ui-sans-serif, system-ui;"));
    assert!(css.contains("--madder-primary-500: #e74c3c;"));

    let primary = css.find("--madder-primary-50:").unwrap();
    let neutral = css.find("--madder-neutral-50:").unwrap();
    let accent = css.find("--madder-accent-blue:").unwrap();
    let background = css.find("--madder-background-primary:").unwrap();
    let text = css.find("--madder-text-primary:").unwrap();
    assert!(primary < neutral);
    assert!(neutral < accent);
    assert!(accent < background);
    assert!(background < text);
}

struct SpacingPlugin;

impl ThemePlugin for SpacingPlugin {
    fn name(&self) -> &str {
        "spacing"
    }

    fn extend(&self, vars: &mut FxHashMap<String, String>) {
        vars.insert("space-4".to_string(), "1rem".to_string());
    }
}

#[test]
fn built_in_theme_has_an_empty_plugin_slot() {
    let theme = Theme::madder();
    assert!(theme.plugins.is_empty());

    let registry = PluginRegistry::new();
    assert!(theme.resolve_plugins(&registry).unwrap().is_empty());
}

#[test]
fn plugin_references_resolve_by_name() {
    let mut theme = Theme::madder();
    theme.plugins.push(PluginRef::new("spacing"));

    let empty = PluginRegistry::new();
    assert!(matches!(
        theme.resolve_plugins(&empty),
        Err(ThemeError::UnknownPlugin(name)) if name == "spacing"
    ));

    let mut registry = PluginRegistry::new();
    registry.register(Box::new(SpacingPlugin));
    let resolved = theme.resolve_plugins(&registry).unwrap();
    assert_eq!(resolved.len(), 1);

    let mut vars = css_variable_map(&theme);
    for plugin in resolved {
        plugin.extend(&mut vars);
    }
    assert_eq!(vars["space-4"], "1rem");
}

#[test]
fn plugin_references_survive_the_round_trip() {
    let mut theme = Theme::madder();
    theme.plugins.push(PluginRef::new("typography"));

    let toml = theme.to_toml().unwrap();
    assert!(toml.contains("[[plugins]]"), "toml was:\n{toml}");
    let back = Theme::from_toml_str(&toml).unwrap();
    assert_eq!(back, theme);
}

// The installed-theme sequence lives in one test: installation is
// process-wide and the other tests must not touch it.
#[test]
fn installed_theme_is_process_wide() {
    let mut custom = Theme::madder();
    custom.colors.accent.blue = "#0055ff".parse::<Color>().unwrap();

    state::install(custom.clone()).unwrap();
    assert_eq!(state::current().colors.accent.blue, custom.colors.accent.blue);

    assert!(matches!(
        state::install(Theme::madder()),
        Err(ThemeError::AlreadyInstalled)
    ));
}
