//! Export surface for the styling build step
//!
//! The build tool reads the table either as a name → value map or as a
//! generated `:root` block of CSS custom properties. Color values are
//! always the lowercase `#rrggbb` literal form, so generated style rules
//! stay wire-compatible with the source table.

use rustc_hash::FxHashMap;

use crate::theme::Theme;
use crate::tokens::ColorToken;

/// Custom property prefix used in generated stylesheets.
const CSS_PREFIX: &str = "madder";

/// All token names mapped to their values.
///
/// Color keys are the hyphenated token names ("primary-50" .. "text-inverse")
/// without the `--` prefix; "font-sans" maps to the joined fallback chain.
pub fn css_variable_map(theme: &Theme) -> FxHashMap<String, String> {
    let mut vars = FxHashMap::default();
    vars.insert("font-sans".to_string(), theme.fonts.sans.to_string());
    for token in ColorToken::all() {
        vars.insert(token.to_string(), theme.color(token).to_hex_string());
    }
    vars
}

/// Generate the `:root` custom-property block, one declaration per token,
/// in table order (fonts, then primary, neutral, accent, background, text).
pub fn to_css(theme: &Theme) -> String {
    let mut css = String::new();
    css.push_str(":root {\n");
    css.push_str(&format!(
        "  --{CSS_PREFIX}-font-sans: {};\n",
        theme.fonts.sans
    ));
    for token in ColorToken::all() {
        css.push_str(&format!(
            "  --{CSS_PREFIX}-{token}: {};\n",
            theme.color(token)
        ));
    }
    css.push_str("}\n");
    css
}
