//! Font family tokens

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Returned when a font stack would be empty.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("font stack must contain at least one family")]
pub struct EmptyFontStack;

/// Ordered font fallback chain. The first available family wins.
///
/// The chain is non-empty by construction and order is preserved exactly;
/// it encodes fallback priority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FontStack(SmallVec<[String; 4]>);

impl FontStack {
    /// Start a stack from its primary family.
    pub fn new(primary: impl Into<String>) -> Self {
        let mut families = SmallVec::new();
        families.push(primary.into());
        Self(families)
    }

    /// Append a fallback family.
    pub fn with_fallback(mut self, family: impl Into<String>) -> Self {
        self.0.push(family.into());
        self
    }

    /// The first (preferred) family.
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    /// All families in fallback order.
    pub fn families(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FontStack {
    /// CSS `font-family` list form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl TryFrom<Vec<String>> for FontStack {
    type Error = EmptyFontStack;

    fn try_from(families: Vec<String>) -> Result<Self, Self::Error> {
        if families.is_empty() {
            return Err(EmptyFontStack);
        }
        Ok(Self(SmallVec::from_vec(families)))
    }
}

impl From<FontStack> for Vec<String> {
    fn from(stack: FontStack) -> Self {
        stack.0.into_vec()
    }
}

/// Font-family slots exposed to the styling pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontTokens {
    pub sans: FontStack,
}

impl Default for FontTokens {
    fn default() -> Self {
        Self {
            sans: FontStack::new("Inter")
                .with_fallback("ui-sans-serif")
                .with_fallback("system-ui"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_preserves_order() {
        let stack = FontStack::new("Inter")
            .with_fallback("ui-sans-serif")
            .with_fallback("system-ui");
        assert_eq!(stack.primary(), "Inter");
        assert_eq!(stack.families(), ["Inter", "ui-sans-serif", "system-ui"]);
        assert_eq!(stack.to_string(), "Inter, ui-sans-serif, system-ui");
    }

    #[test]
    fn empty_stack_is_rejected() {
        assert_eq!(FontStack::try_from(Vec::new()), Err(EmptyFontStack));
        assert!(serde_json::from_str::<FontStack>("[]").is_err());
    }
}
