//! Process-wide installed theme
//!
//! The token table is immutable once installed. Concurrent reads are safe
//! by construction; there is no mutation after installation.

use std::sync::OnceLock;

use crate::error::ThemeError;
use crate::theme::Theme;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme for this process.
///
/// May be called at most once, and only before the first [`current`] read.
pub fn install(theme: Theme) -> Result<(), ThemeError> {
    match THEME.set(theme) {
        Ok(()) => {
            tracing::debug!("theme installed");
            Ok(())
        }
        Err(_) => {
            tracing::warn!("install called after a theme was already available");
            Err(ThemeError::AlreadyInstalled)
        }
    }
}

/// The installed theme, or the built-in Madder table when none was
/// installed.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::madder)
}
