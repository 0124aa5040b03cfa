//! Design tokens for the Madder token table
//!
//! Tokens are the atomic values that make up the table:
//! - Colors (scales, accents, semantic groups)
//! - Typography (font fallback stacks)

mod color;
mod typography;

pub use color::*;
pub use typography::*;
