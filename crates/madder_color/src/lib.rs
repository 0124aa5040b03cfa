//! Color primitives for the Madder design token system
//!
//! Provides [`Color`], the value type every color token carries, and its
//! wire format: CSS hex literals (`#` followed by exactly six hex digits).
//! Token tables serialize colors as that literal form, so parsing and
//! formatting round-trip byte-for-byte.

mod color;

pub use color::{Color, ParseColorError};
