//! Style identifiers and glyph substitution tables.
//!
//! This module provides the static half of the engine:
//!
//! - [`StyleId`]: closed enumeration of every registered style
//! - [`StyleInfo`]: the `(id, display name)` record used by listings
//! - the per-style glyph tables, built once at startup
//!
//! External callers hand the library loosely-typed string ids; those are
//! normalized to [`StyleId`] at the boundary via [`StyleId::parse`], which
//! returns `None` for unknown ids rather than an error.

mod glyphs;
mod id;

pub use id::{StyleId, StyleInfo};

pub(crate) use glyphs::glyph_for;
