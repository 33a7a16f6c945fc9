//! Procedural renderer for the Spendly app icon.
//!
//! The icon is composed in memory as an RGBA raster: a dark rounded panel,
//! two ambient glows, a gradient "S" letter mark, a cyan coin accent with a
//! € glyph, and a couple of small decorative touches. Two variants are
//! written: the opaque `icon.png` and the transparent `icon_foreground.png`
//! used as an Android adaptive-icon foreground layer.

pub mod draw;
pub mod glyph;
pub mod render;
pub mod theme;
