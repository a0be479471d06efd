//! Theme engine for SkyCast.
//!
//! A palette is a pure function of `(theme, condition, custom colors)`. The
//! shell owns the [`ThemeSelection`] and passes it in; there is no global
//! theme state.

pub mod palette;
pub mod selection;

pub use palette::{StylePalette, ThemeEngine};
pub use selection::{CustomColors, ThemeId, ThemeSelection};
