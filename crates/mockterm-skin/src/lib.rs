//! Host configuration for the mockterm widget.
//!
//! Options cover the prompt identity (`user@host`), the colour palette,
//! font size, and the banner type speed. Everything has a default; hosts
//! override any subset, either from a TOML file or programmatically via
//! [`OptionsPatch`]. Overrides merge field by field, recursively for the
//! nested palette.

mod patch;
mod theme;

pub use patch::{OptionsPatch, PalettePatch};
pub use theme::{Palette, TerminalOptions};
