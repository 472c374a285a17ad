//! Programmatic option overrides.
//!
//! A patch is an all-`Option` mirror of [`TerminalOptions`]: present fields
//! replace, absent fields inherit, and the nested palette merges the same
//! way one level down.

use serde::Deserialize;

use crate::theme::{Palette, TerminalOptions};

/// Partial override of [`Palette`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PalettePatch {
    pub error: Option<String>,
    pub prefix: Option<String>,
    pub prompt: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

impl PalettePatch {
    /// Apply this patch over `base`, field by field.
    pub fn apply(&self, base: &mut Palette) {
        if let Some(v) = &self.error {
            base.error = v.clone();
        }
        if let Some(v) = &self.prefix {
            base.prefix = v.clone();
        }
        if let Some(v) = &self.prompt {
            base.prompt = v.clone();
        }
        if let Some(v) = &self.background {
            base.background = v.clone();
        }
        if let Some(v) = &self.text {
            base.text = v.clone();
        }
    }
}

/// Partial override of [`TerminalOptions`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsPatch {
    pub user: Option<String>,
    pub host: Option<String>,
    pub colours: Option<PalettePatch>,
    pub font_size: Option<String>,
    pub type_speed: Option<u32>,
}

impl OptionsPatch {
    /// Apply this patch over `base`. The palette merges recursively rather
    /// than being replaced wholesale.
    pub fn apply(&self, base: &mut TerminalOptions) {
        if let Some(v) = &self.user {
            base.user = v.clone();
        }
        if let Some(v) = &self.host {
            base.host = v.clone();
        }
        if let Some(p) = &self.colours {
            p.apply(&mut base.colours);
        }
        if let Some(v) = &self.font_size {
            base.font_size = v.clone();
        }
        if let Some(v) = self.type_speed {
            base.type_speed = v;
        }
    }

    /// Defaults with this patch applied.
    pub fn into_options(self) -> TerminalOptions {
        let mut opts = TerminalOptions::default();
        self.apply(&mut opts);
        opts
    }
}
