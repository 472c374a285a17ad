//! Terminal options -- identity, colour palette, and pacing.
//!
//! Loaded from TOML. Every field carries a serde default, so a partial
//! file deep-merges over the stock configuration.

use std::path::Path;

use serde::Deserialize;

use mockterm_types::error::Result;

/// Colour scheme for the widget. Values are CSS colour strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    /// Colour for inline error messages.
    #[serde(default = "default_error")]
    pub error: String,
    /// Colour of the `user@host` prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Colour of the `~$` prompt marker.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Page background colour.
    #[serde(default = "default_background")]
    pub background: String,
    /// Default text colour.
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_error() -> String {
    "#f00".to_string()
}
fn default_prefix() -> String {
    "#0f0".to_string()
}
fn default_prompt() -> String {
    "#00f".to_string()
}
fn default_background() -> String {
    "#000".to_string()
}
fn default_text() -> String {
    "#fff".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            error: default_error(),
            prefix: default_prefix(),
            prompt: default_prompt(),
            background: default_background(),
            text: default_text(),
        }
    }
}

/// Full host configuration for one terminal instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalOptions {
    /// Name shown left of the `@` in the prompt.
    #[serde(default = "default_user")]
    pub user: String,
    /// Host label shown right of the `@` and in the banners.
    #[serde(default = "default_host")]
    pub host: String,
    /// Colour palette.
    #[serde(default)]
    pub colours: Palette,
    /// CSS font size for the widget.
    #[serde(default = "default_font_size")]
    pub font_size: String,
    /// Characters revealed per tick while a banner types out.
    /// 0 reveals everything at once.
    #[serde(default = "default_type_speed")]
    pub type_speed: u32,
}

fn default_user() -> String {
    "user".to_string()
}
fn default_host() -> String {
    "example.domain".to_string()
}
fn default_font_size() -> String {
    "1em".to_string()
}
fn default_type_speed() -> u32 {
    1
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            colours: Palette::default(),
            font_size: default_font_size(),
            type_speed: default_type_speed(),
        }
    }
}

impl TerminalOptions {
    /// Parse options from TOML. Missing fields take their defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load options from a file, falling back to defaults with a warning
    /// if the file is missing or malformed. Construction never fails over
    /// bad configuration.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(source) => match Self::from_toml(&source) {
                Ok(opts) => opts,
                Err(e) => {
                    log::warn!("options file {} is invalid: {e} -- using defaults", path.display());
                    Self::default()
                },
            },
            Err(e) => {
                log::warn!("cannot read options file {}: {e} -- using defaults", path.display());
                Self::default()
            },
        }
    }

    /// The prompt identity, e.g. `visitor@example.domain`.
    pub fn identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Render the widget stylesheet from the palette.
    pub fn stylesheet(&self) -> String {
        let p = &self.colours;
        format!(
            "a,body{{color:{text}}}\
             body{{background:{background};font-family:Courier;font-size:{font_size}}}\
             a{{text-decoration:none;font-weight:700}}\
             p{{margin:0}}\
             .cursor{{height:3px;width:10px;margin-left:5px;margin-bottom:-1px;\
             background:{text};display:inline-block}}",
            text = p.text,
            background = p.background,
            font_size = self.font_size,
        )
    }
}
