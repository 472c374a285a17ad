//! In-memory HTML surface.
//!
//! The reference [`Surface`] implementation: keeps one block per
//! prompt/output pair, a welcome and a logout region, the pending typed
//! effect, and the navigation target. `render()` assembles the full page.

use mockterm_skin::TerminalOptions;
use mockterm_types::surface::{Banner, BlockId, Surface};

use crate::effect::TypedEffect;
use crate::markup;

#[derive(Debug, Clone)]
struct Block {
    id: BlockId,
    prompt: String,
    output: String,
}

/// A surface rendering to HTML strings.
pub struct HtmlSurface {
    options: TerminalOptions,
    welcome_html: String,
    logout_html: String,
    blocks: Vec<Block>,
    pending: Option<(Banner, TypedEffect)>,
    navigated: Option<String>,
}

impl HtmlSurface {
    pub fn new(options: TerminalOptions) -> Self {
        Self {
            options,
            welcome_html: String::new(),
            logout_html: String::new(),
            blocks: Vec::new(),
            pending: None,
            navigated: None,
        }
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }

    /// The completed welcome banner markup (empty while still typing).
    pub fn welcome_html(&self) -> &str {
        &self.welcome_html
    }

    /// The completed logout banner markup (empty until logout finished).
    pub fn logout_html(&self) -> &str {
        &self.logout_html
    }

    /// Accumulated command output of one block, without its prompt line.
    pub fn block_output(&self, id: BlockId) -> String {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.output.clone())
            .unwrap_or_default()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Where the session navigated, if it did.
    pub fn navigated(&self) -> Option<&str> {
        self.navigated.as_deref()
    }

    pub fn has_pending_effect(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance the pending typed effect. Returns true when an effect just
    /// finished -- the host then reports completion to the session.
    pub fn tick(&mut self, ticks: u32) -> bool {
        let Some((_, effect)) = &mut self.pending else {
            return false;
        };
        if effect.advance(ticks) {
            self.commit_pending();
            return true;
        }
        false
    }

    /// Complete the pending effect immediately. Returns true if there was
    /// one.
    pub fn finish_pending(&mut self) -> bool {
        let Some((_, effect)) = &mut self.pending else {
            return false;
        };
        effect.finish();
        self.commit_pending();
        true
    }

    fn commit_pending(&mut self) {
        if let Some((banner, effect)) = self.pending.take() {
            match banner {
                Banner::Welcome => self.welcome_html = effect.html().to_string(),
                Banner::Logout { .. } => self.logout_html = effect.html().to_string(),
            }
        }
    }

    /// Assemble the whole page, with any in-flight banner shown up to its
    /// reveal frontier.
    pub fn render(&self) -> String {
        let mut init = self.welcome_html.clone();
        let mut typed = self.logout_html.clone();
        if let Some((banner, effect)) = &self.pending {
            match banner {
                Banner::Welcome => init = effect.visible().to_string(),
                Banner::Logout { .. } => typed = effect.visible().to_string(),
            }
        }
        let blocks: String = self
            .blocks
            .iter()
            .map(|b| format!("<p class=\"cmd-{}\">{}{}</p>", b.id, b.prompt, b.output))
            .collect();
        markup::page(&self.options, &init, &blocks, &typed)
    }
}

impl Surface for HtmlSurface {
    fn new_prompt(&mut self, id: BlockId) {
        let prompt = markup::prompt_html(&self.options, id);
        self.blocks.push(Block {
            id,
            prompt,
            output: String::new(),
        });
    }

    fn append(&mut self, target: BlockId, html: &str) {
        match self.blocks.iter_mut().find(|b| b.id == target) {
            Some(block) => block.output.push_str(html),
            None => {
                // Output for a block that was cleared away (or never
                // prompted). Keep it rather than drop it on the floor.
                log::warn!("append to unknown block {target}");
                self.blocks.push(Block {
                    id: target,
                    prompt: String::new(),
                    output: html.to_string(),
                });
            },
        }
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }

    fn play_banner(&mut self, banner: Banner) {
        let html = match banner {
            Banner::Welcome => markup::welcome_banner(&self.options),
            Banner::Logout { goodbye } => markup::logout_banner(&self.options, goodbye),
        };
        self.pending = Some((banner, TypedEffect::new(html, self.options.type_speed)));
    }

    fn navigate(&mut self, url: &str) {
        self.navigated = Some(url.to_string());
    }
}
