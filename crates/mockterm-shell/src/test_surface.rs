//! Shared test utilities for the shell and command crates.
//!
//! Provides a [`RecordingSurface`] that records every surface call for
//! assertion in unit tests across crates.

use mockterm_types::surface::{Banner, BlockId, Surface};

/// A recorded call against the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum SurfaceCall {
    NewPrompt(BlockId),
    Append { target: BlockId, html: String },
    Clear,
    Banner(Banner),
    Navigate(String),
}

/// A surface that records all calls and accumulates block content.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    blocks: Vec<(BlockId, String)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated content of a block, empty if the block never received
    /// output.
    pub fn block_text(&self, id: BlockId) -> String {
        self.blocks
            .iter()
            .find(|(b, _)| *b == id)
            .map(|(_, text)| text.clone())
            .unwrap_or_default()
    }

    /// Number of prompts opened so far.
    pub fn prompt_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::NewPrompt(_)))
            .count()
    }

    /// The most recently queued banner, if any.
    pub fn last_banner(&self) -> Option<Banner> {
        self.calls.iter().rev().find_map(|c| match c {
            SurfaceCall::Banner(b) => Some(*b),
            _ => None,
        })
    }

    /// The navigation target, if any was requested.
    pub fn navigated(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            SurfaceCall::Navigate(url) => Some(url.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn new_prompt(&mut self, id: BlockId) {
        self.calls.push(SurfaceCall::NewPrompt(id));
        self.blocks.push((id, String::new()));
    }

    fn append(&mut self, target: BlockId, html: &str) {
        self.calls.push(SurfaceCall::Append {
            target,
            html: html.to_string(),
        });
        match self.blocks.iter_mut().find(|(b, _)| *b == target) {
            Some((_, text)) => text.push_str(html),
            None => self.blocks.push((target, html.to_string())),
        }
    }

    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
        self.blocks.clear();
    }

    fn play_banner(&mut self, banner: Banner) {
        self.calls.push(SurfaceCall::Banner(banner));
    }

    fn navigate(&mut self, url: &str) {
        self.calls.push(SurfaceCall::Navigate(url.to_string()));
    }
}
