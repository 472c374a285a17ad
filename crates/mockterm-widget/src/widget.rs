//! The `Terminal` facade: one session wired to one HTML surface.

use mockterm_shell::{CommandSet, Session, SessionState};
use mockterm_skin::TerminalOptions;
use mockterm_types::surface::BlockId;

use crate::surface::HtmlSurface;

/// An embeddable terminal instance.
///
/// Owns its session and surface, so multiple terminals coexist without
/// shared state. Typical host loop: [`Terminal::boot`], drive banners with
/// [`Terminal::tick`] (or [`Terminal::finish_effects`] for no animation),
/// feed committed lines to [`Terminal::submit`], and present
/// [`Terminal::html`].
pub struct Terminal {
    session: Session,
    surface: HtmlSurface,
}

impl Terminal {
    /// Build a terminal over `options` and a ready command set. Hosts
    /// merge custom commands over the defaults before passing them in.
    pub fn new(options: TerminalOptions, commands: CommandSet) -> Self {
        let surface = HtmlSurface::new(options.clone());
        Self {
            session: Session::new(options, commands),
            surface,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &HtmlSurface {
        &self.surface
    }

    /// Start the session: queues the welcome banner.
    pub fn boot(&mut self) {
        self.session.boot(&mut self.surface);
    }

    /// Advance any in-flight banner by `ticks`; on completion the session
    /// is notified and moves on (first prompt, or logout/navigation).
    pub fn tick(&mut self, ticks: u32) {
        if self.surface.tick(ticks) {
            self.session.effect_finished(&mut self.surface);
        }
    }

    /// Skip all pending banner animation.
    pub fn finish_effects(&mut self) {
        while self.surface.finish_pending() {
            self.session.effect_finished(&mut self.surface);
        }
    }

    /// Dispatch one committed input line.
    pub fn submit(&mut self, raw: &str) {
        self.session.submit(raw, &mut self.surface);
    }

    /// The output block the active prompt would write to, if any.
    pub fn current_block(&self) -> Option<BlockId> {
        match self.session.state() {
            SessionState::AwaitingInput => Some(BlockId(self.session.count() - 1)),
            _ => None,
        }
    }

    /// False once the session has fully logged out.
    pub fn is_live(&self) -> bool {
        self.session.is_live()
    }

    /// Where the session navigated on exit, if anywhere.
    pub fn navigated(&self) -> Option<&str> {
        self.surface.navigated()
    }

    /// The full rendered page.
    pub fn html(&self) -> String {
        self.surface.render()
    }
}
