//! Presentation surface trait.
//!
//! Every host implements `Surface`. The session dispatches all rendering
//! through this boundary -- it never touches a concrete display layer. The
//! capabilities are deliberately minimal: append markup to an output block,
//! open a fresh prompt, wipe everything, queue a one-shot animated banner,
//! and navigate away.

/// Identifies one prompt/output pair.
///
/// Allocated by the session in increasing order; block `n` is the output
/// region of the `n`-th prompt shown. Captured at command-resolution time so
/// late writes land on the block that issued the command, never on a prompt
/// created afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u64);

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-shot animated text banner.
///
/// Banners run to completion; the host reports the end of the animation
/// back to the session, which is what unblocks the next state transition
/// (first prompt after `Welcome`, navigation after `Logout`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Boot text shown before the first prompt.
    Welcome,
    /// Logout text. `goodbye` is true when a redirect follows (the banner
    /// says farewell instead of offering a reload action).
    Logout { goodbye: bool },
}

/// The rendering capabilities the session needs from a host.
///
/// `append` inserts markup unescaped by contract -- callers are trusted and
/// this is a cosmetic widget, not an isolation boundary. Handlers that want
/// escaping use [`crate::html::escape`] themselves.
pub trait Surface {
    /// Open a new prompt line accepting input, identified by `id`.
    fn new_prompt(&mut self, id: BlockId);

    /// Append an HTML fragment to the output block `target`. Append-only:
    /// prior content is never replaced.
    fn append(&mut self, target: BlockId, html: &str);

    /// Remove all accumulated prompt/output blocks.
    fn clear(&mut self);

    /// Queue the one-shot animated banner.
    fn play_banner(&mut self, banner: Banner);

    /// Leave the page for `url`. Called only after a logout banner finished.
    fn navigate(&mut self, url: &str);
}
