//! The embeddable mockterm widget.
//!
//! Ties a [`mockterm_shell::Session`] to an in-memory [`HtmlSurface`] that
//! renders the whole terminal as an HTML page: a style block from the
//! palette, a welcome region, one paragraph per prompt/output pair, and a
//! logout region. Banners type out progressively through [`TypedEffect`];
//! hosts drive the animation with [`Terminal::tick`] or skip it with
//! [`Terminal::finish_effects`].

pub mod effect;
pub mod input;
pub mod markup;
pub mod surface;
mod widget;

pub use effect::TypedEffect;
pub use input::filter_input;
pub use surface::HtmlSurface;
pub use widget::Terminal;
