//! Foundation types for mockterm.
//!
//! This crate contains the types shared by all mockterm crates: the error
//! enum, the presentation `Surface` trait the session renders through, and
//! the HTML helper functions handed to command handlers.

pub mod error;
pub mod html;
pub mod surface;

pub use error::{Result, TermError};
pub use surface::{Banner, BlockId, Surface};
