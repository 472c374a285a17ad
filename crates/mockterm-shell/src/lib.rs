//! The mockterm core: command registry, tokenizer, and session dispatch.
//!
//! The terminal is a registry-based dispatch system. Commands are records
//! in an insertion-ordered [`CommandSet`]; the [`Session`] state machine
//! reads committed input lines, resolves the first token against the set,
//! and invokes the handler with a [`HandlerCx`] scoped to the output block
//! that issued the command.

pub mod clock;
pub mod command;
pub mod session;
pub mod test_surface;
pub mod tokenize;

pub use clock::{Clock, SystemClock, WallTime};
pub use command::{CommandDef, CommandSet, HandlerCx, SessionControl};
pub use session::{Session, SessionState};
pub use tokenize::{Line, split_line};
