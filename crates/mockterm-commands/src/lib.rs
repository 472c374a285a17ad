//! Command library for mockterm.
//!
//! `builtins` holds the four commands every terminal ships with (`help`,
//! `man`, `clear`, `exit`); `extras` holds the sample set hosts typically
//! merge on top (`time`, `8ball`, `google`, and two hidden jokes).

mod builtins;
mod extras;

pub use builtins::{default_commands, register_builtins};
pub use extras::{register_samples, sample_commands};

use mockterm_shell::CommandSet;

/// Builtins plus the sample set, merged in that order.
pub fn full_commands() -> CommandSet {
    let mut set = default_commands();
    set.merge(sample_commands());
    set
}
