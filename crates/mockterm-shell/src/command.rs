//! Command records, the insertion-ordered registry, and the handler context.
//!
//! A command is an all-optional record so that two command maps can merge
//! recursively: a present field overrides, an absent field inherits. Hosts
//! merge their custom set over the defaults at construction; the set is
//! immutable for the rest of the session.

use std::collections::HashMap;

use mockterm_skin::TerminalOptions;
use mockterm_types::error::Result;
use mockterm_types::surface::{BlockId, Surface};

use crate::clock::Clock;

/// A boxed command handler. Handlers produce side effects through the
/// context only; no return value is consumed beyond the error.
pub type Handler = Box<dyn Fn(&mut HandlerCx<'_>) -> Result<()>>;

/// Everything a handler gets to work with for one invocation.
pub struct HandlerCx<'a> {
    /// Output block captured when the command was resolved. Late writes
    /// land here even if prompts have advanced meanwhile.
    pub target: BlockId,
    /// Arguments after the command name, in input order.
    pub args: &'a [String],
    /// The presentation surface.
    pub surface: &'a mut dyn Surface,
    /// Live host options.
    pub options: &'a TerminalOptions,
    /// The full command set, for introspection (`help`, `man`).
    pub commands: &'a CommandSet,
    /// Session control requests (exit, explicit prompt).
    pub control: &'a mut SessionControl,
    /// Wall clock.
    pub clock: &'a dyn Clock,
}

impl HandlerCx<'_> {
    /// Append an HTML fragment to this invocation's output block.
    pub fn append(&mut self, html: &str) {
        self.surface.append(self.target, html);
    }

    /// The coloured `ERROR` label used by inline error messages.
    pub fn error_label(&self) -> String {
        format!(
            "<span style=\"color: {}\">ERROR</span>",
            self.options.colours.error
        )
    }

    /// Request session logout after this handler returns. With a URL the
    /// surface navigates there once the logout banner finishes.
    pub fn exit(&mut self, redirect: Option<String>) {
        self.control.request_exit(redirect);
    }
}

/// Requests a handler can make of the session, applied after it returns.
#[derive(Debug, Default)]
pub struct SessionControl {
    exit: Option<ExitRequest>,
    prompt: bool,
}

/// A pending logout, optionally followed by navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRequest {
    pub redirect: Option<String>,
}

impl SessionControl {
    /// Request logout. The first request per dispatch wins.
    pub fn request_exit(&mut self, redirect: Option<String>) {
        if self.exit.is_none() {
            self.exit = Some(ExitRequest { redirect });
        }
    }

    /// Ask for a fresh prompt even though this command defers prompting.
    /// Used by deferring commands that bail out early (e.g. a usage error)
    /// and therefore never reach their session-ending path.
    pub fn request_prompt(&mut self) {
        self.prompt = true;
    }

    pub(crate) fn take_exit(&mut self) -> Option<ExitRequest> {
        self.exit.take()
    }

    pub(crate) fn prompt_requested(&self) -> bool {
        self.prompt
    }
}

/// One command's metadata and handler. Every field optional; see
/// [`CommandSet::merge`] for the inheritance rules.
#[derive(Default)]
pub struct CommandDef {
    /// One-line description shown by `help` and `man`.
    pub description: Option<String>,
    /// Usage hint shown by `man`.
    pub usage: Option<String>,
    /// Extra detail shown by `man`.
    pub info: Option<String>,
    /// Alternate names. Display-only: never consulted by dispatch.
    pub aliases: Option<Vec<String>>,
    /// Hidden commands dispatch normally but are omitted from `help` and
    /// treated as unknown by `man`.
    pub hidden: Option<bool>,
    /// When true the handler takes responsibility for showing (or never
    /// showing) the next prompt; the dispatcher stays out of it.
    pub typed: Option<bool>,
    /// The handler. A command without one is metadata-only.
    pub run: Option<Handler>,
}

impl std::fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDef")
            .field("description", &self.description)
            .field("usage", &self.usage)
            .field("info", &self.info)
            .field("aliases", &self.aliases)
            .field("hidden", &self.hidden)
            .field("typed", &self.typed)
            .field("run", &self.run.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

impl CommandDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn usage(mut self, text: &str) -> Self {
        self.usage = Some(text.to_string());
        self
    }

    pub fn info(mut self, text: &str) -> Self {
        self.info = Some(text.to_string());
        self
    }

    pub fn aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn typed(mut self, typed: bool) -> Self {
        self.typed = Some(typed);
        self
    }

    pub fn run<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut HandlerCx<'_>) -> Result<()> + 'static,
    {
        self.run = Some(Box::new(handler));
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    pub fn defers_prompt(&self) -> bool {
        self.typed.unwrap_or(false)
    }

    /// Merge `other` over this record: present fields replace, absent
    /// fields inherit.
    fn merge_from(&mut self, other: CommandDef) {
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.usage.is_some() {
            self.usage = other.usage;
        }
        if other.info.is_some() {
            self.info = other.info;
        }
        if other.aliases.is_some() {
            self.aliases = other.aliases;
        }
        if other.hidden.is_some() {
            self.hidden = other.hidden;
        }
        if other.typed.is_some() {
            self.typed = other.typed;
        }
        if other.run.is_some() {
            self.run = other.run;
        }
    }
}

/// Insertion-ordered map from command name to [`CommandDef`].
///
/// Names are keyed lower-cased, so lookup is case-insensitive exact match.
/// No prefix or fuzzy matching, and aliases never resolve.
#[derive(Debug, Default)]
pub struct CommandSet {
    commands: HashMap<String, CommandDef>,
    order: Vec<String>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing record with the same name
    /// wholesale (use [`CommandSet::merge`] for field-wise merging) while
    /// keeping its original registration position.
    pub fn insert(&mut self, name: &str, def: CommandDef) {
        let key = name.to_lowercase();
        if !self.commands.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.commands.insert(key, def);
    }

    /// Merge another set over this one. Keys unique to `overrides` are
    /// appended in their registration order; keys present in both merge
    /// recursively field by field.
    pub fn merge(&mut self, overrides: CommandSet) {
        let CommandSet {
            mut commands,
            order,
        } = overrides;
        for key in order {
            let Some(def) = commands.remove(&key) else {
                continue;
            };
            match self.commands.get_mut(&key) {
                Some(existing) => existing.merge_from(def),
                None => {
                    self.order.push(key.clone());
                    self.commands.insert(key, def);
                },
            }
        }
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(&self, name: &str) -> Option<&CommandDef> {
        self.commands.get(&name.to_lowercase())
    }

    /// Command names in registration order. With `include_hidden` false,
    /// hidden commands are skipped. The iterator is finite and a fresh one
    /// is produced on every call.
    pub fn names(&self, include_hidden: bool) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(move |name| {
                include_hidden
                    || self
                        .commands
                        .get(*name)
                        .is_none_or(|def| !def.is_hidden())
            })
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
