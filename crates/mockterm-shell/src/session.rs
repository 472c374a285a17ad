//! Session state machine and dispatch loop.
//!
//! One `Session` per widget instance. The registry, options, and counters
//! are fields here -- never ambient globals -- and are passed by reference
//! into every handler call, so multiple terminals on one page stay
//! independent.
//!
//! States: `New -> Booting -> AwaitingInput -> (dispatch) -> AwaitingInput`,
//! with `LoggingOut -> LoggedOut` reachable through the exit control.
//! `LoggedOut` is terminal; the only way back is building a new session.
//! The two suspension points are line submission ([`Session::submit`]) and
//! banner completion ([`Session::effect_finished`]).

use mockterm_skin::TerminalOptions;
use mockterm_types::error::TermError;
use mockterm_types::html;
use mockterm_types::surface::{Banner, BlockId, Surface};

use crate::clock::{Clock, SystemClock};
use crate::command::{CommandSet, HandlerCx, SessionControl};
use crate::tokenize::split_line;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, boot not yet requested.
    New,
    /// Welcome banner playing; input not yet accepted.
    Booting,
    /// One active prompt is accepting input.
    AwaitingInput,
    /// Logout banner playing; input no longer accepted.
    LoggingOut { redirect: Option<String> },
    /// Terminal state.
    LoggedOut,
}

/// A single terminal session: options, command set, prompt counter, state.
pub struct Session {
    options: TerminalOptions,
    commands: CommandSet,
    clock: Box<dyn Clock>,
    count: u64,
    state: SessionState,
}

impl Session {
    /// Create a session over the given options and command set, using the
    /// system clock.
    pub fn new(options: TerminalOptions, commands: CommandSet) -> Self {
        Self::with_clock(options, commands, Box::new(SystemClock))
    }

    /// Create a session with an explicit clock (tests pin timestamps here).
    pub fn with_clock(
        options: TerminalOptions,
        commands: CommandSet,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            options,
            commands,
            clock,
            count: 0,
            state: SessionState::New,
        }
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }

    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Prompts shown so far. `count - 1` identifies the most recent
    /// output block while the session is live.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// False once the session has fully logged out.
    pub fn is_live(&self) -> bool {
        self.state != SessionState::LoggedOut
    }

    /// Start the session: queue the welcome banner. The first prompt
    /// appears when the host reports the banner finished.
    pub fn boot(&mut self, surface: &mut dyn Surface) {
        if self.state != SessionState::New {
            log::warn!("boot requested twice; ignoring");
            return;
        }
        log::info!("booting terminal session for {}", self.options.identity());
        self.state = SessionState::Booting;
        surface.play_banner(Banner::Welcome);
    }

    /// The host reports that the pending one-shot banner finished.
    pub fn effect_finished(&mut self, surface: &mut dyn Surface) {
        match &self.state {
            SessionState::Booting => {
                self.state = SessionState::AwaitingInput;
                self.open_prompt(surface);
                log::info!("session live");
            },
            SessionState::LoggingOut { redirect } => {
                let redirect = redirect.clone();
                self.state = SessionState::LoggedOut;
                log::info!("session logged out");
                if let Some(url) = redirect {
                    log::info!("navigating to {url}");
                    surface.navigate(&url);
                }
            },
            _ => log::debug!("spurious effect completion ignored"),
        }
    }

    /// Dispatch one committed input line.
    ///
    /// Empty input is a no-op: no lookup, no output, no prompt advance.
    /// Unknown names render an inline error and always get a fresh prompt.
    /// Handler failures are caught at this boundary, rendered inline, and
    /// never stop the loop. The output block is captured here, at
    /// resolution time, so late writes cannot land on a newer prompt.
    pub fn submit(&mut self, raw: &str, surface: &mut dyn Surface) {
        if self.state != SessionState::AwaitingInput {
            log::debug!("input ignored: session not accepting commands");
            return;
        }
        let Some(line) = split_line(raw) else {
            return;
        };
        let target = BlockId(self.count - 1);
        log::debug!("dispatching '{}' on block {target}", line.command);

        let mut control = SessionControl::default();
        let defers;
        {
            let Session {
                options,
                commands,
                clock,
                ..
            } = &*self;
            match commands.lookup(&line.command) {
                None => {
                    defers = false;
                    let err = TermError::CommandNotFound(html::escape(&line.command));
                    surface.append(target, &format!("{}: {err}", error_label(options)));
                },
                Some(def) => {
                    defers = def.defers_prompt();
                    if let Some(run) = &def.run {
                        let mut cx = HandlerCx {
                            target,
                            args: &line.args,
                            surface: &mut *surface,
                            options,
                            commands,
                            control: &mut control,
                            clock: clock.as_ref(),
                        };
                        if let Err(e) = run(&mut cx) {
                            let failure = TermError::Handler {
                                name: line.command.clone(),
                                message: e.to_string(),
                            };
                            log::warn!("{failure}");
                            let label = cx.error_label();
                            cx.append(&format!("{label}: {failure}"));
                        }
                    }
                },
            }
        }

        if let Some(exit) = control.take_exit() {
            self.begin_logout(surface, exit.redirect);
            return;
        }
        if !defers || control.prompt_requested() {
            self.open_prompt(surface);
        }
    }

    fn open_prompt(&mut self, surface: &mut dyn Surface) {
        self.count += 1;
        surface.new_prompt(BlockId(self.count - 1));
    }

    fn begin_logout(&mut self, surface: &mut dyn Surface, redirect: Option<String>) {
        log::info!("closing connection to {}", self.options.host);
        surface.play_banner(Banner::Logout {
            goodbye: redirect.is_some(),
        });
        self.state = SessionState::LoggingOut { redirect };
    }
}

/// The coloured `ERROR` label prefixing inline error messages.
pub(crate) fn error_label(options: &TerminalOptions) -> String {
    format!(
        "<span style=\"color: {}\">ERROR</span>",
        options.colours.error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandDef;
    use crate::test_surface::{RecordingSurface, SurfaceCall};

    fn live_session(commands: CommandSet) -> (Session, RecordingSurface) {
        let mut session = Session::new(TerminalOptions::default(), commands);
        let mut surface = RecordingSurface::new();
        session.boot(&mut surface);
        session.effect_finished(&mut surface);
        (session, surface)
    }

    fn echo_set() -> CommandSet {
        let mut set = CommandSet::new();
        set.insert(
            "echo",
            CommandDef::new().description("repeats its arguments.").run(|cx| {
                let text = cx.args.join(" ");
                cx.append(&text);
                Ok(())
            }),
        );
        set
    }

    #[test]
    fn boot_queues_welcome_then_first_prompt_on_completion() {
        let mut session = Session::new(TerminalOptions::default(), CommandSet::new());
        let mut surface = RecordingSurface::new();
        assert_eq!(*session.state(), SessionState::New);

        session.boot(&mut surface);
        assert_eq!(surface.last_banner(), Some(Banner::Welcome));
        assert_eq!(surface.prompt_count(), 0);
        assert_eq!(*session.state(), SessionState::Booting);

        session.effect_finished(&mut surface);
        assert_eq!(*session.state(), SessionState::AwaitingInput);
        assert_eq!(surface.prompt_count(), 1);
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn double_boot_is_ignored() {
        let (mut session, mut surface) = live_session(CommandSet::new());
        let banners_before = surface.calls.len();
        session.boot(&mut surface);
        assert_eq!(surface.calls.len(), banners_before);
    }

    #[test]
    fn input_before_boot_completes_is_ignored() {
        let mut session = Session::new(TerminalOptions::default(), echo_set());
        let mut surface = RecordingSurface::new();
        session.boot(&mut surface);
        session.submit("echo hi", &mut surface);
        assert_eq!(session.count(), 0);
        assert_eq!(surface.prompt_count(), 0);
    }

    #[test]
    fn empty_input_is_a_complete_noop() {
        let (mut session, mut surface) = live_session(echo_set());
        let calls_before = surface.calls.len();
        session.submit("", &mut surface);
        session.submit("   \t ", &mut surface);
        assert_eq!(surface.calls.len(), calls_before);
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn unknown_command_renders_error_and_new_prompt() {
        let (mut session, mut surface) = live_session(echo_set());
        session.submit("frobnicate", &mut surface);
        let text = surface.block_text(BlockId(0));
        assert!(text.contains("ERROR"));
        assert!(text.contains("frobnicate: command not found"));
        // No handler ran, so a fresh prompt always appears.
        assert_eq!(surface.prompt_count(), 2);
        assert_eq!(session.count(), 2);
    }

    #[test]
    fn unknown_command_name_is_escaped() {
        let (mut session, mut surface) = live_session(CommandSet::new());
        session.submit("<script>", &mut surface);
        let text = surface.block_text(BlockId(0));
        assert!(text.contains("&lt;script&gt;"));
        assert!(!text.contains("<script>"));
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let (mut session, mut surface) = live_session(echo_set());
        session.submit("EcHo hello", &mut surface);
        assert_eq!(surface.block_text(BlockId(0)), "hello");
    }

    #[test]
    fn leading_trailing_whitespace_tolerated() {
        let (mut session, mut surface) = live_session(echo_set());
        session.submit("  echo   spaced   out  ", &mut surface);
        assert_eq!(surface.block_text(BlockId(0)), "spaced out");
    }

    #[test]
    fn output_targets_block_captured_at_resolution() {
        let (mut session, mut surface) = live_session(echo_set());
        session.submit("echo first", &mut surface);
        session.submit("echo second", &mut surface);
        assert_eq!(surface.block_text(BlockId(0)), "first");
        assert_eq!(surface.block_text(BlockId(1)), "second");
        assert_eq!(session.count(), 3);
    }

    #[test]
    fn handler_failure_is_caught_and_loop_continues() {
        let mut set = echo_set();
        set.insert(
            "explode",
            CommandDef::new().run(|_cx| {
                Err(TermError::Command("boom".into()))
            }),
        );
        let (mut session, mut surface) = live_session(set);

        session.submit("explode", &mut surface);
        let text = surface.block_text(BlockId(0));
        assert!(text.contains(
            "explode: an error occurred while running this command: boom"
        ));
        assert_eq!(*session.state(), SessionState::AwaitingInput);

        // Further input still dispatches.
        session.submit("echo alive", &mut surface);
        assert_eq!(surface.block_text(BlockId(1)), "alive");
    }

    #[test]
    fn metadata_only_command_dispatches_quietly() {
        let mut set = CommandSet::new();
        set.insert("noop", CommandDef::new().description("does nothing."));
        let (mut session, mut surface) = live_session(set);
        session.submit("noop", &mut surface);
        assert_eq!(surface.block_text(BlockId(0)), "");
        assert_eq!(surface.prompt_count(), 2);
    }

    #[test]
    fn typed_command_defers_the_next_prompt() {
        let mut set = CommandSet::new();
        set.insert(
            "wait",
            CommandDef::new().typed(true).run(|cx| {
                cx.append("waiting...");
                Ok(())
            }),
        );
        let (mut session, mut surface) = live_session(set);
        session.submit("wait", &mut surface);
        assert_eq!(surface.prompt_count(), 1);
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn typed_command_can_request_prompt_explicitly() {
        let mut set = CommandSet::new();
        set.insert(
            "bail",
            CommandDef::new().typed(true).run(|cx| {
                cx.append("usage error");
                cx.control.request_prompt();
                Ok(())
            }),
        );
        let (mut session, mut surface) = live_session(set);
        session.submit("bail", &mut surface);
        assert_eq!(surface.prompt_count(), 2);
    }

    #[test]
    fn exit_without_redirect_logs_out() {
        let mut set = CommandSet::new();
        set.insert(
            "exit",
            CommandDef::new().typed(true).run(|cx| {
                cx.exit(None);
                Ok(())
            }),
        );
        let (mut session, mut surface) = live_session(set);

        session.submit("exit", &mut surface);
        assert_eq!(surface.last_banner(), Some(Banner::Logout { goodbye: false }));
        assert_eq!(
            *session.state(),
            SessionState::LoggingOut { redirect: None }
        );

        // Commit signal is dead while the banner plays and after.
        session.submit("exit", &mut surface);
        assert_eq!(surface.prompt_count(), 1);

        session.effect_finished(&mut surface);
        assert_eq!(*session.state(), SessionState::LoggedOut);
        assert!(!session.is_live());
        assert!(surface.navigated().is_none());

        session.submit("exit", &mut surface);
        assert_eq!(surface.prompt_count(), 1);
    }

    #[test]
    fn exit_with_redirect_navigates_after_banner() {
        let mut set = CommandSet::new();
        set.insert(
            "leave",
            CommandDef::new().typed(true).run(|cx| {
                cx.exit(Some("https://example.com/".into()));
                Ok(())
            }),
        );
        let (mut session, mut surface) = live_session(set);

        session.submit("leave", &mut surface);
        assert_eq!(surface.last_banner(), Some(Banner::Logout { goodbye: true }));
        // Navigation waits for the banner to finish presenting.
        assert!(surface.navigated().is_none());

        session.effect_finished(&mut surface);
        assert_eq!(surface.navigated(), Some("https://example.com/"));
        assert_eq!(*session.state(), SessionState::LoggedOut);
    }

    #[test]
    fn exit_wins_over_prompt_policy() {
        // A non-typed command that requests exit: the logout flow takes
        // precedence over the automatic next prompt.
        let mut set = CommandSet::new();
        set.insert(
            "die",
            CommandDef::new().run(|cx| {
                cx.exit(None);
                Ok(())
            }),
        );
        let (mut session, mut surface) = live_session(set);
        session.submit("die", &mut surface);
        assert_eq!(surface.prompt_count(), 1);
        assert!(matches!(
            session.state(),
            SessionState::LoggingOut { redirect: None }
        ));
    }

    #[test]
    fn handler_sees_registry_and_options() {
        let mut set = CommandSet::new();
        set.insert("first", CommandDef::new());
        set.insert(
            "inspect",
            CommandDef::new().run(|cx| {
                let names: Vec<_> = cx.commands.names(true).collect();
                let text = format!("{}:{}", cx.options.user, names.join(","));
                cx.append(&text);
                Ok(())
            }),
        );
        let (mut session, mut surface) = live_session(set);
        session.submit("inspect", &mut surface);
        assert_eq!(surface.block_text(BlockId(0)), "user:first,inspect");
    }

    #[test]
    fn clear_call_passes_through() {
        let mut set = CommandSet::new();
        set.insert(
            "clear",
            CommandDef::new().run(|cx| {
                cx.surface.clear();
                Ok(())
            }),
        );
        let (mut session, mut surface) = live_session(set);
        session.submit("clear", &mut surface);
        assert!(surface.calls.contains(&SurfaceCall::Clear));
        // A fresh prompt follows, since clear is not a deferring command.
        assert_eq!(surface.prompt_count(), 2);
    }
}
