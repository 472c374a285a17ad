//! mockterm demo entry point.
//!
//! Runs the widget as a line-oriented console program: stdin lines are
//! committed input, command output is printed tag-stripped, and the full
//! HTML transcript is written out when the session ends. Options come from
//! the first CLI argument, the `MOCKTERM_OPTIONS` env var, or defaults.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use mockterm_commands::full_commands;
use mockterm_skin::TerminalOptions;
use mockterm_widget::{Terminal, filter_input, markup};

const TRANSCRIPT_PATH: &str = "transcript.html";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve options from CLI arg, MOCKTERM_OPTIONS env var, or defaults.
    let options = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MOCKTERM_OPTIONS").ok())
    {
        Some(path) => TerminalOptions::load_or_default(Path::new(&path)),
        None => TerminalOptions::default(),
    };
    log::info!("starting terminal for {}", options.identity());
    let identity = options.identity();

    let mut term = Terminal::new(options, full_commands());
    term.boot();
    term.finish_effects();
    println!("{}", markup::to_text(term.surface().welcome_html()));

    let stdin = std::io::stdin();
    let mut line = String::new();
    while term.is_live() {
        print!("{identity}:~$ ");
        std::io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let raw = filter_input(&line);

        let Some(target) = term.current_block() else {
            break;
        };
        term.submit(&raw);
        let output = term.surface().block_output(target);
        if !output.is_empty() {
            println!("{}", markup::to_text(&output));
        }

        term.finish_effects();
        if !term.is_live() {
            println!("{}", markup::to_text(term.surface().logout_html()));
            if let Some(url) = term.navigated() {
                println!("redirecting to {url}");
            }
        }
    }

    std::fs::write(TRANSCRIPT_PATH, term.html())?;
    log::info!("transcript written to {TRANSCRIPT_PATH}");
    Ok(())
}
