//! Sample commands hosts merge over the builtins: time, 8ball, google,
//! and two hidden jokes that spoof "command not found".

use mockterm_shell::{CommandDef, CommandSet};
use mockterm_types::html;

const EIGHT_BALL_ANSWERS: [&str; 12] = [
    "Who cares?",
    "I'm not sure... try asking again later!",
    "I'm not telling! Ask me again and I might consider it...",
    "Uhhh... do you really want to know?",
    "No. Definitely not.",
    "Dot. Definitely dot.",
    "There's an easy answer to that - nope!",
    "I doubt it.",
    "Of course!",
    "Yeah...",
    "It is most likely that that is so.",
    "Is fire hot?",
];

/// Pick an index in `0..len` from a time-seeded multiply-mix.
fn pick(len: usize) -> usize {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as u64;
    let mixed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((mixed >> 33) as usize) % len
}

/// Register the sample commands into a set, in their canonical order.
pub fn register_samples(set: &mut CommandSet) {
    set.insert(
        "time",
        CommandDef::new()
            .description("displays the current time.")
            .usage("time")
            .run(|cx| {
                let now = cx.clock.now()?;
                cx.append(&now.format_long());
                Ok(())
            }),
    );
    set.insert(
        "8ball",
        CommandDef::new()
            .description("gives a random response to the input.")
            .usage("8ball &lt;input&gt;")
            .run(|cx| {
                let args = cx.args;
                if args.is_empty() {
                    let label = cx.error_label();
                    cx.append(&format!(
                        "{label}: this command should be executed as <i>8ball &lt;input&gt;</i>"
                    ));
                    return Ok(());
                }
                let question = html::escape(&args.join(" "));
                let answer = EIGHT_BALL_ANSWERS[pick(EIGHT_BALL_ANSWERS.len())];
                cx.append(&format!(
                    "<strong>Q:</strong> {question}<br><strong>A:</strong> {answer}"
                ));
                Ok(())
            }),
    );
    set.insert(
        "google",
        CommandDef::new()
            .description("googles the command arguments.")
            .usage("google &lt;query&gt;")
            .typed(true)
            .run(|cx| {
                let args = cx.args;
                if args.is_empty() {
                    let label = cx.error_label();
                    cx.append(&format!(
                        "{label}: this command should be executed as <i>google &lt;query&gt;</i>"
                    ));
                    // Deferring command bailing out early: ask for the next
                    // prompt ourselves or the terminal would hang here.
                    cx.control.request_prompt();
                    return Ok(());
                }
                let url = format!("https://google.com/search?q={}", args.join("+"));
                cx.exit(Some(url));
                Ok(())
            }),
    );
    set.insert(
        "sudo",
        CommandDef::new().hidden(true).run(|cx| {
            if cx.args.join(" ") == "make me a sandwich" {
                cx.append("Here you go: <i class=\"em em-sandwich\"></i>");
            } else {
                // Pretend the command doesn't exist.
                let label = cx.error_label();
                cx.append(&format!("{label}: sudo: command not found"));
            }
            Ok(())
        }),
    );
    set.insert(
        "make",
        CommandDef::new().hidden(true).run(|cx| {
            if cx.args.join(" ") == "me a sandwich" {
                cx.append("No way. Do it yourself!");
            } else {
                let label = cx.error_label();
                cx.append(&format!("{label}: make: command not found"));
            }
            Ok(())
        }),
    );
}

/// The sample command set.
pub fn sample_commands() -> CommandSet {
    let mut set = CommandSet::new();
    register_samples(&mut set);
    set
}
