//! Built-in commands: help, man, clear, exit.

use mockterm_shell::{CommandDef, CommandSet};
use mockterm_types::html;

/// Register the built-in commands into a set, in their canonical order.
pub fn register_builtins(set: &mut CommandSet) {
    set.insert(
        "help",
        CommandDef::new()
            .description("displays all available commands.")
            .usage("help")
            .aliases(["?"])
            .run(|cx| {
                let commands = cx.commands;
                let mut out = html::underline("Available Commands:", '-');
                for name in commands.names(false) {
                    let desc = commands
                        .lookup(name)
                        .and_then(|def| def.description.clone())
                        .unwrap_or_default();
                    out.push_str(&format!("<br>{name}: {desc}"));
                }
                cx.append(&out);
                Ok(())
            }),
    );
    set.insert(
        "man",
        CommandDef::new()
            .description("shows detailed information about commands.")
            .usage("man &lt;command - run <i>help</i> to see all available&gt;")
            .run(|cx| {
                let commands = cx.commands;
                // Hidden commands are treated as unknown here, even though
                // they dispatch normally.
                let manual = cx.args.first().and_then(|arg| {
                    let name = arg.to_lowercase();
                    commands
                        .lookup(&name)
                        .filter(|def| !def.is_hidden())
                        .map(|def| {
                            let mut page = html::underline(&format!("Manual: {name}"), '-');
                            if let Some(text) = &def.description {
                                page.push_str(&format!("<br> DESCRIPTION: {text}"));
                            }
                            if let Some(text) = &def.usage {
                                page.push_str(&format!("<br> USAGE: {text}"));
                            }
                            if let Some(text) = &def.info {
                                page.push_str(&format!("<br> INFO: {text}"));
                            }
                            page
                        })
                });
                match manual {
                    Some(page) => cx.append(&page),
                    None => {
                        let label = cx.error_label();
                        cx.append(&format!(
                            "{label}: this command should be executed as \
                             <i>man &lt;command&gt;</i>: to see available commands run <i>help</i>"
                        ));
                    },
                }
                Ok(())
            }),
    );
    set.insert(
        "clear",
        CommandDef::new()
            .description("removes all previously run commands from the terminal.")
            .usage("clear")
            .run(|cx| {
                cx.surface.clear();
                Ok(())
            }),
    );
    set.insert(
        "exit",
        CommandDef::new()
            .description("logs out; to run commands again the terminal must be reloaded.")
            .usage("exit")
            .typed(true)
            .run(|cx| {
                cx.exit(None);
                Ok(())
            }),
    );
}

/// The built-in command set.
pub fn default_commands() -> CommandSet {
    let mut set = CommandSet::new();
    register_builtins(&mut set);
    set
}
