//! Input line tokenizer.
//!
//! Deliberately simple: whitespace-separated tokens, no quoting, no
//! escaping, no pipes or redirection. The first token (lower-cased) names
//! the command; the rest are its arguments in order.

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Command name, lower-cased for case-insensitive lookup.
    pub command: String,
    /// Arguments in input order.
    pub args: Vec<String>,
}

/// Split a raw input line into a command name and arguments.
///
/// Returns `None` for empty or all-whitespace input; the dispatcher treats
/// that as "no command entered" and performs no lookup, no output, and no
/// prompt transition.
pub fn split_line(raw: &str) -> Option<Line> {
    let mut tokens = raw.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some(Line {
        command,
        args: tokens.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_none() {
        assert_eq!(split_line(""), None);
    }

    #[test]
    fn whitespace_only_is_none() {
        assert_eq!(split_line("   \t  \n"), None);
    }

    #[test]
    fn single_token() {
        let line = split_line("help").unwrap();
        assert_eq!(line.command, "help");
        assert!(line.args.is_empty());
    }

    #[test]
    fn command_is_lowercased() {
        assert_eq!(split_line("HeLp").unwrap().command, "help");
        assert_eq!(split_line("HELP").unwrap().command, "help");
    }

    #[test]
    fn args_preserve_case_and_order() {
        let line = split_line("man Time").unwrap();
        assert_eq!(line.command, "man");
        assert_eq!(line.args, vec!["Time"]);
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        let line = split_line("  TIME   ").unwrap();
        assert_eq!(line.command, "time");
        assert!(line.args.is_empty());

        let line = split_line("sudo  make   me a   sandwich").unwrap();
        assert_eq!(line.command, "sudo");
        assert_eq!(line.args, vec!["make", "me", "a", "sandwich"]);
    }
}
