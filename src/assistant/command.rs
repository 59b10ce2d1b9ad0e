//! Command words and input tokenization.

use crate::error::{CommandError, CommandResult};

/// Words that end the session.
const EXIT_WORDS: [&str; 2] = ["close", "exit"];

/// Every command that operates on the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Help,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 11] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::RemovePhone,
        Command::Delete,
        Command::Help,
    ];

    /// Look up a command by its (already lowercased) word.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.word() == word)
    }

    /// Whether `word` is one of the session-ending commands.
    pub fn is_exit(word: &str) -> bool {
        EXIT_WORDS.contains(&word)
    }

    pub fn word(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone",
            Command::Delete => "delete",
            Command::Help => "help",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old phone> <new phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Delete => "delete <name>",
            Command::Help => "help",
        }
    }

    /// Destructure `args` into exactly `N` arguments.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Usage` with this command's usage line when the
    /// argument count differs.
    pub fn expect_args<'a, const N: usize>(self, args: &[&'a str]) -> CommandResult<[&'a str; N]> {
        <[&'a str; N]>::try_from(args).map_err(|_| CommandError::Usage {
            usage: self.usage(),
        })
    }
}

/// Split a line into a lowercased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let (command, args) = parse_input("  ADD  Alice   1234567890 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "1234567890"]);
    }

    #[test]
    fn test_parse_input_blank() {
        assert!(parse_input("").is_none());
        assert!(parse_input(" \t ").is_none());
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (command, args) = parse_input("Phone ALICE").unwrap();
        assert_eq!(command, "phone");
        assert_eq!(args, vec!["ALICE"]);
    }

    #[test]
    fn test_command_words_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.word()), Some(command));
            assert!(command.usage().starts_with(command.word()));
        }
        assert_eq!(Command::parse("unknown"), None);
    }

    #[test]
    fn test_exit_words() {
        assert!(Command::is_exit("close"));
        assert!(Command::is_exit("exit"));
        assert!(!Command::is_exit("quit"));
        assert_eq!(Command::parse("exit"), None);
    }

    #[test]
    fn test_expect_args() {
        let [name, phone] = Command::Add.expect_args(&["Alice", "1234567890"]).unwrap();
        assert_eq!((name, phone), ("Alice", "1234567890"));

        let err = Command::Add.expect_args::<2>(&["Alice"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::Usage {
                usage: "add <name> <phone>"
            }
        );

        assert!(Command::All.expect_args::<0>(&[]).is_ok());
        assert!(Command::All.expect_args::<0>(&["extra"]).is_err());
    }
}
