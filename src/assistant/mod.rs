//! Interactive command loop.
//!
//! An `Assistant` owns the address book and turns input lines into replies.
//! `run_session` drives it over any reader and writer, and saves the book
//! when the user closes the session.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};

use crate::clock::{Clock, SystemClock};
use crate::error::{CommandResult, SessionError};
use crate::models::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::repositories::AddressBookRepository;
use std::borrow::Cow;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Goodbye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What the loop should do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep going
    Message(String),

    /// Nothing to print (blank line)
    Nothing,

    /// The user asked to close the session
    Exit,
}

/// Command dispatcher holding the address book.
pub struct Assistant<C: Clock = SystemClock> {
    book: AddressBook,
    clock: C,
    birthday_window_days: u32,
    state: SessionState,
}

impl Assistant<SystemClock> {
    /// Create an assistant using the local date.
    pub fn new(book: AddressBook) -> Self {
        Self::with_clock(book, SystemClock)
    }
}

impl<C: Clock> Assistant<C> {
    pub fn with_clock(book: AddressBook, clock: C) -> Self {
        Self {
            book,
            clock,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            state: SessionState::Running,
        }
    }

    /// Set how many days ahead `birthdays` looks.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Interpret one line of input.
    ///
    /// Command errors never escape: they come back as `Error: ...` messages.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((word, args)) = parse_input(line) else {
            return Reply::Nothing;
        };

        if Command::is_exit(&word) {
            return Reply::Exit;
        }

        match Command::parse(&word) {
            Some(command) => Reply::Message(self.execute(command, &args)),
            None => {
                tracing::debug!(command = %word, "Unknown command");
                Reply::Message(INVALID_COMMAND.to_string())
            }
        }
    }

    /// Run a command and render its outcome as reply text.
    pub fn execute(&mut self, command: Command, args: &[&str]) -> String {
        tracing::debug!(command = command.word(), args = args.len(), "Dispatching command");

        match self.dispatch(command, args) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(command = command.word(), error = %e, "Command failed");
                format!("Error: {}", e)
            }
        }
    }

    fn dispatch(&mut self, command: Command, args: &[&str]) -> CommandResult<String> {
        let today = self.clock.today();
        let book = &mut self.book;

        match command {
            Command::Hello => handlers::hello(args),
            Command::Add => handlers::add_contact(args, book),
            Command::Change => handlers::change_contact(args, book),
            Command::Phone => handlers::get_phone(args, book),
            Command::All => handlers::get_all_contacts(args, book),
            Command::AddBirthday => handlers::add_birthday(args, book, today),
            Command::ShowBirthday => handlers::show_birthday(args, book),
            Command::Birthdays => {
                handlers::birthdays(args, book, today, self.birthday_window_days)
            }
            Command::RemovePhone => handlers::remove_phone(args, book),
            Command::Delete => handlers::delete_contact(args, book),
            Command::Help => handlers::help(args),
        }
    }

    /// Save the book and end the session.
    ///
    /// The state only becomes `Terminated` once the save succeeded.
    pub fn shutdown(&mut self, repo: &dyn AddressBookRepository) -> Result<(), SessionError> {
        repo.save(&self.book)?;
        self.state = SessionState::Terminated;
        Ok(())
    }
}

/// Run the prompt loop until `close`, `exit` or end of input.
///
/// End of input is treated like `exit`: the book is saved either way.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so such a line
/// gets an ordinary reply instead of ending the session.
///
/// # Errors
///
/// Returns `SessionError::Storage` if the book cannot be saved and
/// `SessionError::Io` if reading input or writing output fails. A failed
/// read still saves the book before the error is returned.
pub fn run_session<C, R, W>(
    assistant: &mut Assistant<C>,
    repo: &dyn AddressBookRepository,
    mut input: R,
    output: &mut W,
) -> Result<(), SessionError>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    let mut buf = Vec::new();

    while assistant.state() == SessionState::Running {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let read = match input.read_until(b'\n', &mut buf) {
            Ok(read) => read,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input, saving before stopping");
                assistant.shutdown(repo)?;
                return Err(e.into());
            }
        };

        let reply = if read == 0 {
            tracing::info!("End of input, closing session");
            writeln!(output)?;
            Reply::Exit
        } else {
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                tracing::warn!("Input line is not valid UTF-8");
            }
            assistant.handle_line(&line)
        };

        match reply {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Nothing => {}
            Reply::Exit => {
                assistant.shutdown(repo)?;
                writeln!(output, "{}", FAREWELL)?;
            }
        }
    }

    Ok(())
}
