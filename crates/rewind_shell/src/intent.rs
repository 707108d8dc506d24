//! Parsing of user input lines into intents.

use derive_more::{Display, Error};
use rewind_tictactoe::Position;
use std::str::FromStr;
use tracing::instrument;

/// One user action read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the next mark.
    Move(Position),
    /// Move the cursor to a recorded snapshot.
    Jump(usize),
    /// Flip the history list between oldest-first and newest-first.
    Toggle,
    /// Print the render view as JSON.
    View,
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input line that is not a valid intent.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum IntentError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// `move` argument is neither 0-8 nor a position label.
    #[display("Unknown cell '{}' (use 0-8 or a label like 'center')", cell)]
    UnknownCell {
        /// The offending argument.
        cell: String,
    },
    /// `jump` argument is not a non-negative number.
    #[display("Invalid move number '{}'", arg)]
    BadMoveNumber {
        /// The offending argument.
        arg: String,
    },
    /// A command word that takes an argument was given none.
    #[display("'{}' needs an argument", command)]
    MissingArgument {
        /// The command word.
        command: String,
    },
    /// Nothing matched.
    #[display("Unrecognized command '{}'", input)]
    Unrecognized {
        /// The whole input line.
        input: String,
    },
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  <cell> | move <cell> | m <cell>   place a mark (cell 0-8 or label, e.g. 'center')
  jump <n> | j <n>                  go to move #n
  toggle | t                        reverse the history list
  view | v                          print the game as JSON
  help | h | ?                      show this help
  quit | q | exit                   leave";

impl FromStr for Intent {
    type Err = IntentError;

    #[instrument(level = "debug")]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(IntentError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "move" | "m" => {
                require_argument(word, rest)?;
                Position::from_label_or_number(rest)
                    .map(Intent::Move)
                    .ok_or_else(|| IntentError::UnknownCell {
                        cell: rest.to_string(),
                    })
            }
            "jump" | "j" => {
                require_argument(word, rest)?;
                rest.parse()
                    .map(Intent::Jump)
                    .map_err(|_| IntentError::BadMoveNumber {
                        arg: rest.to_string(),
                    })
            }
            "toggle" | "t" if rest.is_empty() => Ok(Intent::Toggle),
            "view" | "v" if rest.is_empty() => Ok(Intent::View),
            "help" | "h" | "?" if rest.is_empty() => Ok(Intent::Help),
            "quit" | "q" | "exit" if rest.is_empty() => Ok(Intent::Quit),
            _ => Position::from_label_or_number(line)
                .map(Intent::Move)
                .ok_or_else(|| IntentError::Unrecognized {
                    input: line.to_string(),
                }),
        }
    }
}

fn require_argument(word: &str, rest: &str) -> Result<(), IntentError> {
    if rest.is_empty() {
        Err(IntentError::MissingArgument {
            command: word.to_string(),
        })
    } else {
        Ok(())
    }
}
