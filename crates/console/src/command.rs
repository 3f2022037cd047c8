use chess_core::Square;

use crate::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    /// Show the legal destinations of the piece on a square.
    Moves(Square),
    Undo,
    New,
    History,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  e2e4 | e2 e4   move the piece on e2 to e4
  moves <sq>     show legal destinations for the piece on <sq>
  undo           take back the last move (against the computer: your last move and its reply)
  new            start a new game
  history        list the moves played so far
  help           show this text
  quit           leave";

/// Parse one line of input. Case and surrounding whitespace are ignored.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim().to_ascii_lowercase();
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["quit" | "exit" | "q"] => Ok(Command::Quit),
        ["help" | "?"] => Ok(Command::Help),
        ["undo"] => Ok(Command::Undo),
        ["new"] => Ok(Command::New),
        ["history"] => Ok(Command::History),
        ["moves"] => Err(CommandError::MissingSquare("moves")),
        ["moves", sq] => Ok(Command::Moves(sq.parse()?)),
        [from, to] => Ok(Command::Move(from.parse()?, to.parse()?)),
        [word] if word.len() == 4 => match (word.get(..2), word.get(2..)) {
            (Some(from), Some(to)) => Ok(Command::Move(from.parse()?, to.parse()?)),
            _ => Err(CommandError::Unknown(line.clone())),
        },
        _ => Err(CommandError::Unknown(line.clone())),
    }
}
