use std::str::FromStr;
use thiserror::Error;

use crate::cards::{Card, CardError};
use crate::table::Row;

pub const HELP: &str = "\
Commands:
  start               deal a new game
  place <card> <row>  move a card from the hand to top, middle or bottom
                      (card as rank + suit, e.g. AS, 10h, Q♦)
  next                request the next hand (all cards must be placed)
  save                save progress to GitHub
  save-local          save progress on the server
  ai                  let the server play the AI move
  show                print the board
  help                show this message
  quit                exit";

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Next,
    Place { card: Card, row: Row },
    Save,
    SaveLocal,
    AiMove,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("Usage: place <card> <top|middle|bottom>")]
    PlaceUsage,

    #[error("Unknown row '{0}'")]
    UnknownRow(String),

    #[error(transparent)]
    Card(#[from] CardError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "next" => Command::Next,
            "save" => Command::Save,
            "save-local" => Command::SaveLocal,
            "ai" => Command::AiMove,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "place" | "drop" => {
                let (Some(card), Some(row), None) = (words.next(), words.next(), words.next())
                else {
                    return Err(CommandError::PlaceUsage);
                };
                // Typed codes may be lowercase ("as", "td"); wire codes stay strict
                let card = Card::from_string(&card.to_uppercase())?;
                let row =
                    Row::from_str(row).map_err(|_| CommandError::UnknownRow(row.to_string()))?;
                return Ok(Command::Place { card, row });
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}
