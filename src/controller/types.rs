use crate::cards::Card;

pub const TEXT_PLAIN: &str = "text/plain";

pub(crate) const PLACE_ALL_CARDS_ALERT: &str = "You must place all your cards before continuing!";
pub(crate) const GAME_OVER_ALERT: &str = "Game over! Counting scores...";
pub(crate) const SAVED_TO_GITHUB_ALERT: &str = "Progress successfully saved to GitHub!";
pub(crate) const SAVED_LOCALLY_ALERT: &str = "Progress saved locally!";

pub(crate) fn error_alert(message: &str) -> String {
    format!("Error: {message}")
}

/// Data carried from a drag-start to the drop target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub format: String,
    pub data: String,
}

impl DragPayload {
    pub fn for_card(card: &Card) -> Self {
        Self {
            format: TEXT_PLAIN.to_string(),
            data: card.code(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.format == TEXT_PLAIN
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Refused locally, no request was sent
    Blocked,
    /// A new hand was dealt
    Dealt { cards: usize, round: u32 },
    /// The server ended the game; carries the final scores as sent
    GameOver(serde_json::Value),
    /// The server refused to advance, e.g. an invalid arrangement
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(String),
}
