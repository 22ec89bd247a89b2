use tracing::debug;

use super::models::{Row, Table};
use crate::cards::Card;

/// Where the session stands in the round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    Idle,
    HandDealt,
    HandEmpty,
    GameOver,
}

/// Result of dropping a card onto a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed,
    /// The row already holds this card, nothing changed
    AlreadyInRow,
    /// The card is not in the hand (e.g. already sitting in another row)
    NotInHand,
}

/// Client-side view model: the cards still in hand and the table built so far.
///
/// All mutation goes through the methods below so that a card is either in
/// the hand or in exactly one row, never both.
#[derive(Debug, Clone, Default)]
pub struct TableSession {
    hand: Vec<Card>,
    table: Table,
    round: u32,
    game_over: bool,
}

impl TableSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Rounds dealt so far in the current game, zero before the first start
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.round == 0 {
            Phase::Idle
        } else if self.hand.is_empty() {
            Phase::HandEmpty
        } else {
            Phase::HandDealt
        }
    }

    /// The next round may only be requested once every dealt card is placed
    pub fn can_advance(&self) -> bool {
        self.hand.is_empty()
    }

    /// Begins a new game with the opening hand and an empty table
    pub fn start(&mut self, hand: Vec<Card>) {
        debug!(cards = hand.len(), "Starting new game session");
        self.hand = hand;
        self.table.clear();
        self.round = 1;
        self.game_over = false;
    }

    /// Replaces the hand with the cards dealt for the next round
    pub fn deal(&mut self, hand: Vec<Card>) {
        self.round += 1;
        debug!(cards = hand.len(), round = self.round, "Dealing next hand");
        self.hand = hand;
    }

    pub fn finish(&mut self) {
        debug!(round = self.round, "Game finished");
        self.game_over = true;
    }

    pub fn place(&mut self, card: Card, row: Row) -> DropOutcome {
        if self.table.row(row).contains(&card) {
            return DropOutcome::AlreadyInRow;
        }
        if !self.hand.contains(&card) {
            return DropOutcome::NotInHand;
        }

        self.table.push(row, card);
        self.hand.retain(|c| *c != card);
        debug!(card = %card, row = %row, remaining = self.hand.len(), "Card placed");
        DropOutcome::Placed
    }
}
