use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::cards::Card;

/// One of the three placement rows in front of the player
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Row {
    /// Identifier of the container element that displays this row
    pub fn element_id(&self) -> String {
        format!("player-{}", self.as_ref())
    }
}

/// The player's in-progress arrangement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    top: Vec<Card>,
    middle: Vec<Card>,
    bottom: Vec<Card>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, row: Row) -> &[Card] {
        match row {
            Row::Top => &self.top,
            Row::Middle => &self.middle,
            Row::Bottom => &self.bottom,
        }
    }

    /// Returns the row currently holding `card`, if any
    pub fn find(&self, card: &Card) -> Option<Row> {
        [Row::Top, Row::Middle, Row::Bottom]
            .into_iter()
            .find(|row| self.row(*row).contains(card))
    }

    pub fn len(&self) -> usize {
        self.top.len() + self.middle.len() + self.bottom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn push(&mut self, row: Row, card: Card) {
        self.row_mut(row).push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.top.clear();
        self.middle.clear();
        self.bottom.clear();
    }

    fn row_mut(&mut self, row: Row) -> &mut Vec<Card> {
        match row {
            Row::Top => &mut self.top,
            Row::Middle => &mut self.middle,
            Row::Bottom => &mut self.bottom,
        }
    }
}
