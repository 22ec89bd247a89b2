use strum::IntoEnumIterator;

use super::view::{AlertLog, TableView, HAND_ELEMENT_ID};
use crate::cards::Card;
use crate::table::{Row, Table};

/// Plain text node for one card
pub fn card_text(card: &Card) -> String {
    format!("[{card}]")
}

fn line(cards: &[Card]) -> String {
    cards.iter().map(card_text).collect::<Vec<_>>().join(" ")
}

/// Terminal rendering: one line per container, cards as text nodes
#[derive(Debug, Clone, Default)]
pub struct TextTableView {
    hand: String,
    rows: [String; 3],
    alerts: AlertLog,
}

impl TextTableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand_line(&self) -> &str {
        &self.hand
    }

    pub fn row_line(&self, row: Row) -> &str {
        &self.rows[row as usize]
    }
}

impl TableView for TextTableView {
    fn render_hand(&mut self, hand: &[Card]) {
        self.hand = line(hand);
    }

    fn render_table(&mut self, table: &Table) {
        for row in Row::iter() {
            self.rows[row as usize] = line(table.row(row));
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message);
    }

    fn drain_alerts(&mut self) -> Vec<String> {
        self.alerts.drain()
    }

    fn snapshot(&self) -> String {
        let mut out = format!("{:>7}: {}\n", HAND_ELEMENT_ID, self.hand);
        for row in Row::iter() {
            out.push_str(&format!("{:>7}: {}\n", row.as_ref(), self.row_line(row)));
        }
        out
    }
}
