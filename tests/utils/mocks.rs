use ofc_table::{render::AlertLog, Card, Row, Table, TableView};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// View that keeps what it was asked to draw and how often
#[derive(Default)]
pub struct RecordingView {
    pub hand: Vec<Card>,
    pub rows: Vec<(Row, Vec<Card>)>,
    pub hand_renders: usize,
    pub table_renders: usize,
    alerts: AlertLog,
    pub seen_alerts: Vec<String>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, row: Row) -> Vec<Card> {
        self.rows
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, cards)| cards.clone())
            .unwrap_or_default()
    }
}

impl TableView for RecordingView {
    fn render_hand(&mut self, hand: &[Card]) {
        self.hand = hand.to_vec();
        self.hand_renders += 1;
    }

    fn render_table(&mut self, table: &Table) {
        self.rows = [Row::Top, Row::Middle, Row::Bottom]
            .into_iter()
            .map(|row| (row, table.row(row).to_vec()))
            .collect();
        self.table_renders += 1;
    }

    fn alert(&mut self, message: &str) {
        self.seen_alerts.push(message.to_string());
        self.alerts.push(message);
    }

    fn drain_alerts(&mut self) -> Vec<String> {
        self.alerts.drain()
    }

    fn snapshot(&self) -> String {
        format!("{:?} {:?}", self.hand, self.rows)
    }
}
