use crate::cards::Card;
use crate::table::Table;

pub const HAND_ELEMENT_ID: &str = "hand";

/// Rendering port of the table.
///
/// The controller calls these after every state change; implementations own
/// the containers for the hand and the three rows, plus a queue of alerts
/// that the front-end shows and acknowledges.
pub trait TableView: Send {
    /// Clears the hand container and draws `hand` into it
    fn render_hand(&mut self, hand: &[Card]);

    /// Clears every row container and redraws the table
    fn render_table(&mut self, table: &Table);

    /// Raises a blocking message for the user
    fn alert(&mut self, message: &str);

    /// Takes the alerts raised since the last call
    fn drain_alerts(&mut self) -> Vec<String>;

    /// Current rendered board
    fn snapshot(&self) -> String;
}

/// Pending alerts shared by the view implementations
#[derive(Debug, Clone, Default)]
pub struct AlertLog {
    pending: Vec<String>,
}

impl AlertLog {
    pub fn push(&mut self, message: &str) {
        self.pending.push(message.to_string());
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}
