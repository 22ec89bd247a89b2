// Public API
pub use service::TableController;
pub use types::{AdvanceOutcome, DragPayload, SaveOutcome, TEXT_PLAIN};

// Internal modules
mod service;
mod types;
