// Public API
pub use models::{Row, Table};
pub use session::{DropOutcome, Phase, TableSession};

// Internal modules
mod models;
mod session;
