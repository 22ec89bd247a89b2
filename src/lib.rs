// Library crate for the OFC table client
// Exposes the public API for the binary and for integration tests

pub mod api;
pub mod cards;
pub mod commands;
pub mod config;
pub mod controller;
pub mod render;
pub mod shared;
pub mod table;

// Re-export commonly used types for easier access in tests
pub use api::{ApiError, GameApi, HttpGameApi};
pub use cards::{Card, CardError, Rank, Suit};
pub use config::{ClientConfig, RenderMode};
pub use controller::{AdvanceOutcome, DragPayload, SaveOutcome, TableController};
pub use render::{SvgTableView, TableView, TextTableView};
pub use shared::ClientError;
pub use table::{DropOutcome, Phase, Row, Table, TableSession};
