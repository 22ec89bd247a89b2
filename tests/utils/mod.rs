pub mod assertions;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::BoardAssertion;
#[allow(unused_imports)]
pub use mocks::RecordingView;
#[allow(unused_imports)]
pub use setup::{FakeGameServer, FakeGameServerBuilder};
