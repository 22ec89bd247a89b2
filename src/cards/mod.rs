pub mod basic;

pub use basic::{Card, CardColor, CardError, Rank, Suit};
