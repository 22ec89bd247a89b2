use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

use crate::cards::Card;

pub const GAME_OVER_STATUS: &str = "Game over";
pub const REMOTE_SAVE_STATUS: &str = "Progress successfully saved to GitHub";
pub const LOCAL_SAVE_STATUS: &str = "Progress saved locally";

/// Routes of the game server, all called with an empty `POST`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum Endpoint {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "next")]
    Next,
    #[strum(serialize = "save_to_github")]
    SaveToGithub,
    #[strum(serialize = "save")]
    SaveLocal,
    #[strum(serialize = "ai_move")]
    AiMove,
}

/// Response for `POST /start`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub hand: Vec<Card>,
}

/// Raw body of `POST /next`, either a fresh hand or the final scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NextResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hand: Option<Vec<Card>>,
    #[serde(default)]
    pub scores: Option<serde_json::Value>,
}

impl NextResponse {
    pub fn is_game_over(&self) -> bool {
        self.status.as_deref() == Some(GAME_OVER_STATUS)
    }
}

/// Body of both save routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SaveResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SaveResponse {
    pub fn has_status(&self, expected: &str) -> bool {
        self.status.as_deref() == Some(expected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

/// Error body of a rejected request; FastAPI style `detail` or a plain `error`
#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn message(self) -> Option<String> {
        self.detail.or(self.error)
    }
}
