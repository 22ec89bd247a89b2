// Public API
pub use client::GameApi;
pub use errors::ApiError;
pub use http::HttpGameApi;
pub use types::{
    Endpoint, NextResponse, SaveResponse, StartResponse, StatusResponse, GAME_OVER_STATUS,
    LOCAL_SAVE_STATUS, REMOTE_SAVE_STATUS,
};

// Internal modules
mod client;
mod errors;
mod http;
mod types;
