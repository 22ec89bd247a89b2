use async_trait::async_trait;

use super::{
    errors::ApiError,
    types::{NextResponse, SaveResponse, StartResponse, StatusResponse},
};

/// Trait for the remote game server the table talks to
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn start(&self) -> Result<StartResponse, ApiError>;
    async fn next(&self) -> Result<NextResponse, ApiError>;
    async fn save_to_github(&self) -> Result<SaveResponse, ApiError>;
    async fn save_local(&self) -> Result<SaveResponse, ApiError>;
    async fn ai_move(&self) -> Result<StatusResponse, ApiError>;
}
