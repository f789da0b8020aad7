use crate::domain_model::UserId;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("token is required")]
    MissingToken,
    #[error("token is invalid")]
    InvalidToken,
    #[error("store error: {0}")]
    Store(String),
}

#[async_trait::async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<UserId, SessionError>;
}
