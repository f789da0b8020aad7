use crate::application_port::SessionError;
use crate::domain_model::*;
use crate::domain_port::StoreError;

/// Coarse outcome classes a caller can act on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutcomeKind {
    Unauthorized,
    BadRequest,
    Conflict,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum LikeError {
    #[error("token is required")]
    MissingToken,
    #[error("token is invalid")]
    InvalidToken,
    #[error("target user not found")]
    UnknownTarget,
    #[error("target user has an incompatible gender")]
    IncompatibleGender,
    #[error("already liked")]
    AlreadyLiked,
    #[error("invalid pagination")]
    InvalidPagination,
    #[error("concurrent like for the same pair: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl LikeError {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            LikeError::MissingToken | LikeError::InvalidToken => OutcomeKind::Unauthorized,
            LikeError::UnknownTarget
            | LikeError::IncompatibleGender
            | LikeError::AlreadyLiked
            | LikeError::InvalidPagination => OutcomeKind::BadRequest,
            LikeError::Conflict(_) => OutcomeKind::Conflict,
            LikeError::Internal(_) => OutcomeKind::Internal,
        }
    }
}

impl From<SessionError> for LikeError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::MissingToken => LikeError::MissingToken,
            SessionError::InvalidToken => LikeError::InvalidToken,
            SessionError::Store(e) => LikeError::Internal(e),
        }
    }
}

impl From<StoreError> for LikeError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Conflict(e) => LikeError::Conflict(e),
            StoreError::Backend(e) => LikeError::Internal(e),
        }
    }
}

#[async_trait::async_trait]
pub trait LikeService: Send + Sync {
    /// PostLike: resolve the caller, check eligibility, record the like.
    async fn send_like(&self, token: &str, target: UserId) -> Result<(), LikeError>;

    /// GetLikes: pending inbound likes of the caller, most recent first.
    async fn get_likes(
        &self,
        token: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LikeView>, LikeError>;
}
