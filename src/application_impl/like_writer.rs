use crate::application_port::LikeError;
use crate::domain_model::*;
use crate::domain_port::{LikeRepo, StoreError};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Persists likes. Callers run [`EligibilityChecker`](super::EligibilityChecker) first.
pub struct LikeWriter {
    like_repo: Arc<dyn LikeRepo>,
}

impl LikeWriter {
    pub fn new(like_repo: Arc<dyn LikeRepo>) -> Self {
        Self { like_repo }
    }

    pub async fn create_like(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<(), LikeError> {
        let like = Like::new(sender_id, receiver_id, now);
        match self.like_repo.insert_like(&like).await {
            Ok(()) => {
                tracing::info!(%sender_id, %receiver_id, "like recorded");
                Ok(())
            }
            // lost the race against a concurrent request for the same pair
            Err(StoreError::Conflict(e)) => {
                tracing::info!(%sender_id, %receiver_id, "like insert conflict: {e}");
                Err(LikeError::Conflict(e))
            }
            Err(e) => {
                tracing::warn!(%sender_id, %receiver_id, "insert like: {e}");
                Err(LikeError::Internal(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::test_support::*;
    use crate::infra_memory::MemoryLikeRepo;

    #[tokio::test]
    async fn stamps_both_timestamps_with_now() {
        let likes = Arc::new(MemoryLikeRepo::new());
        let writer = LikeWriter::new(likes.clone());
        writer.create_like(UserId(1), UserId(2), at(42)).await.unwrap();

        let like = likes.get_like(UserId(1), UserId(2)).await.unwrap().unwrap();
        assert_eq!(like.created_at, at(42));
        assert_eq!(like.updated_at, at(42));
    }

    #[tokio::test]
    async fn second_insert_for_same_pair_is_a_conflict() {
        let writer = LikeWriter::new(Arc::new(MemoryLikeRepo::new()));
        writer.create_like(UserId(1), UserId(2), at(0)).await.unwrap();
        let err = writer
            .create_like(UserId(1), UserId(2), at(1))
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::Conflict(_)));
    }

    #[tokio::test]
    async fn reverse_direction_is_independent() {
        let writer = LikeWriter::new(Arc::new(MemoryLikeRepo::new()));
        writer.create_like(UserId(1), UserId(2), at(0)).await.unwrap();
        writer.create_like(UserId(2), UserId(1), at(0)).await.unwrap();
    }

    #[tokio::test]
    async fn backend_failure_is_internal() {
        let writer = LikeWriter::new(Arc::new(FailingStore));
        let err = writer
            .create_like(UserId(1), UserId(2), at(0))
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::Internal(_)));
    }
}
