use crate::domain_model::*;
use crate::domain_port::StoreError;
use std::collections::HashSet;

#[async_trait::async_trait]
pub trait LikeRepo: Send + Sync {
    async fn get_like(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> Result<Option<Like>, StoreError>;

    async fn like_exists(&self, sender_id: UserId, receiver_id: UserId) -> Result<bool, StoreError> {
        Ok(self.get_like(sender_id, receiver_id).await?.is_some())
    }

    /// Must fail with [`StoreError::Conflict`] when a like for the same
    /// ordered pair already exists.
    async fn insert_like(&self, like: &Like) -> Result<(), StoreError>;

    async fn page_of_received_likes(
        &self,
        receiver_id: UserId,
        exclude_sender_ids: &HashSet<UserId>,
        page: Pagination,
    ) -> Result<Vec<ReceivedLike>, StoreError>;
}
