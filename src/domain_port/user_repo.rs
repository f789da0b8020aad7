use crate::domain_model::*;
use crate::domain_port::StoreError;

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    async fn get_by_id(&self, user_id: UserId) -> Result<Option<Profile>, StoreError>;

    /// Unknown ids are skipped, so the result may be shorter than `user_ids`.
    async fn get_by_ids(&self, user_ids: &[UserId]) -> Result<Vec<Profile>, StoreError>;
}
