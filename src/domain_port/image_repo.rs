use crate::domain_model::*;
use crate::domain_port::StoreError;
use std::collections::HashMap;

#[async_trait::async_trait]
pub trait ImageRepo: Send + Sync {
    /// Primary image URI per user. Users without an image are absent from the map.
    async fn primary_image_uris(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, StoreError>;
}
