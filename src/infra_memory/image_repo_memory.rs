use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryImageRepo {
    primary: DashMap<UserId, String>,
}

impl MemoryImageRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_primary(&self, user_id: UserId, uri: impl Into<String>) {
        self.primary.insert(user_id, uri.into());
    }
}

#[async_trait::async_trait]
impl ImageRepo for MemoryImageRepo {
    async fn primary_image_uris(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, StoreError> {
        Ok(user_ids
            .iter()
            .filter_map(|id| {
                self.primary
                    .get(id)
                    .map(|entry| (*id, entry.value().clone()))
            })
            .collect())
    }
}
