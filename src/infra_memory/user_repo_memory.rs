use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;

#[derive(Default)]
pub struct MemoryUserRepo {
    users: DashMap<UserId, Profile>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, profile: Profile) {
        self.users.insert(profile.id, profile);
    }
}

#[async_trait::async_trait]
impl UserRepo for MemoryUserRepo {
    async fn get_by_id(&self, user_id: UserId) -> Result<Option<Profile>, StoreError> {
        Ok(self.users.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn get_by_ids(&self, user_ids: &[UserId]) -> Result<Vec<Profile>, StoreError> {
        Ok(user_ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|entry| entry.value().clone()))
            .collect())
    }
}
