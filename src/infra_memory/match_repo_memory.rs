use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;
use std::collections::HashSet;

#[derive(Default)]
pub struct MemoryMatchRepo {
    partners: DashMap<UserId, HashSet<UserId>>,
}

impl MemoryMatchRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches are unordered, so both directions are recorded.
    pub fn add_match(&self, a: UserId, b: UserId) {
        self.partners.entry(a).or_default().insert(b);
        self.partners.entry(b).or_default().insert(a);
    }
}

#[async_trait::async_trait]
impl MatchRepo for MemoryMatchRepo {
    async fn matched_partner_ids(&self, user_id: UserId) -> Result<HashSet<UserId>, StoreError> {
        Ok(self
            .partners
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
