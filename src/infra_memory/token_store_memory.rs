use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;

#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: DashMap<String, UserId>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, token: impl Into<String>, user_id: UserId) {
        self.tokens.insert(token.into(), user_id);
    }
}

#[async_trait::async_trait]
impl TokenStore for MemoryTokenStore {
    async fn lookup_by_token(&self, token: &str) -> Result<Option<UserId>, StoreError> {
        Ok(self.tokens.get(token).map(|entry| *entry.value()))
    }
}
