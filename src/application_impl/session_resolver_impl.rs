use crate::application_port::{SessionError, SessionResolver};
use crate::domain_model::UserId;
use crate::domain_port::TokenStore;
use std::sync::Arc;

pub struct RealSessionResolver {
    token_store: Arc<dyn TokenStore>,
}

impl RealSessionResolver {
    pub fn new(token_store: Arc<dyn TokenStore>) -> Self {
        Self { token_store }
    }
}

#[async_trait::async_trait]
impl SessionResolver for RealSessionResolver {
    async fn resolve(&self, token: &str) -> Result<UserId, SessionError> {
        if token.is_empty() {
            return Err(SessionError::MissingToken);
        }

        let user_id = self
            .token_store
            .lookup_by_token(token)
            .await
            .map_err(|e| {
                tracing::warn!("lookup session token: {e}");
                SessionError::Store(e.to_string())
            })?;

        user_id.ok_or(SessionError::InvalidToken)
    }
}
