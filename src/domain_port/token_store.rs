use crate::domain_model::*;
use crate::domain_port::StoreError;

#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Resolve an opaque session token to the user it was issued for.
    /// `Ok(None)` means the token is unknown.
    async fn lookup_by_token(&self, token: &str) -> Result<Option<UserId>, StoreError>;
}
