use crate::domain_model::*;
use crate::domain_port::StoreError;
use std::collections::HashSet;

#[async_trait::async_trait]
pub trait MatchRepo: Send + Sync {
    /// Everyone currently matched with `user_id`, whichever side created the match.
    async fn matched_partner_ids(&self, user_id: UserId) -> Result<HashSet<UserId>, StoreError>;
}
