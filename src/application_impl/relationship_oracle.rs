use crate::application_port::LikeError;
use crate::domain_model::*;
use crate::domain_port::{LikeRepo, MatchRepo};
use std::collections::HashSet;
use std::sync::Arc;

/// Read-only answers about the existing relationship between two users.
pub struct RelationshipOracle {
    match_repo: Arc<dyn MatchRepo>,
    like_repo: Arc<dyn LikeRepo>,
}

impl RelationshipOracle {
    pub fn new(match_repo: Arc<dyn MatchRepo>, like_repo: Arc<dyn LikeRepo>) -> Self {
        Self {
            match_repo,
            like_repo,
        }
    }

    pub async fn matched_partners(&self, user_id: UserId) -> Result<HashSet<UserId>, LikeError> {
        self.match_repo
            .matched_partner_ids(user_id)
            .await
            .map_err(|e| {
                tracing::warn!(%user_id, "query matched partners: {e}");
                LikeError::Internal(e.to_string())
            })
    }

    pub async fn existing_like(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> Result<Option<Like>, LikeError> {
        self.like_repo
            .get_like(sender_id, receiver_id)
            .await
            .map_err(|e| {
                tracing::warn!(%sender_id, %receiver_id, "query existing like: {e}");
                LikeError::Internal(e.to_string())
            })
    }
}
