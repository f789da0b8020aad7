use crate::application_impl::RelationshipOracle;
use crate::application_port::LikeError;
use crate::domain_model::*;
use crate::domain_port::{ImageRepo, LikeRepo, UserRepo};
use std::collections::HashMap;
use std::sync::Arc;

pub struct LikeReader {
    oracle: Arc<RelationshipOracle>,
    like_repo: Arc<dyn LikeRepo>,
    user_repo: Arc<dyn UserRepo>,
    image_repo: Arc<dyn ImageRepo>,
}

impl LikeReader {
    pub fn new(
        oracle: Arc<RelationshipOracle>,
        like_repo: Arc<dyn LikeRepo>,
        user_repo: Arc<dyn UserRepo>,
        image_repo: Arc<dyn ImageRepo>,
    ) -> Self {
        Self {
            oracle,
            like_repo,
            user_repo,
            image_repo,
        }
    }

    /// Pending likes received by `user_id`: matched senders are excluded,
    /// each row carries the sender's profile and primary image.
    pub async fn list_inbound_likes(
        &self,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LikeView>, LikeError> {
        let page = Pagination::try_new(limit, offset).ok_or_else(|| {
            tracing::debug!(%user_id, limit, offset, "invalid pagination");
            LikeError::InvalidPagination
        })?;

        let matched = self.oracle.matched_partners(user_id).await?;

        let received = self
            .like_repo
            .page_of_received_likes(user_id, &matched, page)
            .await
            .map_err(|e| {
                tracing::warn!(%user_id, "query received likes: {e}");
                LikeError::Internal(e.to_string())
            })?;
        if received.is_empty() {
            return Ok(Vec::new());
        }

        let sender_ids: Vec<UserId> = received.iter().map(|r| r.sender_id).collect();

        let mut profiles: HashMap<UserId, Profile> = self
            .user_repo
            .get_by_ids(&sender_ids)
            .await
            .map_err(|e| {
                tracing::warn!(%user_id, "query sender profiles: {e}");
                LikeError::Internal(e.to_string())
            })?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut images = self
            .image_repo
            .primary_image_uris(&sender_ids)
            .await
            .map_err(|e| {
                tracing::warn!(%user_id, "query sender images: {e}");
                LikeError::Internal(e.to_string())
            })?;

        let mut views = Vec::with_capacity(received.len());
        for row in received {
            let Some(profile) = profiles.remove(&row.sender_id) else {
                tracing::warn!(%user_id, sender_id = %row.sender_id, "sender profile missing, skipped");
                continue;
            };
            views.push(LikeView {
                sender_id: row.sender_id,
                liked_at: row.created_at,
                profile,
                image_uri: images.remove(&row.sender_id).unwrap_or_default(),
            });
        }

        sort_by_liked_at_desc(&mut views);
        Ok(views)
    }
}
