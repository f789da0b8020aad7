use crate::application_impl::RelationshipOracle;
use crate::application_port::LikeError;
use crate::domain_model::*;
use crate::domain_port::UserRepo;
use std::sync::Arc;

pub struct EligibilityChecker {
    user_repo: Arc<dyn UserRepo>,
    oracle: Arc<RelationshipOracle>,
}

impl EligibilityChecker {
    pub fn new(user_repo: Arc<dyn UserRepo>, oracle: Arc<RelationshipOracle>) -> Self {
        Self { user_repo, oracle }
    }

    /// First failing check wins: unknown target, incompatible gender, duplicate.
    ///
    /// Self-likes are not special-cased; in the two-category model a user's own
    /// gender is never their opposite, so they fail as incompatible.
    pub async fn check_eligible(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> Result<(), LikeError> {
        let sender = self
            .load_profile(sender_id)
            .await?
            .ok_or_else(|| LikeError::Internal(format!("sender profile {sender_id} missing")))?;

        let Some(receiver) = self.load_profile(receiver_id).await? else {
            tracing::debug!(%sender_id, %receiver_id, "like target not found");
            return Err(LikeError::UnknownTarget);
        };

        if !sender.is_compatible_with(&receiver) {
            tracing::debug!(%sender_id, %receiver_id, "like target gender incompatible");
            return Err(LikeError::IncompatibleGender);
        }

        if self
            .oracle
            .existing_like(sender_id, receiver_id)
            .await?
            .is_some()
        {
            tracing::debug!(%sender_id, %receiver_id, "like already recorded");
            return Err(LikeError::AlreadyLiked);
        }

        Ok(())
    }

    async fn load_profile(&self, user_id: UserId) -> Result<Option<Profile>, LikeError> {
        self.user_repo.get_by_id(user_id).await.map_err(|e| {
            tracing::warn!(%user_id, "query profile: {e}");
            LikeError::Internal(e.to_string())
        })
    }
}
