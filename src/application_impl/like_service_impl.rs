use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use std::sync::Arc;

pub struct RealLikeService {
    session_resolver: Arc<dyn SessionResolver>,
    eligibility: EligibilityChecker,
    writer: LikeWriter,
    reader: LikeReader,
    clock: Arc<dyn Clock>,
}

impl RealLikeService {
    pub fn new(
        token_store: Arc<dyn TokenStore>,
        match_repo: Arc<dyn MatchRepo>,
        like_repo: Arc<dyn LikeRepo>,
        user_repo: Arc<dyn UserRepo>,
        image_repo: Arc<dyn ImageRepo>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session_resolver: Arc<dyn SessionResolver> =
            Arc::new(RealSessionResolver::new(token_store));
        let oracle = Arc::new(RelationshipOracle::new(match_repo, like_repo.clone()));

        Self {
            session_resolver,
            eligibility: EligibilityChecker::new(user_repo.clone(), oracle.clone()),
            writer: LikeWriter::new(like_repo.clone()),
            reader: LikeReader::new(oracle, like_repo, user_repo, image_repo),
            clock,
        }
    }
}

#[async_trait::async_trait]
impl LikeService for RealLikeService {
    async fn send_like(&self, token: &str, target: UserId) -> Result<(), LikeError> {
        let sender = self.session_resolver.resolve(token).await?;

        self.eligibility.check_eligible(sender, target).await?;

        self.writer
            .create_like(sender, target, self.clock.now())
            .await
    }

    async fn get_likes(
        &self,
        token: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LikeView>, LikeError> {
        let user_id = self.session_resolver.resolve(token).await?;

        let views = self
            .reader
            .list_inbound_likes(user_id, limit, offset)
            .await?;
        tracing::debug!(%user_id, count = views.len(), "inbound likes listed");

        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::test_support::*;
    use crate::infra_memory::*;

    fn service(stores: &MemoryStores) -> RealLikeService {
        RealLikeService::new(
            stores.tokens.clone(),
            stores.matches.clone(),
            stores.likes.clone(),
            stores.users.clone(),
            stores.images.clone(),
            Arc::new(FixedClock(at(1_000))),
        )
    }

    #[tokio::test]
    async fn happy_path_send_records_the_like() {
        let stores = fixture();
        service(&stores).send_like(TOKEN_1, FEMALE_2).await.unwrap();

        let oracle = RelationshipOracle::new(stores.matches.clone(), stores.likes.clone());
        let like = oracle.existing_like(MALE_1, FEMALE_2).await.unwrap().unwrap();
        assert_eq!(like.created_at, at(1_000));
    }

    #[tokio::test]
    async fn missing_and_invalid_tokens_are_unauthorized() {
        let stores = fixture();
        let service = service(&stores);

        let err = service.send_like("", FEMALE_2).await.unwrap_err();
        assert!(matches!(err, LikeError::MissingToken));
        assert_eq!(err.kind(), OutcomeKind::Unauthorized);

        let err = service.send_like("bogus", FEMALE_2).await.unwrap_err();
        assert!(matches!(err, LikeError::InvalidToken));

        let err = service.get_likes("", 10, 0).await.unwrap_err();
        assert!(matches!(err, LikeError::MissingToken));
        let err = service.get_likes("bogus", 10, 0).await.unwrap_err();
        assert!(matches!(err, LikeError::InvalidToken));
    }

    #[tokio::test]
    async fn unknown_target_is_bad_request() {
        let stores = fixture();
        let err = service(&stores)
            .send_like(TOKEN_1, UserId(9999))
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::UnknownTarget));
        assert_eq!(err.kind(), OutcomeKind::BadRequest);
    }

    #[tokio::test]
    async fn sending_twice_is_a_duplicate_not_internal() {
        let stores = fixture();
        let service = service(&stores);
        service.send_like(TOKEN_1, FEMALE_2).await.unwrap();
        let err = service.send_like(TOKEN_1, FEMALE_2).await.unwrap_err();
        assert!(matches!(err, LikeError::AlreadyLiked));
        assert_eq!(stores.likes.len(), 1);
    }

    #[tokio::test]
    async fn incompatible_gender_writes_nothing() {
        let stores = fixture();
        let err = service(&stores)
            .send_like(TOKEN_1, MALE_4)
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::IncompatibleGender));
        assert!(stores.likes.is_empty());
    }

    #[tokio::test]
    async fn get_likes_excludes_matched_senders() {
        let stores = fixture();
        stores
            .likes
            .try_insert(&Like::new(FEMALE_2, MALE_1, at(10)))
            .unwrap();
        stores
            .likes
            .try_insert(&Like::new(FEMALE_3, MALE_1, at(20)))
            .unwrap();
        stores.matches.add_match(MALE_1, FEMALE_2);

        let views = service(&stores).get_likes(TOKEN_1, 10, 0).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].sender_id, FEMALE_3);
    }

    #[tokio::test]
    async fn invalid_pagination_needs_a_valid_session_first() {
        let stores = fixture();
        let service = service(&stores);
        let err = service.get_likes("bogus", 0, 0).await.unwrap_err();
        assert!(matches!(err, LikeError::InvalidToken));
        let err = service.get_likes(TOKEN_1, 0, -1).await.unwrap_err();
        assert!(matches!(err, LikeError::InvalidPagination));
    }

    #[tokio::test]
    async fn no_inbound_likes_is_an_empty_page() {
        let stores = fixture();
        let views = service(&stores).get_likes(TOKEN_1, 10, 0).await.unwrap();
        assert!(views.is_empty());
    }
}
