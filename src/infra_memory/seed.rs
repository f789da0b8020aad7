use super::*;
use crate::domain_model::*;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<Profile>,
    #[serde(default)]
    pub tokens: Vec<SeedToken>,
    #[serde(default)]
    pub matches: Vec<(UserId, UserId)>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub images: Vec<SeedImage>,
}

#[derive(Debug, Deserialize)]
pub struct SeedToken {
    pub token: String,
    pub user_id: UserId,
}

#[derive(Debug, Deserialize)]
pub struct SeedImage {
    pub user_id: UserId,
    pub uri: String,
}

/// The five in-memory stores, sharing nothing but a lifetime.
#[derive(Clone, Default)]
pub struct MemoryStores {
    pub tokens: Arc<MemoryTokenStore>,
    pub matches: Arc<MemoryMatchRepo>,
    pub likes: Arc<MemoryLikeRepo>,
    pub users: Arc<MemoryUserRepo>,
    pub images: Arc<MemoryImageRepo>,
}

impl MemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Seed) -> Result<Self> {
        let stores = Self::new();
        for profile in seed.users {
            stores.users.upsert(profile);
        }
        for SeedToken { token, user_id } in seed.tokens {
            stores.tokens.issue(token, user_id);
        }
        for (a, b) in seed.matches {
            stores.matches.add_match(a, b);
        }
        for like in seed.likes {
            stores
                .likes
                .try_insert(&like)
                .with_context(|| format!("seed like {} -> {}", like.sender_id, like.receiver_id))?;
        }
        for SeedImage { user_id, uri } in seed.images {
            stores.images.set_primary(user_id, uri);
        }
        Ok(stores)
    }

    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read seed file {}", path.display()))?;
        let seed: Seed = serde_json::from_str(&raw)
            .with_context(|| format!("parse seed file {}", path.display()))?;
        Self::from_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_port::*;

    const SEED: &str = r#"{
        "users": [
            {"id": 1, "gender": "M", "nickname": "taro",
             "created_at": "2018-08-01T00:00:00Z", "updated_at": "2018-08-01T00:00:00Z"},
            {"id": 2, "gender": "F", "nickname": "hanako",
             "created_at": "2018-08-01T00:00:00Z", "updated_at": "2018-08-01T00:00:00Z"}
        ],
        "tokens": [{"token": "USERTOKEN1", "user_id": 1}],
        "matches": [[1, 2]],
        "likes": [{"sender_id": 2, "receiver_id": 1,
                   "created_at": "2018-08-02T00:00:00Z", "updated_at": "2018-08-02T00:00:00Z"}],
        "images": [{"user_id": 2, "uri": "https://img.example/2.png"}]
    }"#;

    #[tokio::test]
    async fn seed_populates_every_store() {
        let seed: Seed = serde_json::from_str(SEED).unwrap();
        let stores = MemoryStores::from_seed(seed).unwrap();

        assert_eq!(
            stores.tokens.lookup_by_token("USERTOKEN1").await.unwrap(),
            Some(UserId(1))
        );
        assert!(
            stores
                .matches
                .matched_partner_ids(UserId(2))
                .await
                .unwrap()
                .contains(&UserId(1))
        );
        assert!(stores.likes.like_exists(UserId(2), UserId(1)).await.unwrap());
        assert_eq!(
            stores.users.get_by_id(UserId(2)).await.unwrap().unwrap().gender,
            Gender::Female
        );
        let images = stores.images.primary_image_uris(&[UserId(1), UserId(2)]).await.unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn duplicate_seed_likes_are_rejected() {
        let like = r#"{"sender_id": 2, "receiver_id": 1,
            "created_at": "2018-08-02T00:00:00Z", "updated_at": "2018-08-02T00:00:00Z"}"#;
        let raw = format!(r#"{{"likes": [{like}, {like}]}}"#);
        let seed: Seed = serde_json::from_str(&raw).unwrap();
        assert!(MemoryStores::from_seed(seed).is_err());
    }
}
