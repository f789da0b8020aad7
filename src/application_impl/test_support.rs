use crate::domain_model::*;
use crate::domain_port::*;
use crate::infra_memory::MemoryStores;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{HashMap, HashSet};

pub const MALE_1: UserId = UserId(1);
pub const FEMALE_2: UserId = UserId(2);
pub const FEMALE_3: UserId = UserId(3);
pub const MALE_4: UserId = UserId(4);
pub const FEMALE_5: UserId = UserId(5);

pub const TOKEN_1: &str = "USERTOKEN1";

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_533_081_600 + secs, 0).unwrap()
}

pub fn profile(id: UserId, gender: Gender) -> Profile {
    Profile {
        id,
        gender,
        nickname: format!("user{id}"),
        tweet: String::new(),
        introduction: String::new(),
        residence_state: String::new(),
        job: String::new(),
        height: String::new(),
        created_at: at(0),
        updated_at: at(0),
    }
}

/// Users 1 and 4 are male, 2, 3 and 5 female; user 1 holds `TOKEN_1`.
pub fn fixture() -> MemoryStores {
    let stores = MemoryStores::new();
    stores.users.upsert(profile(MALE_1, Gender::Male));
    stores.users.upsert(profile(FEMALE_2, Gender::Female));
    stores.users.upsert(profile(FEMALE_3, Gender::Female));
    stores.users.upsert(profile(MALE_4, Gender::Male));
    stores.users.upsert(profile(FEMALE_5, Gender::Female));
    stores.tokens.issue(TOKEN_1, MALE_1);
    stores
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Every port, every call: a backend error.
pub struct FailingStore;

fn down<T>() -> Result<T, StoreError> {
    Err(StoreError::Backend("connection refused".to_string()))
}

#[async_trait::async_trait]
impl TokenStore for FailingStore {
    async fn lookup_by_token(&self, _token: &str) -> Result<Option<UserId>, StoreError> {
        down()
    }
}

#[async_trait::async_trait]
impl MatchRepo for FailingStore {
    async fn matched_partner_ids(&self, _user_id: UserId) -> Result<HashSet<UserId>, StoreError> {
        down()
    }
}

#[async_trait::async_trait]
impl LikeRepo for FailingStore {
    async fn get_like(&self, _s: UserId, _r: UserId) -> Result<Option<Like>, StoreError> {
        down()
    }

    async fn insert_like(&self, _like: &Like) -> Result<(), StoreError> {
        down()
    }

    async fn page_of_received_likes(
        &self,
        _receiver_id: UserId,
        _exclude: &HashSet<UserId>,
        _page: Pagination,
    ) -> Result<Vec<ReceivedLike>, StoreError> {
        down()
    }
}

#[async_trait::async_trait]
impl UserRepo for FailingStore {
    async fn get_by_id(&self, _user_id: UserId) -> Result<Option<Profile>, StoreError> {
        down()
    }

    async fn get_by_ids(&self, _user_ids: &[UserId]) -> Result<Vec<Profile>, StoreError> {
        down()
    }
}

#[async_trait::async_trait]
impl ImageRepo for FailingStore {
    async fn primary_image_uris(
        &self,
        _user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, StoreError> {
        down()
    }
}
