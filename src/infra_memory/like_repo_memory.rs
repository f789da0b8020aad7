use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;

#[derive(Default)]
pub struct MemoryLikeRepo {
    likes: DashMap<(UserId, UserId), Like>,
}

impl MemoryLikeRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }

    /// Entry-level check-and-insert, the in-memory unique key on (sender, receiver).
    pub fn try_insert(&self, like: &Like) -> Result<(), StoreError> {
        match self.likes.entry((like.sender_id, like.receiver_id)) {
            Entry::Occupied(_) => Err(StoreError::Conflict(format!(
                "like {} -> {} already exists",
                like.sender_id, like.receiver_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(like.clone());
                Ok(())
            }
        }
    }
}

#[async_trait::async_trait]
impl LikeRepo for MemoryLikeRepo {
    async fn get_like(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> Result<Option<Like>, StoreError> {
        Ok(self
            .likes
            .get(&(sender_id, receiver_id))
            .map(|entry| entry.value().clone()))
    }

    async fn insert_like(&self, like: &Like) -> Result<(), StoreError> {
        self.try_insert(like)
    }

    async fn page_of_received_likes(
        &self,
        receiver_id: UserId,
        exclude_sender_ids: &HashSet<UserId>,
        page: Pagination,
    ) -> Result<Vec<ReceivedLike>, StoreError> {
        let mut received: Vec<ReceivedLike> = self
            .likes
            .iter()
            .filter(|entry| {
                let like = entry.value();
                like.receiver_id == receiver_id && !exclude_sender_ids.contains(&like.sender_id)
            })
            .map(|entry| ReceivedLike {
                sender_id: entry.value().sender_id,
                created_at: entry.value().created_at,
            })
            .collect();

        // DashMap iteration order is arbitrary; pin it so offsets are stable.
        received.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.sender_id.cmp(&b.sender_id))
        });

        Ok(received
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect())
    }
}
