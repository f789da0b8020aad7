use crate::domain_model::{Profile, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directional record: `sender_id` expressed interest in `receiver_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Like {
    pub fn new(sender_id: UserId, receiver_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            sender_id,
            receiver_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Row of a received-likes page as the like store returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceivedLike {
    pub sender_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeView {
    pub sender_id: UserId,
    pub liked_at: DateTime<Utc>,
    #[serde(flatten)]
    pub profile: Profile,
    pub image_uri: String,
}

/// Most recent first; equal timestamps fall back to sender id ascending.
pub fn sort_by_liked_at_desc(views: &mut [LikeView]) {
    views.sort_by(|a, b| {
        b.liked_at
            .cmp(&a.liked_at)
            .then_with(|| a.sender_id.cmp(&b.sender_id))
    });
}
