use super::util::store_err;
use crate::domain_model::*;
use crate::domain_port::*;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use std::collections::HashSet;

pub struct MySqlLikeRepo {
    pool: MySqlPool,
}

impl MySqlLikeRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlLikeRepo { pool }
    }

    fn row_to_like(row: MySqlRow) -> Result<Like, StoreError> {
        let get_err = |e: sqlx::Error| StoreError::Backend(e.to_string());

        Ok(Like {
            sender_id: row.try_get("user_id").map_err(get_err)?,
            receiver_id: row.try_get("partner_id").map_err(get_err)?,
            created_at: row.try_get("created_at").map_err(get_err)?,
            updated_at: row.try_get("updated_at").map_err(get_err)?,
        })
    }
}

#[async_trait::async_trait]
impl LikeRepo for MySqlLikeRepo {
    async fn get_like(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> Result<Option<Like>, StoreError> {
        let row_opt: Option<MySqlRow> = sqlx::query(
            r#"
SELECT user_id, partner_id, created_at, updated_at
FROM user_like
WHERE user_id = ? AND partner_id = ?
"#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row_opt.map(Self::row_to_like).transpose()
    }

    async fn insert_like(&self, like: &Like) -> Result<(), StoreError> {
        sqlx::query(
            r#"
INSERT INTO user_like (user_id, partner_id, created_at, updated_at)
VALUES (?, ?, ?, ?)
"#,
        )
        .bind(like.sender_id)
        .bind(like.receiver_id)
        .bind(like.created_at)
        .bind(like.updated_at)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }

    async fn page_of_received_likes(
        &self,
        receiver_id: UserId,
        exclude_sender_ids: &HashSet<UserId>,
        page: Pagination,
    ) -> Result<Vec<ReceivedLike>, StoreError> {
        let mut qb: QueryBuilder<MySql> =
            QueryBuilder::new("SELECT user_id, created_at FROM user_like WHERE partner_id = ");
        qb.push_bind(receiver_id);

        if !exclude_sender_ids.is_empty() {
            qb.push(" AND user_id NOT IN (");
            let mut ids = qb.separated(", ");
            for id in exclude_sender_ids {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");
        }

        qb.push(" ORDER BY created_at DESC, user_id ASC LIMIT ");
        qb.push_bind(page.limit.0);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset.0);

        let rows = qb.build().fetch_all(&self.pool).await.map_err(store_err)?;

        rows.into_iter()
            .map(|row| {
                let sender_id: UserId = row
                    .try_get("user_id")
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
                let created_at: DateTime<Utc> = row
                    .try_get("created_at")
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
                Ok(ReceivedLike {
                    sender_id,
                    created_at,
                })
            })
            .collect()
    }
}
