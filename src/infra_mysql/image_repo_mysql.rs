use super::util::store_err;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use std::collections::HashMap;

pub struct MySqlImageRepo {
    pool: MySqlPool,
}

impl MySqlImageRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlImageRepo { pool }
    }
}

#[async_trait::async_trait]
impl ImageRepo for MySqlImageRepo {
    /// The primary image is the user's earliest uploaded one.
    async fn primary_image_uris(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, StoreError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut qb: QueryBuilder<MySql> = QueryBuilder::new(
            r#"
SELECT i.user_id, i.path
FROM user_image i
JOIN (
    SELECT user_id, MIN(id) AS id FROM user_image WHERE user_id IN ("#,
        );
        let mut ids = qb.separated(", ");
        for id in user_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") GROUP BY user_id\n) p ON p.id = i.id");

        let rows = qb.build().fetch_all(&self.pool).await.map_err(store_err)?;

        let mut uris = HashMap::with_capacity(rows.len());
        for row in rows {
            let user_id: UserId = row
                .try_get("user_id")
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            let path: String = row
                .try_get("path")
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            uris.insert(user_id, path);
        }

        Ok(uris)
    }
}
