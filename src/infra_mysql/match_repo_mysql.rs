use super::util::store_err;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::MySqlPool;
use std::collections::HashSet;

pub struct MySqlMatchRepo {
    pool: MySqlPool,
}

impl MySqlMatchRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlMatchRepo { pool }
    }
}

#[async_trait::async_trait]
impl MatchRepo for MySqlMatchRepo {
    // A match row may name the user on either side.
    async fn matched_partner_ids(&self, user_id: UserId) -> Result<HashSet<UserId>, StoreError> {
        let ids: Vec<UserId> = sqlx::query_scalar(
            r#"
SELECT partner_id FROM user_match WHERE user_id = ?
UNION
SELECT user_id FROM user_match WHERE partner_id = ?
"#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(ids.into_iter().collect())
    }
}
