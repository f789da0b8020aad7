use super::util::store_err;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::MySqlPool;

pub struct MySqlTokenStore {
    pool: MySqlPool,
}

impl MySqlTokenStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlTokenStore { pool }
    }
}

#[async_trait::async_trait]
impl TokenStore for MySqlTokenStore {
    async fn lookup_by_token(&self, token: &str) -> Result<Option<UserId>, StoreError> {
        sqlx::query_scalar::<_, UserId>("SELECT user_id FROM user_token WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_err)
    }
}
