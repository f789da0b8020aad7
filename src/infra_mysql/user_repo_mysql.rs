use super::util::store_err;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

const PROFILE_COLUMNS: &str = "id, gender, nickname, tweet, introduction, residence_state, \
                               job, height, created_at, updated_at";

pub struct MySqlUserRepo {
    pool: MySqlPool,
}

impl MySqlUserRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlUserRepo { pool }
    }

    fn row_to_profile(row: MySqlRow) -> Result<Profile, StoreError> {
        let get_err = |e: sqlx::Error| StoreError::Backend(e.to_string());

        let gender: String = row.try_get("gender").map_err(get_err)?;
        let gender = gender.parse::<Gender>().map_err(StoreError::Backend)?;

        Ok(Profile {
            id: row.try_get("id").map_err(get_err)?,
            gender,
            nickname: row.try_get("nickname").map_err(get_err)?,
            tweet: row.try_get("tweet").map_err(get_err)?,
            introduction: row.try_get("introduction").map_err(get_err)?,
            residence_state: row.try_get("residence_state").map_err(get_err)?,
            job: row.try_get("job").map_err(get_err)?,
            height: row.try_get("height").map_err(get_err)?,
            created_at: row.try_get("created_at").map_err(get_err)?,
            updated_at: row.try_get("updated_at").map_err(get_err)?,
        })
    }
}

#[async_trait::async_trait]
impl UserRepo for MySqlUserRepo {
    async fn get_by_id(&self, user_id: UserId) -> Result<Option<Profile>, StoreError> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM user WHERE id = ?");
        let row_opt: Option<MySqlRow> = sqlx::query(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_err)?;

        row_opt.map(Self::row_to_profile).transpose()
    }

    async fn get_by_ids(&self, user_ids: &[UserId]) -> Result<Vec<Profile>, StoreError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb: QueryBuilder<MySql> =
            QueryBuilder::new(format!("SELECT {PROFILE_COLUMNS} FROM user WHERE id IN ("));
        let mut ids = qb.separated(", ");
        for id in user_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(")");

        let rows = qb.build().fetch_all(&self.pool).await.map_err(store_err)?;

        rows.into_iter().map(Self::row_to_profile).collect()
    }
}
