use crate::domain_model::*;
use crate::domain_port::*;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, FromRedisValue, RedisError, RedisResult, RedisWrite, ToRedisArgs, Value};
use sha2::{Digest, Sha256};

/// Session tokens keyed by `{prefix}:{sha256(token) hex}`, value is the user id.
pub struct RedisTokenStore {
    conn: ConnectionManager,
    prefix: String,
}

impl RedisTokenStore {
    pub fn new(conn: ConnectionManager, prefix: impl Into<String>) -> Self {
        RedisTokenStore {
            conn,
            prefix: prefix.into(),
        }
    }

    fn key(&self, token: &str) -> String {
        token_key(&self.prefix, token)
    }
}

fn token_key(prefix: &str, token: &str) -> String {
    format!("{}:{}", prefix, hex::encode(Sha256::digest(token.as_bytes())))
}

impl ToRedisArgs for UserId {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + RedisWrite,
    {
        out.write_arg(self.to_string().as_bytes())
    }
}

impl FromRedisValue for UserId {
    fn from_redis_value(v: &Value) -> RedisResult<Self> {
        let s: String = redis::from_redis_value(v)?;
        let user_id = s.parse::<UserId>().map_err(|e| {
            RedisError::from((
                redis::ErrorKind::TypeError,
                "invalid UserId string",
                e.to_string(),
            ))
        })?;
        Ok(user_id)
    }
}

#[async_trait::async_trait]
impl TokenStore for RedisTokenStore {
    async fn lookup_by_token(&self, token: &str) -> Result<Option<UserId>, StoreError> {
        let key = self.key(token);
        let mut conn = self.conn.clone();
        let val: Option<UserId> = conn
            .get(&key)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_hides_the_raw_token() {
        let key = token_key("heartline:session", "USERTOKEN1");
        assert!(key.starts_with("heartline:session:"));
        assert!(!key.contains("USERTOKEN1"));
        assert_eq!(key.len(), "heartline:session:".len() + 64);
    }

    #[test]
    fn user_id_parses_from_redis_string() {
        let v = Value::BulkString(b"42".to_vec());
        assert_eq!(UserId::from_redis_value(&v).unwrap(), UserId(42));
        let bad = Value::BulkString(b"nope".to_vec());
        assert!(UserId::from_redis_value(&bad).is_err());
    }
}
