use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::infra_redis::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::anyhow;
use sqlx::{MySql, Pool};
use std::sync::Arc;

/// Store ports for one backend, before the session source is chosen.
struct Stores {
    tokens: Arc<dyn TokenStore>,
    matches: Arc<dyn MatchRepo>,
    likes: Arc<dyn LikeRepo>,
    users: Arc<dyn UserRepo>,
    images: Arc<dyn ImageRepo>,
    pool: Option<Pool<MySql>>,
}

impl From<MemoryStores> for Stores {
    fn from(stores: MemoryStores) -> Self {
        Stores {
            tokens: stores.tokens,
            matches: stores.matches,
            likes: stores.likes,
            users: stores.users,
            images: stores.images,
            pool: None,
        }
    }
}

pub struct Server {
    pub like_service: Arc<dyn LikeService>,
    pool: Option<Pool<MySql>>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let mut stores = match settings.store.backend.as_str() {
            "memory" => {
                let memory = match &settings.store.seed_path {
                    Some(path) => MemoryStores::from_seed_file(path)?,
                    None => MemoryStores::new(),
                };
                Stores::from(memory)
            }
            "mysql" => {
                let dsn = settings
                    .store
                    .mysql_dsn
                    .as_deref()
                    .ok_or_else(|| anyhow!("store.mysql_dsn is required for the mysql backend"))?;
                let pool = Pool::<MySql>::connect(dsn).await?;
                Stores {
                    tokens: Arc::new(MySqlTokenStore::new(pool.clone())),
                    matches: Arc::new(MySqlMatchRepo::new(pool.clone())),
                    likes: Arc::new(MySqlLikeRepo::new(pool.clone())),
                    users: Arc::new(MySqlUserRepo::new(pool.clone())),
                    images: Arc::new(MySqlImageRepo::new(pool.clone())),
                    pool: Some(pool),
                }
            }
            other => return Err(anyhow!("Unknown store backend: {}", other)),
        };

        match settings.session.backend.as_str() {
            "store" => {}
            "redis" => {
                let dsn = settings
                    .session
                    .redis_dsn
                    .as_deref()
                    .ok_or_else(|| anyhow!("session.redis_dsn is required for the redis backend"))?;
                let redis_client = redis::Client::open(dsn)?;
                let redis_manager = redis_client.get_connection_manager().await?;
                stores.tokens = Arc::new(RedisTokenStore::new(
                    redis_manager,
                    settings.session.prefix.clone(),
                ));
            }
            other => return Err(anyhow!("Unknown session backend: {}", other)),
        }

        info!(
            store = %settings.store.backend,
            session = %settings.session.backend,
            "server started"
        );

        Ok(Self::from_stores(stores))
    }

    /// Serves straight from in-memory stores; no connections to close.
    pub fn with_memory_stores(stores: MemoryStores) -> Self {
        Self::from_stores(Stores::from(stores))
    }

    fn from_stores(stores: Stores) -> Self {
        let like_service: Arc<dyn LikeService> = Arc::new(RealLikeService::new(
            stores.tokens,
            stores.matches,
            stores.likes,
            stores.users,
            stores.images,
            Arc::new(SystemClock),
        ));

        Self {
            like_service,
            pool: stores.pool,
        }
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
