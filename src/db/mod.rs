use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

/// Handle on the quiz database. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connects with the pool settings from `config` and fails fast when the
    /// server does not answer a ping.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let options = client_options(config).await?;
        let client = Client::with_options(options)?;
        let database = Self {
            inner: client.database(&config.mongo_db_name),
        };

        database.health_check().await?;
        log::info!(
            "Connected to MongoDB database '{}' (pool {}..{})",
            config.mongo_db_name,
            config.mongo_min_pool_size.min(config.mongo_max_pool_size),
            config.mongo_max_pool_size
        );

        Ok(database)
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.inner.collection(collection_name)
    }

    /// Pings the server; backs the readiness probe.
    pub async fn health_check(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
    let timeout = Duration::from_secs(config.mongo_timeout_secs);

    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.max_pool_size = Some(config.mongo_max_pool_size);
    options.min_pool_size = Some(config.mongo_min_pool_size.min(config.mongo_max_pool_size));
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    Ok(options)
}
