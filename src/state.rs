use std::sync::Arc;

use anyhow::Context;
use mongodb::{options::ClientOptions, Client, Database};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let mut client_options = ClientOptions::parse(&config.mongo.uri)
            .await
            .context("parse MongoDB connection string")?;
        client_options.app_name = Some("bookshop".to_string());
        let client = Client::with_options(client_options).context("build MongoDB client")?;
        let db = client.database(&config.mongo.database);

        Ok(Self { db, config })
    }

    /// State for unit tests. The driver connects lazily, so no server is
    /// touched unless a test actually runs a query.
    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::config::{JwtConfig, MongoConfig};

        let client = Client::with_options(ClientOptions::default()).expect("default client");
        let config = Arc::new(AppConfig {
            mongo: MongoConfig {
                uri: "mongodb://127.0.0.1:27017".into(),
                database: "bookshop-test".into(),
            },
            jwt: JwtConfig {
                secret: "test-secret".into(),
                ttl_minutes: 60,
            },
        });
        Self {
            db: client.database(&config.mongo.database),
            config,
        }
    }
}
