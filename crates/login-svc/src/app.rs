//! Service wiring and command handlers

use anyhow::{Context, Result, bail};
use login_core::{LoginError, LoginService, validate_registration};
use login_events::{EventPublisher, LogPublisher};
use login_store::{CredentialStore, Database, LoginEvent, MemoryStore};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;

/// Outcome of a command, as reported to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(String),
    Rejected(&'static str),
    Authorized(String),
    NotAuthorized,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Created(_) | Outcome::Authorized(_))
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Created(id) => format!("created ({})", id),
            Outcome::Rejected(reason) => format!("rejected: {}", reason),
            Outcome::Authorized(id) => format!("authorized ({})", id),
            Outcome::NotAuthorized => "not authorized".to_string(),
        }
    }
}

/// Wired-up service components
pub struct App {
    pub service: LoginService,
    /// Present when the sqlite backend is in use
    pub database: Option<Database>,
}

impl App {
    /// Build the store, event sink and login service described by `config`
    pub async fn build(config: &Config) -> Result<Self> {
        let (store, database): (Arc<dyn CredentialStore>, Option<Database>) =
            match config.database.backend.as_str() {
                "sqlite" => {
                    if let Some(parent) = Path::new(&config.database.path).parent() {
                        tokio::fs::create_dir_all(parent).await.with_context(|| {
                            format!("Failed to create data directory {:?}", parent)
                        })?;
                    }
                    let db = Database::new(&config.database_url()).await?;
                    let store: Arc<dyn CredentialStore> = Arc::new(db.clone());
                    (store, Some(db))
                }
                "memory" => {
                    warn!("Using in-memory credential store; records are lost on exit");
                    let store: Arc<dyn CredentialStore> = Arc::new(MemoryStore::new());
                    (store, None)
                }
                other => bail!("Unknown database backend '{}'", other),
            };

        let events: Arc<dyn EventPublisher> = match (config.events.sink.as_str(), &database) {
            ("database", Some(db)) => Arc::new(db.clone()),
            ("database", None) => {
                warn!("Event sink 'database' needs the sqlite backend, logging events instead");
                Arc::new(LogPublisher::new())
            }
            ("log", _) => Arc::new(LogPublisher::new()),
            (other, _) => bail!("Unknown event sink '{}'", other),
        };

        info!(
            "Credential store: {}, event sink: {}, topic: {}",
            config.database.backend, config.events.sink, config.events.topic
        );

        let service = LoginService::new(store, events).with_topic(config.events.topic.clone());
        Ok(Self { service, database })
    }

    /// Validate and register a new login
    pub async fn add(&self, username: &str, password: &str) -> Result<Outcome> {
        if !validate_registration(username, password) {
            return Ok(Outcome::Rejected("invalid username or password"));
        }

        match self.service.add_login(username, password).await {
            Ok(id) => Ok(Outcome::Created(id)),
            Err(LoginError::DuplicateUser(_)) => Ok(Outcome::Rejected("username already registered")),
            Err(e) => Err(e.into()),
        }
    }

    /// Check a username and password
    ///
    /// Unknown users and wrong passwords produce the same outcome.
    pub async fn verify(&self, username: &str, password: &str) -> Result<Outcome> {
        match self.service.verify_credentials(username, password).await {
            Ok(v) if v.matched => Ok(Outcome::Authorized(v.record_id)),
            Ok(_) | Err(LoginError::UserNotFound) => Ok(Outcome::NotAuthorized),
            Err(e) => Err(e.into()),
        }
    }

    /// List outbox events, at most `limit` of them
    pub async fn events(&self, topic: Option<&str>, limit: i64) -> Result<Vec<LoginEvent>> {
        if limit < 1 {
            bail!("Event limit must be at least 1, got {}", limit);
        }
        let Some(db) = &self.database else {
            bail!("Events are only recorded with the sqlite backend and database sink");
        };
        Ok(db.list_events(topic, limit).await?)
    }
}
