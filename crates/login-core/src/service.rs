//! Account registration and credential verification

use chrono::Utc;
use login_events::EventPublisher;
use login_store::{CredentialRecord, CredentialStore, StoreError};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::LoginError;
use crate::password::{constant_time_eq, salted_hash};
use crate::salt::generate_salt;

/// Topic that account creation events are published to
pub const LOGIN_EVENTS_TOPIC: &str = "login-events";

/// Salt used for the throwaway hash computed when a username is unknown
const DUMMY_SALT: &str = "00000000000000000000000000000000";

/// Source of fresh per-record salts
pub type SaltSource = Arc<dyn Fn() -> Result<String, LoginError> + Send + Sync>;

/// Result of a credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Whether the password matched the stored hash
    pub matched: bool,
    /// Identifier of the record the password was checked against
    pub record_id: String,
}

/// Credential management service
///
/// Holds no state of its own beyond handles to the credential store and
/// the event sink; all records live in the store.
#[derive(Clone)]
pub struct LoginService {
    store: Arc<dyn CredentialStore>,
    events: Arc<dyn EventPublisher>,
    topic: String,
    salt_source: SaltSource,
}

impl LoginService {
    /// Create a new login service
    pub fn new(store: Arc<dyn CredentialStore>, events: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            events,
            topic: LOGIN_EVENTS_TOPIC.to_string(),
            salt_source: Arc::new(generate_salt),
        }
    }

    /// Publish creation events to `topic` instead of the default topic
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Draw salts from `source` instead of the operating system RNG
    pub fn with_salt_source(
        mut self,
        source: impl Fn() -> Result<String, LoginError> + Send + Sync + 'static,
    ) -> Self {
        self.salt_source = Arc::new(source);
        self
    }

    /// Topic creation events are published to
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Register a new login, returning the identifier of the stored record
    ///
    /// Fails with `DuplicateUser` if the username is already registered.
    /// The uniqueness check and the insert are separate store calls, so two
    /// concurrent registrations of one username can both pass the check;
    /// backends with a uniqueness constraint report the loser as a duplicate.
    ///
    /// Once the record is stored the registration has succeeded. The
    /// creation event is published afterwards and a publish failure is only
    /// logged.
    pub async fn add_login(&self, username: &str, password: &str) -> Result<String, LoginError> {
        let existing = self.store.find_by_username(username).await?;
        if !existing.is_empty() {
            debug!("Registration rejected: {} already exists", username);
            return Err(LoginError::DuplicateUser(username.to_string()));
        }

        let salt = (self.salt_source)()?;
        let record = CredentialRecord::new(
            username,
            salted_hash(password, &salt),
            salt,
            Utc::now(),
        );

        let id = self.store.insert(&record).await.map_err(|e| match e {
            StoreError::Duplicate(_) => LoginError::DuplicateUser(username.to_string()),
            other => LoginError::Store(other),
        })?;

        info!("Created login {} for {}", id, username);

        let payload = format!("created: {}", id);
        if let Err(e) = self.events.publish(&self.topic, &payload).await {
            warn!(
                "Failed to push login notification for {} to {}: {}",
                id, self.topic, e
            );
        }

        Ok(id)
    }

    /// Verify a username and password against the stored credentials
    ///
    /// An unknown username is an error (`UserNotFound`); a wrong password is
    /// not, it yields `matched: false`.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Verification, LoginError> {
        let mut found = self.store.find_by_username(username).await?;

        if found.is_empty() {
            // Same hashing cost as a real check
            let _ = std::hint::black_box(salted_hash(password, DUMMY_SALT));
            debug!("Verification failed: no user {}", username);
            return Err(LoginError::UserNotFound);
        }

        if found.len() > 1 {
            warn!(
                "Found {} credential records for {}; usernames should be unique",
                found.len(),
                username
            );
        }

        let stored = found.swap_remove(0);
        let attempt = salted_hash(password, &stored.record.salt);
        let matched = constant_time_eq(attempt.as_bytes(), stored.record.password_hash.as_bytes());

        debug!("Verified credentials for {}: matched={}", username, matched);

        Ok(Verification {
            matched,
            record_id: stored.id,
        })
    }
}
