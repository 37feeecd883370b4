//! Login Service Core Business Logic
//!
//! This crate provides credential management for the login service:
//! password hashing, salt generation, registration input validation,
//! account registration and credential verification.

pub mod error;
pub mod password;
pub mod salt;
pub mod service;
pub mod validation;

pub use error::LoginError;
pub use password::{HASH_ITERATIONS, constant_time_eq, hash_password, salted_hash};
pub use salt::{SALT_BYTES, generate_salt};
pub use service::{LOGIN_EVENTS_TOPIC, LoginService, SaltSource, Verification};
pub use validation::{is_valid_email, validate_registration};
