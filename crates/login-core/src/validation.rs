//! Registration input validation

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Valid e-mail address grammar from the HTML living standard
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Check that a string has e-mail address syntax
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate registration input
///
/// The username must be an e-mail address and the password must not be
/// empty. There are no length or complexity rules. Only a boolean is
/// returned; the failing rule is logged at debug level.
pub fn validate_registration(username: &str, password: &str) -> bool {
    if !is_valid_email(username) {
        debug!("Registration rejected: invalid email: {}", username);
        return false;
    }
    if password.is_empty() {
        debug!("Registration rejected: empty password for {}", username);
        return false;
    }
    true
}
