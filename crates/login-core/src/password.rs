//! Password hashing
//!
//! Passwords are stretched with iterated SHA-256: the digest of each round
//! is the input of the next. This is weaker than a memory-hard password
//! hash and is kept for compatibility with existing records.

use sha2::{Digest, Sha256};

/// Number of SHA-256 rounds applied to a password
pub const HASH_ITERATIONS: usize = 1000;

/// Hash `input` with `HASH_ITERATIONS` rounds of SHA-256, as lowercase hex
pub fn hash_password(input: &str) -> String {
    let mut digest = Sha256::digest(input.as_bytes());
    for _ in 1..HASH_ITERATIONS {
        digest = Sha256::digest(digest.as_slice());
    }
    hex::encode(digest)
}

/// Hash a password concatenated with its salt
pub fn salted_hash(password: &str, salt: &str) -> String {
    let mut input = String::with_capacity(password.len() + salt.len());
    input.push_str(password);
    input.push_str(salt);
    hash_password(&input)
}

/// Compare two byte slices without short-circuiting on the first mismatch
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            hash_password("password"),
            "8e03060506bc0f028dd54ccc960da24ce3d6ed323ac71e42cce5a359ccc28588"
        );
        assert_eq!(
            hash_password(""),
            "ccacebeaa615bc6656e00e68c86e9a2664a98f6742fa3eb280dda3200432026b"
        );
    }

    #[test]
    fn test_salted_hash_concatenates_password_and_salt() {
        let salt = "00112233445566778899aabbccddeeff";
        assert_eq!(salted_hash("pw1", salt), hash_password("pw100112233445566778899aabbccddeeff"));
        assert_eq!(
            salted_hash("pw1", salt),
            "dba64c9871b27e62a43c47dc27969e5458abc333e6b7f7082de95a99f549435c"
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("correct horse"), hash_password("correct horse"));
    }

    #[test]
    fn test_hash_distinguishes_inputs() {
        assert_ne!(hash_password("password"), hash_password("Password"));
        assert_ne!(hash_password("password"), hash_password("password "));
    }

    #[test]
    fn test_hash_output_format() {
        let hash = hash_password("ünïcödé");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"short", b"longer"));
        assert!(constant_time_eq(b"", b""));
    }
}
