//! Salt generation

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::LoginError;

/// Raw salt length in bytes (hex-encoded to twice as many characters)
pub const SALT_BYTES: usize = 16;

/// Generate a fresh salt from the operating system's secure random source
pub fn generate_salt() -> Result<String, LoginError> {
    generate_salt_with(&mut OsRng)
}

/// Generate a salt from a caller-supplied cryptographic RNG
pub fn generate_salt_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<String, LoginError> {
    let mut bytes = [0u8; SALT_BYTES];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| LoginError::RandomSource(e.to_string()))?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source exhausted"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_salt_format() {
        let salt = generate_salt().unwrap();
        assert_eq!(salt.len(), SALT_BYTES * 2);
        assert!(hex::decode(&salt).is_ok());
        assert_eq!(salt, salt.to_lowercase());
    }

    #[test]
    fn test_salts_do_not_repeat() {
        let salts: HashSet<String> = (0..10_000).map(|_| generate_salt().unwrap()).collect();
        assert_eq!(salts.len(), 10_000);
    }

    #[test]
    fn test_random_source_failure() {
        let result = generate_salt_with(&mut BrokenRng);
        assert!(matches!(result, Err(LoginError::RandomSource(_))));
    }
}
