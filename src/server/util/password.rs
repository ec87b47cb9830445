//! Password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::server::error::AppError;

/// Hashes a password with Argon2id and a random salt.
///
/// Uses the library's default cost parameters (19 MiB, 2 iterations, 1 lane).
/// The returned PHC string embeds the algorithm, parameters and salt, so it can
/// be verified without any extra configuration.
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash
/// - `Err(AppError::PasswordHashErr)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default());

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(AppError::PasswordHashErr)?;

    Ok(hash.to_string())
}
