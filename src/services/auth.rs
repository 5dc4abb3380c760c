use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

static ENGINE: OnceLock<Argon2> = OnceLock::new();

fn engine() -> &'static Argon2<'static> {
    ENGINE.get_or_init(|| {
        let params = Params::new(
            64 * 1024, // 64MB memory (m)
            3,         // iterations (t)
            4,         // parallelism lanes (p)
            None,
        )
        .expect("Invalid Argon2 parameters");

        Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
    })
}

/// The one admin account this application knows about.
///
/// The configured password is hashed once at startup; login attempts are
/// verified against the hash. Verification always runs even when the
/// submitted email does not match, so a wrong email costs the same time as
/// a wrong password.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(email: &str, password: &str) -> Result<Self, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = engine().hash_password(password.as_bytes(), &salt)?;

        Ok(Self {
            email: email.trim().to_string(),
            password_hash: hash.to_string(),
        })
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        let password_ok = verify_password(password, &self.password_hash).unwrap_or(false);
        let email_ok = email.trim() == self.email;
        email_ok && password_ok
    }
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(stored_hash)?;

    match engine().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
