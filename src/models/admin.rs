use rand::{Rng, distr::Alphanumeric};
use sqlx::FromRow;

#[cfg(test)]
use crate::auth::hasher::verify_password;
use crate::{auth::hasher::hash_password, errors::AppError};

const ID_LENGTH: usize = 15;
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_KEY_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Admin {
    pub id: String,
    pub avatar: i64,
    pub email: String,
    pub token_key: String,
    pub password_hash: String,
    pub last_reset_sent_at: Option<i64>,
    pub created: i64,
    pub updated: i64,
}

impl Admin {
    /// A fresh, unsaved admin. `created` stays 0 until the first save.
    pub fn new() -> Self {
        Self {
            id: random_id(),
            avatar: 0,
            email: String::new(),
            token_key: random_token_key(),
            password_hash: String::new(),
            last_reset_sent_at: None,
            created: 0,
            updated: 0,
        }
    }

    pub fn is_new(&self) -> bool {
        self.created == 0
    }

    /// Replaces the password hash and rotates the token key, which
    /// invalidates any token signed with the previous one.
    pub fn set_password(&mut self, password: &str) -> Result<(), AppError> {
        self.password_hash = hash_password(password)?;
        self.refresh_token_key();
        Ok(())
    }

    #[cfg(test)]
    pub fn validate_password(&self, password: &str) -> bool {
        !self.password_hash.is_empty() && verify_password(password, &self.password_hash)
    }

    pub fn refresh_token_key(&mut self) {
        self.token_key = random_token_key();
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !is_email(&self.email) {
            return Err(AppError::InvalidEmail(self.email.clone()));
        }
        if self.password_hash.is_empty() {
            return Err(AppError::MissingPassword);
        }
        Ok(())
    }
}

impl Default for Admin {
    fn default() -> Self {
        Self::new()
    }
}

fn is_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn random_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}

fn random_token_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_KEY_LENGTH)
        .map(char::from)
        .collect()
}
