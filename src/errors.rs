use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid admin email: `{0}`")]
    InvalidEmail(String),
    #[error("Admin password must be set before saving")]
    MissingPassword,
    #[error("An admin with email `{0}` already exists")]
    EmailTaken(String),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::InvalidEmail(_) => String::from("InvalidEmail"),
            AppError::MissingPassword => String::from("MissingPassword"),
            AppError::EmailTaken(_) => String::from("EmailTaken"),
            AppError::PasswordHash(_) => String::from("PasswordHash"),
            AppError::Migration(_) => String::from("MigrationError"),
            AppError::Database(_) => String::from("DatabaseError"),
        }
    }
}
