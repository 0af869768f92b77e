use chrono::Utc;

use crate::{errors::AppError, models::admin::Admin};

/// Data access for administrator accounts.
///
/// A lookup that matches nothing is `Ok(None)`. `Err` is reserved for real
/// failures, so callers can tell "absent" apart from "store unavailable".
pub trait AdminStore {
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, AppError>;

    /// Validates, stamps `created`/`updated`, and inserts or updates by id.
    async fn save_admin(&self, admin: &mut Admin) -> Result<(), AppError>;
}

impl AdminStore for sqlx::SqlitePool {
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        Ok(get_admin_by_email(self, email).await?)
    }

    async fn save_admin(&self, admin: &mut Admin) -> Result<(), AppError> {
        admin.validate()?;
        let now = Utc::now().timestamp();
        let mut stamped = admin.clone();
        if stamped.is_new() {
            stamped.created = now;
        }
        stamped.updated = now;
        upsert_admin(self, &stamped).await.map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::EmailTaken(stamped.email.clone())
            }
            e => e.into(),
        })?;
        *admin = stamped;
        Ok(())
    }
}

pub async fn get_admin_by_email(
    pool: &sqlx::SqlitePool,
    email: &str,
) -> sqlx::Result<Option<Admin>> {
    sqlx::query_as("select * from admins where email = ?1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn upsert_admin(pool: &sqlx::SqlitePool, admin: &Admin) -> sqlx::Result<()> {
    sqlx::query(
        "insert into admins
            (id, avatar, email, token_key, password_hash, last_reset_sent_at, created, updated)
            values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        on conflict(id) do update set
            avatar = excluded.avatar,
            email = excluded.email,
            token_key = excluded.token_key,
            password_hash = excluded.password_hash,
            last_reset_sent_at = excluded.last_reset_sent_at,
            updated = excluded.updated
        ",
    )
    .bind(&admin.id)
    .bind(admin.avatar)
    .bind(&admin.email)
    .bind(&admin.token_key)
    .bind(&admin.password_hash)
    .bind(admin.last_reset_sent_at)
    .bind(admin.created)
    .bind(admin.updated)
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
pub async fn count_admins(pool: &sqlx::SqlitePool) -> sqlx::Result<i64> {
    let (count,): (i64,) = sqlx::query_as("select count(*) from admins")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
