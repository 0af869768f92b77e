use secrecy::ExposeSecret;

use crate::{
    config::AdminCredentials,
    errors::AppError,
    models::admin::Admin,
    repositories::admin_repo::AdminStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    AlreadyExists,
    Created,
}

/// Makes sure an admin with the configured email exists, creating it when
/// the lookup comes back empty. Lookup errors are returned as-is and never
/// lead to a create.
pub async fn create_administrator<S: AdminStore>(
    store: &S,
    credentials: &AdminCredentials,
) -> Result<Provisioned, AppError> {
    let email = &credentials.email;
    if store.find_admin_by_email(email).await?.is_some() {
        tracing::info!("Admin user {} already exists", email);
        return Ok(Provisioned::AlreadyExists);
    }

    let mut admin = Admin::new();
    admin.email = email.clone();
    admin.set_password(credentials.password.expose_secret())?;
    store.save_admin(&mut admin).await?;
    tracing::info!("Created admin user: {}", email);
    Ok(Provisioned::Created)
}
