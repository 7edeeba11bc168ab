use adboard_domain::{Role, User};
use adboard_store::{blob, keys, BlobStore, StoreError};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Name is required to sign in")]
    MissingName,

    #[error("Email is required to sign in")]
    MissingEmail,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Create a session user and persist it. Sessions are not durable
/// accounts; no credential check happens here.
pub fn sign_in<S: BlobStore>(
    store: &mut S,
    name: &str,
    email: &str,
    role: Role,
) -> Result<User, SessionError> {
    if name.trim().is_empty() {
        return Err(SessionError::MissingName);
    }
    if email.trim().is_empty() {
        return Err(SessionError::MissingEmail);
    }

    let user = User::new(name.trim().to_string(), email.trim().to_string(), role);
    blob::save(store, keys::USER_KEY, &user)?;
    info!("Signed in: {} ({:?})", user.email, user.role);
    Ok(user)
}

/// The signed-in user, if any. A malformed session blob reads as
/// signed out.
pub fn current_user<S: BlobStore>(store: &S) -> Option<User> {
    blob::load_optional(store, keys::USER_KEY)
}

pub fn sign_out<S: BlobStore>(store: &mut S) -> Result<(), SessionError> {
    store.remove_blob(keys::USER_KEY)?;
    Ok(())
}
