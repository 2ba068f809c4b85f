use crate::{Result, ServiceContext, ServiceError};

use huddle_auth::AuthUser;
use huddle_core::User;
use huddle_db::UserRepository;

/// Mirror the authenticated identity into the users table.
///
/// Runs on login. Id is the identity-provider subject; email and name
/// follow whatever the provider currently reports. `created_at` keeps its
/// first-insert value.
pub async fn sync_user(ctx: &ServiceContext, caller: &AuthUser) -> Result<User> {
    let repo = UserRepository::new(ctx.pool.clone());

    let user = User::new(caller.id.clone(), caller.email.clone(), caller.name.clone());
    repo.upsert(&user).await?;

    let stored = repo
        .find_by_id(&caller.id)
        .await?
        .ok_or_else(|| ServiceError::upstream("User row missing after upsert"))?;

    log::debug!("Synced user '{}'", stored.id);
    Ok(stored)
}
