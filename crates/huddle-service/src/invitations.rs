//! Invitation lifecycle: NONE -> PENDING -> ACCEPTED, never backwards.
//!
//! Issuance is two-phase: the email must leave before the row is persisted,
//! so a failed dispatch leaves no orphaned pending invitation. Acceptance
//! is idempotent for the member the token admitted and refuses everyone
//! else once consumed.

use crate::authorization::{require_capability, require_project};
use crate::error::INVITATION_INVALID_MESSAGE;
use crate::{Result, ServiceContext, ServiceError, invalidation};

use huddle_auth::AuthUser;
use huddle_cache::keys;
use huddle_core::validation::validate_email;
use huddle_core::{Capability, Invitation, Membership, Role, User};
use huddle_db::{InvitationRepository, MembershipRepository, UserRepository};
use huddle_mail::templates;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields accepted when issuing an invitation.
#[derive(Debug, Clone)]
pub struct InvitationRequest {
    pub email: String,
    pub role: Role,
}

/// Successful acceptance outcome, pointing the client at the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedInvitation {
    pub project_id: Uuid,
}

/// Issue an invitation to join `project_id` with the requested role.
///
/// The response never discloses whether the address belongs to an existing
/// account beyond the duplicate check itself.
pub async fn send_invitation(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
    input: InvitationRequest,
) -> Result<Invitation> {
    // 1. Address shape
    validate_email(&input.email)?;
    let email = input.email.trim().to_string();

    // 2. Gate on fresh state
    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::InviteMember).await?;

    // 3. Duplicate suppression: a pending invitation younger than the
    //    window blocks a re-invite; an older one is reclaimed.
    let invitations = InvitationRepository::new(ctx.pool.clone());
    if let Some(pending) = invitations.find_pending(&email, project_id).await? {
        if pending.age_secs(Utc::now()) < ctx.invites.duplicate_window_secs as i64 {
            return Err(ServiceError::conflict(
                "An invitation for this address is already pending",
            ));
        }
        invitations.delete(pending.id).await?;
        log::debug!(
            "Reclaimed stale invitation {} for '{}' on project {}",
            pending.id,
            email,
            project_id
        );
    }

    // 4. Unguessable acceptance credential
    let token = generate_token();
    let accept_url = format!(
        "{}/invite/{}",
        ctx.invites.public_base_url.trim_end_matches('/'),
        token
    );

    // 5. Deliver first. An invitation whose email never left is not
    //    persisted, so dispatch failure cannot orphan a pending row.
    let inviter = caller.name.as_deref().unwrap_or(&caller.email);
    let message = templates::invitation_email(
        &email,
        &project.name,
        input.role.as_str(),
        inviter,
        &accept_url,
    );
    ctx.mailer.send(&message).await?;

    // 6. Persist PENDING
    let invitation = Invitation::new(email, project_id, token, input.role);
    invitations.create(&invitation).await?;

    log::info!(
        "Invited '{}' to project {} as {}",
        invitation.email,
        project_id,
        invitation.role
    );
    Ok(invitation)
}

/// Redeem an invitation token for a membership.
///
/// Ordering is load-bearing: the accepted flag flips only after the
/// membership step completed or was deliberately skipped.
pub async fn accept_invitation(
    ctx: &ServiceContext,
    caller: &AuthUser,
    token: &str,
) -> Result<AcceptedInvitation> {
    // 1. The token is the sole credential. Absent rows get the generic
    //    message, never a hint at why.
    let invitations = InvitationRepository::new(ctx.pool.clone());
    let invitation = invitations
        .find_by_token(token)
        .await?
        .ok_or_else(|| ServiceError::not_found(INVITATION_INVALID_MESSAGE))?;

    let memberships = MembershipRepository::new(ctx.pool.clone());

    // 2. Already consumed: idempotent success for the member it admitted,
    //    refusal for anyone else.
    if invitation.accepted {
        let existing = memberships
            .find_by_user_and_project(&caller.id, invitation.project_id)
            .await?;
        return match existing {
            Some(_) => Ok(AcceptedInvitation {
                project_id: invitation.project_id,
            }),
            None => Err(ServiceError::conflict(
                "This invitation has already been used",
            )),
        };
    }

    // 3. The signed-in identity must match the invited address. Nothing is
    //    created on this path.
    if !caller.matches_email(&invitation.email) {
        return Err(ServiceError::email_mismatch());
    }

    // 4. Mirror the caller into the users table; the membership row
    //    references it.
    let users = UserRepository::new(ctx.pool.clone());
    let user = User::new(caller.id.clone(), caller.email.clone(), caller.name.clone());
    users.upsert(&user).await?;

    // 5. First write wins: an existing membership keeps its role, and a
    //    concurrent accept that lands first is left in place.
    let existing = memberships
        .find_by_user_and_project(&caller.id, invitation.project_id)
        .await?;
    if existing.is_none() {
        let membership = Membership::new(caller.id.clone(), invitation.project_id, invitation.role);
        if let Err(error) = memberships.create(&membership).await {
            if !error.is_unique_violation() {
                return Err(error.into());
            }
            log::debug!(
                "Membership for '{}' on project {} created concurrently, keeping it",
                caller.id,
                invitation.project_id
            );
        }
    }

    // 6. The flag flips last and exactly once. A racing accept that beat
    //    us to it already did the membership step, so this is still a
    //    success.
    let flipped = invitations.mark_accepted(invitation.id).await?;
    if !flipped {
        log::debug!("Invitation {} was accepted concurrently", invitation.id);
    }

    // 7. The roster changed for every member's view of the project.
    let member_ids = memberships
        .find_user_ids_by_project(invitation.project_id)
        .await?;
    let mut keys_out = vec![
        keys::project_members(invitation.project_id),
        keys::user_projects(&caller.id),
    ];
    keys_out.extend(invalidation::detail_keys(&member_ids, invitation.project_id));
    ctx.cache.invalidate(&keys_out).await;

    log::info!(
        "User '{}' accepted invitation {} to project {}",
        caller.id,
        invitation.id,
        invitation.project_id
    );
    Ok(AcceptedInvitation {
        project_id: invitation.project_id,
    })
}

/// 32 random bytes, hex-encoded: 64 characters of acceptance credential.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}
