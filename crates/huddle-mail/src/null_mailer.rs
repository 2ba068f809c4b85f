use crate::mailer::Mailer;
use crate::outbound_email::OutboundEmail;
use crate::Result;

use async_trait::async_trait;

/// Stand-in transport for deployments without SMTP.
///
/// Every send succeeds after logging the recipient and subject, so flows
/// that require delivery before persisting still make progress.
pub struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        log::warn!(
            "SMTP is not configured, logging email instead of sending: to '{}', subject '{}'",
            email.to,
            email.subject
        );
        Ok(())
    }
}
