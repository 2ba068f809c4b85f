use crate::outbound_email::OutboundEmail;
use crate::Result;

use async_trait::async_trait;

/// Email delivery seam.
///
/// Callers treat a returned error as "the message did not go out". That
/// contract matters for invitation flows, which refuse to record an
/// invitation whose email never left.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<()>;
}
