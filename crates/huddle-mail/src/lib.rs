pub mod error;
pub mod mailer;
pub mod null_mailer;
pub mod outbound_email;
pub mod smtp_mailer;
pub mod templates;

pub use error::{MailError, Result};
pub use mailer::Mailer;
pub use null_mailer::NullMailer;
pub use outbound_email::OutboundEmail;
pub use smtp_mailer::{SmtpMailer, SmtpSettings};
