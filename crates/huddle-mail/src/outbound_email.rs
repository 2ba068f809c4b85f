/// A fully rendered email, ready for a [`Mailer`](crate::Mailer) to deliver.
///
/// Both bodies are always present; transports send them as a multipart
/// alternative so clients pick whichever they can display.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutboundEmail {
    pub fn new(to: String, subject: String, text_body: String, html_body: String) -> Self {
        Self {
            to,
            subject,
            text_body,
            html_body,
        }
    }
}
