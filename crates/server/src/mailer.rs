use database::services::notifier::{MailError, MailTransport};
use log::info;

/// Default transport: delivery is handled by an external relay in
/// production; this stand-in validates the recipient shape and logs the
/// composed message so local runs stay self-contained.
pub struct LogMailer;

impl MailTransport for LogMailer {
    fn send(&self, recipient: &str, subject: &str, _body: &str) -> Result<(), MailError> {
        if !recipient.contains('@') {
            return Err(MailError::InvalidRecipient(format!(
                "missing @ in {recipient}"
            )));
        }

        info!("mail to {recipient}: {subject}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_recipients_are_accepted() {
        assert!(LogMailer.send("guest@example.com", "hi", "body").is_ok());
    }

    #[test]
    fn test_malformed_recipients_are_rejected() {
        assert!(matches!(
            LogMailer.send("not-an-address", "hi", "body"),
            Err(MailError::InvalidRecipient(_))
        ));
    }
}
