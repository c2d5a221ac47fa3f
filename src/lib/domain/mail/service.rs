//! Mailer service module

use std::sync::Arc;

use tracing::error;

use crate::domain::mail::{
    errors::SendEmailError,
    mailer::Mailer,
    message::{OutboundEmail, Sender},
};

/// Sends outbound emails through a configured transport
///
/// Holds the fallback sender identity, which always comes from
/// configuration, and the transport. Each send is independent; nothing is
/// retained across calls, so any number of concurrent callers is safe.
#[derive(Debug, Clone)]
pub struct MailerService<M>
where
    M: Mailer,
{
    sender: Sender,
    mailer: Arc<M>,
}

impl<M> MailerService<M>
where
    M: Mailer,
{
    /// Create a new mailer service with the configured fallback sender
    pub fn new(sender: Sender, mailer: Arc<M>) -> Self {
        Self { sender, mailer }
    }

    /// Assembles and submits one email.
    ///
    /// The transport is only invoked once the message has been assembled,
    /// so validation and sanitization failures never reach it.
    ///
    /// # Arguments
    /// * `email` - The validated [`OutboundEmail`] to submit.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] on acceptance, or an [`Err`] carrying
    /// the [`SendEmailError`] failure kind.
    pub async fn send(&self, email: &OutboundEmail) -> Result<(), SendEmailError> {
        let message = email.to_message(&self.sender)?;

        self.mailer.deliver(&message).await
    }

    /// Sends an email with the fire-and-forget boolean contract.
    ///
    /// Builds the request from raw parts, treating a blank `from` as
    /// absent. Every failure is absorbed locally: one diagnostic line is
    /// logged and `false` is returned, never a panic or an error.
    ///
    /// # Arguments
    /// * `to` - Recipient email address.
    /// * `subject` - Email subject.
    /// * `message` - Email body (HTML or plain text).
    /// * `from` - Sender email address (optional).
    /// * `from_name` - Sender display name (optional).
    ///
    /// # Returns
    /// `true` only if the transport reported acceptance.
    pub async fn send_email(
        &self,
        to: &str,
        subject: &str,
        message: &str,
        from: Option<&str>,
        from_name: Option<&str>,
    ) -> bool {
        match self.try_send(to, subject, message, from, from_name).await {
            Ok(()) => true,
            Err(err) => {
                error!("Failed to send email: {}", err);
                false
            }
        }
    }

    async fn try_send(
        &self,
        to: &str,
        subject: &str,
        message: &str,
        from: Option<&str>,
        from_name: Option<&str>,
    ) -> Result<(), SendEmailError> {
        let mut email = OutboundEmail::new(to, subject, message)?;

        if let Some(from) = from.map(str::trim).filter(|from| !from.is_empty()) {
            email = email.with_sender(Sender::sanitized(from, from_name)?);
        }

        self.send(&email).await
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use testresult::TestResult;

    use crate::domain::mail::tests::MockMailer;

    use super::*;

    fn service(mailer: MockMailer) -> MailerService<MockMailer> {
        let sender = Sender::sanitized("noreply@example.com", None).expect("fallback sender");

        MailerService::new(sender, Arc::new(mailer))
    }

    #[tokio::test]
    async fn test_send_email_success() {
        let mut mailer = MockMailer::new();

        mailer
            .expect_deliver()
            .times(1)
            .withf(|message| {
                message
                    .envelope()
                    .to()
                    .iter()
                    .any(|to| to.to_string() == "recipient@example.com")
            })
            .returning(|_| Ok(()));

        let sent = service(mailer)
            .send_email(
                "recipient@example.com",
                "Welcome to our website!",
                "<h1>Welcome!</h1>",
                None,
                None,
            )
            .await;

        assert!(sent);
    }

    #[tokio::test]
    async fn test_send_email_empty_required_field_skips_transport() {
        let mut mailer = MockMailer::new();

        mailer.expect_deliver().times(0);

        let service = service(mailer);

        assert!(!service.send_email("", "Hi", "Body", None, None).await);
        assert!(!service.send_email("a@example.com", "", "Body", None, None).await);
        assert!(!service.send_email("a@example.com", "Hi", "", None, None).await);
    }

    #[tokio::test]
    async fn test_send_email_rejection_returns_false() {
        let mut mailer = MockMailer::new();

        mailer
            .expect_deliver()
            .times(1)
            .returning(|_| Err(SendEmailError::Rejected(anyhow!("mailbox unavailable"))));

        let sent = service(mailer)
            .send_email("recipient@example.com", "Hi", "<p>Body</p>", None, None)
            .await;

        assert!(!sent);
    }

    #[tokio::test]
    async fn test_send_email_blank_from_falls_back_to_configured_sender() {
        let mut mailer = MockMailer::new();

        mailer
            .expect_deliver()
            .times(1)
            .withf(|message| {
                message.envelope().from().map(ToString::to_string)
                    == Some("noreply@example.com".to_string())
            })
            .returning(|_| Ok(()));

        let sent = service(mailer)
            .send_email(
                "recipient@example.com",
                "Hi",
                "<p>Body</p>",
                Some("   "),
                Some("Ignored"),
            )
            .await;

        assert!(sent);
    }

    #[tokio::test]
    async fn test_send_email_uses_provided_sender() {
        let mut mailer = MockMailer::new();

        mailer
            .expect_deliver()
            .times(1)
            .withf(|message| {
                message.envelope().from().map(ToString::to_string)
                    == Some("sender@example.com".to_string())
            })
            .returning(|_| Ok(()));

        let sent = service(mailer)
            .send_email(
                "recipient@example.com",
                "Hi",
                "<p>Body</p>",
                Some("sender@example.com"),
                Some("Postmaster"),
            )
            .await;

        assert!(sent);
    }

    #[tokio::test]
    async fn test_send_reports_rejection_kind() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_deliver()
            .times(1)
            .returning(|_| Err(SendEmailError::Rejected(anyhow!("relay refused"))));

        let email = OutboundEmail::new("recipient@example.com", "Hi", "<p>Body</p>")?;
        let result = service(mailer).send(&email).await;

        assert!(matches!(result, Err(SendEmailError::Rejected(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_invalid_sender_skips_transport() {
        let mut mailer = MockMailer::new();

        mailer.expect_deliver().times(0);

        let sent = service(mailer)
            .send_email(
                "recipient@example.com",
                "Hi",
                "<p>Body</p>",
                Some("not an address"),
                None,
            )
            .await;

        assert!(!sent);
    }
}
