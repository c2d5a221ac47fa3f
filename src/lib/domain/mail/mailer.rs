//! Mail transport boundary

use async_trait::async_trait;
use lettre::Message;

#[cfg(test)]
use mockall::mock;

use crate::domain::mail::errors::SendEmailError;

/// Mail submission facility
///
/// Implementations hand a fully assembled message to an external
/// collaborator (an SMTP relay, a local MTA, a cloud email API) and report
/// acceptance or rejection. Acceptance by the facility does not guarantee
/// eventual delivery. One call, one message, no state held across calls.
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Deliver an assembled message
    ///
    /// # Arguments
    /// * `message` - The message to submit.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] on acceptance, or an [`Err`] carrying
    /// the [`SendEmailError`] failure kind.
    async fn deliver(&self, message: &Message) -> Result<(), SendEmailError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn deliver(&self, message: &Message) -> Result<(), SendEmailError>;
    }
}
