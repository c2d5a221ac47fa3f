//! Sendmail transport

use async_trait::async_trait;
use clap::Parser;
use lettre::{Message, SendmailTransport, Transport};
use tracing::debug;

use crate::domain::mail::{Mailer, SendEmailError};

/// Sendmail configuration
#[derive(Clone, Debug, Parser)]
pub struct SendmailConfig {
    /// The sendmail-compatible command messages are piped to
    #[clap(long, env = "SENDMAIL_COMMAND", default_value = "/usr/sbin/sendmail")]
    pub command: String,
}

/// Local MTA mailer piping messages to a sendmail-compatible command
#[derive(Debug, Clone)]
pub struct SendmailMailer {
    config: SendmailConfig,
}

impl SendmailMailer {
    /// Create a new sendmail mailer
    pub fn new(config: SendmailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> SendmailTransport {
        SendmailTransport::new_with_command(self.config.command.clone())
    }
}

#[async_trait]
impl Mailer for SendmailMailer {
    async fn deliver(&self, message: &Message) -> Result<(), SendEmailError> {
        debug!("piping message to {}", self.config.command);

        match self.transport().send(message) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
