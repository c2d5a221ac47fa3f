//! Email transport implementations

use clap::{Parser, ValueEnum};

pub mod sendmail;
pub mod smtp;

/// Which submission facility messages are handed to
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// Submit through an SMTP relay
    Smtp,

    /// Pipe to a local sendmail-compatible command
    Sendmail,
}

/// Mailer configuration shared by every transport
#[derive(Clone, Debug, Parser)]
pub struct MailConfig {
    /// Fallback sender address used when a message carries no sender
    #[clap(long, env = "MAIL_SENDER")]
    pub sender: String,

    /// Display name paired with the fallback sender
    #[clap(long, env = "MAIL_SENDER_NAME")]
    pub sender_name: Option<String>,

    /// The transport to submit through
    #[clap(long, env = "MAIL_TRANSPORT", value_enum, default_value = "smtp")]
    pub transport: TransportKind,
}
