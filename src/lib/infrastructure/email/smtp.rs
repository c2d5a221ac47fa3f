//! SMTP email transport

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Message, SmtpTransport, Transport,
};
use tracing::debug;

use crate::domain::mail::{Mailer, SendEmailError};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST", default_value = "localhost")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT", default_value = "25")]
    pub port: u16,

    /// The SMTP username, when the relay wants authentication
    #[clap(long, env = "SMTP_USER")]
    pub username: Option<String>,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: Option<String>,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,

    /// Seconds to wait on the relay before giving up
    #[clap(long, env = "SMTP_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SMTPConfig) -> Self {
        Self { config }
    }

    /// Build the relay transport described by the configuration
    pub fn transport(&self) -> Result<SmtpTransport> {
        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        let mut relay = relay
            .port(self.config.port)
            .timeout(Some(Duration::from_secs(self.config.timeout_secs)))
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ));

        if let (Some(username), Some(password)) = (&self.config.username, &self.config.password) {
            relay = relay.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(relay.build())
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn deliver(&self, message: &Message) -> Result<(), SendEmailError> {
        debug!("submitting to SMTP relay {}", self.config.host);

        match self.transport()?.send(message) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
