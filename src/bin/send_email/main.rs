#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Send a single email from the command line

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use postbox::{
    domain::mail::{Mailer, MailerService, Sender},
    infrastructure::email::{
        sendmail::{SendmailConfig, SendmailMailer},
        smtp::{SMTPConfig, SMTPMailer},
        MailConfig, TransportKind,
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// Recipient email address
    pub to: String,

    /// Email subject
    pub subject: String,

    /// Email body (HTML or plain text)
    pub body: String,

    /// Sender email address
    #[clap(long)]
    pub from: Option<String>,

    /// Sender display name
    #[clap(long)]
    pub from_name: Option<String>,

    /// The mailer configuration
    #[clap(flatten)]
    pub mail: MailConfig,

    /// The SMTP relay configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The sendmail configuration
    #[clap(flatten)]
    pub sendmail: SendmailConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let sender = Sender::sanitized(&args.mail.sender, args.mail.sender_name.as_deref())
        .context("MAIL_SENDER is not a usable sender address")?;

    let sent = match args.mail.transport {
        TransportKind::Smtp => {
            let mailer = Arc::new(SMTPMailer::new(args.smtp.clone()));

            send(MailerService::new(sender, mailer), &args).await
        }
        TransportKind::Sendmail => {
            let mailer = Arc::new(SendmailMailer::new(args.sendmail.clone()));

            send(MailerService::new(sender, mailer), &args).await
        }
    };

    if sent {
        println!("Email sent successfully!");

        Ok(())
    } else {
        println!("Failed to send email.");

        std::process::exit(1);
    }
}

async fn send<M: Mailer>(service: MailerService<M>, args: &Args) -> bool {
    service
        .send_email(
            &args.to,
            &args.subject,
            &args.body,
            args.from.as_deref(),
            args.from_name.as_deref(),
        )
        .await
}
