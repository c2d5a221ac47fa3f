//! Outbound mail module

mod email_address;
mod errors;
mod mailer;
mod message;
mod sanitize;
mod service;

pub use email_address::{EmailAddress, EmailAddressError};
pub use errors::SendEmailError;
pub use mailer::Mailer;
pub use message::{OutboundEmail, Sender};
pub use sanitize::{sanitize_address, sanitize_header_value};
pub use service::MailerService;
