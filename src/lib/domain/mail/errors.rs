//! Error types for outbound mail

use lettre::address::AddressError;
use thiserror::Error;

use crate::domain::mail::email_address::EmailAddressError;

/// Errors that can occur while preparing or submitting an email
#[derive(Debug, Error)]
pub enum SendEmailError {
    /// A required parameter was empty
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// An address could not be sanitized into a usable mailbox
    #[error("Invalid email address")]
    InvalidEmail,

    /// The mail transport refused the submission
    #[error("Submission rejected by the mail transport")]
    Rejected(#[source] anyhow::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<EmailAddressError> for SendEmailError {
    fn from(_err: EmailAddressError) -> Self {
        SendEmailError::InvalidEmail
    }
}

impl From<AddressError> for SendEmailError {
    fn from(_err: AddressError) -> Self {
        SendEmailError::InvalidEmail
    }
}

impl From<lettre::error::Error> for SendEmailError {
    fn from(err: lettre::error::Error) -> Self {
        SendEmailError::UnknownError(err.into())
    }
}

impl From<lettre::transport::smtp::Error> for SendEmailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        SendEmailError::Rejected(err.into())
    }
}

impl From<lettre::transport::sendmail::Error> for SendEmailError {
    fn from(err: lettre::transport::sendmail::Error) -> Self {
        SendEmailError::Rejected(err.into())
    }
}
