//! Outbound email value objects

use lettre::{
    message::{Mailbox, SinglePart},
    Message,
};

use crate::domain::mail::{
    email_address::EmailAddress, errors::SendEmailError, sanitize::sanitize_header_value,
};

/// Sender identity carried in the From header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    address: EmailAddress,
    name: Option<String>,
}

impl Sender {
    /// Builds a sender identity from raw input, sanitizing both parts.
    ///
    /// The address goes through the address policy and must still look like
    /// an email address afterwards. The display name goes through the
    /// header-value policy; a name that sanitizes away to blank is dropped.
    pub fn sanitized(address: &str, name: Option<&str>) -> Result<Self, SendEmailError> {
        let address = EmailAddress::sanitized(address)?;
        let name = name
            .map(sanitize_header_value)
            .filter(|name| !name.trim().is_empty());

        Ok(Self { address, name })
    }

    /// The sender's email address
    pub fn address(&self) -> &EmailAddress {
        &self.address
    }

    /// The sender's display name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn mailbox(&self) -> Result<Mailbox, SendEmailError> {
        Ok(Mailbox::new(
            self.name.clone(),
            self.address.as_str().parse()?,
        ))
    }
}

/// A single outbound email, built per call and discarded after submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundEmail {
    to: EmailAddress,
    subject: String,
    html_body: String,
    from: Option<Sender>,
}

impl OutboundEmail {
    /// Validates and sanitizes the three required fields.
    ///
    /// Emptiness is checked on the raw inputs before anything is altered.
    /// The recipient goes through the address policy, the subject through
    /// the header-value policy. The body is carried as-is: it stays
    /// structurally separate from the headers when the message is
    /// assembled, so line breaks in it are content, not a header hazard.
    ///
    /// # Arguments
    /// * `to` - Recipient email address.
    /// * `subject` - Email subject.
    /// * `message` - Email body (HTML or plain text).
    ///
    /// # Returns
    /// The sanitized email, [`SendEmailError::MissingParameter`] naming the
    /// first empty required field, or [`SendEmailError::InvalidEmail`] if
    /// the recipient cannot be made into an address.
    pub fn new(to: &str, subject: &str, message: &str) -> Result<Self, SendEmailError> {
        if to.is_empty() {
            return Err(SendEmailError::MissingParameter("to"));
        }

        if subject.is_empty() {
            return Err(SendEmailError::MissingParameter("subject"));
        }

        if message.is_empty() {
            return Err(SendEmailError::MissingParameter("message"));
        }

        Ok(Self {
            to: EmailAddress::sanitized(to)?,
            subject: sanitize_header_value(subject),
            html_body: message.to_string(),
            from: None,
        })
    }

    /// Attaches an explicit sender identity
    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.from = Some(sender);
        self
    }

    /// The sanitized recipient
    pub fn to(&self) -> &EmailAddress {
        &self.to
    }

    /// The sanitized subject line
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The HTML body
    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    /// The explicit sender, if one was attached
    pub fn sender(&self) -> Option<&Sender> {
        self.from.as_ref()
    }

    /// Assembles the typed wire message.
    ///
    /// The builder keeps headers and body structurally separate, so no
    /// value placed here can terminate a header line. The message carries
    /// exactly one From mailbox: the attached sender if present, otherwise
    /// `fallback`, and is emitted as a single `text/html; charset=utf-8`
    /// part with `MIME-Version: 1.0`.
    pub fn to_message(&self, fallback: &Sender) -> Result<Message, SendEmailError> {
        let from = match &self.from {
            Some(sender) => sender.mailbox()?,
            None => fallback.mailbox()?,
        };

        let message = Message::builder()
            .from(from)
            .to(Mailbox::new(None, self.to.as_str().parse()?))
            .subject(self.subject.clone())
            .singlepart(SinglePart::html(self.html_body.clone()))?;

        Ok(message)
    }
}
