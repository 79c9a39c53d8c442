//! Contact intake pipeline
//!
//! Validates the submission, builds the notification envelope, and hands it
//! to the mailer. Delivery failures are logged and never surfaced to the
//! caller: any structurally valid payload gets a success envelope.

use std::sync::Arc;

use crate::domain::entities::{ContactMessage, EmailEnvelope};
use crate::domain::ports::Mailer;
use crate::error::AppError;

/// Outcome reported back for a structurally valid submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The mailer delivered (or simulated delivery of) the message
    Delivered,
    /// Delivery did not happen; the submission was still accepted
    Accepted,
}

impl ContactOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Delivered => "Message sent successfully! I'll get back to you soon.",
            Self::Accepted => "Message received! I'll get back to you soon.",
        }
    }
}

/// Service for relaying contact-form submissions to the site owner
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    recipient: String,
    from_address: String,
}

impl ContactService {
    pub fn new(mailer: Arc<dyn Mailer>, recipient: String, from_address: String) -> Self {
        Self {
            mailer,
            recipient,
            from_address,
        }
    }

    /// Validate and relay a submission.
    ///
    /// Returns `Err` only for validation failures; every delivery outcome
    /// maps to `Ok`.
    pub async fn submit(&self, msg: &ContactMessage) -> Result<ContactOutcome, AppError> {
        msg.validate().map_err(AppError::Validation)?;

        tracing::info!(name = %msg.name, email = %msg.email, "New contact form submission");

        let envelope =
            EmailEnvelope::contact_notification(msg, &self.recipient, &self.from_address);

        match self.mailer.send(&envelope).await {
            Ok(true) => {
                tracing::info!(to = %self.recipient, "Contact email delivered");
                Ok(ContactOutcome::Delivered)
            }
            Ok(false) => {
                tracing::warn!("Email service reported the message as undelivered");
                Ok(ContactOutcome::Accepted)
            }
            Err(e) => {
                tracing::error!("Email sending failed: {}", e);
                Ok(ContactOutcome::Accepted)
            }
        }
    }
}
