//! Contact form submission and the email envelope derived from it.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Minimum length for the sender's name.
const MIN_NAME_LEN: usize = 2;
/// Minimum length for the message body.
const MIN_MESSAGE_LEN: usize = 10;

/// An inbound contact-form payload.
///
/// Lives for a single request and is never persisted. Missing fields
/// deserialize to empty strings so they surface as validation errors rather
/// than a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Check the field constraints, collecting every violation rather than
    /// stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::new(
                "name",
                "Name must be at least 2 characters",
            ));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Invalid email address"));
        }
        if self.message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::new(
                "message",
                "Message must be at least 10 characters",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
        .is_match(email)
}

/// The fully-formed email message derived from a contact submission.
///
/// Owned by the send operation and discarded after the delivery attempt.
#[derive(Debug, Clone)]
pub struct EmailEnvelope {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailEnvelope {
    /// Build the notification email for a contact submission.
    ///
    /// Field values are interpolated into both bodies verbatim; the HTML
    /// body does not escape HTML-special characters.
    pub fn contact_notification(msg: &ContactMessage, to: &str, from: &str) -> Self {
        let text = format!(
            "Portfolio Contact Form Submission\n\
             \n\
             From: {name} ({email})\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             ---\n\
             Reply to: {email}",
            name = msg.name,
            email = msg.email,
            message = msg.message,
        );

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1 style="margin: 0 0 20px; font-size: 24px;">Portfolio Contact</h1>
  <div style="padding: 16px; border: 1px solid #e2e8f0; border-radius: 8px; margin-bottom: 16px;">
    <p style="margin: 6px 0;"><strong>Name:</strong> {name}</p>
    <p style="margin: 6px 0;"><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
  </div>
  <div style="padding: 16px; border-left: 4px solid #4f46e5;">
    <h3 style="margin-top: 0;">Message:</h3>
    <p style="line-height: 1.6; white-space: pre-wrap;">{message}</p>
  </div>
  <p style="margin-top: 20px; color: #6b7280; font-size: 13px;">Reply directly to this email to respond</p>
</div>"#,
            name = msg.name,
            email = msg.email,
            message = msg.message,
        );

        Self {
            to: to.to_string(),
            from: from.to_string(),
            subject: format!("Portfolio Contact: Message from {}", msg.name),
            text,
            html,
        }
    }
}
