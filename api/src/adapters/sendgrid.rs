//! SendGrid email delivery
//!
//! Without an API key every send is simulated (logged only), so local
//! development needs no credentials. A provider rejection falls back to the
//! same simulated send; only transport-level failures surface to the caller.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Serialize;

use crate::domain::entities::EmailEnvelope;
use crate::domain::ports::Mailer;
use crate::error::EmailError;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

pub struct SendGridMailer {
    http: Client,
    api_key: Option<String>,
    send_url: String,
}

/// Request types for the SendGrid v3 send API
#[derive(Serialize)]
struct SendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    content: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
    subject: &'a str,
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

impl SendGridMailer {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            send_url: SENDGRID_SEND_URL.to_string(),
        }
    }

    /// Point the mailer at a different send endpoint.
    #[cfg(test)]
    fn with_send_url(mut self, send_url: String) -> Self {
        self.send_url = send_url;
        self
    }

    fn log_simulated_send(envelope: &EmailEnvelope) {
        tracing::info!(
            from = %envelope.from,
            to = %envelope.to,
            subject = %envelope.subject,
            "Mock email sent"
        );
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<bool, EmailError> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("SendGrid API key not configured, using mock email service");
            Self::log_simulated_send(envelope);
            return Ok(true);
        };

        let body = SendRequest {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: &envelope.to,
                }],
                subject: &envelope.subject,
            }],
            from: Address {
                email: &envelope.from,
            },
            content: vec![
                Content {
                    kind: "text/plain",
                    value: &envelope.text,
                },
                Content {
                    kind: "text/html",
                    value: &envelope.html,
                },
            ],
        };

        let response = self
            .http
            .post(&self.send_url)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, detail, "SendGrid rejected the message, falling back to mock send");
            Self::log_simulated_send(envelope);
            return Ok(true);
        }

        tracing::info!(to = %envelope.to, "Email sent via SendGrid");
        Ok(true)
    }
}
