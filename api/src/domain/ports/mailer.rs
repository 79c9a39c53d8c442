//! Email delivery port

use async_trait::async_trait;

use crate::domain::entities::EmailEnvelope;
use crate::error::EmailError;

/// Delivers a contact envelope to the site owner.
///
/// Implementations return `true` when the message was delivered or a
/// simulated send stood in for delivery, and may only error on a
/// transport-level failure.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<bool, EmailError>;
}
