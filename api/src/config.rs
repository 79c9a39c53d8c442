use std::env;

/// Address contact notifications are delivered to when no override is set.
const DEFAULT_CONTACT_ADDRESS: &str = "hello@example.dev";

#[derive(Clone)]
pub struct Config {
    /// SendGrid API key; absent means simulated sends only
    pub sendgrid_api_key: Option<String>,
    /// Sender address on outgoing contact notifications
    pub from_email: String,
    /// Recipient of contact notifications (the site owner)
    pub contact_recipient: String,
    /// GitHub token for higher rate limits
    pub github_token: Option<String>,
    /// Location of the résumé PDF served by the resume endpoints
    pub resume_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            sendgrid_api_key: env::var("SENDGRID_API_KEY")
                .or_else(|_| env::var("SENDGRID_KEY"))
                .ok()
                .filter(|k| !k.is_empty()),
            from_email: env::var("SENDGRID_FROM_EMAIL")
                .unwrap_or_else(|_| DEFAULT_CONTACT_ADDRESS.to_string()),
            contact_recipient: env::var("CONTACT_RECIPIENT")
                .unwrap_or_else(|_| DEFAULT_CONTACT_ADDRESS.to_string()),
            github_token: env::var("GITHUB_TOKEN")
                .or_else(|_| env::var("GITHUB_API_KEY"))
                .ok()
                .filter(|t| !t.is_empty()),
            resume_path: env::var("RESUME_PATH").unwrap_or_else(|_| "public/resume.pdf".to_string()),
        }
    }
}
