//! Brevo transactional email notifier.

use std::time::Duration;

use focos_report::Bulletin;
use serde::{Deserialize, Serialize};

use crate::{Mailbox, NotifyError, Notifier};

/// Brevo endpoint for transactional email.
pub const BREVO_EMAIL_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Environment variable holding the Brevo API key.
pub const API_KEY_ENV: &str = "BREVO_API_KEY";

/// Environment variable overriding the sender address.
pub const SENDER_EMAIL_ENV: &str = "SENDER_EMAIL";

/// Environment variable adding comma-separated recipient addresses.
pub const RECIPIENTS_ENV: &str = "FOCOS_RECIPIENTS";

/// Sends bulletins as email through the Brevo HTTP API.
pub struct BrevoNotifier {
    api_key: String,
    sender: Mailbox,
    recipients: Vec<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for BrevoNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrevoNotifier")
            .field("sender", &self.sender)
            .field("recipients", &self.recipients)
            .finish_non_exhaustive()
    }
}

/// Brevo request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoEmail<'a> {
    sender: BrevoContact<'a>,
    to: Vec<BrevoContact<'a>>,
    subject: &'a str,
    text_content: &'a str,
    html_content: &'a str,
}

#[derive(Serialize)]
struct BrevoContact<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Brevo error response body.
#[derive(Deserialize)]
struct BrevoError {
    message: String,
}

impl BrevoNotifier {
    /// Creates a notifier.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NoRecipients`] if `recipients` is empty, or
    /// [`NotifyError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        sender: Mailbox,
        recipients: Vec<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        if recipients.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            sender,
            recipients,
            client,
        })
    }

    /// Creates a notifier from the environment.
    ///
    /// Reads the API key from [`API_KEY_ENV`]. [`SENDER_EMAIL_ENV`], when
    /// set, replaces the sender address, and [`RECIPIENTS_ENV`] adds to
    /// `recipients`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingApiKey`] if the API key is unset, or
    /// any [`Self::new`] error.
    pub fn from_env(
        mut sender: Mailbox,
        recipients: Vec<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| NotifyError::MissingApiKey)?;

        if let Ok(email) = std::env::var(SENDER_EMAIL_ENV) {
            sender.email = email;
        }

        let extra = std::env::var(RECIPIENTS_ENV).unwrap_or_default();
        let recipients = merge_recipients(recipients, &extra);

        Self::new(api_key, sender, recipients, timeout)
    }

    fn request_body<'a>(&'a self, bulletin: &'a Bulletin) -> BrevoEmail<'a> {
        BrevoEmail {
            sender: BrevoContact {
                email: &self.sender.email,
                name: self.sender.name.as_deref(),
            },
            to: self
                .recipients
                .iter()
                .map(|email| BrevoContact { email, name: None })
                .collect(),
            subject: &bulletin.subject,
            text_content: &bulletin.text,
            html_content: &bulletin.html,
        }
    }
}

/// Appends the comma-separated addresses in `extra` to `recipients`,
/// skipping blanks and duplicates.
#[must_use]
pub fn merge_recipients(mut recipients: Vec<String>, extra: &str) -> Vec<String> {
    for email in extra.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        if !recipients.iter().any(|r| r == email) {
            recipients.push(email.to_string());
        }
    }
    recipients
}

#[async_trait::async_trait]
impl Notifier for BrevoNotifier {
    async fn send(&self, bulletin: &Bulletin) -> Result<(), NotifyError> {
        log::info!(
            "Sending bulletin to {} recipient(s) via Brevo",
            self.recipients.len()
        );

        let resp = self
            .client
            .post(BREVO_EMAIL_URL)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("api-key", &self.api_key)
            .json(&self.request_body(bulletin))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BrevoError>(&body)
                .map_or(body, |err| err.message);
            log::error!("Brevo rejected the bulletin: HTTP {status}: {message}");
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        log::info!("Bulletin sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier(recipients: &[&str]) -> BrevoNotifier {
        BrevoNotifier::new(
            "key".to_string(),
            Mailbox {
                email: "bot@example.org".to_string(),
                name: Some("Foco nos Focos".to_string()),
            },
            recipients.iter().map(ToString::to_string).collect(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn builds_brevo_request_body() {
        let notifier = notifier(&["a@example.org", "b@example.org"]);
        let bulletin = Bulletin {
            subject: "Hotspots".to_string(),
            text: "plain".to_string(),
            html: "<p>rich</p>".to_string(),
        };

        let body = serde_json::to_value(notifier.request_body(&bulletin)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "sender": { "email": "bot@example.org", "name": "Foco nos Focos" },
                "to": [{ "email": "a@example.org" }, { "email": "b@example.org" }],
                "subject": "Hotspots",
                "textContent": "plain",
                "htmlContent": "<p>rich</p>",
            })
        );
    }

    #[test]
    fn requires_recipients() {
        let result = BrevoNotifier::new(
            "key".to_string(),
            Mailbox {
                email: "bot@example.org".to_string(),
                name: None,
            },
            Vec::new(),
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(NotifyError::NoRecipients)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let rendered = format!("{:?}", notifier(&["a@example.org"]));
        assert!(!rendered.contains("key\""));
        assert!(rendered.contains("a@example.org"));
    }

    #[test]
    fn merges_extra_recipients() {
        let merged = merge_recipients(
            vec!["a@example.org".to_string()],
            " b@example.org, ,a@example.org,c@example.org ",
        );
        assert_eq!(merged, vec!["a@example.org", "b@example.org", "c@example.org"]);
    }

    #[test]
    fn empty_extra_keeps_recipients() {
        let merged = merge_recipients(vec!["a@example.org".to_string()], "");
        assert_eq!(merged, vec!["a@example.org"]);
    }
}
