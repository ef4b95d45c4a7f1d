#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Bulletin delivery.
//!
//! A [`Notifier`] hands a composed [`Bulletin`] to some outside channel.
//! [`BrevoNotifier`] emails it through the Brevo HTTP API;
//! [`LogNotifier`] only writes it to the log, for dry runs.

pub mod brevo;

use async_trait::async_trait;
use focos_report::Bulletin;
use serde::{Deserialize, Serialize};

pub use brevo::BrevoNotifier;

/// Errors that can occur while delivering a bulletin.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// No API key was configured.
    #[error("Missing API key: set the {} environment variable", brevo::API_KEY_ENV)]
    MissingApiKey,

    /// The recipient list is empty.
    #[error("No recipients configured")]
    NoRecipients,

    /// The request could not be sent.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The delivery service answered with a non-success status.
    #[error("Delivery rejected (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message reported by the service.
        message: String,
    },
}

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    /// Email address.
    pub email: String,
    /// Display name shown to recipients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Delivers bulletins.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `bulletin`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the bulletin could not be delivered.
    async fn send(&self, bulletin: &Bulletin) -> Result<(), NotifyError>;
}

/// Writes bulletins to the log instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, bulletin: &Bulletin) -> Result<(), NotifyError> {
        log::info!("Dry run, not sending \"{}\"", bulletin.subject);
        log::info!("{}", bulletin.text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        let bulletin = Bulletin {
            subject: "Hotspots".to_string(),
            text: "text".to_string(),
            html: "<p>html</p>".to_string(),
        };
        assert!(LogNotifier.send(&bulletin).await.is_ok());
    }

    #[test]
    fn rejected_error_names_status() {
        let err = NotifyError::Rejected {
            status: 401,
            message: "Key not found".to_string(),
        };
        assert_eq!(err.to_string(), "Delivery rejected (HTTP 401): Key not found");
    }

    #[test]
    fn missing_key_error_names_variable() {
        assert!(NotifyError::MissingApiKey.to_string().contains("BREVO_API_KEY"));
    }
}
