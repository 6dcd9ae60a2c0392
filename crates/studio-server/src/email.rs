//! Transactional email provider boundary.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ResendSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendReceipt {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered and refused the message.
    #[error("provider rejected message ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider reply could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn is_reported(&self) -> bool {
        matches!(self, ProviderError::Rejected { .. })
    }
}

pub trait EmailProvider: Send + Sync + 'static {
    fn send(
        &self,
        email: OutgoingEmail,
    ) -> impl Future<Output = Result<SendReceipt, ProviderError>> + Send;
}

/// Client for the Resend HTTP API.
#[derive(Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ResendFailure {
    message: String,
}

impl ResendClient {
    pub fn new(settings: &ResendSettings) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("studio-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
        })
    }
}

impl EmailProvider for ResendClient {
    async fn send(&self, email: OutgoingEmail) -> Result<SendReceipt, ProviderError> {
        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let detail = serde_json::from_str::<ResendFailure>(&body)
                .map(|failure| failure.message)
                .unwrap_or(body);
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outgoing_email_uses_provider_field_names() {
        let email = OutgoingEmail {
            from: "Contact Form <onboarding@resend.dev>".into(),
            to: vec!["hello@dimario.dev".into()],
            reply_to: "ada@example.com".into(),
            subject: "New Contact Form Submission from Ada".into(),
            html: "<p>hi</p>".into(),
        };
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["reply_to"], "ada@example.com");
        assert_eq!(json["to"][0], "hello@dimario.dev");
    }

    #[test]
    fn only_rejections_count_as_reported() {
        let rejected = ProviderError::Rejected {
            status: 422,
            detail: "invalid from".into(),
        };
        assert!(rejected.is_reported());

        let decode = serde_json::from_str::<SendReceipt>("{}").unwrap_err();
        assert!(!ProviderError::Decode(decode).is_reported());
    }
}
