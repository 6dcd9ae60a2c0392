//! `POST /api/contact`: validate, compose, dispatch once.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use studio_protocol::{
    project_type_label, ContactRequest, ContactResponse, MSG_INTERNAL, MSG_MISSING_FIELDS,
    MSG_SEND_FAILED,
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::MailSettings;
use crate::email::{EmailProvider, OutgoingEmail, ProviderError};
use crate::AppState;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("name, email, and message are required")]
    Validation,
    #[error("email provider reported a failure: {0}")]
    Provider(#[source] ProviderError),
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("email provider unavailable: {0}")]
    ProviderUnavailable(#[source] ProviderError),
    #[error("email provider did not answer within {0:?}")]
    ProviderTimeout(Duration),
}

impl From<ProviderError> for ContactError {
    fn from(err: ProviderError) -> Self {
        if err.is_reported() {
            ContactError::Provider(err)
        } else {
            ContactError::ProviderUnavailable(err)
        }
    }
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Validation => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the caller is told. Internal detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::Validation => MSG_MISSING_FIELDS,
            ContactError::Provider(_) => MSG_SEND_FAILED,
            ContactError::MalformedBody(_)
            | ContactError::ProviderUnavailable(_)
            | ContactError::ProviderTimeout(_) => MSG_INTERNAL,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match &self {
            ContactError::Validation => warn!(error = %self, "contact submission rejected"),
            _ => error!(error = %self, "contact submission failed"),
        }
        let body = ContactResponse::failed(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: &'static str,
    pub message: String,
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = ContactError;

    fn try_from(req: ContactRequest) -> Result<Self, Self::Error> {
        if req.name.is_empty() || req.email.is_empty() || req.message.is_empty() {
            return Err(ContactError::Validation);
        }
        Ok(Self {
            project_type: project_type_label(&req.project_type),
            name: req.name,
            email: req.email,
            message: req.message,
        })
    }
}

pub fn compose_email(submission: &ContactSubmission, mail: &MailSettings) -> OutgoingEmail {
    let html = format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Project Type:</strong> {project}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>\n",
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        project = submission.project_type,
        message = escape_html(&submission.message).replace('\n', "<br>"),
    );
    OutgoingEmail {
        from: mail.from.clone(),
        to: mail.to.clone(),
        reply_to: submission.email.clone(),
        subject: format!("New Contact Form Submission from {}", submission.name),
        html,
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub async fn submit_contact<P: EmailProvider>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Json<ContactResponse>, ContactError> {
    let request: ContactRequest = serde_json::from_slice(&body)?;
    let submission = ContactSubmission::try_from(request)?;
    let email = compose_email(&submission, &state.mail);

    let receipt = tokio::time::timeout(state.provider_timeout, state.provider.send(email))
        .await
        .map_err(|_| ContactError::ProviderTimeout(state.provider_timeout))??;

    info!(id = %receipt.id, project_type = submission.project_type, "contact email dispatched");
    Ok(Json(ContactResponse::sent(receipt.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_router;
    use crate::email::SendReceipt;
    use axum::{
        body::Body,
        http::{header, Request},
    };
    use http_body_util::BodyExt;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Clone, Copy)]
    enum Behavior {
        Accept,
        Reject,
        Undecodable,
        Stall,
    }

    struct FakeProvider {
        behavior: Behavior,
        sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    }

    impl EmailProvider for FakeProvider {
        async fn send(&self, email: OutgoingEmail) -> Result<SendReceipt, ProviderError> {
            self.sent.lock().unwrap().push(email);
            match self.behavior {
                Behavior::Accept => Ok(SendReceipt {
                    id: "re_123".to_string(),
                }),
                Behavior::Reject => Err(ProviderError::Rejected {
                    status: 403,
                    detail: "domain not verified".to_string(),
                }),
                Behavior::Undecodable => Err(ProviderError::Decode(
                    serde_json::from_str::<SendReceipt>("not json").unwrap_err(),
                )),
                Behavior::Stall => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok(SendReceipt {
                        id: "late".to_string(),
                    })
                }
            }
        }
    }

    fn mail() -> MailSettings {
        MailSettings {
            from: "Contact Form <onboarding@resend.dev>".to_string(),
            to: vec!["hello@dimario.dev".to_string()],
        }
    }

    fn router_with(behavior: Behavior) -> (axum::Router, Arc<Mutex<Vec<OutgoingEmail>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let provider = FakeProvider {
            behavior,
            sent: sent.clone(),
        };
        let state = AppState::new(provider, mail(), Duration::from_millis(50));
        (api_router(state), sent)
    }

    async fn post(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const VALID: &str = r#"{"name":"Ada","email":"ada@example.com","projectType":"web","message":"Hello"}"#;

    #[tokio::test]
    async fn valid_submission_sends_exactly_one_email() {
        let (app, sent) = router_with(Behavior::Accept);
        let (status, body) = post(app, VALID).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "success": true, "id": "re_123" }));
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "ada@example.com");
        assert_eq!(sent[0].to, vec!["hello@dimario.dev".to_string()]);
        assert_eq!(sent[0].subject, "New Contact Form Submission from Ada");
        assert!(sent[0].html.contains("Web Development"));
    }

    #[tokio::test]
    async fn missing_required_fields_never_reach_provider() {
        let bodies = [
            r#"{"email":"a@b.c","message":"m"}"#,
            r#"{"name":"n","message":"m"}"#,
            r#"{"name":"n","email":"a@b.c"}"#,
            r#"{"name":"","email":"a@b.c","message":"m"}"#,
            r#"{"name":"n","email":null,"message":"m"}"#,
            r#"{"projectType":"web"}"#,
            r#"{}"#,
        ];
        for body in bodies {
            let (app, sent) = router_with(Behavior::Accept);
            let (status, json) = post(app, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["error"], MSG_MISSING_FIELDS);
            assert!(sent.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn provider_rejection_is_a_fixed_500() {
        let (app, sent) = router_with(Behavior::Reject);
        let (status, json) = post(app, VALID).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": MSG_SEND_FAILED }));
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unexpected_failures_hide_detail() {
        let (app, _) = router_with(Behavior::Undecodable);
        let (status, json) = post(app, VALID).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": MSG_INTERNAL }));

        let (app, sent) = router_with(Behavior::Accept);
        let (status, json) = post(app, "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], MSG_INTERNAL);
        assert!(sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stalled_provider_times_out() {
        let (app, _) = router_with(Behavior::Stall);
        let (status, json) = post(app, VALID).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], MSG_INTERNAL);
    }

    fn submission(project: &str, message: &str) -> ContactSubmission {
        ContactSubmission::try_from(ContactRequest {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            project_type: project.into(),
            message: message.into(),
        })
        .unwrap()
    }

    #[test]
    fn project_type_defaults_to_not_specified() {
        assert_eq!(submission("app", "x").project_type, "App Development");
        assert_eq!(submission("consultation", "x").project_type, "Web Consultation");
        assert_eq!(submission("", "x").project_type, "Not specified");
        assert_eq!(submission("ios", "x").project_type, "Not specified");
    }

    #[test]
    fn newlines_become_line_breaks() {
        for k in 0..5 {
            let message = vec!["line"; k + 1].join("\n");
            let email = compose_email(&submission("web", &message), &mail());
            assert_eq!(email.html.matches("<br>").count(), k);
        }
    }

    #[test]
    fn user_text_is_escaped() {
        let email = compose_email(&submission("web", "<script>x</script>\n& more"), &mail());
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;x&lt;/script&gt;<br>&amp; more"));
    }
}
