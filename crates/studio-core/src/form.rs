//! Contact form state machine.
//!
//! `idle -> loading -> success | error`, with `success -> idle` on "send
//! another" and `error -> loading` on a fresh submit. While a submission is
//! in flight further submits are inert, which is what keeps a single form
//! from issuing duplicate requests.

use std::cell::RefCell;
use std::future::Future;

use studio_protocol::{ContactRequest, ContactResponse};

pub const FALLBACK_REJECTED: &str = "Failed to send message";
pub const FALLBACK_TRANSPORT: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    ProjectType,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The server answered with a non-success status.
    Rejected { message: Option<String> },
    /// No usable answer: network error, timeout, or an unreadable body.
    Transport,
}

impl SubmitFailure {
    pub fn user_message(&self) -> String {
        match self {
            SubmitFailure::Rejected { message } => {
                coalesce([message.as_deref()], FALLBACK_REJECTED)
            }
            SubmitFailure::Transport => FALLBACK_TRANSPORT.to_string(),
        }
    }
}

/// First non-empty candidate, or `fallback`.
pub fn coalesce<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>, fallback: &str) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactRequest,
    status: FormStatus,
    error_message: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactRequest {
        &self.fields
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::ProjectType => &self.fields.project_type,
            FormField::Message => &self.fields.message,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Loading
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::ProjectType => self.fields.project_type = value,
            FormField::Message => self.fields.message = value,
        }
    }

    /// Enters `loading` and hands back the payload to send. Returns `None`
    /// when a submission is already in flight or the success panel is up.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        match self.status {
            FormStatus::Idle | FormStatus::Error => {
                self.status = FormStatus::Loading;
                self.error_message = None;
                Some(self.fields.clone())
            }
            FormStatus::Loading | FormStatus::Success => None,
        }
    }

    /// Settles an in-flight submission. Ignored unless `loading`.
    pub fn complete(&mut self, outcome: Result<(), SubmitFailure>) {
        if self.status != FormStatus::Loading {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactRequest::default();
                self.status = FormStatus::Success;
            }
            Err(failure) => {
                self.error_message = Some(failure.user_message());
                self.status = FormStatus::Error;
            }
        }
    }

    /// "Send another message": back to `idle` from the success panel.
    pub fn reset(&mut self) -> bool {
        if self.status == FormStatus::Success {
            self.status = FormStatus::Idle;
            true
        } else {
            false
        }
    }
}

/// Turns an HTTP status + body into the controller's outcome.
pub fn interpret_response(ok: bool, body: &str) -> Result<(), SubmitFailure> {
    let parsed = serde_json::from_str::<ContactResponse>(body);
    match (ok, parsed) {
        (true, Ok(_)) => Ok(()),
        (true, Err(_)) => Err(SubmitFailure::Transport),
        (false, Ok(response)) => Err(SubmitFailure::Rejected {
            message: response.error_message().map(str::to_string),
        }),
        (false, Err(_)) => Err(SubmitFailure::Rejected { message: None }),
    }
}

/// Sends a contact request to the endpoint.
pub trait ContactTransport {
    fn post(&self, request: ContactRequest) -> impl Future<Output = Result<(), SubmitFailure>>;
}

/// Somewhere a [`ContactForm`] lives: a `RefCell` in tests, a reactive signal
/// in the browser. Returns `None` if the form is gone.
pub trait FormCell {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormCell for RefCell<ContactForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Runs one submission through `transport`. Returns whether a request was
/// actually issued. The form is not borrowed across the await.
pub async fn submit<C, T>(form: &C, transport: &T) -> bool
where
    C: FormCell + ?Sized,
    T: ContactTransport + ?Sized,
{
    let Some(Some(request)) = form.update_form(ContactForm::begin_submit) else {
        return false;
    };
    let outcome = transport.post(request).await;
    form.update_form(|f| f.complete(outcome));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::sync::oneshot;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "Ada Lovelace");
        form.set_field(FormField::Email, "ada@example.com");
        form.set_field(FormField::ProjectType, "web");
        form.set_field(FormField::Message, "Need a site.\nSoon.");
        form
    }

    struct GatedTransport {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<Result<(), SubmitFailure>>>>,
    }

    impl GatedTransport {
        fn new(rx: oneshot::Receiver<Result<(), SubmitFailure>>) -> Self {
            Self {
                calls: Cell::new(0),
                gate: RefCell::new(Some(rx)),
            }
        }
    }

    impl ContactTransport for GatedTransport {
        async fn post(&self, _request: ContactRequest) -> Result<(), SubmitFailure> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.unwrap_or(Err(SubmitFailure::Transport)),
                None => Err(SubmitFailure::Transport),
            }
        }
    }

    struct Immediate(Result<(), SubmitFailure>);

    impl ContactTransport for Immediate {
        async fn post(&self, _request: ContactRequest) -> Result<(), SubmitFailure> {
            self.0.clone()
        }
    }

    #[test]
    fn begin_submit_enters_loading_and_clears_error() {
        let mut form = filled();
        form.begin_submit();
        form.complete(Err(SubmitFailure::Transport));
        assert_eq!(form.error_message(), Some(FALLBACK_TRANSPORT));

        let payload = form.begin_submit().expect("error state accepts a new submit");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(form.status(), FormStatus::Loading);
        assert_eq!(form.error_message(), None);
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn success_clears_fields_and_reset_returns_to_idle() {
        let mut form = filled();
        form.begin_submit();
        form.complete(Ok(()));
        assert_eq!(form.status(), FormStatus::Success);
        for field in [
            FormField::Name,
            FormField::Email,
            FormField::ProjectType,
            FormField::Message,
        ] {
            assert_eq!(form.field(field), "");
        }
        assert!(form.begin_submit().is_none());
        assert!(form.reset());
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(!form.reset());
    }

    #[test]
    fn failure_keeps_fields_and_reports_message() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submit();
        form.complete(Err(SubmitFailure::Rejected {
            message: Some("Name, email, and message are required".into()),
        }));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.fields(), &before);
        assert_eq!(
            form.error_message(),
            Some("Name, email, and message are required")
        );
    }

    #[test]
    fn complete_outside_loading_is_ignored() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.field(FormField::Name), "Ada Lovelace");
    }

    #[test]
    fn fallback_chain() {
        assert_eq!(
            SubmitFailure::Rejected { message: None }.user_message(),
            FALLBACK_REJECTED
        );
        assert_eq!(
            SubmitFailure::Rejected {
                message: Some(String::new())
            }
            .user_message(),
            FALLBACK_REJECTED
        );
        assert_eq!(SubmitFailure::Transport.user_message(), FALLBACK_TRANSPORT);
        assert_eq!(coalesce([None, Some(""), Some("b")], "z"), "b");
    }

    #[test]
    fn responses_are_interpreted_by_status_then_body() {
        assert_eq!(
            interpret_response(true, r#"{"success":true,"id":"re_1"}"#),
            Ok(())
        );
        assert_eq!(
            interpret_response(true, "<html>"),
            Err(SubmitFailure::Transport)
        );
        assert_eq!(
            interpret_response(false, r#"{"error":"Failed to send email"}"#),
            Err(SubmitFailure::Rejected {
                message: Some("Failed to send email".into())
            })
        );
        assert_eq!(
            interpret_response(false, "Bad Gateway"),
            Err(SubmitFailure::Rejected { message: None })
        );
    }

    #[tokio::test]
    async fn submit_while_loading_issues_no_second_request() {
        let form = RefCell::new(filled());
        let (tx, rx) = oneshot::channel();
        let transport = GatedTransport::new(rx);

        let first = submit(&form, &transport);
        let second = async {
            let issued = submit(&form, &transport).await;
            assert_eq!(form.borrow().status(), FormStatus::Loading);
            let _ = tx.send(Ok(()));
            issued
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first);
        assert!(!second);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(form.borrow().status(), FormStatus::Success);
    }

    #[tokio::test]
    async fn submit_reports_rejection_into_form() {
        let form = RefCell::new(filled());
        let transport = Immediate(Err(SubmitFailure::Rejected {
            message: Some("Internal server error".into()),
        }));
        assert!(submit(&form, &transport).await);
        let form = form.borrow();
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.error_message(), Some("Internal server error"));
        assert_eq!(form.field(FormField::Message), "Need a site.\nSoon.");
    }
}
