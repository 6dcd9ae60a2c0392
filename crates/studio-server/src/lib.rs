//! Contact endpoint and the pieces it is built from.

pub mod config;
pub mod contact;
pub mod email;

use std::{sync::Arc, time::Duration};

use axum::{routing::post, Router};
use studio_protocol::CONTACT_PATH;

use crate::config::MailSettings;
use crate::contact::submit_contact;
use crate::email::EmailProvider;

/// Immutable per-process state shared by every request.
pub struct AppState<P> {
    pub provider: Arc<P>,
    pub mail: Arc<MailSettings>,
    pub provider_timeout: Duration,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            mail: self.mail.clone(),
            provider_timeout: self.provider_timeout,
        }
    }
}

impl<P: EmailProvider> AppState<P> {
    pub fn new(provider: P, mail: MailSettings, provider_timeout: Duration) -> Self {
        Self {
            provider: Arc::new(provider),
            mail: Arc::new(mail),
            provider_timeout,
        }
    }
}

pub fn api_router<P: EmailProvider>(state: AppState<P>) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(submit_contact::<P>))
        .with_state(state)
}
