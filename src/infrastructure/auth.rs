//! Request identity
//!
//! The authentication proxy in front of the engine verifies the session and
//! forwards the user id in a header (`X-User-Id` unless configured
//! otherwise). This module turns that header into an [`AuthPort`] for the
//! request. A missing or unusable header is an anonymous caller; rejecting
//! it is left to the services.

use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::application::ports::outbound::AuthPort;
use crate::domain::value_objects::UserId;
use crate::infrastructure::state::AppState;

/// Caller identity read from the request headers
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    user_id: Option<UserId>,
}

impl HeaderIdentity {
    pub fn from_headers(headers: &HeaderMap, header_name: &str) -> Self {
        let user_id = headers
            .get(header_name)
            .and_then(|v| v.to_str().ok())
            .and_then(|raw| match UserId::parse(raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::debug!("Ignoring {} header: {}", header_name, e);
                    None
                }
            });

        Self { user_id }
    }
}

#[async_trait]
impl AuthPort for HeaderIdentity {
    async fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}

impl FromRequestParts<Arc<AppState>> for HeaderIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(
            &parts.headers,
            &state.config.auth_user_header,
        ))
    }
}

/// Fixed identity for tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticIdentity(Option<UserId>);

#[cfg(test)]
impl StaticIdentity {
    pub fn signed_in(user_id: &str) -> Self {
        Self(Some(UserId::parse(user_id).expect("valid test user id")))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

#[cfg(test)]
#[async_trait]
impl AuthPort for StaticIdentity {
    async fn current_user_id(&self) -> Option<UserId> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_header_identity_reads_configured_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-id", HeaderValue::from_static("user_alice"));

        let identity = HeaderIdentity::from_headers(&headers, "x-user-id");
        assert_eq!(
            identity.current_user_id().await,
            Some(UserId::parse("user_alice").unwrap())
        );

        let other = HeaderIdentity::from_headers(&headers, "x-forwarded-user");
        assert_eq!(other.current_user_id().await, None);
    }

    #[tokio::test]
    async fn test_blank_header_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-id", HeaderValue::from_static("  "));

        let identity = HeaderIdentity::from_headers(&headers, "x-user-id");
        assert_eq!(identity.current_user_id().await, None);
    }
}
