use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use service_core::error::AppError;
use std::convert::Infallible;

use crate::{services::TokenClaims, AppState};

const BEARER_PREFIX: &str = "Bearer ";

/// Token part of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
}

/// Extractor for routes that require a verified bearer token.
pub struct AuthUser(pub TokenClaims);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("No token provided".to_string()))?;

        let state = AppState::from_ref(state);
        let claims = state.jwt.verify(token)?;

        Ok(AuthUser(claims))
    }
}

/// Like [`AuthUser`] but never rejects; absent or invalid tokens give `None`.
pub struct MaybeAuthUser(pub Option<TokenClaims>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for MaybeAuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(MaybeAuthUser(None));
        };

        let state = AppState::from_ref(state);
        let claims = match state.jwt.verify(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unverifiable bearer token");
                None
            }
        };

        Ok(MaybeAuthUser(claims))
    }
}
