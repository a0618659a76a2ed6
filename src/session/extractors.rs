use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use super::{cookies::read_cookie, SessionId};
use crate::{error::AppError, state::AppState};

/// Extracts the caller's session from its cookie.
///
/// Rejects with 401 when the cookie is absent or was not issued by us. Use
/// `Option<SessionId>` on routes that may open a new session.
#[async_trait]
impl FromRequestParts<AppState> for SessionId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let name = &state.config.session.cookie_name;
        let token = read_cookie(&parts.headers, name).ok_or_else(|| {
            debug!(cookie = %name, "missing session cookie");
            AppError::Unauthorized
        })?;

        SessionId::parse(token).ok_or_else(|| {
            debug!(cookie = %name, "malformed session cookie");
            AppError::Unauthorized
        })
    }
}
