use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Public,
    Admin,
}

/// Who is making the request. Handlers that write take this explicitly and
/// check it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn require_admin(&self) -> Result<(), ApiError> {
        match self.role {
            Role::Admin => Ok(()),
            Role::Public => Err(ApiError::Forbidden),
        }
    }

    fn from_header(header: Option<&str>, admin_token: Option<&str>) -> Result<Self, ApiError> {
        let Some(header) = header else {
            return Ok(Session { role: Role::Public });
        };
        let token = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;
        match admin_token {
            Some(expected) if expected == token => Ok(Session { role: Role::Admin }),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

impl<S> FromRequestParts<S> for Session
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| ApiError::Unauthorized)?),
            None => None,
        };
        Session::from_header(header, state.admin_token.as_deref())
    }
}
