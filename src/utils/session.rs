use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::domain::{Actor, Role, SessionId, ShiftAPIError, ValidationError};

use super::constants::{ROLE_HEADER_NAME, SESSION_COOKIE_NAME};

// Anonymous sessions are only identified, never authenticated
#[tracing::instrument(name = "Creating session cookie", skip_all)]
pub fn create_session_cookie(session_id: &SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, session_id.as_ref().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Reads the session cookie and the role header of a request.
#[tracing::instrument(name = "Resolving acting session", skip_all)]
pub fn get_actor(
    jar: &CookieJar,
    headers: &HeaderMap,
) -> Result<Actor, ShiftAPIError> {
    let cookie = jar
        .get(SESSION_COOKIE_NAME)
        .ok_or(ShiftAPIError::MissingSession)?;

    let session_id = SessionId::parse(cookie.value())
        .map_err(|_| ShiftAPIError::InvalidSession)?;

    let role = get_role(headers)?;

    Ok(Actor::new(session_id, role))
}

/// The acting role; requests without the header act as staff.
pub fn get_role(headers: &HeaderMap) -> Result<Role, ShiftAPIError> {
    match headers.get(ROLE_HEADER_NAME) {
        Some(value) => Ok(value
            .to_str()
            .map_err(|_| {
                ValidationError::new("Role header is not valid text".to_owned())
            })?
            .parse::<Role>()?),
        None => Ok(Role::default()),
    }
}
