use axum::{http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{SessionId, ShiftAPIError},
    utils::{constants::SESSION_COOKIE_NAME, session::create_session_cookie},
};

/// Anonymous sign-in. A request that already carries a valid session keeps
/// it; otherwise a new one is issued.
#[tracing::instrument(name = "New session route handler", skip_all)]
pub async fn new_session(
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar, Json<NewSessionResponse>), ShiftAPIError> {
    let existing = jar
        .get(SESSION_COOKIE_NAME)
        .and_then(|cookie| SessionId::parse(cookie.value()).ok());

    let (status, session_id) = match existing {
        Some(session_id) => (StatusCode::OK, session_id),
        None => (StatusCode::CREATED, SessionId::default()),
    };
    tracing::debug!("session_id: {}", session_id.as_ref());

    let updated_jar = jar.add(create_session_cookie(&session_id));
    let response = Json(NewSessionResponse {
        session_id: *session_id.as_ref(),
    });

    Ok((status, updated_jar, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct NewSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: uuid::Uuid,
}
