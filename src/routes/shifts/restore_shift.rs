use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    domain::{DeletedShiftId, Shift, ShiftAPIError},
    services::shift_requests,
    utils::session::get_actor,
    AppState,
};

#[tracing::instrument(name = "Restore shift route handler", skip_all)]
pub async fn restore_shift(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(request): Json<RestoreShiftRequest>,
) -> Result<(StatusCode, CookieJar, Json<Shift>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;
    let deleted_shift_id = DeletedShiftId::parse(&request.deleted_shift_id)?;

    let shift =
        shift_requests::restore_shift(&state, &actor, &deleted_shift_id)
            .await?;

    Ok((StatusCode::CREATED, jar, Json(shift)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct RestoreShiftRequest {
    #[serde(rename = "deletedShiftId")]
    pub deleted_shift_id: String,
}
