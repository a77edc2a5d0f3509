use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{DeletedShift, ShiftAPIError, ShiftId},
    services::shift_requests,
    utils::session::get_actor,
    AppState,
};

#[derive(Deserialize)]
pub struct RemoveShiftQueryParams {
    #[serde(rename = "shiftId")]
    shift_id: String,
}

/// An unknown shift id is not an error; nothing is removed.
#[tracing::instrument(name = "Remove shift route handler", skip_all)]
pub async fn remove_shift(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(params): Query<RemoveShiftQueryParams>,
) -> Result<(StatusCode, CookieJar, Json<RemoveShiftResponse>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;
    let shift_id = ShiftId::parse(&params.shift_id)?;

    let deleted_shift =
        shift_requests::remove_shift(&state, &actor, &shift_id).await?;
    if deleted_shift.is_none() {
        tracing::debug!("no shift with id {}", shift_id.as_ref());
    }

    Ok((StatusCode::OK, jar, Json(RemoveShiftResponse { deleted_shift })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveShiftResponse {
    #[serde(rename = "deletedShift")]
    pub deleted_shift: Option<DeletedShift>,
}
