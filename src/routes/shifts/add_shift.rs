use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    domain::{Shift, ShiftAPIError, ShiftRequest},
    services::shift_requests,
    utils::session::get_actor,
    AppState,
};

/// Detailed entry from the request form.
#[tracing::instrument(name = "Add shift route handler", skip_all)]
pub async fn add_shift(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(request): Json<AddShiftRequest>,
) -> Result<(StatusCode, CookieJar, Json<Shift>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;

    let request = ShiftRequest::parse(
        &request.staff_id,
        &request.date,
        &request.time_type,
        &request.notes,
    )?;

    let shift =
        shift_requests::add_detailed_shift(&state, &actor, request).await?;

    Ok((StatusCode::CREATED, jar, Json(shift)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AddShiftRequest {
    #[serde(rename = "staffId")]
    pub staff_id: String,
    pub date: String,
    #[serde(rename = "timeType")]
    pub time_type: String,
    #[serde(default)]
    pub notes: String,
}
