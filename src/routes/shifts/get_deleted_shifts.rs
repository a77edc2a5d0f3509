use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{DeletedShift, ShiftAPIError},
    services::shift_requests,
    utils::session::get_actor,
    AppState,
};

#[tracing::instrument(name = "Get deleted shifts route handler", skip_all)]
pub async fn get_deleted_shifts(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<(StatusCode, CookieJar, Json<DeletedShiftListResponse>), ShiftAPIError>
{
    let actor = get_actor(&jar, &headers)?;

    let deleted_shifts =
        shift_requests::get_deleted_shifts(&state, &actor).await?;

    Ok((
        StatusCode::OK,
        jar,
        Json(DeletedShiftListResponse { deleted_shifts }),
    ))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedShiftListResponse {
    #[serde(rename = "deletedShifts")]
    pub deleted_shifts: Vec<DeletedShift>,
}
