use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{DeletedShift, Shift, ShiftAPIError, ShiftRequest, ToggleOutcome},
    services::shift_requests,
    utils::session::get_actor,
    AppState,
};

/// Quick-select click on a day: adds the request, or removes it if the staff
/// member already has that slot.
#[tracing::instrument(name = "Toggle shift route handler", skip_all)]
pub async fn toggle_shift(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(request): Json<ToggleShiftRequest>,
) -> Result<(StatusCode, CookieJar, Json<ToggleShiftResponse>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;

    let key =
        ShiftRequest::parse(&request.staff_id, &request.date, &request.time_type, "")?
            .key;

    let (status, response) =
        match shift_requests::toggle_shift(&state, &actor, key).await? {
            ToggleOutcome::Added(shift) => {
                (StatusCode::CREATED, ToggleShiftResponse::Added { shift })
            }
            ToggleOutcome::Removed(deleted_shift) => (
                StatusCode::OK,
                ToggleShiftResponse::Removed { deleted_shift },
            ),
        };

    Ok((status, jar, Json(response)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct ToggleShiftRequest {
    #[serde(rename = "staffId")]
    pub staff_id: String,
    pub date: String,
    #[serde(rename = "timeType")]
    pub time_type: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ToggleShiftResponse {
    Added {
        shift: Shift,
    },
    Removed {
        #[serde(rename = "deletedShift")]
        deleted_shift: DeletedShift,
    },
}
