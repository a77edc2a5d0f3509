use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ShiftAPIError, StaffId, StaffStoreError},
    utils::{permissions::require_admin, session::get_actor},
    AppState,
};

use super::StaffQueryParams;

/// Shifts of a removed member stay on the calendar.
#[tracing::instrument(name = "Delete staff member route handler", skip_all)]
pub async fn delete_staff(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(params): Query<StaffQueryParams>,
) -> Result<(StatusCode, CookieJar, Json<DeleteStaffResponse>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;
    require_admin(&actor)?;

    let staff_id = StaffId::parse(&params.staff_id)?;

    state
        .staff_store
        .write()
        .await
        .delete_staff(&staff_id)
        .await
        .map_err(|e| match e {
            StaffStoreError::StaffIDNotFound => ShiftAPIError::NotFound(
                format!("Staff member {}", staff_id.as_ref()),
            ),
            e => ShiftAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((StatusCode::OK, jar, Json(DeleteStaffResponse { id: staff_id })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteStaffResponse {
    pub id: StaffId,
}
