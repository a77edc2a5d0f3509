use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ShiftAPIError, StaffMember},
    AppState,
};

#[tracing::instrument(name = "Get staff list route handler", skip_all)]
pub async fn get_staff_list(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<StaffListResponse>), ShiftAPIError> {
    let staff = state
        .staff_store
        .read()
        .await
        .get_staff_list()
        .await
        .map_err(|e| ShiftAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(StaffListResponse { staff })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffListResponse {
    pub staff: Vec<StaffMember>,
}
