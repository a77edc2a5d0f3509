use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{
        ShiftAPIError, StaffColor, StaffId, StaffMember, StaffName,
        StaffStoreError,
    },
    utils::{permissions::require_admin, session::get_actor},
    AppState,
};

#[derive(Deserialize)]
pub struct StaffQueryParams {
    #[serde(rename = "staffId")]
    pub staff_id: String,
}

#[tracing::instrument(name = "Update staff member route handler", skip_all)]
pub async fn update_staff(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(params): Query<StaffQueryParams>,
    Json(request): Json<UpdateStaffRequest>,
) -> Result<(StatusCode, CookieJar, Json<StaffMember>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;
    require_admin(&actor)?;

    let staff_id = StaffId::parse(&params.staff_id)?;
    let not_found = || {
        ShiftAPIError::NotFound(format!("Staff member {}", staff_id.as_ref()))
    };

    // Lookup and update share one guard
    let mut staff_store = state.staff_store.write().await;

    let mut member =
        staff_store.get_staff(&staff_id).await.map_err(|e| match e {
            StaffStoreError::StaffIDNotFound => not_found(),
            e => ShiftAPIError::UnexpectedError(eyre!(e)),
        })?;

    if let Some(name) = request.name {
        member.name = StaffName::parse(name)?;
    }
    if let Some(color) = request.color {
        member.color = StaffColor::parse(&color)?;
    }

    staff_store
        .update_staff(member.clone())
        .await
        .map_err(|e| match e {
            StaffStoreError::StaffIDNotFound => not_found(),
            e => ShiftAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((StatusCode::OK, jar, Json(member)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}
