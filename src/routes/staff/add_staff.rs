use axum::{
    extract::State,
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

#[tracing::instrument(name = "Add staff member route handler", skip_all)]
pub async fn add_staff(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(request): Json<AddStaffRequest>,
) -> Result<(StatusCode, CookieJar, Json<StaffMember>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;
    require_admin(&actor)?;

    let name = StaffName::parse(request.name)?;
    let color = match request.color {
        Some(color) => StaffColor::parse(&color)?,
        None => StaffColor::default(),
    };
    let member = match request.id {
        Some(id) => StaffMember::with_id(StaffId::parse(&id)?, name, color),
        None => StaffMember::new(name, color),
    };

    state
        .staff_store
        .write()
        .await
        .add_staff(member.clone())
        .await
        .map_err(|e| match e {
            StaffStoreError::StaffIDExists => ShiftAPIError::Conflict(format!(
                "Staff ID already exists: {}",
                member.id.as_ref()
            )),
            e => ShiftAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((StatusCode::CREATED, jar, Json(member)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AddStaffRequest {
    pub id: Option<String>,
    pub name: String,
    pub color: Option<String>,
}
