use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    domain::{Holiday, HolidaySource, ShiftAPIError},
    utils::{permissions::require_admin, session::get_actor},
    AppState,
};

use super::HolidayResponse;

#[tracing::instrument(name = "Add custom holiday route handler", skip_all)]
pub async fn add_custom_holiday(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(request): Json<AddCustomHolidayRequest>,
) -> Result<(StatusCode, CookieJar, Json<HolidayResponse>), ShiftAPIError> {
    let actor = get_actor(&jar, &headers)?;
    require_admin(&actor)?;

    let holiday = Holiday::parse(&request.date, &request.name)?;

    state
        .holiday_store
        .write()
        .await
        .add_custom_holiday(holiday.clone())
        .await
        .map_err(ShiftAPIError::UnexpectedError)?;

    let response = Json(HolidayResponse {
        date: holiday.date,
        name: holiday.name.as_ref().to_owned(),
        source: HolidaySource::Custom,
    });

    Ok((StatusCode::CREATED, jar, response))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AddCustomHolidayRequest {
    pub date: String,
    pub name: String,
}
