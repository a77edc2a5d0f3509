use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{parse_date, ShiftAPIError},
    utils::{permissions::require_admin, session::get_actor},
    AppState,
};

#[derive(Deserialize)]
pub struct RemoveCustomHolidayQueryParams {
    date: String,
}

/// Removing a date that has no custom holiday succeeds without changes.
#[tracing::instrument(name = "Remove custom holiday route handler", skip_all)]
pub async fn remove_custom_holiday(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(params): Query<RemoveCustomHolidayQueryParams>,
) -> Result<(StatusCode, CookieJar, Json<RemoveCustomHolidayResponse>), ShiftAPIError>
{
    let actor = get_actor(&jar, &headers)?;
    require_admin(&actor)?;

    let date = parse_date(&params.date)?;

    state
        .holiday_store
        .write()
        .await
        .remove_custom_holiday(date)
        .await
        .map_err(ShiftAPIError::UnexpectedError)?;

    Ok((
        StatusCode::OK,
        jar,
        Json(RemoveCustomHolidayResponse { date }),
    ))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveCustomHolidayResponse {
    pub date: NaiveDate,
}
