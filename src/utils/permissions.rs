use chrono::NaiveDate;
use color_eyre::eyre::eyre;

use crate::{
    app_state::{AppState, StaffStoreType},
    domain::{Actor, ShiftAPIError, StaffId, StaffStoreError, YearMonth},
};

/// Staff may only write to a month until its deadline.
#[tracing::instrument(name = "Check submission window", skip_all)]
pub fn check_submission_window(
    state: &AppState,
    actor: &Actor,
    date: NaiveDate,
) -> Result<(), ShiftAPIError> {
    let month = YearMonth::from_date(date);
    let now = state.clock.now();

    if state.deadline_gate.can_submit(actor.role, now, month) {
        Ok(())
    } else {
        Err(ShiftAPIError::DeadlinePassed(
            state.deadline_gate.deadline(month),
        ))
    }
}

pub fn require_admin(actor: &Actor) -> Result<(), ShiftAPIError> {
    match actor.role.is_admin() {
        true => Ok(()),
        false => Err(ShiftAPIError::AdminRequired),
    }
}

#[tracing::instrument(name = "Check staff member exists", skip_all)]
pub async fn check_staff_exists(
    staff_store: &StaffStoreType,
    staff_id: &StaffId,
) -> Result<(), ShiftAPIError> {
    staff_store
        .read()
        .await
        .get_staff(staff_id)
        .await
        .map(|_| ())
        .map_err(|e| match e {
            StaffStoreError::StaffIDNotFound => ShiftAPIError::NotFound(format!(
                "Staff member {}",
                staff_id.as_ref()
            )),
            e => ShiftAPIError::UnexpectedError(eyre!(e)),
        })
}
