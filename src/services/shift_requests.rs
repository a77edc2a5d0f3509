//! Shift operations shared by the HTTP routes and the session effect handler.
//!
//! Every write goes through the submission window check for the month of the
//! shift it touches. Deletion history is an administrator concern.

use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState,
    domain::{
        Actor, AuditStamp, DeletedShift, DeletedShiftId, Shift, ShiftAPIError,
        ShiftId, ShiftKey, ShiftRequest, ShiftStoreError, ToggleOutcome,
    },
    utils::permissions::{
        check_staff_exists, check_submission_window, require_admin,
    },
};

fn stamp(state: &AppState, actor: &Actor) -> AuditStamp {
    AuditStamp::new(actor.session_id, state.clock.now())
}

fn map_store_error(e: ShiftStoreError) -> ShiftAPIError {
    match e {
        ShiftStoreError::ShiftAlreadyExists => {
            ShiftAPIError::Conflict(e.to_string())
        }
        ShiftStoreError::DeletedShiftNotFound => {
            ShiftAPIError::NotFound(e.to_string())
        }
        e => ShiftAPIError::UnexpectedError(eyre!(e)),
    }
}

#[tracing::instrument(name = "Toggle shift request", skip_all)]
pub async fn toggle_shift(
    state: &AppState,
    actor: &Actor,
    key: ShiftKey,
) -> Result<ToggleOutcome, ShiftAPIError> {
    check_submission_window(state, actor, key.date)?;
    check_staff_exists(&state.staff_store, &key.staff_id).await?;

    let stamp = stamp(state, actor);
    state
        .shift_store
        .write()
        .await
        .toggle_shift(key, stamp)
        .await
        .map_err(map_store_error)
}

/// Manual entry. An existing shift on the same tuple is not checked for.
#[tracing::instrument(name = "Add detailed shift request", skip_all)]
pub async fn add_detailed_shift(
    state: &AppState,
    actor: &Actor,
    request: ShiftRequest,
) -> Result<Shift, ShiftAPIError> {
    check_submission_window(state, actor, request.key.date)?;
    check_staff_exists(&state.staff_store, &request.key.staff_id).await?;

    let shift = Shift::from_request(request, stamp(state, actor));
    state
        .shift_store
        .write()
        .await
        .add_shift(shift.clone())
        .await
        .map_err(map_store_error)?;

    Ok(shift)
}

/// `Ok(None)` when no shift has this id.
#[tracing::instrument(name = "Remove shift request", skip_all)]
pub async fn remove_shift(
    state: &AppState,
    actor: &Actor,
    id: &ShiftId,
) -> Result<Option<DeletedShift>, ShiftAPIError> {
    let mut shift_store = state.shift_store.write().await;

    let Some(shift) = shift_store.get_shift(id).await.map_err(map_store_error)?
    else {
        return Ok(None);
    };
    check_submission_window(state, actor, shift.date)?;

    shift_store
        .remove_shift(id, stamp(state, actor))
        .await
        .map_err(map_store_error)
}

#[tracing::instrument(name = "Restore deleted shift", skip_all)]
pub async fn restore_shift(
    state: &AppState,
    actor: &Actor,
    id: &DeletedShiftId,
) -> Result<Shift, ShiftAPIError> {
    require_admin(actor)?;

    state
        .shift_store
        .write()
        .await
        .restore_shift(id, stamp(state, actor))
        .await
        .map_err(map_store_error)
}

#[tracing::instrument(name = "List deleted shifts", skip_all)]
pub async fn get_deleted_shifts(
    state: &AppState,
    actor: &Actor,
) -> Result<Vec<DeletedShift>, ShiftAPIError> {
    require_admin(actor)?;

    state
        .shift_store
        .read()
        .await
        .get_deleted_shifts()
        .await
        .map_err(map_store_error)
}
