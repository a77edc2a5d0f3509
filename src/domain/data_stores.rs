use super::{
    AuditStamp, DeletedShift, DeletedShiftId, Holiday, HolidayRegistry, Shift,
    ShiftId, ShiftKey, StaffId, StaffMember,
};
use chrono::NaiveDate;
use color_eyre::eyre::{Report, Result};
use thiserror::Error;

#[async_trait::async_trait]
pub trait StaffStore {
    async fn add_staff(
        &mut self,
        member: StaffMember,
    ) -> Result<(), StaffStoreError>;
    async fn get_staff(
        &self,
        id: &StaffId,
    ) -> Result<StaffMember, StaffStoreError>;
    async fn update_staff(
        &mut self,
        member: StaffMember,
    ) -> Result<(), StaffStoreError>;
    async fn delete_staff(&mut self, id: &StaffId)
        -> Result<(), StaffStoreError>;
    /// Ordered by name.
    async fn get_staff_list(&self) -> Result<Vec<StaffMember>, StaffStoreError>;
}

#[derive(Debug, Error)]
pub enum StaffStoreError {
    #[error("Staff ID already exists")]
    StaffIDExists,
    #[error("Staff ID not found")]
    StaffIDNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for StaffStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::StaffIDExists, Self::StaffIDExists)
                | (Self::StaffIDNotFound, Self::StaffIDNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Added(Shift),
    Removed(DeletedShift),
}

#[async_trait::async_trait]
pub trait ShiftStore {
    /// Removes the shift occupying `key` if there is one, otherwise inserts a
    /// new request. Lookup and mutation happen under the same `&mut self`.
    async fn toggle_shift(
        &mut self,
        key: ShiftKey,
        stamp: AuditStamp,
    ) -> Result<ToggleOutcome, ShiftStoreError>;
    /// Inserts without checking for an existing shift on the same tuple.
    async fn add_shift(&mut self, shift: Shift) -> Result<(), ShiftStoreError>;
    /// `Ok(None)` when no shift has this id.
    async fn remove_shift(
        &mut self,
        id: &ShiftId,
        stamp: AuditStamp,
    ) -> Result<Option<DeletedShift>, ShiftStoreError>;
    async fn restore_shift(
        &mut self,
        id: &DeletedShiftId,
        stamp: AuditStamp,
    ) -> Result<Shift, ShiftStoreError>;
    async fn get_shift(&self, id: &ShiftId)
        -> Result<Option<Shift>, ShiftStoreError>;
    async fn find_shift(
        &self,
        key: &ShiftKey,
    ) -> Result<Option<Shift>, ShiftStoreError>;
    /// Ordered by date, then slot.
    async fn get_shifts(&self) -> Result<Vec<Shift>, ShiftStoreError>;
    /// Inclusive on both ends, ordered by date, then slot.
    async fn get_shifts_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Shift>, ShiftStoreError>;
    async fn get_deleted_shift(
        &self,
        id: &DeletedShiftId,
    ) -> Result<DeletedShift, ShiftStoreError>;
    /// Most recently deleted first.
    async fn get_deleted_shifts(
        &self,
    ) -> Result<Vec<DeletedShift>, ShiftStoreError>;
}

#[derive(Debug, Error)]
pub enum ShiftStoreError {
    #[error("Deleted shift not found")]
    DeletedShiftNotFound,
    #[error("A shift already exists for this staff member, date and slot")]
    ShiftAlreadyExists,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for ShiftStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DeletedShiftNotFound, Self::DeletedShiftNotFound)
                | (Self::ShiftAlreadyExists, Self::ShiftAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait HolidayStore {
    async fn add_custom_holiday(&mut self, holiday: Holiday) -> Result<()>;
    /// Removing a date with no custom holiday is not an error.
    async fn remove_custom_holiday(&mut self, date: NaiveDate) -> Result<()>;
    /// Ordered by date.
    async fn get_custom_holidays(&self) -> Result<Vec<Holiday>>;
    async fn get_registry(&self) -> Result<HolidayRegistry>;
}
