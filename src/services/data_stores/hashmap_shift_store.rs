use chrono::NaiveDate;
use std::collections::HashMap;

use crate::domain::{
    AuditStamp, DeletedShift, DeletedShiftId, Shift, ShiftId, ShiftKey,
    ShiftStore, ShiftStoreError, StoreChange, ToggleOutcome,
};
use crate::services::change_feed::ChangeFeed;

#[derive(Default)]
pub struct HashmapShiftStore {
    shifts: HashMap<ShiftId, Shift>,
    deleted: HashMap<DeletedShiftId, DeletedShift>,
    feed: ChangeFeed,
}

impl HashmapShiftStore {
    pub fn new(feed: ChangeFeed) -> Self {
        Self {
            feed,
            ..Default::default()
        }
    }

    /// Oldest matching shift, if any. More than one can exist when manual
    /// entries duplicated a tuple.
    fn occupant(&self, key: &ShiftKey) -> Option<ShiftId> {
        self.shifts
            .values()
            .filter(|shift| shift.matches(key))
            .min_by_key(|shift| (shift.created.at, *shift.id.as_ref()))
            .map(|shift| shift.id)
    }

    fn take(&mut self, id: &ShiftId, stamp: AuditStamp) -> Option<DeletedShift> {
        let shift = self.shifts.remove(id)?;
        let deleted = DeletedShift::new(shift, stamp);
        self.deleted.insert(deleted.id, deleted.clone());
        self.feed.publish(&StoreChange::ShiftRemoved {
            deleted: deleted.clone(),
        });
        Some(deleted)
    }

    fn insert(&mut self, shift: Shift) {
        self.shifts.insert(shift.id, shift.clone());
        self.feed.publish(&StoreChange::ShiftAdded { shift });
    }
}

fn ordered(mut shifts: Vec<Shift>) -> Vec<Shift> {
    shifts.sort_by(|a, b| {
        (a.date, a.time_type, &a.staff_id, a.created.at).cmp(&(
            b.date,
            b.time_type,
            &b.staff_id,
            b.created.at,
        ))
    });
    shifts
}

#[async_trait::async_trait]
impl ShiftStore for HashmapShiftStore {
    #[tracing::instrument(name = "Toggling shift in memory", skip_all)]
    async fn toggle_shift(
        &mut self,
        key: ShiftKey,
        stamp: AuditStamp,
    ) -> Result<ToggleOutcome, ShiftStoreError> {
        if let Some(deleted) = self
            .occupant(&key)
            .and_then(|id| self.take(&id, stamp))
        {
            return Ok(ToggleOutcome::Removed(deleted));
        }

        let shift = Shift::requested(key, stamp);
        self.insert(shift.clone());
        Ok(ToggleOutcome::Added(shift))
    }

    #[tracing::instrument(name = "Adding shift in memory", skip_all)]
    async fn add_shift(&mut self, shift: Shift) -> Result<(), ShiftStoreError> {
        self.insert(shift);
        Ok(())
    }

    #[tracing::instrument(name = "Removing shift in memory", skip_all)]
    async fn remove_shift(
        &mut self,
        id: &ShiftId,
        stamp: AuditStamp,
    ) -> Result<Option<DeletedShift>, ShiftStoreError> {
        Ok(self.take(id, stamp))
    }

    #[tracing::instrument(name = "Restoring shift in memory", skip_all)]
    async fn restore_shift(
        &mut self,
        id: &DeletedShiftId,
        stamp: AuditStamp,
    ) -> Result<Shift, ShiftStoreError> {
        let deleted = self
            .deleted
            .get(id)
            .ok_or(ShiftStoreError::DeletedShiftNotFound)?;

        if self.occupant(&deleted.shift.key()).is_some() {
            return Err(ShiftStoreError::ShiftAlreadyExists);
        }

        let shift = deleted.restored(stamp);
        self.deleted.remove(id);
        self.shifts.insert(shift.id, shift.clone());
        self.feed.publish(&StoreChange::ShiftRestored {
            shift: shift.clone(),
            from: *id,
        });
        Ok(shift)
    }

    async fn get_shift(
        &self,
        id: &ShiftId,
    ) -> Result<Option<Shift>, ShiftStoreError> {
        Ok(self.shifts.get(id).cloned())
    }

    async fn find_shift(
        &self,
        key: &ShiftKey,
    ) -> Result<Option<Shift>, ShiftStoreError> {
        Ok(self
            .occupant(key)
            .and_then(|id| self.shifts.get(&id))
            .cloned())
    }

    async fn get_shifts(&self) -> Result<Vec<Shift>, ShiftStoreError> {
        Ok(ordered(self.shifts.values().cloned().collect()))
    }

    async fn get_shifts_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Shift>, ShiftStoreError> {
        Ok(ordered(
            self.shifts
                .values()
                .filter(|shift| (from..=to).contains(&shift.date))
                .cloned()
                .collect(),
        ))
    }

    async fn get_deleted_shift(
        &self,
        id: &DeletedShiftId,
    ) -> Result<DeletedShift, ShiftStoreError> {
        self.deleted
            .get(id)
            .cloned()
            .ok_or(ShiftStoreError::DeletedShiftNotFound)
    }

    async fn get_deleted_shifts(
        &self,
    ) -> Result<Vec<DeletedShift>, ShiftStoreError> {
        let mut deleted: Vec<_> = self.deleted.values().cloned().collect();
        deleted.sort_by(|a, b| b.deleted.at.cmp(&a.deleted.at));
        Ok(deleted)
    }
}
