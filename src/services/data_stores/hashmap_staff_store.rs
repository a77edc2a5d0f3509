use std::collections::HashMap;

use crate::domain::{
    StaffId, StaffMember, StaffStore, StaffStoreError, StoreChange,
};
use crate::services::change_feed::ChangeFeed;

#[derive(Default)]
pub struct HashmapStaffStore {
    staff: HashMap<StaffId, StaffMember>,
    feed: ChangeFeed,
}

impl HashmapStaffStore {
    pub fn new(feed: ChangeFeed) -> Self {
        Self {
            staff: HashMap::new(),
            feed,
        }
    }

    /// Seeds the store without publishing changes.
    pub fn with_roster(
        roster: impl IntoIterator<Item = StaffMember>,
        feed: ChangeFeed,
    ) -> Self {
        Self {
            staff: roster
                .into_iter()
                .map(|member| (member.id.clone(), member))
                .collect(),
            feed,
        }
    }
}

#[async_trait::async_trait]
impl StaffStore for HashmapStaffStore {
    async fn add_staff(
        &mut self,
        member: StaffMember,
    ) -> Result<(), StaffStoreError> {
        if self.staff.contains_key(&member.id) {
            return Err(StaffStoreError::StaffIDExists);
        }

        self.staff.insert(member.id.clone(), member.clone());
        self.feed.publish(&StoreChange::StaffUpserted { member });
        Ok(())
    }

    async fn get_staff(
        &self,
        id: &StaffId,
    ) -> Result<StaffMember, StaffStoreError> {
        match self.staff.get(id) {
            Some(member) => Ok(member.clone()),
            None => Err(StaffStoreError::StaffIDNotFound),
        }
    }

    async fn update_staff(
        &mut self,
        member: StaffMember,
    ) -> Result<(), StaffStoreError> {
        match self.staff.get_mut(&member.id) {
            Some(existing) => {
                *existing = member.clone();
                self.feed.publish(&StoreChange::StaffUpserted { member });
                Ok(())
            }
            None => Err(StaffStoreError::StaffIDNotFound),
        }
    }

    async fn delete_staff(
        &mut self,
        id: &StaffId,
    ) -> Result<(), StaffStoreError> {
        match self.staff.remove(id) {
            Some(_) => {
                self.feed
                    .publish(&StoreChange::StaffRemoved { id: id.clone() });
                Ok(())
            }
            None => Err(StaffStoreError::StaffIDNotFound),
        }
    }

    async fn get_staff_list(&self) -> Result<Vec<StaffMember>, StaffStoreError> {
        let mut members: Vec<_> = self.staff.values().cloned().collect();
        members.sort_by(|a, b| {
            (a.name.as_ref(), &a.id).cmp(&(b.name.as_ref(), &b.id))
        });
        Ok(members)
    }
}
