use chrono::NaiveDate;
use color_eyre::eyre::Result;

use crate::domain::{Holiday, HolidayRegistry, HolidayStore, StoreChange};
use crate::services::change_feed::ChangeFeed;

/// Custom holidays kept in the registry's own date-ordered map.
#[derive(Default)]
pub struct BTreeMapHolidayStore {
    registry: HolidayRegistry,
    feed: ChangeFeed,
}

impl BTreeMapHolidayStore {
    pub fn new(feed: ChangeFeed) -> Self {
        Self {
            registry: HolidayRegistry::default(),
            feed,
        }
    }
}

#[async_trait::async_trait]
impl HolidayStore for BTreeMapHolidayStore {
    #[tracing::instrument(name = "Adding custom holiday in memory", skip_all)]
    async fn add_custom_holiday(&mut self, holiday: Holiday) -> Result<()> {
        self.registry.add_custom(holiday.clone());
        self.feed.publish(&StoreChange::HolidayAdded { holiday });
        Ok(())
    }

    #[tracing::instrument(name = "Removing custom holiday in memory", skip_all)]
    async fn remove_custom_holiday(&mut self, date: NaiveDate) -> Result<()> {
        if self.registry.remove_custom(date).is_some() {
            self.feed.publish(&StoreChange::HolidayRemoved { date });
        }
        Ok(())
    }

    async fn get_custom_holidays(&self) -> Result<Vec<Holiday>> {
        Ok(self.registry.custom_holidays())
    }

    async fn get_registry(&self) -> Result<HolidayRegistry> {
        Ok(self.registry.clone())
    }
}
