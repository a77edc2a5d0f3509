mod add_custom_holiday;
mod get_holidays;
mod remove_custom_holiday;

pub use add_custom_holiday::*;
pub use get_holidays::*;
pub use remove_custom_holiday::*;
