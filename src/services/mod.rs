pub mod change_feed;
pub mod data_stores;
pub mod effects;
pub mod shift_requests;
