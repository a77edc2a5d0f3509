mod btreemap_holiday_store;
mod hashmap_shift_store;
mod hashmap_staff_store;

pub use btreemap_holiday_store::*;
pub use hashmap_shift_store::*;
pub use hashmap_staff_store::*;
