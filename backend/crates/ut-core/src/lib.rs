pub mod activity_log;
pub mod clock;
pub mod error;
pub mod models;
pub mod store;

pub use activity_log::ActivityLog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result};
pub use models::activity_record::{ActivityRecord, TIMESTAMP_FORMAT};
pub use models::listing_row::ListingRow;
pub use store::ActivityStore;
pub use store::memory_store::MemoryActivityStore;
