//! Core types for holiday-sync.
//!
//! This crate provides everything the sync binary needs apart from the
//! HTTP client:
//! - `feed` for the Google Calendar events payload
//! - `partition` for change detection and grouping items by year
//! - `store` for the `public/{code}/*.json` files
//! - `sync` for the load → fetch → plan → write pipeline

pub mod error;
pub mod feed;
pub mod observer;
pub mod partition;
pub mod record;
pub mod store;
pub mod sync;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{HolidayError, HolidayResult};
pub use feed::{CalendarFeed, CalendarItem, ItemStart};
pub use observer::{SkipReason, SyncEvent, SyncObserver, TracingObserver};
pub use partition::{UpdatePlan, partition_by_year, plan_update};
pub use record::{Holiday, HolidayRecord, MetaRecord};
pub use store::{HolidayStore, validate_code};
pub use sync::{FeedSource, SyncOutcome, sync_locale};
pub use timestamp::Timestamp;
