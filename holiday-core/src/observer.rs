//! Sync events and the observer that receives them.
//!
//! Nothing in this crate logs directly. Every function that has something to
//! report takes a `&dyn SyncObserver`; the binary passes a `TracingObserver`
//! and tests pass a recorder.

use std::path::PathBuf;

use crate::timestamp::Timestamp;

/// Why an item was left out of every year file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Description mentions "Perayaan" (observances, not days off).
    Celebration,
    /// No `start.date` on the item.
    MissingDate,
    /// `start.date` does not start with a four-digit year.
    InvalidYear,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    FeedFetched {
        code: String,
        items: usize,
    },
    FetchFailed {
        code: String,
        status: u16,
        body: String,
    },
    NoUpdate {
        stored: Timestamp,
        fetched: Timestamp,
    },
    ItemSkipped {
        date: Option<String>,
        description: String,
        reason: SkipReason,
    },
    /// The feed was not in ascending date order and had to be sorted.
    UnsortedInput {
        date: String,
        previous: String,
    },
    EmptyStem {
        code: String,
    },
    FileWritten {
        path: PathBuf,
    },
}

pub trait SyncObserver: Send + Sync {
    fn observe(&self, event: SyncEvent);
}

/// Forwards sync events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn observe(&self, event: SyncEvent) {
        match event {
            SyncEvent::FeedFetched { code, items } => {
                tracing::info!(%code, items, "success get google data");
            }
            SyncEvent::FetchFailed { code, status, body } => {
                tracing::error!(%code, status, %body, "err get google data");
            }
            SyncEvent::NoUpdate { stored, fetched } => {
                tracing::info!("no update {} >= {}", stored, fetched);
            }
            SyncEvent::ItemSkipped {
                date,
                description,
                reason,
            } => match reason {
                SkipReason::Celebration => tracing::info!(?date, "skip {}", description),
                SkipReason::MissingDate | SkipReason::InvalidYear => {
                    tracing::warn!(?date, ?reason, "skip undated item: {}", description)
                }
            },
            SyncEvent::UnsortedInput { date, previous } => {
                tracing::warn!(%date, %previous, "feed items not sorted by date, sorting");
            }
            SyncEvent::EmptyStem { code } => {
                tracing::info!(%code, "file_name empty");
            }
            SyncEvent::FileWritten { path } => {
                tracing::info!("success write {}", path.display());
            }
        }
    }
}
