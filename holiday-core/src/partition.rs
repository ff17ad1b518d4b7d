//! Change detection and grouping of feed items into per-year records.

use std::collections::BTreeMap;

use crate::error::HolidayResult;
use crate::feed::{CalendarFeed, CalendarItem};
use crate::observer::{SkipReason, SyncEvent, SyncObserver};
use crate::record::{Holiday, HolidayRecord};
use crate::timestamp::Timestamp;

/// Items whose description contains this are observances, not holidays.
pub const SKIP_MARKER: &str = "Perayaan";

/// What a sync run should do with a freshly fetched feed.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlan {
    /// The feed is not newer than what is stored; write nothing.
    Unchanged {
        stored: Timestamp,
        fetched: Timestamp,
    },
    /// The feed is newer; replace each year file, then the meta file.
    Changed {
        updated: Timestamp,
        years: BTreeMap<String, HolidayRecord>,
    },
}

impl UpdatePlan {
    /// The timestamp the caller should hold after this run.
    pub fn updated(&self) -> Timestamp {
        match self {
            UpdatePlan::Unchanged { stored, .. } => *stored,
            UpdatePlan::Changed { updated, .. } => *updated,
        }
    }
}

/// Compare the feed's `updated` against the stored one and, when the feed is
/// strictly newer, partition its items by year.
pub fn plan_update(
    feed: &CalendarFeed,
    stored: Timestamp,
    observer: &dyn SyncObserver,
) -> HolidayResult<UpdatePlan> {
    let fetched = Timestamp::parse(&feed.updated)?;

    if stored >= fetched {
        observer.observe(SyncEvent::NoUpdate { stored, fetched });
        return Ok(UpdatePlan::Unchanged { stored, fetched });
    }

    Ok(UpdatePlan::Changed {
        updated: fetched,
        years: partition_by_year(&feed.items, observer),
    })
}

/// Group items into one record per year, keyed by full date.
///
/// Items are stable-sorted by date first, so an out-of-order feed still
/// yields exactly one record per year. Within a year a repeated date keeps
/// the last item seen.
pub fn partition_by_year(
    items: &[CalendarItem],
    observer: &dyn SyncObserver,
) -> BTreeMap<String, HolidayRecord> {
    let mut dated: Vec<(&str, &str, &CalendarItem)> = Vec::with_capacity(items.len());

    for item in items {
        if item.description.contains(SKIP_MARKER) {
            skip(item, SkipReason::Celebration, observer);
            continue;
        }

        let Some(date) = item.date() else {
            skip(item, SkipReason::MissingDate, observer);
            continue;
        };

        let Some(year) = item.year() else {
            skip(item, SkipReason::InvalidYear, observer);
            continue;
        };

        dated.push((date, year, item));
    }

    if let Some(pair) = dated.windows(2).find(|pair| pair[1].0 < pair[0].0) {
        observer.observe(SyncEvent::UnsortedInput {
            date: pair[1].0.to_string(),
            previous: pair[0].0.to_string(),
        });
        dated.sort_by(|a, b| a.0.cmp(b.0));
    }

    let mut years: BTreeMap<String, HolidayRecord> = BTreeMap::new();
    for (date, year, item) in dated {
        years
            .entry(year.to_string())
            .or_default()
            .insert(date.to_string(), Holiday::from(item));
    }

    years
}

fn skip(item: &CalendarItem, reason: SkipReason, observer: &dyn SyncObserver) {
    observer.observe(SyncEvent::ItemSkipped {
        date: item.date().map(str::to_string),
        description: item.description.clone(),
        reason,
    });
}
