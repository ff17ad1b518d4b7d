//! Test helpers shared across modules.

use std::sync::Mutex;

use crate::feed::{CalendarFeed, CalendarItem, ItemStart};
use crate::observer::{SyncEvent, SyncObserver};

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SyncObserver for RecordingObserver {
    fn observe(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn item(date: &str, summary: &str, description: &str) -> CalendarItem {
    CalendarItem {
        summary: summary.to_string(),
        description: description.to_string(),
        start: Some(ItemStart {
            date: Some(date.to_string()),
        }),
    }
}

pub fn feed(updated: &str, items: Vec<CalendarItem>) -> CalendarFeed {
    CalendarFeed {
        updated: updated.to_string(),
        items,
    }
}
