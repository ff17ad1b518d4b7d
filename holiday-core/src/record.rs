//! Records persisted under `public/{code}/`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::feed::CalendarItem;
use crate::timestamp::Timestamp;

/// One holiday as stored in a year file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub summary: String,
    pub description: String,
}

impl From<&CalendarItem> for Holiday {
    fn from(item: &CalendarItem) -> Self {
        Holiday {
            summary: item.summary.clone(),
            description: item.description.clone(),
        }
    }
}

/// Contents of `{year}.json`: ISO date → holiday, in date order.
pub type HolidayRecord = BTreeMap<String, Holiday>;

/// Contents of `meta.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRecord {
    pub updated: Timestamp,
}
