//! The subset of the Google Calendar events payload that holiday-sync reads.
//!
//! Holiday calendars return all-day events, so only `start.date` matters.
//! Every other field in the response is ignored.

use serde::Deserialize;

/// Response body of `GET /calendar/v3/calendars/{id}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarFeed {
    /// Last modification time of the calendar, kept raw until the change
    /// detector parses it.
    pub updated: String,
    #[serde(default)]
    pub items: Vec<CalendarItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarItem {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start: Option<ItemStart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemStart {
    /// `YYYY-MM-DD` for all-day events.
    #[serde(default)]
    pub date: Option<String>,
}

impl CalendarItem {
    pub fn date(&self) -> Option<&str> {
        self.start.as_ref()?.date.as_deref()
    }

    /// The first four characters of `start.date`, if they form a year.
    pub fn year(&self) -> Option<&str> {
        let year = self.date()?.get(..4)?;
        year.bytes().all(|b| b.is_ascii_digit()).then_some(year)
    }
}
