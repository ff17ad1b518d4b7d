//! Google Calendar API client for public holiday calendars.
//!
//! Holiday calendars are public, so a plain API key is enough; no OAuth.

use std::time::Duration;

use holiday_core::{
    CalendarFeed, FeedSource, HolidayError, HolidayResult, SyncEvent, SyncObserver, validate_code,
};
use reqwest::StatusCode;
use url::Url;

use crate::config::AppConfig;

/// Calendar id suffix for Google's public holiday calendars, already
/// percent-encoded (`#holiday@group.v.calendar.google.com`).
const HOLIDAY_CALENDAR_SUFFIX: &str = "%23holiday%40group.v.calendar.google.com";

pub struct GoogleCalendarClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl GoogleCalendarClient {
    pub fn new(config: &AppConfig) -> HolidayResult<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    /// `{base}/calendar/v3/calendars/{code}%23holiday%40group.v.calendar.google.com/events?key=...`
    pub fn events_url(&self, code: &str) -> HolidayResult<Url> {
        validate_code(code)?;

        let raw = format!(
            "{}/calendar/v3/calendars/{}{}/events",
            self.api_base, code, HOLIDAY_CALENDAR_SUFFIX
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| HolidayError::Config(format!("Invalid calendar URL {}: {}", raw, e)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    fn events_request(&self, code: &str) -> HolidayResult<reqwest::Request> {
        let mut request = self.http.get(self.events_url(code)?);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        request
            .build()
            .map_err(|e| HolidayError::Http(e.without_url().to_string()))
    }
}

impl FeedSource for GoogleCalendarClient {
    async fn fetch(
        &self,
        code: &str,
        observer: &dyn SyncObserver,
    ) -> HolidayResult<CalendarFeed> {
        let request = self.events_request(code)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| HolidayError::Http(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HolidayError::Http(e.without_url().to_string()))?;

        read_feed(code, status, &body, observer)
    }
}

/// Turn an HTTP response into a feed. Anything but 200 is an error carrying
/// the status and body.
fn read_feed(
    code: &str,
    status: StatusCode,
    body: &str,
    observer: &dyn SyncObserver,
) -> HolidayResult<CalendarFeed> {
    if status != StatusCode::OK {
        observer.observe(SyncEvent::FetchFailed {
            code: code.to_string(),
            status: status.as_u16(),
            body: body.to_string(),
        });
        return Err(HolidayError::Fetch {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let feed: CalendarFeed = serde_json::from_str(body)?;
    observer.observe(SyncEvent::FeedFetched {
        code: code.to_string(),
        items: feed.items.len(),
    });
    Ok(feed)
}
