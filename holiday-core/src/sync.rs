//! The sync pipeline: load meta → fetch feed → plan → write files.

use std::future::Future;
use std::path::PathBuf;

use crate::error::HolidayResult;
use crate::feed::CalendarFeed;
use crate::observer::SyncObserver;
use crate::partition::{UpdatePlan, plan_update};
use crate::record::MetaRecord;
use crate::store::HolidayStore;
use crate::timestamp::Timestamp;

/// Something that can produce the holiday feed for a locale code.
pub trait FeedSource {
    fn fetch(
        &self,
        code: &str,
        observer: &dyn SyncObserver,
    ) -> impl Future<Output = HolidayResult<CalendarFeed>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Upstream has not changed since the stored timestamp; nothing written.
    Unchanged { stored: Timestamp },
    /// Year files were replaced and `meta.json` now holds `updated`.
    Updated {
        updated: Timestamp,
        years_written: Vec<PathBuf>,
    },
}

/// Run one sync for `code`.
///
/// Year files are written in ascending year order, then `meta.json`. Any
/// error aborts the run; files already written stay on disk.
pub async fn sync_locale<S: FeedSource>(
    source: &S,
    store: &HolidayStore,
    code: &str,
    observer: &dyn SyncObserver,
) -> HolidayResult<SyncOutcome> {
    let meta = store.load_meta(code)?;
    let feed = source.fetch(code, observer).await?;

    let plan = plan_update(&feed, meta.updated, observer)?;
    let updated = plan.updated();

    match plan {
        UpdatePlan::Unchanged { .. } => Ok(SyncOutcome::Unchanged { stored: updated }),
        UpdatePlan::Changed { years, .. } => {
            let mut years_written = Vec::with_capacity(years.len());

            for (year, holidays) in &years {
                if let Some(path) = store.write_or_replace(code, year, holidays, observer)? {
                    years_written.push(path);
                }
            }

            store.write_meta(code, &MetaRecord { updated }, observer)?;

            Ok(SyncOutcome::Updated {
                updated,
                years_written,
            })
        }
    }
}
