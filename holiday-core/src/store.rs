//! JSON files under the public directory.
//!
//! Layout:
//!   {public}/{code}/meta.json
//!   {public}/{code}/{year}.json

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{HolidayError, HolidayResult};
use crate::observer::{SyncEvent, SyncObserver};
use crate::record::{HolidayRecord, MetaRecord};
use crate::timestamp::Timestamp;

const META_STEM: &str = "meta";

#[derive(Debug, Clone)]
pub struct HolidayStore {
    public_dir: PathBuf,
}

impl HolidayStore {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        HolidayStore {
            public_dir: public_dir.into(),
        }
    }

    pub fn locale_dir(&self, code: &str) -> HolidayResult<PathBuf> {
        validate_code(code)?;
        Ok(self.public_dir.join(code))
    }

    pub fn file_path(&self, code: &str, stem: &str) -> HolidayResult<PathBuf> {
        if !is_plain_name(stem) {
            return Err(HolidayError::InvalidFileName(stem.to_string()));
        }
        Ok(self.locale_dir(code)?.join(format!("{}.json", stem)))
    }

    /// Read `meta.json`. A missing or malformed file is an error; there is no
    /// fallback timestamp.
    pub fn load_meta(&self, code: &str) -> HolidayResult<MetaRecord> {
        self.read_json(&self.file_path(code, META_STEM)?)
    }

    pub fn write_meta(
        &self,
        code: &str,
        meta: &MetaRecord,
        observer: &dyn SyncObserver,
    ) -> HolidayResult<PathBuf> {
        let path = self.write_or_replace(code, META_STEM, meta, observer)?;
        path.map_or_else(|| self.file_path(code, META_STEM), Ok)
    }

    /// Create the locale directory and a first `meta.json`. Fails if one
    /// already exists, so a stored timestamp is never moved backwards.
    pub fn init_meta(
        &self,
        code: &str,
        updated: Timestamp,
        observer: &dyn SyncObserver,
    ) -> HolidayResult<PathBuf> {
        let dir = self.locale_dir(code)?;
        std::fs::create_dir_all(&dir).map_err(|source| HolidayError::Write {
            path: dir.clone(),
            source,
        })?;

        if self.file_path(code, META_STEM)?.exists() {
            return Err(HolidayError::AlreadyInitialized(code.to_string()));
        }

        self.write_meta(code, &MetaRecord { updated }, observer)
    }

    pub fn read_year(&self, code: &str, year: &str) -> HolidayResult<HolidayRecord> {
        self.read_json(&self.file_path(code, year)?)
    }

    /// Replace `{code}/{stem}.json` with `value` as 2-space indented JSON.
    ///
    /// An empty stem writes nothing and returns `None`. The old file is
    /// removed before the new one is written; the write is not atomic.
    pub fn write_or_replace<T: Serialize + ?Sized>(
        &self,
        code: &str,
        stem: &str,
        value: &T,
        observer: &dyn SyncObserver,
    ) -> HolidayResult<Option<PathBuf>> {
        if stem.is_empty() {
            observer.observe(SyncEvent::EmptyStem {
                code: code.to_string(),
            });
            return Ok(None);
        }

        let path = self.file_path(code, stem)?;
        let contents = serde_json::to_string_pretty(value)?;

        if path.exists() {
            std::fs::remove_file(&path).map_err(|source| HolidayError::Write {
                path: path.clone(),
                source,
            })?;
        }

        std::fs::write(&path, contents).map_err(|source| HolidayError::Write {
            path: path.clone(),
            source,
        })?;

        observer.observe(SyncEvent::FileWritten { path: path.clone() });
        Ok(Some(path))
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> HolidayResult<T> {
        let contents = std::fs::read_to_string(path).map_err(|source| HolidayError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| HolidayError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Locale codes become a directory name and part of the API path, so only
/// plain names like `id.indonesian` or `zh-tw.taiwan` are accepted.
pub fn validate_code(code: &str) -> HolidayResult<()> {
    if is_plain_name(code) {
        Ok(())
    } else {
        Err(HolidayError::InvalidCode(code.to_string()))
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}
