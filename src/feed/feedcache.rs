use std::fs;
use std::path::{
    Path,
    PathBuf
};
use std::time::SystemTime;

use chrono::{
    DateTime,
    NaiveDateTime,
    Utc
};
use log::{
    info,
    warn
};

use crate::calendarerror::CalendarError;
use crate::time::schoolyear::SchoolYear;

/// Last modification time of `path`.
pub fn modified_time(path: impl AsRef<Path>) -> Result<SystemTime, CalendarError> {
    Ok(fs::metadata(path)?.modified()?)
}

pub fn to_naive_utc(time: SystemTime) -> NaiveDateTime {
    DateTime::<Utc>::from(time).naive_utc()
}

/// One rendered feed per school year, stored as `<cache_dir>/<YYYY-YYYY>.ics`.
pub struct FeedCache {
    cache_dir: PathBuf
}

impl FeedCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> FeedCache {
        FeedCache { cache_dir: cache_dir.into() }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn cache_file(&self, school_year: &SchoolYear) -> PathBuf {
        self.cache_dir.join(format!("{}.ics", school_year.label()))
    }

    /// The cached feed is fresh when it exists and is not older than the
    /// data it was generated from.
    pub fn is_fresh(&self, school_year: &SchoolYear, source_modified: SystemTime) -> bool {
        modified_time(self.cache_file(school_year))
            .map(|cached| cached >= source_modified)
            .unwrap_or(false)
    }

    /// Returns the cached feed when fresh; otherwise calls `generate` and
    /// stores its output. Nothing is stored when `generate` fails.
    ///
    /// A cache directory that does not exist, or a failed write, is not an
    /// error: the freshly generated feed is still returned.
    pub fn load_or_generate<F>(
        &self,
        school_year: &SchoolYear,
        source_modified: SystemTime,
        generate: F
    ) -> Result<String, CalendarError>
    where
        F: FnOnce() -> Result<String, CalendarError>
    {
        let cache_file = self.cache_file(school_year);
        if self.is_fresh(school_year, source_modified) {
            info!("serving cached feed {}", cache_file.display());
            return Ok(fs::read_to_string(&cache_file)?);
        }

        let content = generate()?;
        if self.cache_dir.is_dir() {
            match fs::write(&cache_file, &content) {
                Ok(()) => info!("wrote feed cache {}", cache_file.display()),
                Err(error) => warn!("cannot write feed cache {}: {}", cache_file.display(), error)
            }
        } else {
            warn!("cache directory {} does not exist, feed not cached", self.cache_dir.display());
        }
        Ok(content)
    }
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("schooldays-feedcache-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn cache_file_is_named_after_the_school_year() {
        let cache = FeedCache::new("tmp");
        assert_eq!(cache.cache_file(&SchoolYear::new(2017).unwrap()), Path::new("tmp").join("2017-2018.ics"));
    }

    #[test]
    fn missing_file_is_stale() {
        let cache = FeedCache::new(scratch_dir("missing"));
        assert!(!cache.is_fresh(&SchoolYear::new(2017).unwrap(), SystemTime::UNIX_EPOCH));
    }

    #[test]
    fn generates_once_then_serves_cache() {
        let dir = scratch_dir("roundtrip");
        let cache = FeedCache::new(&dir);
        let school_year = SchoolYear::new(2017).unwrap();
        let source_modified = SystemTime::now() - Duration::from_secs(3600);

        let first = cache.load_or_generate(&school_year, source_modified, || Ok("feed v1".to_owned())).unwrap();
        assert_eq!(first, "feed v1");
        assert!(cache.is_fresh(&school_year, source_modified));

        let second = cache
            .load_or_generate(&school_year, source_modified, || panic!("cache should be fresh"))
            .unwrap();
        assert_eq!(second, "feed v1");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn newer_source_regenerates() {
        let dir = scratch_dir("stale");
        let cache = FeedCache::new(&dir);
        let school_year = SchoolYear::new(2017).unwrap();
        fs::write(cache.cache_file(&school_year), "old feed").unwrap();

        let source_modified = SystemTime::now() + Duration::from_secs(3600);
        assert!(!cache.is_fresh(&school_year, source_modified));
        let content = cache.load_or_generate(&school_year, source_modified, || Ok("new feed".to_owned())).unwrap();
        assert_eq!(content, "new feed");
        assert_eq!(fs::read_to_string(cache.cache_file(&school_year)).unwrap(), "new feed");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_cache_dir_still_returns_feed() {
        let cache = FeedCache::new(std::env::temp_dir().join("schooldays-feedcache-does-not-exist"));
        let school_year = SchoolYear::new(2017).unwrap();
        let content = cache.load_or_generate(&school_year, SystemTime::now(), || Ok("feed".to_owned())).unwrap();
        assert_eq!(content, "feed");
        assert!(!cache.cache_file(&school_year).exists());
    }

    #[test]
    fn generation_errors_propagate() {
        let cache = FeedCache::new(scratch_dir("error"));
        let school_year = SchoolYear::new(2030).unwrap();
        let err = cache
            .load_or_generate(&school_year, SystemTime::now(), || Err(CalendarError::MissingWinterBreakData(school_year.label())))
            .unwrap_err();
        assert!(matches!(err, CalendarError::MissingWinterBreakData(_)));
        assert!(!cache.cache_file(&school_year).exists());
    }
}
