//! Maildir access time module.
//!
//! Listing a directory updates its access time. Some mail clients
//! compare the access time of the `new` directory with its
//! modification time to tell whether new messages arrived since the
//! last read, so scanning folders would hide those arrivals. This
//! module records the access times of the `new` and `cur`
//! directories before they are touched, and puts them back
//! afterwards while leaving their modification times as they are.

use std::{
    fs::{self, File, FileTimes},
    io, mem,
    path::{Path, PathBuf},
    result,
    time::SystemTime,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot get metadata of maildir directory {1}")]
    StatDirError(#[source] io::Error, PathBuf),
    #[error("cannot open maildir directory {1}")]
    OpenDirError(#[source] io::Error, PathBuf),
    #[error("cannot set access time of maildir directory {1}")]
    SetDirTimesError(#[source] io::Error, PathBuf),
}

pub type Result<T> = result::Result<T, Error>;

/// Represents the access times of a folder captured before it got
/// accessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtimeRecord {
    /// Represents the folder directory path.
    pub path: PathBuf,
    pub new_atime: SystemTime,
    pub cur_atime: SystemTime,
}

/// Keeps the captured access times until they get restored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AtimeTracker {
    records: Vec<AtimeRecord>,
}

impl AtimeTracker {
    /// Records the current access times of the `new` and `cur`
    /// directories of the given folder.
    pub fn capture<P: AsRef<Path>>(&mut self, folder_path: P) -> Result<&AtimeRecord> {
        let path = folder_path.as_ref();
        let record = AtimeRecord {
            path: path.to_owned(),
            new_atime: accessed(&path.join("new"))?,
            cur_atime: accessed(&path.join("cur"))?,
        };
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Puts back the recorded access times, then forgets them.
    /// Returns the number of restored folders.
    pub fn restore(&mut self) -> Result<usize> {
        let records = mem::take(&mut self.records);

        for record in &records {
            restore_atime(&record.path.join("new"), record.new_atime)?;
            restore_atime(&record.path.join("cur"), record.cur_atime)?;
        }

        Ok(records.len())
    }

    /// Tells whether access times are held for the given folder.
    pub fn contains<P: AsRef<Path>>(&self, folder_path: P) -> bool {
        let path = folder_path.as_ref();
        self.records.iter().any(|record| record.path == path)
    }

    pub fn records(&self) -> &[AtimeRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn accessed(dir: &Path) -> Result<SystemTime> {
    fs::metadata(dir)
        .and_then(|metadata| metadata.accessed())
        .map_err(|err| Error::StatDirError(err, dir.to_owned()))
}

/// Sets the access time of the given directory, keeping its current
/// modification time.
fn restore_atime(dir: &Path, atime: SystemTime) -> Result<()> {
    let file = File::open(dir).map_err(|err| Error::OpenDirError(err, dir.to_owned()))?;
    let mtime = file
        .metadata()
        .and_then(|metadata| metadata.modified())
        .map_err(|err| Error::StatDirError(err, dir.to_owned()))?;
    let times = FileTimes::new().set_accessed(atime).set_modified(mtime);
    file.set_times(times)
        .map_err(|err| Error::SetDirTimesError(err, dir.to_owned()))
}

#[cfg(test)]
mod tests {
    use std::{
        fs::{self, File, FileTimes},
        path::Path,
        time::{Duration, SystemTime},
    };
    use tempfile::tempdir;

    use super::{AtimeTracker, Error};

    fn set_atime(dir: &Path, atime: SystemTime) {
        let file = File::open(dir).unwrap();
        let mtime = file.metadata().unwrap().modified().unwrap();
        file.set_times(FileTimes::new().set_accessed(atime).set_modified(mtime))
            .unwrap();
    }

    fn times(dir: &Path) -> (SystemTime, SystemTime) {
        let metadata = fs::metadata(dir).unwrap();
        (metadata.accessed().unwrap(), metadata.modified().unwrap())
    }

    #[test]
    fn capture_then_restore() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("INBOX");
        for subdir in ["cur", "new", "tmp"] {
            fs::create_dir_all(folder.join(subdir)).unwrap();
        }

        let new_atime = SystemTime::UNIX_EPOCH + Duration::new(1_000_000_000, 123_456_789);
        let cur_atime = SystemTime::UNIX_EPOCH + Duration::new(1_100_000_000, 987_654_321);
        set_atime(&folder.join("new"), new_atime);
        set_atime(&folder.join("cur"), cur_atime);

        let mut tracker = AtimeTracker::default();
        let record = tracker.capture(&folder).unwrap();
        assert_eq!(new_atime, record.new_atime);
        assert_eq!(cur_atime, record.cur_atime);

        // simulates a read of both directories
        let later = SystemTime::UNIX_EPOCH + Duration::from_secs(1_200_000_000);
        set_atime(&folder.join("new"), later);
        set_atime(&folder.join("cur"), later);
        let (_, new_mtime) = times(&folder.join("new"));
        let (_, cur_mtime) = times(&folder.join("cur"));

        assert_eq!(1, tracker.restore().unwrap());
        assert_eq!((new_atime, new_mtime), times(&folder.join("new")));
        assert_eq!((cur_atime, cur_mtime), times(&folder.join("cur")));

        // records are consumed by the restoration
        assert!(tracker.is_empty());
        assert!(!tracker.contains(&folder));
        assert_eq!(0, tracker.restore().unwrap());
    }

    #[test]
    fn contains() {
        let dir = tempdir().unwrap();
        for subdir in ["cur", "new", "tmp"] {
            fs::create_dir(dir.path().join(subdir)).unwrap();
        }

        let mut tracker = AtimeTracker::default();
        assert!(!tracker.contains(dir.path()));
        tracker.capture(dir.path()).unwrap();
        assert!(tracker.contains(dir.path()));
        assert!(!tracker.contains(dir.path().join("other")));
    }

    #[test]
    fn restore_without_capture() {
        let mut tracker = AtimeTracker::default();
        assert_eq!(0, tracker.restore().unwrap());
    }

    #[test]
    fn capture_missing_subdir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("cur")).unwrap();

        let mut tracker = AtimeTracker::default();
        assert!(matches!(
            tracker.capture(dir.path()),
            Err(Error::StatDirError(_, path)) if path == dir.path().join("new")
        ));
        assert!(tracker.records().is_empty());
    }
}
