//! Durable rejection set. Backed by the append-only comma-separated
//! file the operator can inspect (`not_selected_candidates.txt`); the
//! pipeline only sees the `contains`/`add` surface.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::AppError;

pub struct RejectionLog {
    path: PathBuf,
    seen: HashSet<String>,
}

impl RejectionLog {
    /// Loads the log from disk, creating an empty one if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let seen = match std::fs::read_to_string(&path) {
            Ok(contents) => contents
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(AppError::Io(e)),
        };
        Ok(Self { path, seen })
    }

    pub fn contains(&self, candidate_id: &str) -> bool {
        self.seen.contains(candidate_id)
    }

    /// Records a rejection. Idempotent: an ID already in the set is not
    /// appended again, so each rejection appears exactly once on disk
    /// no matter how many retry attempts observe it.
    pub fn add(&mut self, candidate_id: &str) -> Result<(), AppError> {
        if !self.seen.insert(candidate_id.to_string()) {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "{candidate_id},")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_contains_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let log = RejectionLog::open(dir.path().join("rejected.txt")).unwrap();
        assert!(!log.contains("jdoe"));
    }

    #[test]
    fn add_then_contains() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = RejectionLog::open(dir.path().join("rejected.txt")).unwrap();
        log.add("jdoe").unwrap();
        assert!(log.contains("jdoe"));
        assert!(!log.contains("other"));
    }

    #[test]
    fn duplicate_add_appends_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejected.txt");
        let mut log = RejectionLog::open(&path).unwrap();
        log.add("jdoe").unwrap();
        log.add("jdoe").unwrap();
        log.add("jdoe").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("jdoe").count(), 1);
    }

    #[test]
    fn survives_reload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejected.txt");
        {
            let mut log = RejectionLog::open(&path).unwrap();
            log.add("jdoe").unwrap();
            log.add("asmith").unwrap();
        }
        let reloaded = RejectionLog::open(&path).unwrap();
        assert!(reloaded.contains("jdoe"));
        assert!(reloaded.contains("asmith"));
        assert!(!reloaded.contains("pending"));
    }

    #[test]
    fn reads_legacy_comma_separated_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejected.txt");
        std::fs::write(&path, "jdoe,asmith,").unwrap();
        let log = RejectionLog::open(&path).unwrap();
        assert!(log.contains("jdoe"));
        assert!(log.contains("asmith"));
    }
}
