//! The append-only journal file backing the incident store.
//!
//! The journal is the bootstrap source at startup and a mirror afterwards:
//! reads happen once, appends happen one record at a time, and the two never
//! overlap within a session.

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use crate::{domain::Incident, storage::record};

/// An append-only flat file of incident records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    path: PathBuf,
}

/// The outcome of reading a journal from disk.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Successfully parsed records, in file order.
    pub incidents: Vec<Incident>,
    /// Number of malformed lines that were skipped.
    pub skipped: usize,
}

impl Journal {
    /// Creates a handle to the journal at `path`. The file is not touched
    /// until a read or append.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The location of the journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every parseable record, in file order, keeping at most `limit`.
    ///
    /// A missing file is an empty journal, not an error: a fresh deployment
    /// has no journal until the first incident is recorded. Malformed lines
    /// are skipped and counted, never fatal. Reading stops once `limit`
    /// records have been collected.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read.
    pub fn read_all(&self, limit: usize) -> io::Result<LoadOutcome> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no journal at {}; starting empty", self.path.display());
                return Ok(LoadOutcome::default());
            }
            Err(e) => return Err(e),
        };

        let mut outcome = LoadOutcome::default();
        for line in BufReader::new(file).lines() {
            if outcome.incidents.len() >= limit {
                tracing::warn!(
                    "journal {} holds more than {limit} records; ignoring the rest",
                    self.path.display()
                );
                break;
            }

            match record::parse_line(&line?) {
                Ok(incident) => outcome.incidents.push(incident),
                Err(e) => {
                    tracing::debug!("skipping malformed journal line: {e}");
                    outcome.skipped += 1;
                }
            }
        }

        Ok(outcome)
    }

    /// Appends a single record, creating the journal file if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending or the
    /// line cannot be written.
    pub fn append(&self, incident: &Incident) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", record::format_line(incident))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn incident(id: u32, area: &str) -> Incident {
        Incident::new(
            id.to_string().parse().unwrap(),
            area.parse().unwrap(),
            "pothole".parse().unwrap(),
            "08:15".parse().unwrap(),
        )
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("incidents.txt"));

        let outcome = journal.read_all(100).unwrap();
        assert!(outcome.incidents.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn append_then_read() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("incidents.txt"));

        journal.append(&incident(1, "Main St")).unwrap();
        journal.append(&incident(2, "Oak Ave")).unwrap();

        let outcome = journal.read_all(100).unwrap();
        assert_eq!(outcome.incidents.len(), 2);
        assert_eq!(outcome.incidents[0].area(), "Main St");
        assert_eq!(outcome.incidents[1].area(), "Oak Ave");
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn appended_lines_are_newline_terminated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("incidents.txt");
        let journal = Journal::new(path.clone());

        journal.append(&incident(1, "Main St")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1|Main St|pothole|08:15\n");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("incidents.txt");
        fs::write(
            &path,
            "1|Main St|pothole|08:15\nnot a record\n2|Oak Ave|graffiti|09:30\n",
        )
        .unwrap();

        let outcome = Journal::new(path).read_all(100).unwrap();
        assert_eq!(outcome.incidents.len(), 2);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn reading_stops_at_the_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("incidents.txt");
        let journal = Journal::new(path);

        for id in 1..=5 {
            journal.append(&incident(id, "Main St")).unwrap();
        }

        let outcome = journal.read_all(3).unwrap();
        assert_eq!(outcome.incidents.len(), 3);
        assert_eq!(outcome.incidents[2].id().get(), 3);
    }
}
