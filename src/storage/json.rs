use super::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct JsonStorage {
    pub path: PathBuf,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    saved_at: DateTime<Utc>,
    contacts: &'a ContactBook,
}

#[derive(Deserialize)]
struct Snapshot {
    saved_at: DateTime<Utc>,
    contacts: ContactBook,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = OsString::from(self.path.as_os_str());
        temp.push(".tmp");
        PathBuf::from(temp)
    }

    /// Writes beside the target and renames over it, so a failed write
    /// leaves the previous snapshot and no temp file behind.
    fn write_atomically<F>(&self, write: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<(), AppError>,
    {
        create_file_parent(&self.path)?;

        let temp_path = self.temp_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        let mut writer = BufWriter::new(file);

        let written = write(&mut writer).and_then(|()| writer.flush().map_err(AppError::from));
        drop(writer);

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!(path = ?temp_path, error = %cleanup, "could not remove temp file");
            }
            return Err(e);
        }

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn malformed(&self, reason: impl ToString) -> AppError {
        AppError::MalformedSnapshot {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl PersistenceProvider for JsonStorage {
    fn load(&self) -> Result<ContactBook, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(ContactBook::new());
        }

        let mut data = String::new();
        OpenOptions::new()
            .read(true)
            .open(&self.path)?
            .read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(ContactBook::new());
        }

        let snapshot: Snapshot = serde_json::from_str(&data).map_err(|e| self.malformed(e))?;
        debug!(saved_at = %snapshot.saved_at, path = ?self.path, "read snapshot");

        Ok(snapshot.contacts)
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        self.write_atomically(|writer| {
            let snapshot = SnapshotRef {
                saved_at: Utc::now(),
                contacts,
            };
            serde_json::to_writer_pretty(writer, &snapshot)?;
            Ok(())
        })
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}
