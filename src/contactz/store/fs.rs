use super::codec::{decode_all, encode_all, encode_contact, RECORD_SIZE};
use super::{ContactStore, StoreReport};
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// File-backed store: a single file of fixed-width records, no header.
pub struct FileStore {
    path: PathBuf,
    strict: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    /// In strict mode a trailing partial record is an error instead of being dropped.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactsError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contacts".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl ContactStore for FileStore {
    fn load_all(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, no contacts");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(ContactsError::Io)?;
        let decoded = decode_all(&bytes);

        if decoded.trailing > 0 {
            if self.strict {
                return Err(ContactsError::PartialRecord {
                    trailing: decoded.trailing,
                });
            }
            warn!(
                path = %self.path.display(),
                trailing = decoded.trailing,
                "ignoring partial record at end of store"
            );
        }

        debug!(records = decoded.contacts.len(), "loaded contacts");
        Ok(decoded.contacts)
    }

    fn append(&mut self, contact: &Contact) -> Result<()> {
        // Appending after a partial record would misalign every new record
        let report = self.inspect()?;
        if report.trailing > 0 {
            return Err(ContactsError::PartialRecord {
                trailing: report.trailing,
            });
        }

        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ContactsError::Io)?;
        file.write_all(&encode_contact(contact))
            .map_err(ContactsError::Io)?;
        debug!(id = contact.id, "appended contact");
        Ok(())
    }

    fn replace_all(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent()?;

        // Write to a sibling tmp file, sync it, then rename over the store
        let tmp = self.tmp_path();
        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(&encode_all(contacts))?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(ContactsError::Io(e));
        }

        debug!(records = contacts.len(), "rewrote store");
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(ContactsError::Io)?;
            debug!(path = %self.path.display(), "removed store file");
        }
        Ok(())
    }

    fn inspect(&self) -> Result<StoreReport> {
        if !self.path.exists() {
            return Ok(StoreReport::default());
        }
        let bytes = fs::metadata(&self.path).map_err(ContactsError::Io)?.len();
        let record_size = RECORD_SIZE as u64;
        Ok(StoreReport {
            exists: true,
            bytes,
            records: (bytes / record_size) as usize,
            trailing: (bytes % record_size) as usize,
        })
    }

    fn truncate_partial(&mut self) -> Result<usize> {
        let report = self.inspect()?;
        if report.trailing == 0 {
            return Ok(0);
        }

        let file = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(ContactsError::Io)?;
        file.set_len((report.records * RECORD_SIZE) as u64)
            .map_err(ContactsError::Io)?;

        warn!(trailing = report.trailing, "truncated partial record");
        Ok(report.trailing)
    }
}
