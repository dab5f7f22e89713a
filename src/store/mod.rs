mod error;


pub use error::{StoreError, StoreResult};

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::path::{Path, PathBuf};

use crate::record::{HEADERS, Student, StudentPatch};

/// File-backed ordered table of student rows.
///
/// Owns the in-memory row vector and the backing CSV path. Lookups are
/// first-match linear scans over insertion order; every mutating operation
/// rewrites the whole file before returning.
pub struct StudentStore {
    path: Option<PathBuf>,
    rows: Vec<Student>,
}

impl StudentStore {
    /// Open the store at `path`, creating a header-only file if none exists,
    /// then load all rows into memory.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            write_rows(&path, &[])?;
            debug!("created empty data file {}", path.display());
        }

        let mut reader = ReaderBuilder::new().from_path(&path)?;
        let mut rows = Vec::new();
        for result in reader.deserialize() {
            rows.push(result?);
        }
        debug!("loaded {} rows from {}", rows.len(), path.display());

        Ok(Self {
            path: Some(path),
            rows,
        })
    }

    /// Store with no backing file; `save` is a no-op.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            rows: Vec::new(),
        }
    }

    /// Serialize the full table, header first, overwriting the backing file.
    pub fn save(&self) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        write_rows(path, &self.rows)?;
        debug!("saved {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Student> {
        self.rows.get(idx)
    }

    /// Index of the first row whose name matches exactly.
    ///
    /// Names are not unique; rows after the first match are not reachable
    /// through this lookup.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.name == name)
    }

    /// Append a row to the end of the table and persist.
    pub fn add(&mut self, student: Student) -> StoreResult<()> {
        self.rows.push(student);
        self.save()
    }

    /// Apply a field patch to the row at `idx` and persist.
    pub fn update(&mut self, idx: usize, patch: &StudentPatch) -> StoreResult<()> {
        let row = self
            .rows
            .get_mut(idx)
            .ok_or(StoreError::IndexOutOfBounds(idx))?;
        patch.apply_to(row);
        self.save()
    }

    /// Remove the row at `idx`, shifting later rows up, and persist.
    pub fn remove(&mut self, idx: usize) -> StoreResult<Student> {
        if idx >= self.rows.len() {
            return Err(StoreError::IndexOutOfBounds(idx));
        }
        let removed = self.rows.remove(idx);
        self.save()?;
        Ok(removed)
    }
}

// The csv writer only emits the serde-derived header before the first row,
// so an empty table would lose it; write the header record explicitly.
fn write_rows(path: &Path, rows: &[Student]) -> StoreResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
