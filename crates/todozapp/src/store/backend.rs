use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while TodoStore handles the "what" (validation, ordering, write policy).
pub trait StorageBackend {
    /// Read the raw slot payload.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self) -> Result<Option<String>>;

    /// Write the slot payload.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, payload: &str) -> Result<()>;

    /// The location of the slot.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn slot_path(&self) -> PathBuf;
}
