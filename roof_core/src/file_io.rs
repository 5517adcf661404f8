//! # File I/O Module
//!
//! Workbook file operations with safety features:
//! - **Atomic saves**: Write to .tmp, verify, rename to prevent corruption
//! - **File locking**: Prevent concurrent edits on shared drives
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Workbooks are saved as `.roofwb` files containing JSON. Lock files use
//! a `.lock` suffix with metadata about who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use roof_core::file_io::{save_workbook, load_workbook, WorkbookLock};
//! use roof_core::workbook::Workbook;
//! use std::path::Path;
//!
//! let workbook = Workbook::new("Jane", "25-001", "Acme Builders");
//! let path = Path::new("acme.roofwb");
//!
//! let lock = WorkbookLock::acquire(path, "jane@example.com").unwrap();
//! save_workbook(&workbook, path).unwrap();
//! drop(lock); // releases lock
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::workbook::{Workbook, SCHEMA_VERSION};

/// Locks older than this are treated as abandoned and taken over.
const LOCK_STALE_AFTER_HOURS: i64 = 12;

/// Lock file metadata stored next to the workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// Whether this lock has outlived the staleness window.
    fn is_stale(&self) -> bool {
        Utc::now() - self.locked_at > Duration::hours(LOCK_STALE_AFTER_HOURS)
    }
}

/// Lock guard for a workbook file; releases the lock when dropped.
///
/// Uses both an OS-level advisory lock (via fs2) for process safety and a
/// `.lock` metadata file so other users can see who is editing.
#[derive(Debug)]
pub struct WorkbookLock {
    lock_path: PathBuf,
    /// The underlying file handle (keeps the OS lock)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl WorkbookLock {
    /// Acquire an exclusive lock on a workbook file.
    ///
    /// # Returns
    ///
    /// * `Ok(WorkbookLock)` - Lock acquired
    /// * `Err(CalcError::FileLocked)` - Another user/process holds a fresh lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !existing.is_stale() {
                    return Err(CalcError::file_locked(
                        path.display().to_string(),
                        existing.user_id,
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                // Stale lock: previous holder went away, take it over.
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json = serde_json::to_string_pretty(&info)
            .map_err(|e| CalcError::SerializationError {
                reason: e.to_string(),
            })?;
        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;
        lock_file.sync_all().map_err(|e| {
            CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(WorkbookLock {
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check whether a workbook file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if a fresh lock exists, `None` otherwise.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !info.is_stale() {
                    return Some(info);
                }
            }
        }
        None
    }
}

impl Drop for WorkbookLock {
    fn drop(&mut self) {
        // Best effort: remove the metadata file; the OS lock releases with
        // the file handle either way.
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut os_string = path.as_os_str().to_os_string();
    os_string.push(".lock");
    PathBuf::from(os_string)
}

fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let contents = fs::read_to_string(lock_path).map_err(|e| {
        CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

/// Save a workbook atomically.
///
/// Serializes to pretty JSON, verifies the serialized form parses back,
/// writes to a `.tmp` sibling, syncs, then renames over the target. A
/// crash mid-save leaves the previous file intact.
pub fn save_workbook(workbook: &Workbook, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(workbook).map_err(|e| {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    // Verify before touching the filesystem.
    serde_json::from_str::<Workbook>(&json).map_err(|e| CalcError::SerializationError {
        reason: format!("save verification failed: {}", e),
    })?;

    let tmp_path = {
        let mut os_string = path.as_os_str().to_os_string();
        os_string.push(".tmp");
        PathBuf::from(os_string)
    };

    let mut file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create", tmp_path.display().to_string(), e.to_string())
    })?;
    file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;
    file.sync_all().map_err(|e| {
        CalcError::file_error("sync", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(file);

    fs::rename(&tmp_path, path).map_err(|e| {
        CalcError::file_error("rename", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a workbook, validating the schema version.
///
/// # Returns
///
/// * `Err(CalcError::FileError)` - Missing/unreadable file
/// * `Err(CalcError::SerializationError)` - Malformed JSON
/// * `Err(CalcError::VersionMismatch)` - Written by an incompatible schema
pub fn load_workbook(path: &Path) -> CalcResult<Workbook> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let workbook: Workbook =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;

    if workbook.meta.version != SCHEMA_VERSION {
        return Err(CalcError::VersionMismatch {
            file_version: workbook.meta.version,
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(workbook)
}
