//! Key-value persistence abstraction for the session record.
//!
//! This module provides a trait-based key-value abstraction so the session
//! store can persist the logged-in identity to different backends (local
//! file, OS keychain, browser-local storage in other environments) without
//! changing business logic.
//!
//! # Example
//!
//! ```ignore
//! use campusgate_core::kv::{FileKvStore, KvStore};
//! use std::path::PathBuf;
//!
//! let store = FileKvStore::new(PathBuf::from("./storage/state"));
//!
//! store.put("session/identity.json", "{...}").await?;
//! let value = store.get("session/identity.json").await?;
//! store.remove("session/identity.json").await?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;

/// Abstract trait for key-value persistence backends.
///
/// Implementations can be swapped without changing business logic. A missing
/// key is not an error: `get` returns `Ok(None)` and `remove` succeeds.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get<'a>(
        &'a self,
        key: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Option<String>, StoreError>> + Send + 'a>,
    >;

    /// Store `value` under `key`, replacing any previous value.
    fn put<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), StoreError>> + Send + 'a>>;

    /// Remove the value stored under `key`, if any.
    fn remove<'a>(
        &'a self,
        key: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), StoreError>> + Send + 'a>>;
}

/// Error type for key-value store operations.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error (file system or similar).
    IoError(std::io::Error),

    /// Invalid storage key format.
    InvalidKey(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "I/O error: {}", e),
            Self::InvalidKey(msg) => write!(f, "Invalid storage key: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

/// Local filesystem-based key-value store.
///
/// Each key maps to a file under the base directory.
#[derive(Clone)]
pub struct FileKvStore {
    /// Base directory where values are stored
    base_dir: PathBuf,
}

impl FileKvStore {
    /// Create a new file-backed store rooted at `base_dir`.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Validate key format to prevent path traversal.
    fn validate_key(key: &str) -> Result<(), StoreError> {
        // Reject empty keys or keys with path traversal attempts
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(StoreError::InvalidKey(
                "Key must not be empty, contain '..', or start with '/'".to_string(),
            ));
        }

        // Allow alphanumeric, hyphens, underscores, slashes, and dots
        if !key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '/' || c == '.')
        {
            return Err(StoreError::InvalidKey(
                "Key contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn get<'a>(
        &'a self,
        key: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Option<String>, StoreError>> + Send + 'a>,
    > {
        Box::pin(async move {
            Self::validate_key(key)?;

            let path = self.base_dir.join(key);

            match fs::read_to_string(&path).await {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn put<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), StoreError>> + Send + 'a>>
    {
        Box::pin(async move {
            Self::validate_key(key)?;

            let path = self.base_dir.join(key);

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }

            fs::write(&path, value).await?;

            Ok(())
        })
    }

    fn remove<'a>(
        &'a self,
        key: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), StoreError>> + Send + 'a>>
    {
        Box::pin(async move {
            Self::validate_key(key)?;

            let path = self.base_dir.join(key);

            // Delete, ignore "not found" errors
            match fs::remove_file(&path).await {
                Ok(_) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        })
    }
}

/// In-memory key-value store for tests.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl KvStore for MemoryKvStore {
    fn get<'a>(
        &'a self,
        key: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Option<String>, StoreError>> + Send + 'a>,
    > {
        Box::pin(async move { Ok(self.entries().get(key).cloned()) })
    }

    fn put<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), StoreError>> + Send + 'a>>
    {
        Box::pin(async move {
            self.entries().insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove<'a>(
        &'a self,
        key: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), StoreError>> + Send + 'a>>
    {
        Box::pin(async move {
            self.entries().remove(key);
            Ok(())
        })
    }
}
