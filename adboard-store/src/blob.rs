use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to write blob {key}: {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },
}

/// Keyed JSON blob storage, the local-storage analog: string values
/// under string keys, the whole value rewritten on every save.
pub trait BlobStore {
    fn read_blob(&self, key: &str) -> Option<String>;
    fn write_blob(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_blob(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Deserialize the blob under `key`. A missing or malformed value is
/// treated as absent and yields the default.
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: BlobStore + ?Sized,
{
    load_optional(store, key).unwrap_or_default()
}

/// Deserialize the blob under `key` if present and well-formed.
pub fn load_optional<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: BlobStore + ?Sized,
{
    let raw = store.read_blob(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Malformed blob under {}: {}", key, err);
            None
        }
    }
}

/// Serialize `value` and overwrite the blob under `key`.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: BlobStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.write_blob(key, &raw)
}

/// In-memory backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read_blob(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn write_blob(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_blob(&mut self, key: &str) -> Result<(), StoreError> {
        self.blobs.remove(key);
        Ok(())
    }
}

/// File backend: one JSON document per key inside a data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileStore {
    fn read_blob(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write_blob(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn remove_blob(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}
