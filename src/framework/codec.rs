//! # Collection Codec
//!
//! Translates between the on-disk text and in-memory records. Documents are
//! pretty-printed UTF-8 JSON with a two-space indent and are rewritten whole on
//! every save; array order is whatever the caller hands in, nothing is sorted.
//!
//! A save never leaves a half-written document behind: the encoded text goes to a
//! sibling temp file private to that save (`<name>.<id>.tmp`), which is flushed and
//! then renamed over the target. Overlapping saves never share a temp file, so each
//! one replaces the document whole and the last rename wins. If any step fails the
//! previous document is still in place.
//!
//! Decoding failures are [`StoreError::CorruptData`] unless the caller explicitly
//! opted into [`CodecOptions::fallback_on_corrupt`].

use crate::framework::error::{StoreError, StoreResult};
use crate::framework::id::generate_id;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Explicit decisions about unreadable documents. Both default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Treat a document that fails to decode as empty instead of failing.
    pub fallback_on_corrupt: bool,
    /// Treat a missing document as empty instead of failing.
    pub create_missing: bool,
}

/// A JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    options: CodecOptions,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>, options: CodecOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the document.
    ///
    /// `V::default()` stands for "empty" when one of the [`CodecOptions`] applies.
    pub async fn load<V>(&self) -> StoreResult<V>
    where
        V: DeserializeOwned + Default,
    {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound && self.options.create_missing => {
                debug!(path = %self.path.display(), "Missing document read as empty");
                return Ok(V::default());
            }
            Err(source) => {
                return Err(StoreError::StorageUnavailable {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match decode(&text) {
            Ok(value) => Ok(value),
            Err(source) if self.options.fallback_on_corrupt => {
                warn!(path = %self.path.display(), error = %source, "Corrupt document read as empty");
                Ok(V::default())
            }
            Err(source) => Err(StoreError::CorruptData {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Encodes `value` and atomically replaces the document with it.
    pub async fn save<V>(&self, value: &V) -> StoreResult<()>
    where
        V: Serialize + ?Sized,
    {
        let text = encode(value).map_err(|e| self.unavailable(e.into()))?;
        let tmp_path = self.tmp_path();

        if let Err(source) = write_synced(&tmp_path, text.as_bytes()).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.unavailable(source));
        }
        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.unavailable(source));
        }
        debug!(path = %self.path.display(), bytes = text.len(), "Saved");
        Ok(())
    }

    /// A fresh sibling path for one save.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", generate_id()));
        self.path.with_file_name(name)
    }

    fn unavailable(&self, source: std::io::Error) -> StoreError {
        StoreError::StorageUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

/// Encodes a value as pretty-printed JSON (two-space indent).
pub fn encode<V: Serialize + ?Sized>(value: &V) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Decodes a JSON document.
pub fn decode<V: DeserializeOwned>(text: &str) -> Result<V, serde_json::Error> {
    serde_json::from_str(text)
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_two_space_indent() {
        let text = encode(&vec![serde_json::json!({ "id": "a" })]).unwrap();
        assert_eq!(text, "[\n  {\n    \"id\": \"a\"\n  }\n]");
    }

    #[tokio::test]
    async fn missing_file_is_unavailable_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("nope.json"), CodecOptions::default());
        let err = file.load::<Vec<serde_json::Value>>().await.unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable { .. }));
    }

    #[tokio::test]
    async fn missing_file_reads_empty_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let options = CodecOptions {
            create_missing: true,
            ..CodecOptions::default()
        };
        let file = JsonFile::new(dir.path().join("nope.json"), options);
        let value: Vec<serde_json::Value> = file.load().await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_fails_unless_fallback_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[{ not json").unwrap();

        let strict = JsonFile::new(&path, CodecOptions::default());
        let err = strict.load::<Vec<serde_json::Value>>().await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptData { .. }));

        let lenient = JsonFile::new(
            &path,
            CodecOptions {
                fallback_on_corrupt: true,
                ..CodecOptions::default()
            },
        );
        let value: Vec<serde_json::Value> = lenient.load().await.unwrap();
        assert!(value.is_empty());
        // fallback never rewrites the file on its own
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{ not json");
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn failed_encode_keeps_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "[]").unwrap();

        // non-string map keys cannot be encoded as JSON
        let unencodable: std::collections::HashMap<(u8, u8), u8> = [((1, 2), 3)].into();
        let file = JsonFile::new(&path, CodecOptions::default());
        let err = file.save(&unencodable).await.unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert_eq!(entries(dir.path()), vec!["items.json"]);
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        // a non-empty directory at the target makes the rename fail
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let file = JsonFile::new(&path, CodecOptions::default());
        let err = file.save(&vec![1, 2, 3]).await.unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable { .. }));
        assert_eq!(std::fs::read_to_string(path.join("keep")).unwrap(), "x");
        assert_eq!(entries(dir.path()), vec!["items.json"]);
    }

    #[test]
    fn each_save_uses_its_own_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("items.json"), CodecOptions::default());
        let a = file.tmp_path();
        let b = file.tmp_path();
        assert_ne!(a, b);
        assert_eq!(a.parent(), Some(dir.path()));
        let name = a.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("items.json.") && name.ends_with(".tmp"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_saves_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let file = std::sync::Arc::new(JsonFile::new(
            dir.path().join("items.json"),
            CodecOptions::default(),
        ));

        let mut handles = Vec::new();
        for i in 0..50u32 {
            let file = std::sync::Arc::clone(&file);
            handles.push(tokio::spawn(async move {
                file.save(&vec![i; 200]).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let back: Vec<u32> = file.load().await.unwrap();
        assert_eq!(back.len(), 200);
        assert_eq!(entries(dir.path()), vec!["items.json"]);
    }

    #[tokio::test]
    async fn save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("items.json"), CodecOptions::default());
        file.save(&vec!["c", "a", "b"]).await.unwrap();
        let back: Vec<String> = file.load().await.unwrap();
        assert_eq!(back, vec!["c", "a", "b"]);
        assert_eq!(entries(dir.path()), vec!["items.json"]);
    }
}
