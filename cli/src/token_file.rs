//! JSON-file token storage for the command line.
//!
//! The file holds a flat `{"access_token": "...", "refresh_token": "..."}`
//! map, readable only by its owner on unix. It is deleted once the last key
//! is removed so `logout` leaves nothing behind.

#[cfg(test)]
#[path = "token_file_test.rs"]
mod token_file_test;

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use portal::TokenStorage;

pub const DEFAULT_TOKEN_FILE: &str = ".portal-tokens.json";

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "token file unreadable");
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "token file corrupt; ignoring");
            BTreeMap::new()
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) {
        let result = if entries.is_empty() {
            match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                other => other,
            }
        } else {
            serde_json::to_string_pretty(entries)
                .map_err(std::io::Error::other)
                .and_then(|json| write_private(&self.path, &json))
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "token file write failed");
        }
    }
}

/// Create or truncate `path` with owner-only permissions, then write.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    // `mode` only applies on create; tighten a pre-existing file too.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents.as_bytes())
}

impl TokenStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() || entries.is_empty() {
            self.save(&entries);
        }
    }
}
