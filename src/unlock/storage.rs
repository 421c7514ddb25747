use crate::error::{ReadinessError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One TOML table on disk. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_root(root: &Path, configured: &str) -> Self {
        let candidate = PathBuf::from(configured);
        if candidate.is_absolute() {
            Self::new(candidate)
        } else {
            Self::new(root.join(candidate))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new())
            }
            Err(error) => return Err(ReadinessError::Io(error)),
        };
        toml::from_str(&content)
            .map_err(|e| ReadinessError::StoreParse(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&values)?)?;
        tracing::debug!(path = %self.path.display(), key, "store updated");
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = FileStore::new(dir.path().join("nested/storage.toml"));
        assert_eq!(store.get("premiumUnlocked").expect("read should succeed"), None);
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join(".readiness/storage.toml");

        let mut first = FileStore::new(&path);
        first.set("premiumUnlocked", "1").expect("write should succeed");
        first.set("applications", "1").expect("write should succeed");

        let second = FileStore::new(&path);
        assert_eq!(
            second.get("premiumUnlocked").expect("read should succeed"),
            Some("1".to_string())
        );
        assert_eq!(
            second.get("applications").expect("read should succeed"),
            Some("1".to_string())
        );
    }

    #[test]
    fn corrupt_file_is_a_store_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("storage.toml");
        fs::write(&path, "premiumUnlocked = [").expect("should write");

        let err = FileStore::new(&path).get("premiumUnlocked").expect_err("parse should fail");
        assert!(matches!(err, ReadinessError::StoreParse(_)));
    }

    #[test]
    fn relative_paths_resolve_under_root() {
        let root = Path::new("/tmp/workspace");
        assert_eq!(
            FileStore::in_root(root, ".readiness/storage.toml").path(),
            Path::new("/tmp/workspace/.readiness/storage.toml")
        );
        assert_eq!(
            FileStore::in_root(root, "/var/kv.toml").path(),
            Path::new("/var/kv.toml")
        );
    }
}
