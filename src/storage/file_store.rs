use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, error};

use crate::{
    Error,
    error::Result,
};

use super::kv_store::{check_key, KeyValueStore};

const DOCUMENT_EXT: &str = "json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => {
                fs::create_dir_all(path).map_err(|e| {
                    Error::Argument(format!("Failed to create directory {}: {e}", path.display()))
                })?;
                fs::metadata(path).map_err(|e| {
                    Error::Argument(format!("Failed to get metadata for path {}: {e}", path.display()))
                })?
            }
        };

        if !metadata.is_dir() {
            Err(Error::Argument(format!("Path {} is not a directory", path.display())))?;
        }

        let path = fs::canonicalize(path).map_err(|e| {
            error!("{e}, path: {}", path.display());
            Error::Argument(format!("Invalid storage path {} with error: {e}", path.display()))
        })?;

        debug!("File store opened at {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn document_path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.path.join(format!("{}.{}", key, DOCUMENT_EXT)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.document_path(key)?;
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(format!("Reading {} error: {e}", path.display())))
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.document_path(key)?;
        let tmp = path.with_extension(format!("{}.tmp", DOCUMENT_EXT));

        fs::write(&tmp, value).map_err(|e| {
            Error::Io(format!("Writing {} error: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            _ = fs::remove_file(&tmp);
            Error::Io(format!("Replacing {} error: {e}", path.display()))
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.document_path(key)?;
        match fs::remove_file(&path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(format!("Removing {} error: {e}", path.display())))
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = fs::read_dir(&self.path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().map_or(false, |ext| ext == DOCUMENT_EXT))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(|s| s.to_string()))
            .collect::<Vec<_>>();
        keys.sort();
        Ok(keys)
    }
}
