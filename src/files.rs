//! This module provides a `KeyValueStore` backed by a single JSON file,
//! along with functions for finding the default location of that file.
//! The default location is determined by the `app_dirs` crate, which will
//! return a path based on the operating system (Windows, OS X, or Linux).
//!
//! The whole file is rewritten on every `set`, so the file always holds
//! every key the store knows about.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use app_dirs::{self, AppDataType, AppDirsError, AppInfo};

use super::errors::*;
use super::store::KeyValueStore;

/// The information for app_dirs
const APP_INFO: AppInfo = AppInfo {
    name: "readthrough",
    author: "Ian Johnson",
};

/// The file name of the store inside the data directory
const STORE_FILE: &str = "store.json";

/// Returns the location of the data directory if possible.
pub fn data_dir() -> Result<PathBuf> {
    match app_dirs::get_app_root(AppDataType::UserData, &APP_INFO) {
        Ok(p) => Ok(p),
        Err(AppDirsError::NotSupported) => Err(ErrorKind::CannotLocateStore.into()),
        Err(AppDirsError::Io(e)) => Err(e).chain_err(|| ErrorKind::Io("could not find data directory".into())),
        // This should properly be a panic, since there really isn't any way
        // this can happen (unless `app_dirs` changes in a breaking way).
        Err(AppDirsError::InvalidAppInfo) => panic!("invalid app info"),
    }
}

/// Returns the default location of the store file.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(STORE_FILE))
}

/// A key-value store persisted as one JSON object.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; the
    /// file and its parent directory are created on the first `set`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<FileStore> {
        let path = path.as_ref().to_owned();
        let values = if path.exists() {
            let f = File::open(&path).chain_err(|| ErrorKind::Io(format!("could not open store '{}'", path.display())))?;
            serde_json::from_reader(f).chain_err(|| ErrorKind::Json(format!("json error in store '{}'", path.display())))?
        } else {
            BTreeMap::new()
        };
        debug!("opened store {} with {} keys", path.display(), values.len());

        Ok(FileStore {
            path: path,
            values: values,
        })
    }

    /// Returns an empty store at `path`, for when the existing file cannot
    /// be read. The unreadable file is replaced on the next `set`.
    pub fn empty<P: AsRef<Path>>(path: P) -> FileStore {
        FileStore {
            path: path.as_ref().to_owned(),
            values: BTreeMap::new(),
        }
    }

    /// Opens the store at its default location in the data directory.
    pub fn open_default() -> Result<FileStore> {
        FileStore::open(default_store_path()?)
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.is_dir() {
                fs::create_dir_all(dir).chain_err(|| ErrorKind::Io("could not create data directory".into()))?;
            }
        }
        let mut f = File::create(&self.path).chain_err(|| ErrorKind::Io("could not write store file".into()))?;

        serde_json::to_writer_pretty(&mut f, &self.values).chain_err(|| ErrorKind::Json("could not serialize store to json".into()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.write()
            .chain_err(|| ErrorKind::Storage(format!("could not save '{}'", key)))
    }
}
