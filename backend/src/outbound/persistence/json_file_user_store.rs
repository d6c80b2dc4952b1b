//! JSON document adapter for the [`UserStore`] port.
//!
//! The whole collection lives in one UTF-8 file holding a pretty-printed JSON
//! array. Reads and writes run on the Tokio blocking pool against a
//! capability handle to the data directory.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::{debug, info};

use super::atomic_io::{file_name, write_atomic};
use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{User, sample_users};

/// User store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    dir: Arc<Dir>,
    file: Utf8PathBuf,
    display_path: Utf8PathBuf,
}

impl JsonFileUserStore {
    /// Open `file` inside `data_dir`, creating the directory when missing.
    ///
    /// The document itself is created lazily on first load.
    ///
    /// # Errors
    /// [`UserStoreError::Io`] when `file` is not a bare file name or the
    /// directory cannot be created or opened.
    pub fn open(data_dir: &Utf8Path, file: impl Into<Utf8PathBuf>) -> Result<Self, UserStoreError> {
        let file = file.into();
        let display_path = data_dir.join(&file);
        if file_name(&file).is_none() {
            return Err(UserStoreError::io(
                display_path.as_str(),
                "document path must be a file name",
            ));
        }
        let dir = Dir::create_ambient_dir_all(data_dir, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(data_dir, ambient_authority()))
            .map_err(|err| UserStoreError::io(display_path.as_str(), err.to_string()))?;
        Ok(Self {
            dir: Arc::new(dir),
            file,
            display_path,
        })
    }

    /// Location of the document, for logs and diagnostics.
    pub fn path(&self) -> &Utf8Path {
        &self.display_path
    }

    fn io_error(&self, err: impl ToString) -> UserStoreError {
        UserStoreError::io(self.display_path.as_str(), err.to_string())
    }

    fn load_blocking(&self) -> Result<Vec<User>, UserStoreError> {
        match self.dir.read_to_string(&self.file) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| UserStoreError::parse(self.display_path.as_str(), err.to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let seeded = sample_users();
                write_atomic(&self.dir, &self.file, &encode(&seeded, &self.display_path)?)?;
                info!(path = %self.display_path, users = seeded.len(), "seeded user document");
                Ok(seeded)
            }
            Err(err) => Err(self.io_error(err)),
        }
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T, UserStoreError>
    where
        T: Send + 'static,
        F: FnOnce(Self) -> Result<T, UserStoreError> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || task(store))
            .await
            .map_err(|err| self.io_error(format!("blocking task failed: {err}")))?
    }
}

/// Pretty-printed, two-space indented JSON with non-ASCII text kept verbatim.
fn encode(users: &[User], path: &Utf8Path) -> Result<String, UserStoreError> {
    serde_json::to_string_pretty(users).map_err(|err| UserStoreError::io(path.as_str(), err.to_string()))
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn load(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self.run_blocking(|store| store.load_blocking()).await?;
        debug!(path = %self.display_path, users = users.len(), "loaded user document");
        Ok(users)
    }

    async fn save(&self, users: &[User]) -> Result<(), UserStoreError> {
        let contents = encode(users, &self.display_path)?;
        self.run_blocking(move |store| write_atomic(&store.dir, &store.file, &contents))
            .await?;
        debug!(path = %self.display_path, users = users.len(), "saved user document");
        Ok(())
    }
}
