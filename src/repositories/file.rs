use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::Instrument;

use super::{convert_store_err, KeyValueStore, Result, StoreError};

/// stores each key as `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    fn path_of(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        match valid {
            true => Ok(self.dir.join(format!("{}.json", key))),
            false => Err(StoreError::InvalidKey(key.to_string())),
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_of(key)?;

        match fs::read_to_string(&path)
            .instrument(tracing::trace_span!("read_to_string"))
            .await
        {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => convert_store_err(Err(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_of(key)?;

        convert_store_err(
            fs::create_dir_all(&self.dir)
                .instrument(tracing::trace_span!("create_dir_all"))
                .await,
        )?;

        // readers see either the previous value or the new one
        let tmp = path.with_extension("json.tmp");
        convert_store_err(
            fs::write(&tmp, value)
                .instrument(tracing::trace_span!("write"))
                .await,
        )?;
        convert_store_err(
            fs::rename(&tmp, &path)
                .instrument(tracing::trace_span!("rename"))
                .await,
        )
    }
}
