use std::sync::Arc;

use crate::config::Config;
use crate::entities::AccessMode;
use crate::handlers::Handler;
use crate::presenters::BoardPresenter;
use crate::repositories::file::FileStore;
use crate::repositories::mock::InMemoryStore;
use crate::utils::{RandomIdGenerator, SystemClock};

pub async fn in_memory(
    pres: Arc<dyn BoardPresenter + Sync + Send>,
    mode: AccessMode,
) -> Handler {
    Handler::load(
        Arc::new(InMemoryStore::new()),
        pres,
        Arc::new(SystemClock),
        Arc::new(RandomIdGenerator),
        mode,
    )
    .await
}

pub async fn file_backed(config: &Config, pres: Arc<dyn BoardPresenter + Sync + Send>) -> Handler {
    let Config { data_dir, mode } = config;

    tracing::debug!("data dir - {}", data_dir.display());

    Handler::load(
        Arc::new(FileStore::new(data_dir.clone())),
        pres,
        Arc::new(SystemClock),
        Arc::new(RandomIdGenerator),
        *mode,
    )
    .await
}
