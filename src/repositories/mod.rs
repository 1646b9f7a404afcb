use async_trait::async_trait;

pub mod file;
pub mod mock;
pub mod snapshot;

pub(crate) type Result<T> = ::std::result::Result<T, StoreError>;

pub const POSTS_KEY: &str = "community_posts_v1";
pub const MEMBERS_KEY: &str = "community_members_v1";
pub const USERS_KEY: &str = "community_users_v1";
pub const SESSION_KEY: &str = "community_session_v1";
pub const JOINED_KEY: &str = "community_joined_v1";

/// durable string key-value storage, one value per key.
#[async_trait]
pub trait KeyValueStore {
    /// `Ok(None)` when nothing has been written under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

#[derive(Debug)]
pub enum StoreError {
    InvalidKey(String),
    Internal(anyhow::Error),
}

impl ::std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            StoreError::InvalidKey(k) => write!(f, "invalid storage key: {:?}", k),
            StoreError::Internal(e) => write!(f, "internal error: {}", e),
        }
    }
}

impl ::std::error::Error for StoreError {}

pub(crate) fn convert_store_err<T, E>(result: ::std::result::Result<T, E>) -> Result<T>
where E: Sync + Send + ::std::error::Error + 'static {
    result.map_err(|e| StoreError::Internal(anyhow::anyhow!(e)))
}
