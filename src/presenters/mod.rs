use anyhow::Result;
use async_trait::async_trait;

use crate::feed::BoardView;

pub mod impls;

/// receives the whole board after every change, and alerts for refused actions.
#[async_trait]
pub trait BoardPresenter {
    async fn render(&self, view: BoardView) -> Result<()>;
    async fn alert(&self, message: String) -> Result<()>;
}
