use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::super::BoardPresenter;
use crate::feed::BoardView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presented {
    Render(BoardView),
    Alert(String),
}

/// forwards everything it is given to a channel.
pub struct ReturnBoardPresenter {
    pub ret: mpsc::UnboundedSender<Presented>,
}

impl ReturnBoardPresenter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Presented>) {
        let (ret, rx) = mpsc::unbounded_channel();
        (Self { ret }, rx)
    }
}

#[async_trait]
impl BoardPresenter for ReturnBoardPresenter {
    async fn render(&self, view: BoardView) -> Result<()> {
        self.ret
            .send(Presented::Render(view))
            .map_err(|e| anyhow!("presenter channel closed: {}", e))
    }

    async fn alert(&self, message: String) -> Result<()> {
        self.ret
            .send(Presented::Alert(message))
            .map_err(|e| anyhow!("presenter channel closed: {}", e))
    }
}
