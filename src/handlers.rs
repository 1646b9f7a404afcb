use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use crate::entities::{AccessMode, BoardState, Comment, Post, PostId, User};
use crate::feed::{project, BoardView};
use crate::interactors::member::{
    MemberJoinInteractor, MemberLogInInteractor, MemberLogOutInteractor, MemberSignUpInteractor,
};
use crate::interactors::post::{
    PostCommentInteractor, PostCreateInteractor, PostElectInteractor, PostLikeInteractor,
    PostVoteInteractor,
};
use crate::presenters::BoardPresenter;
use crate::repositories::{snapshot, KeyValueStore};
use crate::usecases::member::{join, log_in, log_out, sign_up};
use crate::usecases::post::{comment, create, elect, like, vote};
use crate::usecases::ActionError;
use crate::utils::{Clock, IdGenerator};

/// owns the board and runs every action to completion, one at a time.
///
/// a successful action is saved to the store and then rendered.
/// a refused one is alerted and leaves both state and store untouched.
pub struct Handler {
    pub store: Arc<dyn KeyValueStore + Sync + Send>,
    pub pres: Arc<dyn BoardPresenter + Sync + Send>,
    pub clock: Arc<dyn Clock + Sync + Send>,
    pub ids: Arc<dyn IdGenerator + Sync + Send>,
    pub mode: AccessMode,
    board: Mutex<Board>,
}

struct Board {
    state: BoardState,
    search: String,
}

impl Handler {
    pub async fn load(
        store: Arc<dyn KeyValueStore + Sync + Send>,
        pres: Arc<dyn BoardPresenter + Sync + Send>,
        clock: Arc<dyn Clock + Sync + Send>,
        ids: Arc<dyn IdGenerator + Sync + Send>,
        mode: AccessMode,
    ) -> Self {
        let state = snapshot::load(&*store).await;

        Self {
            store,
            pres,
            clock,
            ids,
            mode,
            board: Mutex::new(Board {
                state,
                search: String::new(),
            }),
        }
    }

    pub async fn create_post(&self, title: String, body: String, tags: String) -> Result<Post> {
        let interactor = PostCreateInteractor {
            clock: self.clock.clone(),
            ids: self.ids.clone(),
            mode: self.mode,
        };
        let input = create::Input { title, body, tags };

        self.act(|s| create::Usecase::handle(&interactor, s, input))
            .await
            .map(|create::Output { post }| post)
    }

    pub async fn create_election(
        &self,
        title: String,
        body: String,
        tags: String,
        options: Vec<String>,
    ) -> Result<Post> {
        let interactor = PostElectInteractor {
            clock: self.clock.clone(),
            ids: self.ids.clone(),
            mode: self.mode,
        };
        let input = elect::Input {
            title,
            body,
            tags,
            options,
        };

        self.act(|s| elect::Usecase::handle(&interactor, s, input))
            .await
            .map(|elect::Output { post }| post)
    }

    pub async fn vote(&self, post_id: PostId, option: String) -> Result<Post> {
        let interactor = PostVoteInteractor { mode: self.mode };
        let input = vote::Input { post_id, option };

        self.act(|s| vote::Usecase::handle(&interactor, s, input))
            .await
            .map(|vote::Output { post }| post)
    }

    pub async fn toggle_like(&self, post_id: PostId) -> Result<like::Output> {
        let interactor = PostLikeInteractor { mode: self.mode };

        self.act(|s| like::Usecase::handle(&interactor, s, like::Input { post_id }))
            .await
    }

    pub async fn comment(&self, post_id: PostId, text: String) -> Result<Comment> {
        let interactor = PostCommentInteractor {
            clock: self.clock.clone(),
            mode: self.mode,
        };
        let input = comment::Input { post_id, text };

        self.act(|s| comment::Usecase::handle(&interactor, s, input))
            .await
            .map(|comment::Output { comment, .. }| comment)
    }

    pub async fn toggle_join(&self) -> Result<bool> {
        let interactor = MemberJoinInteractor { mode: self.mode };

        self.act(|s| join::Usecase::handle(&interactor, s, join::Input {}))
            .await
            .map(|join::Output { joined, .. }| joined)
    }

    pub async fn sign_up(&self, email: String, password: String, name: String) -> Result<User> {
        let input = sign_up::Input {
            email,
            password,
            name,
        };

        self.act(|s| sign_up::Usecase::handle(&MemberSignUpInteractor, s, input))
            .await
            .map(|sign_up::Output { user }| user)
    }

    pub async fn log_in(&self, email: String, password: String) -> Result<User> {
        let input = log_in::Input { email, password };

        self.act(|s| log_in::Usecase::handle(&MemberLogInInteractor, s, input))
            .await
            .map(|log_in::Output { user }| user)
    }

    pub async fn log_out(&self) -> Result<Option<User>> {
        self.act(|s| log_out::Usecase::handle(&MemberLogOutInteractor, s, log_out::Input {}))
            .await
            .map(|log_out::Output { user }| user)
    }

    /// sets the feed query and re-renders. the query is not persisted.
    pub async fn search(&self, query: impl Into<String>) -> Result<()> {
        let mut board = self.board.lock().await;
        board.search = query.into();

        self.render_locked(&board).await
    }

    pub async fn filter_by_tag(&self, tag: impl Into<String>) -> Result<()> { self.search(tag).await }

    pub async fn render(&self) -> Result<()> {
        let board = self.board.lock().await;

        self.render_locked(&board).await
    }

    pub async fn view(&self) -> BoardView {
        let board = self.board.lock().await;

        self.project_locked(&board)
    }

    pub async fn state(&self) -> BoardState { self.board.lock().await.state.clone() }

    async fn act<O, F>(&self, f: F) -> Result<O>
    where F: FnOnce(&mut BoardState) -> ::core::result::Result<O, ActionError> {
        let mut board = self.board.lock().await;

        match f(&mut board.state) {
            Ok(o) => {
                snapshot::save(&*self.store, &board.state).await?;
                self.render_locked(&board).await?;

                Ok(o)
            },
            Err(e) => {
                tracing::info!("refused - {}", e);
                self.pres.alert(e.to_string()).await?;

                Err(e.into())
            },
        }
    }

    async fn render_locked(&self, board: &Board) -> Result<()> {
        self.pres.render(self.project_locked(board)).await
    }

    fn project_locked(&self, board: &Board) -> BoardView {
        project(
            &board.state,
            &board.search,
            board.state.actor(self.mode),
            self.clock.now(),
        )
    }
}
