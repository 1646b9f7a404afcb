use anyhow::Result;

use crate::cmds::{
    CommentCmd, ElectCmd, FeedCmd, LikeCmd, LogInCmd, PostCmd, RootMod, SignUpCmd, TagCmd,
    VoteCmd,
};
use crate::handlers::Handler;
use crate::usecases::post::like;

/// runs one parsed command against the board.
pub struct Conductor {
    pub handler: Handler,
}

impl Conductor {
    #[tracing::instrument(skip(self, cmd))]
    pub async fn conduct(&self, cmd: RootMod) -> Result<()> {
        let h = &self.handler;

        match cmd {
            RootMod::Feed(FeedCmd { search }) => h.search(search).await,

            RootMod::Tag(TagCmd { tag }) => h.filter_by_tag(tag).await,

            RootMod::Post(PostCmd { title, body, tags }) => {
                let post = h.create_post(title, body, tags).await?;
                tracing::info!("posted - {}", post.id);

                Ok(())
            },

            RootMod::Elect(ElectCmd {
                title,
                body,
                tags,
                options,
            }) => {
                let post = h.create_election(title, body, tags, options).await?;
                tracing::info!("election opened - {}", post.id);

                Ok(())
            },

            RootMod::Vote(VoteCmd { post_id, option }) => {
                let post = h.vote(post_id, option).await?;
                tracing::info!("voted - {} ({} votes)", post.id, post.total_votes());

                Ok(())
            },

            RootMod::Like(LikeCmd { post_id }) => {
                let like::Output { post, liked } = h.toggle_like(post_id).await?;
                tracing::info!("{} - {}", if liked { "liked" } else { "unliked" }, post.id);

                Ok(())
            },

            RootMod::Comment(CommentCmd { post_id, text }) => {
                h.comment(post_id.clone(), text).await?;
                tracing::info!("commented - {}", post_id);

                Ok(())
            },

            RootMod::Join => {
                let joined = h.toggle_join().await?;
                tracing::info!("joined - {}", joined);

                Ok(())
            },

            RootMod::Signup(SignUpCmd {
                email,
                password,
                name,
            }) => {
                let user = h.sign_up(email, password, name).await?;
                tracing::info!("signed up - {}", user.email);

                Ok(())
            },

            RootMod::Login(LogInCmd { email, password }) => {
                let user = h.log_in(email, password).await?;
                tracing::info!("logged in - {}", user.email);

                Ok(())
            },

            RootMod::Logout => {
                let user = h.log_out().await?;
                tracing::info!("logged out - {:?}", user.map(|u| u.email));

                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use clap::Parser;

    use super::*;
    use crate::cmds::App;
    use crate::entities::AccessMode;
    use crate::in_memory;
    use crate::presenters::impls::ret::{Presented, ReturnBoardPresenter};
    use crate::usecases::ActionError;

    fn cmd(args: &[&str]) -> RootMod {
        App::try_parse_from(::std::iter::once("community_board").chain(args.iter().copied()))
            .unwrap()
            .cmd
    }

    #[tokio::test]
    async fn commands_drive_the_board() {
        let (pres, mut rx) = ReturnBoardPresenter::new();
        let conductor = Conductor {
            handler: in_memory(Arc::new(pres), AccessMode::Open).await,
        };

        conductor
            .conduct(cmd(&["post", "-b", "hello", "--tags", "Foo Bar, baz"]))
            .await
            .unwrap();
        let id = conductor.handler.state().await.posts[0].id.clone();

        conductor.conduct(cmd(&["like", id.0.as_str()])).await.unwrap();
        conductor
            .conduct(cmd(&["comment", id.0.as_str(), "nice one"]))
            .await
            .unwrap();
        conductor.conduct(cmd(&["tag", "baz"])).await.unwrap();

        let mut last = None;
        while let Ok(Presented::Render(v)) = rx.try_recv() {
            last = Some(v);
        }
        let view = last.unwrap();

        assert_eq!(view.search, "baz");
        assert_eq!(view.feed.len(), 1);
        assert!(view.feed[0].liked);
        assert_eq!(view.feed[0].post.likes, 1);
        assert_eq!(view.feed[0].comments[0].comment.text, "nice one");
    }

    #[tokio::test]
    async fn refused_commands_surface_the_action_error() {
        let (pres, mut rx) = ReturnBoardPresenter::new();
        let conductor = Conductor {
            handler: in_memory(Arc::new(pres), AccessMode::Open).await,
        };

        let err = conductor
            .conduct(cmd(&["login", "-e", "nobody@example.com", "-p", "x"]))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ActionError>(),
            Some(&ActionError::InvalidCredentials)
        );
        assert!(matches!(rx.try_recv(), Ok(Presented::Alert(_))));
    }
}
