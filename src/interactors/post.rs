use std::collections::{BTreeMap, HashSet};
use std::convert::TryFrom;
use std::sync::Arc;

use super::*;
use crate::entities::{AccessMode, BoardState, Comment, Post};
use crate::usecases::post::{comment, create, elect, like, vote};
use crate::utils::{AlsoChain, Clock, IdGenerator, LetChain};

pub struct PostCreateInteractor {
    pub clock: Arc<dyn Clock + Sync + Send>,
    pub ids: Arc<dyn IdGenerator + Sync + Send>,
    pub mode: AccessMode,
}
impl create::Usecase for PostCreateInteractor {
    #[tracing::instrument(skip(self, state))]
    fn handle(&self, state: &mut BoardState, data: create::Input) -> Result<create::Output> {
        tracing::trace!("input - {:?}", data);

        let create::Input { title, body, tags } = data;

        let actor = require_actor(state, self.mode)?;
        let body = require_text(&body, Field::Body)?;

        let new_post = Post {
            id: fresh_id(state, &*self.ids),
            author: actor.as_member(),
            title: title.trim().to_string(),
            body,
            tags: normalize_tags(&tags),
            ts: self.clock.now(),
            likes: 0,
            liked_by: HashSet::new(),
            comments: vec![],
            is_election: false,
            options: vec![],
            votes: BTreeMap::new(),
        };

        state.posts.push(new_post.clone());

        create::Output { post: new_post }
            .also_(|o| tracing::trace!("output - {:?}", o))
            .let_(Ok)
    }
}

pub struct PostElectInteractor {
    pub clock: Arc<dyn Clock + Sync + Send>,
    pub ids: Arc<dyn IdGenerator + Sync + Send>,
    pub mode: AccessMode,
}
impl elect::Usecase for PostElectInteractor {
    #[tracing::instrument(skip(self, state))]
    fn handle(&self, state: &mut BoardState, data: elect::Input) -> Result<elect::Output> {
        tracing::trace!("input - {:?}", data);

        let elect::Input {
            title,
            body,
            tags,
            options,
        } = data;

        let actor = require_actor(state, self.mode)?;
        let title = require_text(&title, Field::Title)?;

        let mut unique: Vec<String> = vec![];
        options
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .for_each(|o| {
                if !unique.iter().any(|u| u == o) {
                    unique.push(o.to_string())
                }
            });
        let options = unique;

        if options.len() < 2 {
            return Err(ActionError::EmptyRequiredField {
                field: Field::Options,
            });
        }

        let new_post = Post {
            id: fresh_id(state, &*self.ids),
            author: actor.as_member(),
            title,
            body: body.trim().to_string(),
            tags: normalize_tags(&tags),
            ts: self.clock.now(),
            likes: 0,
            liked_by: HashSet::new(),
            comments: vec![],
            is_election: true,
            options,
            votes: BTreeMap::new(),
        };

        state.posts.push(new_post.clone());

        elect::Output { post: new_post }
            .also_(|o| tracing::trace!("output - {:?}", o))
            .let_(Ok)
    }
}

/// counts every vote; the same actor may vote again.
pub struct PostVoteInteractor {
    pub mode: AccessMode,
}
impl vote::Usecase for PostVoteInteractor {
    #[tracing::instrument(skip(self, state))]
    fn handle(&self, state: &mut BoardState, data: vote::Input) -> Result<vote::Output> {
        tracing::trace!("input - {:?}", data);

        let vote::Input { post_id, option } = data;

        require_actor(state, self.mode)?;

        let post = state
            .find_post_mut(&post_id)
            .ok_or_else(|| ActionError::PostNotFound {
                id: post_id.clone(),
            })?;

        if !post.is_election {
            return Err(ActionError::NotAnElection { id: post_id });
        }

        let option = option.trim();
        if !post.options.iter().any(|o| o == option) {
            return Err(ActionError::UnknownOption {
                option: option.to_string(),
            });
        }

        *post.votes.entry(option.to_string()).or_insert(0) += 1;

        vote::Output { post: post.clone() }
            .also_(|o| tracing::trace!("output - {:?}", o))
            .let_(Ok)
    }
}

pub struct PostLikeInteractor {
    pub mode: AccessMode,
}
impl like::Usecase for PostLikeInteractor {
    #[tracing::instrument(skip(self, state))]
    fn handle(&self, state: &mut BoardState, data: like::Input) -> Result<like::Output> {
        tracing::trace!("input - {:?}", data);

        let like::Input { post_id } = data;

        let actor = require_actor(state, self.mode)?;

        let post = state
            .find_post_mut(&post_id)
            .ok_or_else(|| ActionError::PostNotFound {
                id: post_id.clone(),
            })?;

        let liked = match post.liked_by.remove(&actor.id) {
            true => false,
            false => post.liked_by.insert(actor.id),
        };
        post.likes = u32::try_from(post.liked_by.len()).unwrap_or(u32::MAX);

        like::Output {
            post: post.clone(),
            liked,
        }
        .also_(|o| tracing::trace!("output - {:?}", o))
        .let_(Ok)
    }
}

pub struct PostCommentInteractor {
    pub clock: Arc<dyn Clock + Sync + Send>,
    pub mode: AccessMode,
}
impl comment::Usecase for PostCommentInteractor {
    #[tracing::instrument(skip(self, state))]
    fn handle(&self, state: &mut BoardState, data: comment::Input) -> Result<comment::Output> {
        tracing::trace!("input - {:?}", data);

        let comment::Input { post_id, text } = data;

        let actor = require_actor(state, self.mode)?;
        let text = require_text(&text, Field::Comment)?;

        let post = state
            .find_post_mut(&post_id)
            .ok_or_else(|| ActionError::PostNotFound {
                id: post_id.clone(),
            })?;

        let new_comment = Comment {
            author: actor.name,
            text,
            ts: self.clock.now(),
        };

        post.comments.push(new_comment.clone());

        comment::Output {
            post: post.clone(),
            comment: new_comment,
        }
        .also_(|o| tracing::trace!("output - {:?}", o))
        .let_(Ok)
    }
}
