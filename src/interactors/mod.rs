pub mod member;
pub mod post;

use regex::Regex;

use crate::entities::{AccessMode, Actor, BoardState, PostId};
use crate::usecases::{ActionError, Field};
use crate::utils::IdGenerator;

type Result<T> = ::core::result::Result<T, ActionError>;

lazy_static::lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

fn require_actor(state: &BoardState, mode: AccessMode) -> Result<Actor> {
    state.actor(mode).ok_or(ActionError::Unauthenticated)
}

/// trims `s`, rejecting it when nothing is left.
fn require_text(s: &str, field: Field) -> Result<String> {
    match s.trim() {
        "" => Err(ActionError::EmptyRequiredField { field }),
        t => Ok(t.to_string()),
    }
}

/// `"Foo Bar, baz"` -> `["foo-bar", "baz"]`
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = vec![];

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| WHITESPACE.replace_all(s, "-").to_lowercase())
        .for_each(|t| {
            if !tags.contains(&t) {
                tags.push(t)
            }
        });

    tags
}

fn fresh_id(state: &BoardState, ids: &(dyn IdGenerator + Sync + Send)) -> PostId {
    loop {
        let id = ids.generate();

        match state.find_post(&id) {
            None => return id,
            Some(_) => tracing::debug!("post id collision: {}", id),
        }
    }
}

fn initials_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
