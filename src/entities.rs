use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Date = DateTime<Utc>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl ::std::fmt::Display for PostId {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub initials: String,
}

impl Member {
    pub fn new(name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initials: initials.into(),
        }
    }

    /// initials shown in the avatar, falling back to the first letter of the name.
    pub fn avatar(&self) -> String {
        match self.initials.is_empty() {
            false => self.initials.clone(),
            true => self
                .name
                .chars()
                .next()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: Member,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: Date,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub liked_by: HashSet<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub is_election: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub votes: BTreeMap<String, u32>,
}

impl Post {
    pub fn is_liked_by(&self, actor_id: &str) -> bool { self.liked_by.contains(actor_id) }

    pub fn total_votes(&self) -> u32 { self.votes.values().sum() }
}

/// registered account. the password is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
    pub name: String,
    pub initials: String,
}

/// whoever performs an action: the logged-in user or the anonymous guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub initials: String,
}

pub const GUEST_ID: &str = "guest";

impl Actor {
    pub fn guest() -> Self {
        Self {
            id: GUEST_ID.to_string(),
            name: "You".to_string(),
            initials: "Y".to_string(),
        }
    }

    pub fn as_member(&self) -> Member { Member::new(self.name.clone(), self.initials.clone()) }
}

impl From<&User> for Actor {
    fn from(u: &User) -> Self {
        Self {
            id: u.email.clone(),
            name: u.name.clone(),
            initials: u.initials.clone(),
        }
    }
}

/// whether actions without a session fall back to the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Open,
    MembersOnly,
}

impl Default for AccessMode {
    fn default() -> Self { AccessMode::Open }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub posts: Vec<Post>,
    pub members: Vec<Member>,
    pub users: Vec<User>,
    pub session: Option<User>,
    pub joined: bool,
}

impl BoardState {
    /// resolves the actor, `None` when members-only and nobody is logged in.
    pub fn actor(&self, mode: AccessMode) -> Option<Actor> {
        match (&self.session, mode) {
            (Some(u), _) => Some(Actor::from(u)),
            (None, AccessMode::Open) => Some(Actor::guest()),
            (None, AccessMode::MembersOnly) => None,
        }
    }

    pub fn find_post(&self, id: &PostId) -> Option<&Post> { self.posts.iter().find(|p| &p.id == id) }

    pub fn find_post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| &p.id == id)
    }

    pub fn find_user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn is_member(&self, name: &str) -> bool { self.members.iter().any(|m| m.name == name) }

    /// prepends unless a member with the same name exists.
    pub fn add_member_front(&mut self, member: Member) -> bool {
        if self.is_member(&member.name) {
            return false;
        }

        self.members.insert(0, member);
        true
    }

    /// members as displayed: the guest is counted once joined even if not listed.
    pub fn member_count(&self) -> usize {
        let guest = Actor::guest();

        match self.joined && !self.is_member(&guest.name) {
            true => self.members.len() + 1,
            false => self.members.len(),
        }
    }
}

pub fn seed_members() -> Vec<Member> {
    vec![
        Member::new("타냐", "T"),
        Member::new("빅토리아", "V"),
        Member::new("모니카", "M"),
        Member::new("베니", "B"),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn actor_falls_back_to_guest_only_in_open_mode() {
        let state = BoardState::default();

        assert_eq!(state.actor(AccessMode::Open), Some(Actor::guest()));
        assert_eq!(state.actor(AccessMode::MembersOnly), None);
    }

    #[test]
    fn session_user_is_the_actor() {
        let user = User {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            name: "Ann".to_string(),
            initials: "A".to_string(),
        };
        let state = BoardState {
            session: Some(user),
            ..Default::default()
        };

        let actor = state.actor(AccessMode::MembersOnly).unwrap();
        assert_eq!(actor.id, "a@b.c");
        assert_eq!(actor.name, "Ann");
    }

    #[test]
    fn member_count_includes_unlisted_joined_guest() {
        let mut state = BoardState {
            members: seed_members(),
            joined: true,
            ..Default::default()
        };
        assert_eq!(state.member_count(), 5);

        state.add_member_front(Actor::guest().as_member());
        assert_eq!(state.member_count(), 5);
        assert!(!state.add_member_front(Actor::guest().as_member()));
    }

    #[test]
    fn post_serializes_with_camel_case_and_millis() {
        let post = Post {
            id: PostId::from("p_abc1234"),
            author: Member::new("You", "Y"),
            title: String::new(),
            body: "hello".to_string(),
            tags: vec!["baz".to_string()],
            ts: Utc.timestamp_millis_opt(1_600_000_000_123).unwrap(),
            likes: 0,
            liked_by: HashSet::new(),
            comments: vec![],
            is_election: false,
            options: vec![],
            votes: BTreeMap::new(),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["ts"], 1_600_000_000_123_i64);
        assert_eq!(json["isElection"], false);
        assert!(json.get("likedBy").is_some());
        assert!(json.get("votes").is_none());
    }
}
