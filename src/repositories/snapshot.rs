//! whole-board save/load over a [`KeyValueStore`].
//!
//! every collection lives under its own key and is read back independently.
//! a key that is missing or does not parse falls back to its empty default.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    convert_store_err, KeyValueStore, Result, JOINED_KEY, MEMBERS_KEY, POSTS_KEY, SESSION_KEY,
    USERS_KEY,
};
use crate::entities::{seed_members, Actor, BoardState};

#[tracing::instrument(skip(store, state))]
pub async fn save(store: &(dyn KeyValueStore + Sync + Send), state: &BoardState) -> Result<()> {
    put(store, POSTS_KEY, &state.posts).await?;
    put(store, MEMBERS_KEY, &state.members).await?;
    put(store, USERS_KEY, &state.users).await?;
    put(store, SESSION_KEY, &state.session).await?;
    put(store, JOINED_KEY, &state.joined).await?;

    tracing::debug!(
        "saved - posts: {}, members: {}, users: {}",
        state.posts.len(),
        state.members.len(),
        state.users.len()
    );

    Ok(())
}

#[tracing::instrument(skip(store))]
pub async fn load(store: &(dyn KeyValueStore + Sync + Send)) -> BoardState {
    let mut state = BoardState {
        posts: take(store, POSTS_KEY).await,
        members: take(store, MEMBERS_KEY).await,
        users: take(store, USERS_KEY).await,
        session: take(store, SESSION_KEY).await,
        joined: take(store, JOINED_KEY).await,
    };

    if state.members.is_empty() {
        state.members = seed_members();
    }

    if state.joined {
        state.add_member_front(Actor::guest().as_member());
    }

    tracing::debug!(
        "loaded - posts: {}, members: {}, users: {}, session: {}",
        state.posts.len(),
        state.members.len(),
        state.users.len(),
        state.session.is_some()
    );

    state
}

async fn put<T: Serialize + ?Sized>(
    store: &(dyn KeyValueStore + Sync + Send),
    key: &str,
    value: &T,
) -> Result<()> {
    let json = convert_store_err(serde_json::to_string(value))?;
    store.set(key, json).await
}

async fn take<T: DeserializeOwned + Default>(
    store: &(dyn KeyValueStore + Sync + Send),
    key: &str,
) -> T {
    let raw = match store.get(key).await {
        Ok(Some(s)) => s,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!("cannot read `{}`, using default: {}", key, e);
            return T::default();
        },
    };

    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("cannot parse `{}`, using default: {}", key, e);
            T::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::entities::{Member, Post, PostId, User};
    use crate::repositories::mock::InMemoryStore;

    fn sample_state() -> BoardState {
        let user = User {
            email: "kim@example.com".to_string(),
            password: "hunter2".to_string(),
            name: "Kim".to_string(),
            initials: "K".to_string(),
        };

        BoardState {
            posts: vec![Post {
                id: PostId::from("p_1"),
                author: Member::new("Kim", "K"),
                title: "hi".to_string(),
                body: "hello".to_string(),
                tags: vec!["foo-bar".to_string()],
                ts: Utc.timestamp_millis_opt(1_000).unwrap(),
                likes: 0,
                liked_by: Default::default(),
                comments: vec![],
                is_election: false,
                options: vec![],
                votes: Default::default(),
            }],
            members: vec![Member::new("Kim", "K")],
            users: vec![user.clone()],
            session: Some(user),
            joined: false,
        }
    }

    #[tokio::test]
    async fn save_then_load_restores_the_board() {
        let store = InMemoryStore::new();
        let state = sample_state();

        save(&store, &state).await.unwrap();

        assert_eq!(load(&store).await, state);
    }

    #[tokio::test]
    async fn empty_store_seeds_members() {
        let store = InMemoryStore::new();

        let state = load(&store).await;

        assert!(state.posts.is_empty());
        assert!(state.users.is_empty());
        assert_eq!(state.session, None);
        assert!(!state.joined);
        assert_eq!(state.members, seed_members());
    }

    #[tokio::test]
    async fn unparseable_keys_fall_back_independently() {
        let store = InMemoryStore::new();
        save(&store, &sample_state()).await.unwrap();

        store.set(POSTS_KEY, "{not json".to_string()).await.unwrap();
        store.set(SESSION_KEY, "42".to_string()).await.unwrap();

        let state = load(&store).await;

        assert!(state.posts.is_empty());
        assert_eq!(state.session, None);
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.members, vec![Member::new("Kim", "K")]);
    }

    #[tokio::test]
    async fn joined_guest_is_listed_after_load() {
        let store = InMemoryStore::new();
        store.set(JOINED_KEY, "true".to_string()).await.unwrap();

        let state = load(&store).await;

        assert!(state.joined);
        assert_eq!(state.members[0], Actor::guest().as_member());
        assert_eq!(state.members.len(), 5);
    }

    #[tokio::test]
    async fn null_session_is_stored_as_json_null() {
        let store = InMemoryStore::new();
        save(&store, &BoardState::default()).await.unwrap();

        assert_eq!(store.get(SESSION_KEY).await.unwrap(), Some("null".to_string()));
        assert_eq!(store.get(JOINED_KEY).await.unwrap(), Some("false".to_string()));
    }
}
