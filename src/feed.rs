//! read side of the board: what gets rendered after every change.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::entities::{Actor, BoardState, Comment, Date, Member, Post};

pub const TAG_CLOUD_SIZE: usize = 12;

pub type TagCloud = SmallVec<[(String, usize); TAG_CLOUD_SIZE]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub viewer: Option<Actor>,
    pub joined: bool,
    pub members: Vec<Member>,
    pub member_count: usize,
    pub tags: TagCloud,
    pub search: String,
    pub feed: Vec<FeedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub post: Post,
    pub time_ago: String,
    /// whether the viewer has liked this post.
    pub liked: bool,
    pub comments: Vec<CommentItem>,
    pub results: Vec<OptionResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentItem {
    pub comment: Comment,
    pub time_ago: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionResult {
    pub option: String,
    pub votes: u32,
    pub percent: u32,
}

pub fn project(state: &BoardState, search: &str, viewer: Option<Actor>, now: Date) -> BoardView {
    let feed = filter_posts(&state.posts, search)
        .into_iter()
        .map(|post| FeedItem {
            time_ago: time_ago(post.ts, now),
            liked: viewer
                .as_ref()
                .map(|v| post.is_liked_by(&v.id))
                .unwrap_or(false),
            comments: post
                .comments
                .iter()
                .map(|c| CommentItem {
                    comment: c.clone(),
                    time_ago: time_ago(c.ts, now),
                })
                .collect(),
            results: election_results(post),
            post: post.clone(),
        })
        .collect();

    BoardView {
        viewer,
        joined: state.joined,
        members: state.members.clone(),
        member_count: state.member_count(),
        tags: tag_cloud(&state.posts),
        search: search.to_string(),
        feed,
    }
}

/// posts matching `query` in title, body or tags, newest first.
///
/// matching is a case-insensitive substring test; a blank query keeps everything.
/// posts with the same timestamp keep their stored order.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let q = query.trim().to_lowercase();

    let mut matched: Vec<&Post> = posts
        .iter()
        .filter(|p| {
            q.is_empty()
                || p.title.to_lowercase().contains(&q)
                || p.body.to_lowercase().contains(&q)
                || p.tags.join(" ").to_lowercase().contains(&q)
        })
        .collect();

    matched.sort_by(|a, b| b.ts.cmp(&a.ts));
    matched
}

/// most used tags over all posts, ties in first-seen order.
pub fn tag_cloud(posts: &[Post]) -> TagCloud {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = vec![];

    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push((tag.clone(), 1));
            },
        }
    }

    counts.sort_by(|(_, a), (_, b)| b.cmp(a));
    counts.into_iter().take(TAG_CLOUD_SIZE).collect()
}

pub fn time_ago(ts: Date, now: Date) -> String {
    let diff = (now - ts).num_seconds();

    match diff {
        d if d < 10 => "just now".to_string(),
        d if d < 60 => format!("{}s", d),
        d if d < 3600 => format!("{}m", d / 60),
        d if d < 86400 => format!("{}h", d / 3600),
        d => format!("{}d", d / 86400),
    }
}

/// per-option tallies in option order. empty for plain posts.
pub fn election_results(post: &Post) -> Vec<OptionResult> {
    if !post.is_election {
        return vec![];
    }

    let total = post.total_votes();

    post.options
        .iter()
        .map(|option| {
            let votes = post.votes.get(option).copied().unwrap_or(0);
            let percent = match total {
                0 => 0,
                t => (f64::from(votes) * 100.0 / f64::from(t)).round() as u32,
            };

            OptionResult {
                option: option.clone(),
                votes,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::entities::PostId;

    fn at(secs: i64) -> Date { Utc.timestamp_millis_opt(secs * 1000).unwrap() }

    fn post(id: &str, ts: i64, title: &str, body: &str, tags: &[&str]) -> Post {
        Post {
            id: PostId::from(id),
            author: Member::new("You", "Y"),
            title: title.to_string(),
            body: body.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ts: at(ts),
            likes: 0,
            liked_by: HashSet::new(),
            comments: vec![],
            is_election: false,
            options: vec![],
            votes: BTreeMap::new(),
        }
    }

    fn ids(posts: Vec<&Post>) -> Vec<&str> { posts.into_iter().map(|p| p.id.0.as_str()).collect() }

    #[test]
    fn blank_query_sorts_newest_first() {
        let posts = vec![
            post("a", 10, "", "x", &[]),
            post("b", 30, "", "x", &[]),
            post("c", 20, "", "x", &[]),
        ];

        assert_eq!(ids(filter_posts(&posts, "  ")), vec!["b", "c", "a"]);
    }

    #[test]
    fn equal_timestamps_keep_stored_order() {
        let posts = vec![
            post("a", 10, "", "x", &[]),
            post("b", 10, "", "x", &[]),
            post("c", 10, "", "x", &[]),
        ];

        assert_eq!(ids(filter_posts(&posts, "")), vec!["a", "b", "c"]);
    }

    #[test]
    fn search_matches_title_body_or_tags_ignoring_case() {
        let posts = vec![
            post("title", 1, "Weekly MEETUP", "", &[]),
            post("body", 2, "", "see you at the meetup", &[]),
            post("tag", 3, "", "nothing", &["meetup-notes"]),
            post("none", 4, "other", "unrelated", &["misc"]),
        ];

        assert_eq!(ids(filter_posts(&posts, "MeetUp")), vec!["tag", "body", "title"]);
    }

    #[test]
    fn search_spans_joined_tags() {
        let posts = vec![post("a", 1, "", "x", &["foo", "bar"])];

        assert_eq!(ids(filter_posts(&posts, "foo bar")), vec!["a"]);
        assert!(filter_posts(&posts, "foobar").is_empty());
    }

    #[test]
    fn tag_cloud_counts_all_posts_and_truncates() {
        let mut posts = vec![
            post("a", 1, "", "x", &["rust", "web"]),
            post("b", 2, "", "x", &["rust"]),
            post("c", 3, "", "x", &["web", "rust"]),
            post("d", 4, "", "x", &["cli"]),
        ];
        let many: Vec<String> = (0..20).map(|i| format!("t{}", i)).collect();
        posts.push(post(
            "e",
            5,
            "",
            "x",
            &many.iter().map(String::as_str).collect::<Vec<_>>(),
        ));

        let cloud = tag_cloud(&posts);

        assert_eq!(cloud.len(), TAG_CLOUD_SIZE);
        assert_eq!(cloud[0], ("rust".to_string(), 3));
        assert_eq!(cloud[1], ("web".to_string(), 2));
        assert_eq!(cloud[2], ("cli".to_string(), 1));
        assert_eq!(cloud[3], ("t0".to_string(), 1));
        assert!(cloud.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn time_ago_buckets() {
        let now = at(1_000_000);
        let ago = |s: i64| time_ago(now - Duration::seconds(s), now);

        assert_eq!(ago(0), "just now");
        assert_eq!(ago(9), "just now");
        assert_eq!(ago(10), "10s");
        assert_eq!(ago(59), "59s");
        assert_eq!(ago(60), "1m");
        assert_eq!(ago(3599), "59m");
        assert_eq!(ago(3600), "1h");
        assert_eq!(ago(86399), "23h");
        assert_eq!(ago(86400), "1d");
        assert_eq!(ago(-30), "just now");
    }

    #[test]
    fn election_percentages() {
        let mut lunch = post("e", 1, "Lunch?", "", &[]);
        lunch.is_election = true;
        lunch.options = vec!["Pizza".to_string(), "Tacos".to_string()];

        let results = election_results(&lunch);
        assert_eq!(results[0].percent, 0);

        lunch.votes.insert("Pizza".to_string(), 2);
        let results = election_results(&lunch);
        assert_eq!(results[0], OptionResult {
            option: "Pizza".to_string(),
            votes: 2,
            percent: 100,
        });
        assert_eq!(results[1].percent, 0);

        lunch.votes.insert("Tacos".to_string(), 1);
        let results = election_results(&lunch);
        assert_eq!((results[0].percent, results[1].percent), (67, 33));
    }

    #[test]
    fn projection_marks_posts_liked_by_viewer() {
        let mut liked = post("a", 1, "", "x", &[]);
        liked.liked_by.insert("guest".to_string());
        liked.likes = 1;
        let state = BoardState {
            posts: vec![liked, post("b", 2, "", "x", &[])],
            ..Default::default()
        };

        let view = project(&state, "", Some(Actor::guest()), at(100));

        assert_eq!(view.feed.len(), 2);
        assert!(!view.feed[0].liked);
        assert!(view.feed[1].liked);
        assert_eq!(view.feed[1].time_ago, "1m");

        let anonymous = project(&state, "", None, at(100));
        assert!(anonymous.feed.iter().all(|i| !i.liked));
    }
}
