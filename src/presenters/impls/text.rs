use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::super::BoardPresenter;
use crate::feed::{BoardView, FeedItem};
use crate::utils::date_to_string;

/// plain-text board for a terminal.
pub struct TextBoardPresenter<W> {
    pub out: Mutex<W>,
}

impl TextBoardPresenter<::std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: Mutex::new(::std::io::stdout()),
        }
    }
}

#[async_trait]
impl<W: Write + Send> BoardPresenter for TextBoardPresenter<W> {
    async fn render(&self, view: BoardView) -> Result<()> {
        let text = render_text(&view);

        let mut out = self.out.lock().await;
        out.write_all(text.as_bytes())?;
        out.flush()?;

        Ok(())
    }

    async fn alert(&self, message: String) -> Result<()> {
        let mut out = self.out.lock().await;
        writeln!(out, "! {}", message)?;
        out.flush()?;

        Ok(())
    }
}

pub fn render_text(view: &BoardView) -> String {
    let mut s = String::new();

    match &view.viewer {
        Some(v) => s.push_str(&format!("viewing as {} [{}]\n", v.name, v.initials)),
        None => s.push_str("not logged in\n"),
    }

    s.push_str(&format!(
        "members ({}){}\n",
        view.member_count,
        if view.joined { " - joined" } else { "" }
    ));
    for m in &view.members {
        s.push_str(&format!("  [{}] {}\n", m.avatar(), m.name));
    }

    if !view.tags.is_empty() {
        let pills: Vec<String> = view
            .tags
            .iter()
            .map(|(t, n)| format!("{} ({})", t, n))
            .collect();
        s.push_str(&format!("tags: {}\n", pills.join("  ")));
    }

    if !view.search.trim().is_empty() {
        s.push_str(&format!("search: {:?}\n", view.search.trim()));
    }

    s.push('\n');

    match view.feed.is_empty() {
        true => s.push_str("no posts yet.\n"),
        false => view.feed.iter().for_each(|item| s.push_str(&render_item(item))),
    }

    s
}

fn render_item(item: &FeedItem) -> String {
    let post = &item.post;
    let mut s = format!(
        "[{}] {}{}\n  by [{}] {} - {} ({})\n",
        post.id,
        if post.is_election { "(election) " } else { "" },
        post.title,
        post.author.avatar(),
        post.author.name,
        item.time_ago,
        date_to_string(&post.ts)
    );

    for line in post.body.lines() {
        s.push_str(&format!("  {}\n", line));
    }

    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        s.push_str(&format!("  {}\n", tags.join(" ")));
    }

    for r in &item.results {
        s.push_str(&format!("  > {}: {} votes ({}%)\n", r.option, r.votes, r.percent));
    }

    s.push_str(&format!(
        "  likes: {}{}  comments: {}\n",
        post.likes,
        if item.liked { " (liked)" } else { "" },
        item.comments.len()
    ));

    for c in &item.comments {
        s.push_str(&format!(
            "    {} - {}: {}\n",
            c.comment.author, c.time_ago, c.comment.text
        ));
    }

    s.push('\n');
    s
}
