use std::path::PathBuf;

use crate::entities::PostId;

pub mod parser;

use parser::*;

/// a community board kept in local json files.
#[derive(Debug, Clone, ::clap::Parser)]
#[clap(author, version)]
pub struct App {
    /// directory holding the board's json files.
    #[clap(
        long,
        env = "COMMUNITY_BOARD_DATA_DIR",
        default_value = ".community_board",
        parse(from_os_str)
    )]
    pub data_dir: PathBuf,

    /// refuse posting, voting, liking and commenting without logging in.
    #[clap(long, env = "COMMUNITY_BOARD_MEMBERS_ONLY")]
    pub members_only: bool,

    #[clap(subcommand)]
    pub cmd: RootMod,
}

#[derive(Debug, Clone, ::clap::Subcommand)]
pub enum RootMod {
    /// show members, tag cloud and feed.
    #[clap(short_flag = 'f')]
    Feed(FeedCmd),

    /// show the feed filtered by a tag.
    #[clap(short_flag = 't')]
    Tag(TagCmd),

    /// write a post.
    #[clap(short_flag = 'p')]
    Post(PostCmd),

    /// open an election.
    #[clap(short_flag = 'e')]
    Elect(ElectCmd),

    /// vote on an election. voting again counts again.
    #[clap(short_flag = 'v')]
    Vote(VoteCmd),

    /// like a post, or take the like back.
    #[clap(short_flag = 'l')]
    Like(LikeCmd),

    /// comment on a post.
    #[clap(short_flag = 'c')]
    Comment(CommentCmd),

    /// join the board, or leave it.
    #[clap(short_flag = 'j')]
    Join,

    /// register and log in.
    Signup(SignUpCmd),

    /// log in with a registered email.
    Login(LogInCmd),

    /// log out.
    Logout,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct FeedCmd {
    /// matched against title, body and tags, ignoring case.
    #[clap(short, long, default_value = "")]
    pub search: String,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct TagCmd {
    #[clap(name = "TAG")]
    pub tag: String,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct PostCmd {
    #[clap(short, long, default_value = "")]
    pub title: String,

    /// required.
    #[clap(short, long, default_value = "")]
    pub body: String,

    /// comma separated, e.g. "Foo Bar, baz".
    #[clap(long, default_value = "")]
    pub tags: String,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct ElectCmd {
    /// required.
    #[clap(short, long, default_value = "")]
    pub title: String,

    #[clap(short, long, default_value = "")]
    pub body: String,

    /// comma separated, e.g. "Foo Bar, baz".
    #[clap(long, default_value = "")]
    pub tags: String,

    /// repeat for each option, at least two.
    #[clap(short, long = "option")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct VoteCmd {
    /// e.g. p_k3x9a0b
    #[clap(name = "POST_ID", parse(try_from_str = parse_post_id))]
    pub post_id: PostId,

    #[clap(name = "OPTION")]
    pub option: String,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct LikeCmd {
    /// e.g. p_k3x9a0b
    #[clap(name = "POST_ID", parse(try_from_str = parse_post_id))]
    pub post_id: PostId,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct CommentCmd {
    /// e.g. p_k3x9a0b
    #[clap(name = "POST_ID", parse(try_from_str = parse_post_id))]
    pub post_id: PostId,

    #[clap(name = "TEXT")]
    pub text: String,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct SignUpCmd {
    #[clap(short, long, default_value = "")]
    pub email: String,

    /// stored as entered.
    #[clap(short, long, default_value = "")]
    pub password: String,

    #[clap(short, long, default_value = "")]
    pub name: String,
}

#[derive(Debug, Clone, ::clap::Args)]
pub struct LogInCmd {
    #[clap(short, long, default_value = "")]
    pub email: String,

    #[clap(short, long, default_value = "")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> App {
        App::try_parse_from(::std::iter::once("community_board").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn elect_collects_repeated_options() {
        let App { cmd, .. } = parse(&[
            "elect", "--title", "Lunch?", "--option", "Pizza", "-o", "Tacos",
        ]);

        match cmd {
            RootMod::Elect(ElectCmd { title, options, .. }) => {
                assert_eq!(title, "Lunch?");
                assert_eq!(options, vec!["Pizza", "Tacos"]);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_options_and_defaults() {
        let App {
            data_dir,
            members_only,
            cmd,
        } = parse(&["--data-dir", "/tmp/board", "--members-only", "feed"]);

        assert_eq!(data_dir, PathBuf::from("/tmp/board"));
        assert!(members_only);
        match cmd {
            RootMod::Feed(FeedCmd { search }) => assert_eq!(search, ""),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn like_rejects_malformed_post_id() {
        let res = App::try_parse_from(vec!["community_board", "like", "nope"]);

        assert!(res.is_err());
    }

    #[test]
    fn unit_subcommands_parse() {
        assert!(matches!(parse(&["join"]).cmd, RootMod::Join));
        assert!(matches!(parse(&["logout"]).cmd, RootMod::Logout));
    }
}
