use clap::Parser;
use redquery::models::{CommentSort, PostSort, SearchSort, TimeFilter, UserSort};

#[derive(Parser, Debug)]
#[command(
    name = "redquery",
    version = "0.1.0",
    about = "Read-only query tool for the Reddit API."
)]
pub struct Cli {
    /// Print results as pretty JSON instead of the readable format.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fetch posts from a subreddit.
    Posts {
        /// The name of the subreddit to fetch posts from.
        #[arg(help = "Subreddit name", required = true)]
        subreddit: String,

        #[arg(long, value_enum, default_value = "hot")]
        sort: PostSort,

        /// The number of posts to retrieve.
        #[arg(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,

        /// Display posts in a brief, one-line format.
        #[arg(long, short)]
        brief: bool,
    },

    /// Fetch a single post by id.
    Post {
        #[arg(help = "Post id (with or without the t3_ prefix)", required = true)]
        id: String,
    },

    /// Fetch the comment thread of a post.
    Comments {
        #[arg(help = "Post id (with or without the t3_ prefix)", required = true)]
        post_id: String,

        #[arg(long, value_enum, default_value = "best")]
        sort: CommentSort,

        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: Option<u32>,
    },

    /// Show subreddit metadata.
    Subreddit {
        #[arg(help = "Subreddit name", required = true)]
        name: String,
    },

    /// Show account metadata.
    User {
        #[arg(help = "Reddit username", required = true)]
        name: String,
    },

    /// List posts submitted by a user.
    UserPosts {
        #[arg(help = "Reddit username", required = true)]
        name: String,

        #[arg(long, value_enum, default_value = "new")]
        sort: UserSort,

        #[arg(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,

        #[arg(long, short)]
        brief: bool,
    },

    /// List comments written by a user.
    UserComments {
        #[arg(help = "Reddit username", required = true)]
        name: String,

        #[arg(long, value_enum, default_value = "new")]
        sort: UserSort,

        #[arg(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },

    /// Search posts, optionally inside one subreddit.
    Search {
        #[arg(help = "Search query", required = true)]
        query: String,

        /// Restrict the search to this subreddit.
        #[arg(long, short)]
        subreddit: Option<String>,

        #[arg(long, value_enum, default_value = "relevance")]
        sort: SearchSort,

        #[arg(long, value_enum, default_value = "all")]
        time: TimeFilter,

        #[arg(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,

        #[arg(long, short)]
        brief: bool,
    },

    /// Search subreddits by name and description.
    SearchSubreddits {
        #[arg(help = "Search query", required = true)]
        query: String,

        #[arg(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
}
