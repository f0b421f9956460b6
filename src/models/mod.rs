use serde::Serialize;

pub mod comment_tree;
pub mod listing;
pub mod mapper;
pub mod sort;

pub use comment_tree::{flatten, CommentNode};
pub use listing::{Listing, RawData, Thing};
pub use mapper::{to_comment, to_post, to_subreddit, to_user};
pub use sort::{CommentSort, PostSort, SearchSort, TimeFilter, UserSort};

/// Public web origin used to absolutize permalinks and subreddit urls
pub const WEB_ORIGIN: &str = "https://reddit.com";

/// A link or self post
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    pub subreddit: String,
    pub url: String,
    pub selftext: String,
    pub created_utc: f64,
    pub score: i64,
    pub num_comments: i64,
    pub permalink: String,
    pub is_self: bool,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A single comment from a thread or a user's history
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created_utc: f64,
    pub score: i64,
    pub permalink: String,
    /// Fullname of the parent, `t3_` for the post or `t1_` for a comment
    pub parent_id: String,
    pub subreddit: String,
}

/// Subreddit metadata
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Subreddit {
    pub display_name: String,
    pub title: String,
    pub description: String,
    pub subscribers: i64,
    pub created_utc: f64,
    pub public_description: String,
    pub url: String,
    pub over18: bool,
}

/// Account metadata
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub id: String,
    pub created_utc: f64,
    pub comment_karma: i64,
    pub link_karma: i64,
    pub is_verified: bool,
    pub has_verified_email: bool,
}

impl Post {
    /// Fullname used by the API when referring to this post
    pub fn fullname(&self) -> String {
        format!("t3_{}", self.id)
    }

    /// Format a post for display with important metadata
    pub fn format_summary(&self) -> String {
        let mut content = format!(
            "Title: {}\nAuthor: u/{}\nSubreddit: r/{}\nScore: {} | Comments: {}\n",
            self.title, self.author, self.subreddit, self.score, self.num_comments,
        );

        if self.is_self {
            content.push_str("Flags: [Self Post]\n");
        }

        // For text posts, include the text (truncated if long)
        if self.is_self && !self.selftext.is_empty() {
            let text = if self.selftext.chars().count() > 500 {
                let head: String = self.selftext.chars().take(500).collect();
                format!("{}...", head)
            } else {
                self.selftext.clone()
            };
            content.push_str("\nContent:\n---------\n");
            content.push_str(&text);
            content.push_str("\n---------\n");
        }

        content.push_str(&format!("\nPermalink: {}", self.permalink));
        if !self.is_self && self.url != self.permalink {
            content.push_str(&format!("\nExternal URL: {} ({})", self.url, self.domain));
        }
        if let Some(thumbnail) = &self.thumbnail {
            content.push_str(&format!("\nThumbnail: {}", thumbnail));
        }

        content
    }
}

impl Comment {
    pub fn fullname(&self) -> String {
        format!("t1_{}", self.id)
    }
}
