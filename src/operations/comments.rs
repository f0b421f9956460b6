use super::posts::{local_time, truncate};
use crate::client::RedditClient;
use crate::error::Result;
use crate::models::{Comment, CommentSort, UserSort};
use log::{error, info};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum CommentsSource {
    /// The whole thread of a post
    Thread {
        post_id: String,
        sort: CommentSort,
        limit: Option<u32>,
    },
    /// A user's comment history
    User {
        name: String,
        sort: UserSort,
        limit: u32,
    },
}

#[derive(Debug, Clone)]
pub struct CommentsOptions {
    pub source: CommentsSource,
    pub json: bool,
}

#[derive(Debug)]
pub struct CommentsResult {
    pub comment_count: usize,
    pub formatted_output: String,
    pub comments: Vec<Comment>,
}

pub struct CommentsOperation {
    options: CommentsOptions,
    client: RedditClient,
}

impl CommentsOperation {
    pub fn with_client(options: CommentsOptions, client: RedditClient) -> Self {
        Self { options, client }
    }

    pub async fn execute(&self) -> Result<CommentsResult> {
        let comments = match &self.options.source {
            CommentsSource::Thread {
                post_id,
                sort,
                limit,
            } => {
                info!("Fetching {} comments of post {}", sort, post_id);
                self.client.get_post_comments(post_id, *sort, *limit).await?
            }
            CommentsSource::User { name, sort, limit } => {
                info!("Fetching {} {} comments by u/{}", limit, sort, name);
                self.client.get_user_comments(name, *sort, *limit).await?
            }
        };

        let formatted_output = if self.options.json {
            format!("{}\n", serde_json::to_string_pretty(&comments)?)
        } else if comments.is_empty() {
            "No comments found.\n".to_string()
        } else {
            let mut output = format!("Found {} comments\n\n", comments.len());
            format_thread(&comments, &mut output);
            output
        };

        Ok(CommentsResult {
            comment_count: comments.len(),
            formatted_output,
            comments,
        })
    }
}

/// Reply depth of every comment, recovered from `parent_id`.
///
/// Relies on parents preceding their replies, which a flattened thread
/// guarantees. Comments whose parent is not in the list sit at depth 0.
pub(crate) fn reply_depths(comments: &[Comment]) -> Vec<usize> {
    let mut by_fullname: HashMap<String, usize> = HashMap::new();
    comments
        .iter()
        .map(|comment| {
            let depth = by_fullname
                .get(&comment.parent_id)
                .map(|parent| parent + 1)
                .unwrap_or(0);
            by_fullname.insert(comment.fullname(), depth);
            depth
        })
        .collect()
}

fn format_thread(comments: &[Comment], output: &mut String) {
    for (comment, depth) in comments.iter().zip(reply_depths(comments)) {
        let indent = "  ".repeat(depth);
        output.push_str(&format!(
            "{}[{}] u/{} ({} pts) r/{} | ID: {}\n",
            indent,
            local_time(comment.created_utc, "%Y-%m-%d %H:%M"),
            comment.author,
            comment.score,
            comment.subreddit,
            comment.fullname()
        ));
        for line in truncate(comment.body.trim(), 500).lines() {
            output.push_str(&format!("{}  {}\n", indent, line));
        }
        output.push('\n');
    }
}

/// CLI handler function for thread and user comment commands
pub async fn handle_comments_command(options: CommentsOptions, client: RedditClient) -> Result<()> {
    let operation = CommentsOperation::with_client(options, client);
    match operation.execute().await {
        Ok(result) => {
            print!("{}", result.formatted_output);
            Ok(())
        }
        Err(err) => {
            error!("Error fetching comments: {}", err);
            Err(err)
        }
    }
}
