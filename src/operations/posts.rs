use crate::client::RedditClient;
use crate::error::Result;
use crate::models::{Post, PostSort, SearchSort, TimeFilter, UserSort};
use chrono::DateTime;
use chrono_tz::America::Los_Angeles;
use log::{error, info};

/// Where the posts come from
#[derive(Debug, Clone)]
pub enum PostsSource {
    Subreddit { name: String, sort: PostSort },
    User { name: String, sort: UserSort },
    Search {
        query: String,
        subreddit: Option<String>,
        sort: SearchSort,
        time: TimeFilter,
    },
    Single { id: String },
}

/// Configuration options for fetching posts
#[derive(Debug, Clone)]
pub struct PostsOptions {
    pub source: PostsSource,
    /// The number of posts to retrieve
    pub limit: u32,
    /// Display posts in a brief, one-line format
    pub brief: bool,
    /// Print the entities as pretty JSON instead
    pub json: bool,
}

/// Result of a posts fetch operation
#[derive(Debug)]
pub struct PostsResult {
    /// The number of posts found
    pub post_count: usize,
    /// Formatted output (for CLI display)
    pub formatted_output: String,
    pub posts: Vec<Post>,
}

/// Operation for fetching posts from Reddit
pub struct PostsOperation {
    options: PostsOptions,
    client: RedditClient,
}

impl PostsOperation {
    pub fn with_client(options: PostsOptions, client: RedditClient) -> Self {
        Self { options, client }
    }

    /// Execute the posts operation
    pub async fn execute(&self) -> Result<PostsResult> {
        let limit = self.options.limit;
        let posts = match &self.options.source {
            PostsSource::Subreddit { name, sort } => {
                info!("Fetching {} {} posts from r/{}", limit, sort, name);
                self.client.get_subreddit_posts(name, *sort, limit).await?
            }
            PostsSource::User { name, sort } => {
                info!("Fetching {} {} posts by u/{}", limit, sort, name);
                self.client.get_user_posts(name, *sort, limit).await?
            }
            PostsSource::Search {
                query,
                subreddit,
                sort,
                time,
            } => {
                info!(
                    "Searching {} for '{}'",
                    subreddit.as_deref().unwrap_or("all subreddits"),
                    query
                );
                self.client
                    .search_posts(query, subreddit.as_deref(), *sort, *time, limit)
                    .await?
            }
            PostsSource::Single { id } => {
                info!("Fetching post {}", id);
                vec![self.client.get_post(id).await?]
            }
        };

        let formatted_output = if self.options.json {
            format!("{}\n", serde_json::to_string_pretty(&posts)?)
        } else if posts.is_empty() {
            "No posts found.\n".to_string()
        } else {
            let mut output = format!("Found {} posts\n", posts.len());
            if self.options.brief {
                format_brief_output(&posts, &mut output);

                // Print a legend for the post type indicators
                output.push_str("\nPost Type Legend:\n");
                output.push_str("[T] = Text post\n");
                output.push_str("[V] = Video\n");
                output.push_str("[I] = Image\n");
                output.push_str("[G] = Gallery\n");
                output.push_str("[L] = Link\n");
            } else {
                format_detailed_output(&posts, &mut output);
            }
            output
        };

        Ok(PostsResult {
            post_count: posts.len(),
            formatted_output,
            posts,
        })
    }
}

/// Local (Los Angeles) wall-clock time of a creation timestamp
pub(crate) fn local_time(created_utc: f64, format: &str) -> String {
    match DateTime::from_timestamp(created_utc as i64, 0) {
        Some(time) => time.with_timezone(&Los_Angeles).format(format).to_string(),
        None => "unknown time".to_string(),
    }
}

/// Single-character post type indicator
fn post_type(post: &Post) -> &'static str {
    if post.is_self {
        "T"
    } else if post.domain == "v.redd.it" {
        "V"
    } else if post.domain == "i.redd.it" || post.url.contains("imgur.com") {
        "I"
    } else if post.url.contains("reddit.com/gallery") {
        "G"
    } else {
        "L"
    }
}

/// Truncate to `max` characters, safely handling UTF-8
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut head: String = text.chars().take(max.saturating_sub(3)).collect();
        head.push_str("...");
        head
    } else {
        text.to_string()
    }
}

fn format_brief_output(posts: &[Post], output: &mut String) {
    for (i, post) in posts.iter().enumerate() {
        // Get content excerpt or URL
        let content = if post.is_self {
            let text = post.selftext.trim();
            if text.is_empty() {
                "[No content]".to_string()
            } else {
                format!("\"{}\"", truncate(&text.replace('\n', " "), 30))
            }
        } else {
            let url = post
                .url
                .trim_start_matches("https://")
                .trim_start_matches("http://");
            truncate(url, 30)
        };

        output.push_str(&format!(
            "{:2}. [{}] [{}] {} ({}) r/{} | ID: {} | {}\n",
            i + 1,
            post_type(post),
            local_time(post.created_utc, "%H:%M"),
            truncate(&post.title, 30),
            content,
            post.subreddit,
            post.fullname(),
            post.permalink
        ));
    }
}

fn format_detailed_output(posts: &[Post], output: &mut String) {
    for post in posts {
        output.push_str("\n============ POST =============\n");
        output.push_str(&format!(
            "[{}] [Los Angeles time]\n",
            local_time(post.created_utc, "%Y-%m-%d %H:%M:%S")
        ));
        output.push_str(&format!("Thing ID: {}\n", post.fullname()));
        output.push_str(&post.format_summary());
        output.push_str("\n================================\n\n");
    }
}

/// CLI handler function for every posts-returning command
pub async fn handle_posts_command(options: PostsOptions, client: RedditClient) -> Result<()> {
    let operation = PostsOperation::with_client(options, client);
    match operation.execute().await {
        Ok(result) => {
            print!("{}", result.formatted_output);
            Ok(())
        }
        Err(err) => {
            error!("Error fetching posts: {}", err);
            Err(err)
        }
    }
}
