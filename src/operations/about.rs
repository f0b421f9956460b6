use super::posts::local_time;
use crate::client::RedditClient;
use crate::error::Result;
use crate::models::{Subreddit, User};
use log::{error, info};

#[derive(Debug, Clone)]
pub enum AboutTarget {
    Subreddit(String),
    User(String),
    /// Subreddits matching a query
    SubredditSearch { query: String, limit: u32 },
}

#[derive(Debug, Clone)]
pub struct AboutOptions {
    pub target: AboutTarget,
    pub json: bool,
}

/// Operation for looking up subreddit and account metadata
pub struct AboutOperation {
    options: AboutOptions,
    client: RedditClient,
}

impl AboutOperation {
    pub fn with_client(options: AboutOptions, client: RedditClient) -> Self {
        Self { options, client }
    }

    /// Run the lookup and return the formatted output
    pub async fn execute(&self) -> Result<String> {
        let json = self.options.json;
        match &self.options.target {
            AboutTarget::Subreddit(name) => {
                info!("Fetching metadata for r/{}", name);
                let sub = self.client.get_subreddit_info(name).await?;
                if json {
                    return Ok(format!("{}\n", serde_json::to_string_pretty(&sub)?));
                }
                Ok(format_subreddit(&sub))
            }
            AboutTarget::User(name) => {
                info!("Fetching metadata for u/{}", name);
                let user = self.client.get_user_info(name).await?;
                if json {
                    return Ok(format!("{}\n", serde_json::to_string_pretty(&user)?));
                }
                Ok(format_user(&user))
            }
            AboutTarget::SubredditSearch { query, limit } => {
                info!("Searching subreddits for '{}'", query);
                let subs = self.client.search_subreddits(query, *limit).await?;
                if json {
                    return Ok(format!("{}\n", serde_json::to_string_pretty(&subs)?));
                }
                if subs.is_empty() {
                    return Ok("No subreddits found.\n".to_string());
                }
                let mut output = format!("Found {} subreddits\n", subs.len());
                for (i, sub) in subs.iter().enumerate() {
                    output.push_str(&format!(
                        "{:2}. r/{} ({} subscribers){} | {}\n",
                        i + 1,
                        sub.display_name,
                        sub.subscribers,
                        if sub.over18 { " [NSFW]" } else { "" },
                        sub.url
                    ));
                }
                Ok(output)
            }
        }
    }
}

fn format_subreddit(sub: &Subreddit) -> String {
    let mut content = format!(
        "r/{} - {}\nSubscribers: {}\nCreated: {} [Los Angeles time]\nURL: {}\n",
        sub.display_name,
        sub.title,
        sub.subscribers,
        local_time(sub.created_utc, "%Y-%m-%d"),
        sub.url
    );
    if sub.over18 {
        content.push_str("Flags: [NSFW]\n");
    }
    if !sub.public_description.is_empty() {
        content.push_str(&format!("\n{}\n", sub.public_description.trim()));
    }
    content
}

fn format_user(user: &User) -> String {
    let mut flags = Vec::new();
    if user.is_verified {
        flags.push("Verified");
    }
    if user.has_verified_email {
        flags.push("Verified email");
    }

    let mut content = format!(
        "u/{} (t2_{})\nCreated: {} [Los Angeles time]\nKarma: {} link | {} comment\n",
        user.name,
        user.id,
        local_time(user.created_utc, "%Y-%m-%d"),
        user.link_karma,
        user.comment_karma
    );
    if !flags.is_empty() {
        content.push_str(&format!("Flags: [{}]\n", flags.join(", ")));
    }
    content
}

/// CLI handler function for subreddit and user lookups
pub async fn handle_about_command(options: AboutOptions, client: RedditClient) -> Result<()> {
    let operation = AboutOperation::with_client(options, client);
    match operation.execute().await {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(err) => {
            error!("Error fetching metadata: {}", err);
            Err(err)
        }
    }
}
