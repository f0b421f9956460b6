//! Typed query operations on top of the request executor.

use super::RedditClient;
use crate::error::{RedditClientError, Result};
use crate::models::listing::{
    Listing, Thing, ACCOUNT_KIND, COMMENT_KIND, LINK_KIND, SUBREDDIT_KIND,
};
use crate::models::{
    flatten, to_comment, to_post, to_subreddit, to_user, Comment, CommentSort, Post, PostSort,
    SearchSort, Subreddit, TimeFilter, User, UserSort,
};
use log::debug;
use serde_json::Value;

/// Largest page the listing endpoints return
pub const MAX_LIMIT: u32 = 100;

fn page_limit(limit: u32) -> String {
    limit.clamp(1, MAX_LIMIT).to_string()
}

/// Accepts `rust`, `r/rust` or `/r/rust`
pub(crate) fn subreddit_name(name: &str) -> &str {
    let name = name.trim().trim_start_matches('/');
    name.strip_prefix("r/").unwrap_or(name)
}

/// Accepts `someone`, `u/someone` or `/u/someone`
pub(crate) fn user_name(name: &str) -> &str {
    let name = name.trim().trim_start_matches('/');
    name.strip_prefix("u/").unwrap_or(name)
}

/// Accepts a bare id or a `t3_` fullname
pub(crate) fn post_id(id: &str) -> &str {
    let id = id.trim();
    id.strip_prefix("t3_").unwrap_or(id)
}

fn posts_from(value: Value) -> Result<Vec<Post>> {
    let listing = Listing::from_value(value)?;
    let posts = listing
        .things_of_kind(LINK_KIND)
        .map(to_post)
        .collect::<Result<Vec<_>>>()?;
    debug!("Mapped {} posts", posts.len());
    Ok(posts)
}

fn comments_from(value: Value) -> Result<Vec<Comment>> {
    let listing = Listing::from_value(value)?;
    let comments = listing
        .things_of_kind(COMMENT_KIND)
        .map(to_comment)
        .collect::<Result<Vec<_>>>()?;
    Ok(comments)
}

fn thing_of_kind(value: Value, kind: &str) -> Result<Thing> {
    let thing = Thing::from_value(value)?;
    if thing.kind != kind {
        return Err(RedditClientError::malformed(format!(
            "expected a `{}` thing, got `{}`",
            kind, thing.kind
        )));
    }
    Ok(thing)
}

impl RedditClient {
    /// Posts of a subreddit in the given order
    pub async fn get_subreddit_posts(
        &self,
        subreddit: &str,
        sort: PostSort,
        limit: u32,
    ) -> Result<Vec<Post>> {
        let path = format!("/r/{}/{}", subreddit_name(subreddit), sort);
        let value = self.execute(&path, &[("limit", page_limit(limit))]).await?;
        posts_from(value)
    }

    /// A single post by id
    pub async fn get_post(&self, id: &str) -> Result<Post> {
        let fullname = format!("t3_{}", post_id(id));
        let value = self.execute("/api/info", &[("id", fullname.clone())]).await?;
        posts_from(value)?
            .into_iter()
            .next()
            .ok_or(RedditClientError::NotFound(fullname))
    }

    /// Every comment of a post's thread, flattened parent-first
    pub async fn get_post_comments(
        &self,
        id: &str,
        sort: CommentSort,
        limit: Option<u32>,
    ) -> Result<Vec<Comment>> {
        let path = format!("/comments/{}", post_id(id));
        let mut query = vec![("sort", sort.to_string())];
        if let Some(limit) = limit {
            query.push(("limit", page_limit(limit)));
        }

        // The thread response is `[post listing, comment listing]`
        let value = self.execute(&path, &query).await?;
        let thread = match value {
            Value::Array(parts) => parts.into_iter().nth(1),
            _ => None,
        }
        .ok_or_else(|| RedditClientError::malformed("thread response is not a pair of listings"))?;

        let listing = Listing::from_value(thread)?;
        let comments = flatten(listing.data.children)?;
        debug!("Flattened {} comments", comments.len());
        Ok(comments)
    }

    pub async fn get_subreddit_info(&self, subreddit: &str) -> Result<Subreddit> {
        let path = format!("/r/{}/about", subreddit_name(subreddit));
        let value = self.execute(&path, &[]).await?;
        to_subreddit(&thing_of_kind(value, SUBREDDIT_KIND)?.data)
    }

    pub async fn get_user_info(&self, username: &str) -> Result<User> {
        let path = format!("/user/{}/about", user_name(username));
        let value = self.execute(&path, &[]).await?;
        to_user(&thing_of_kind(value, ACCOUNT_KIND)?.data)
    }

    /// Posts submitted by a user
    pub async fn get_user_posts(
        &self,
        username: &str,
        sort: UserSort,
        limit: u32,
    ) -> Result<Vec<Post>> {
        let path = format!("/user/{}/submitted", user_name(username));
        let query = [("sort", sort.to_string()), ("limit", page_limit(limit))];
        posts_from(self.execute(&path, &query).await?)
    }

    /// Comments written by a user
    pub async fn get_user_comments(
        &self,
        username: &str,
        sort: UserSort,
        limit: u32,
    ) -> Result<Vec<Comment>> {
        let path = format!("/user/{}/comments", user_name(username));
        let query = [("sort", sort.to_string()), ("limit", page_limit(limit))];
        comments_from(self.execute(&path, &query).await?)
    }

    /// Search posts site-wide, or inside one subreddit when given.
    pub async fn search_posts(
        &self,
        query: &str,
        subreddit: Option<&str>,
        sort: SearchSort,
        time: TimeFilter,
        limit: u32,
    ) -> Result<Vec<Post>> {
        let mut params = vec![
            ("q", query.to_string()),
            ("sort", sort.to_string()),
            ("t", time.to_string()),
            ("limit", page_limit(limit)),
            ("type", "link".to_string()),
        ];

        let path = match subreddit {
            Some(sub) => {
                params.push(("restrict_sr", "true".to_string()));
                format!("/r/{}/search", subreddit_name(sub))
            }
            None => "/search".to_string(),
        };

        posts_from(self.execute(&path, &params).await?)
    }

    pub async fn search_subreddits(&self, query: &str, limit: u32) -> Result<Vec<Subreddit>> {
        let params = [("q", query.to_string()), ("limit", page_limit(limit))];
        let listing = Listing::from_value(self.execute("/subreddits/search", &params).await?)?;
        let subreddits = listing
            .things_of_kind(SUBREDDIT_KIND)
            .map(to_subreddit)
            .collect::<Result<Vec<_>>>()?;
        Ok(subreddits)
    }
}
