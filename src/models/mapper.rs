//! Conversion from raw thing data into the typed entities.
//!
//! This is the only place that reads untyped payload members. Every
//! function is pure: a missing or mistyped member is reported as
//! [`RedditClientError::MalformedResponse`] naming the member.

use super::{Comment, Post, RawData, Subreddit, User, WEB_ORIGIN};
use crate::error::{RedditClientError, Result};
use serde_json::Value;

/// Thumbnail values the service uses in place of an image url
const THUMBNAIL_SENTINELS: [&str; 2] = ["self", "default"];

pub fn to_post(raw: &RawData) -> Result<Post> {
    Ok(Post {
        id: string(raw, "id")?,
        title: string(raw, "title")?,
        author: string(raw, "author")?,
        subreddit: string(raw, "subreddit")?,
        url: string(raw, "url")?,
        selftext: optional_string(raw, "selftext")?.unwrap_or_default(),
        created_utc: float(raw, "created_utc")?,
        score: integer(raw, "score")?,
        num_comments: integer(raw, "num_comments")?,
        permalink: absolute_permalink(&string(raw, "permalink")?),
        is_self: boolean(raw, "is_self")?,
        domain: string(raw, "domain")?,
        thumbnail: optional_string(raw, "thumbnail")?
            .filter(|thumb| !THUMBNAIL_SENTINELS.contains(&thumb.as_str())),
    })
}

pub fn to_comment(raw: &RawData) -> Result<Comment> {
    Ok(Comment {
        id: string(raw, "id")?,
        author: string(raw, "author")?,
        body: string(raw, "body")?,
        created_utc: float(raw, "created_utc")?,
        score: integer(raw, "score")?,
        permalink: absolute_permalink(&string(raw, "permalink")?),
        parent_id: string(raw, "parent_id")?,
        subreddit: string(raw, "subreddit")?,
    })
}

pub fn to_subreddit(raw: &RawData) -> Result<Subreddit> {
    let display_name = string(raw, "display_name")?;
    Ok(Subreddit {
        url: format!("{}/r/{}", WEB_ORIGIN, display_name),
        title: string(raw, "title")?,
        description: string(raw, "description")?,
        subscribers: optional_integer(raw, "subscribers")?.unwrap_or(0),
        created_utc: float(raw, "created_utc")?,
        public_description: string(raw, "public_description")?,
        over18: optional_boolean(raw, "over18")?.unwrap_or(false),
        display_name,
    })
}

pub fn to_user(raw: &RawData) -> Result<User> {
    let is_verified = match optional_boolean(raw, "verified")? {
        Some(verified) => verified,
        None => optional_boolean(raw, "is_verified")?.unwrap_or(false),
    };
    Ok(User {
        name: string(raw, "name")?,
        id: string(raw, "id")?,
        created_utc: float(raw, "created_utc")?,
        comment_karma: integer(raw, "comment_karma")?,
        link_karma: integer(raw, "link_karma")?,
        is_verified,
        has_verified_email: optional_boolean(raw, "has_verified_email")?.unwrap_or(false),
    })
}

fn absolute_permalink(relative: &str) -> String {
    format!("{}{}", WEB_ORIGIN, relative)
}

fn field<'a>(raw: &'a RawData, key: &str) -> Result<&'a Value> {
    raw.get(key)
        .ok_or_else(|| RedditClientError::malformed(format!("missing field `{}`", key)))
}

fn mistyped(key: &str, expected: &str) -> RedditClientError {
    RedditClientError::malformed(format!("field `{}` is not {}", key, expected))
}

fn string(raw: &RawData, key: &str) -> Result<String> {
    field(raw, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mistyped(key, "a string"))
}

fn optional_string(raw: &RawData, key: &str) -> Result<Option<String>> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(mistyped(key, "a string")),
    }
}

fn float(raw: &RawData, key: &str) -> Result<f64> {
    field(raw, key)?
        .as_f64()
        .ok_or_else(|| mistyped(key, "a number"))
}

fn integer(raw: &RawData, key: &str) -> Result<i64> {
    optional_integer(raw, key)?
        .ok_or_else(|| RedditClientError::malformed(format!("missing field `{}`", key)))
}

fn optional_integer(raw: &RawData, key: &str) -> Result<Option<i64>> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(None),
        // Counts occasionally arrive as floats (e.g. `12.0`)
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| mistyped(key, "an integer")),
        Some(_) => Err(mistyped(key, "an integer")),
    }
}

fn boolean(raw: &RawData, key: &str) -> Result<bool> {
    field(raw, key)?
        .as_bool()
        .ok_or_else(|| mistyped(key, "a boolean"))
}

fn optional_boolean(raw: &RawData, key: &str) -> Result<Option<bool>> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(mistyped(key, "a boolean")),
    }
}
