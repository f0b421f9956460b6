#![allow(dead_code)]

use redquery::{Credentials, RedditClient, Session};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER_AGENT: &str = "redquery-tests/1.0 (by /u/tester)";
/// base64 of `id:secret`
pub const BASIC_AUTH: &str = "Basic aWQ6c2VjcmV0";
pub const TOKEN_PATH: &str = "/api/v1/access_token";

pub fn credentials() -> Credentials {
    Credentials {
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
        user_agent: USER_AGENT.to_string(),
        refresh_token: None,
        username: None,
        password: None,
    }
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Session holding a token that stays valid for an hour
pub fn live_session(token: &str) -> Session {
    Session::seeded(token, 3600, now())
}

/// Session whose token is already inside the expiry margin
pub fn expired_session(token: &str) -> Session {
    Session::seeded(token, 0, now())
}

pub fn client(server: &MockServer, credentials: Credentials, session: Session) -> RedditClient {
    RedditClient::new(credentials, &server.uri(), &server.uri(), session)
        .expect("Failed to build client")
}

pub fn token_body(token: &str, expires_in: i64) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "expires_in": expires_in,
        "scope": "*"
    })
}

/// Token endpoint answering one grant type
pub async fn mount_grant(server: &MockServer, grant_type: &str, token: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains(format!("grant_type={}", grant_type)))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(token, 3600)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn listing(children: Vec<Value>) -> Value {
    json!({
        "kind": "Listing",
        "data": {"after": null, "before": null, "dist": children.len(), "modhash": "", "children": children}
    })
}

pub fn post(id: &str, thumbnail: &str) -> Value {
    json!({
        "kind": "t3",
        "data": {
            "id": id,
            "name": format!("t3_{}", id),
            "title": format!("Post {}", id),
            "author": "someone",
            "subreddit": "rust",
            "url": format!("https://example.com/{}", id),
            "selftext": "",
            "created_utc": 1_700_000_000.0,
            "score": 10,
            "num_comments": 3,
            "permalink": format!("/r/rust/comments/{}/post/", id),
            "is_self": false,
            "domain": "example.com",
            "thumbnail": thumbnail,
            "over_18": false
        }
    })
}

pub fn comment(id: &str, parent_id: &str, replies: Value) -> Value {
    json!({
        "kind": "t1",
        "data": {
            "id": id,
            "name": format!("t1_{}", id),
            "author": "someone",
            "body": format!("body of {}", id),
            "created_utc": 1_700_000_100.0,
            "score": 2,
            "permalink": format!("/r/rust/comments/abc/post/{}/", id),
            "parent_id": parent_id,
            "subreddit": "rust",
            "replies": replies
        }
    })
}

pub fn more() -> Value {
    json!({"kind": "more", "data": {"count": 3, "name": "t1_zz", "children": ["zz"]}})
}

pub fn subreddit(name: &str) -> Value {
    json!({
        "kind": "t5",
        "data": {
            "display_name": name,
            "title": format!("The {} subreddit", name),
            "description": "long description",
            "public_description": "short description",
            "subscribers": 12345,
            "created_utc": 1_200_000_000.0,
            "url": format!("/r/{}/", name),
            "over18": false
        }
    })
}

pub fn account(name: &str) -> Value {
    json!({
        "kind": "t2",
        "data": {
            "name": name,
            "id": "u123",
            "created_utc": 1_300_000_000.0,
            "comment_karma": 100,
            "link_karma": 50,
            "verified": true,
            "has_verified_email": true
        }
    })
}
