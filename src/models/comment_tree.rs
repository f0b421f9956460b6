//! Nested reply trees and their depth-first flattening.

use super::listing::{RawData, Thing, COMMENT_KIND, MORE_KIND};
use super::mapper::to_comment;
use super::Comment;
use crate::error::{RedditClientError, Result};
use log::debug;
use serde_json::Value;

/// One node of a reply tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentNode {
    /// A real comment and the replies nested under it
    Comment {
        data: RawData,
        replies: Vec<CommentNode>,
    },
    /// "load more" stubs and any other non-comment kind
    Placeholder,
}

impl CommentNode {
    /// Build a node from a raw thing, recursing into `data.replies`.
    ///
    /// The service sends `replies` as an empty string when a comment has
    /// no children, and as a nested listing otherwise. The member is moved
    /// out of `data`, so each subtree is visited once.
    pub fn from_thing(thing: Thing) -> Result<Self> {
        if thing.kind != COMMENT_KIND {
            if thing.kind != MORE_KIND {
                debug!("Treating unexpected kind {} in thread as placeholder", thing.kind);
            }
            return Ok(CommentNode::Placeholder);
        }

        let mut data = thing.data;
        let replies = match data.remove("replies") {
            Some(listing @ Value::Object(_)) => Self::from_things(reply_things(listing)?)?,
            _ => Vec::new(),
        };

        Ok(CommentNode::Comment { data, replies })
    }

    pub fn from_things(things: Vec<Thing>) -> Result<Vec<Self>> {
        things.into_iter().map(Self::from_thing).collect()
    }

    fn walk(&self, out: &mut Vec<Comment>) -> Result<()> {
        if let CommentNode::Comment { data, replies } = self {
            out.push(to_comment(data)?);
            for reply in replies {
                reply.walk(out)?;
            }
        }
        Ok(())
    }
}

/// Flatten a sequence of sibling nodes in pre-order: each comment is
/// followed by its whole subtree before the next sibling.
pub fn flatten_nodes(nodes: &[CommentNode]) -> Result<Vec<Comment>> {
    let mut out = Vec::new();
    for node in nodes {
        node.walk(&mut out)?;
    }
    Ok(out)
}

/// Flatten the top-level children of a thread response.
pub fn flatten(children: Vec<Thing>) -> Result<Vec<Comment>> {
    flatten_nodes(&CommentNode::from_things(children)?)
}

/// Children of a nested `replies` listing, taken apart by value.
fn reply_things(listing: Value) -> Result<Vec<Thing>> {
    let children = match listing {
        Value::Object(mut listing) => match listing.remove("data") {
            Some(Value::Object(mut data)) => data.remove("children"),
            _ => return Err(RedditClientError::malformed("replies listing has no data")),
        },
        _ => None,
    };

    match children {
        Some(Value::Array(children)) => children.into_iter().map(Thing::from_object).collect(),
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(_) => Err(RedditClientError::malformed(
            "replies listing children is not an array",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn comment(id: &str, parent: &str, replies: Value) -> Value {
        json!({
            "kind": "t1",
            "data": {
                "id": id,
                "author": "someone",
                "body": format!("body of {}", id),
                "created_utc": 1_700_000_000.0,
                "score": 1,
                "permalink": format!("/r/test/comments/1/x/{}/", id),
                "parent_id": parent,
                "subreddit": "test",
                "replies": replies,
            }
        })
    }

    fn listing(children: Vec<Value>) -> Value {
        json!({"kind": "Listing", "data": {"after": null, "before": null, "children": children}})
    }

    fn more() -> Value {
        json!({"kind": "more", "data": {"count": 12, "children": ["zz"]}})
    }

    fn things(values: Vec<Value>) -> Vec<Thing> {
        values
            .into_iter()
            .map(|v| Thing::from_value(v).unwrap())
            .collect()
    }

    fn ids(comments: &[Comment]) -> Vec<&str> {
        comments.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn parent_is_followed_by_its_whole_subtree() {
        let d = comment("D", "t1_B", json!(""));
        let b = comment("B", "t1_A", listing(vec![d]));
        let c = comment("C", "t1_A", json!(""));
        let a = comment("A", "t3_1", listing(vec![b, c]));

        let flat = flatten(things(vec![a])).unwrap();
        assert_eq!(ids(&flat), vec!["A", "B", "D", "C"]);
        assert_eq!(flat[2].parent_id, "t1_B");
    }

    #[test]
    fn placeholders_are_skipped_without_breaking_sibling_order() {
        let b = comment("B", "t1_A", json!(""));
        let a = comment("A", "t3_1", listing(vec![more(), b, more()]));
        let e = comment("E", "t3_1", json!(""));

        let flat = flatten(things(vec![a, more(), e])).unwrap();
        assert_eq!(ids(&flat), vec!["A", "B", "E"]);
    }

    #[test]
    fn only_placeholders_yield_nothing() {
        assert!(flatten(things(vec![more(), more()])).unwrap().is_empty());
    }

    #[test]
    fn empty_thread_yields_nothing() {
        assert!(flatten(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn empty_replies_listing_equals_missing_replies() {
        let with_empty = comment("A", "t3_1", listing(vec![]));
        let with_string = comment("A", "t3_1", json!(""));
        let mut without = comment("A", "t3_1", json!(null));
        without["data"].as_object_mut().unwrap().remove("replies");

        let a = flatten(things(vec![with_empty])).unwrap();
        let b = flatten(things(vec![with_string])).unwrap();
        let c = flatten(things(vec![without])).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(ids(&a), vec!["A"]);
    }

    #[test]
    fn stored_comment_data_no_longer_carries_replies() {
        let b = comment("B", "t1_A", json!(""));
        let a = comment("A", "t3_1", listing(vec![b]));

        let nodes = CommentNode::from_things(things(vec![a])).unwrap();
        match &nodes[0] {
            CommentNode::Comment { data, replies } => {
                assert!(!data.contains_key("replies"));
                assert_eq!(data["id"], "A");
                assert_eq!(replies.len(), 1);
            }
            other => panic!("expected a comment, got {:?}", other),
        }
    }

    #[test]
    fn replies_listing_without_data_is_malformed() {
        let a = comment("A", "t3_1", json!({"kind": "Listing"}));
        assert!(matches!(
            flatten(things(vec![a])),
            Err(RedditClientError::MalformedResponse(_))
        ));
    }

    #[test]
    fn replies_child_without_kind_is_malformed() {
        let a = comment("A", "t3_1", listing(vec![json!({"data": {"id": "B"}})]));
        assert!(matches!(
            flatten(things(vec![a])),
            Err(RedditClientError::MalformedResponse(_))
        ));
    }

    #[test]
    fn deep_chains_are_fully_flattened() {
        let mut node = comment("n9", "t1_n8", json!(""));
        for depth in (0..9).rev() {
            let parent = if depth == 0 {
                "t3_1".to_string()
            } else {
                format!("t1_n{}", depth - 1)
            };
            node = comment(&format!("n{}", depth), &parent, listing(vec![node]));
        }

        let flat = flatten(things(vec![node])).unwrap();
        let expected: Vec<String> = (0..10).map(|i| format!("n{}", i)).collect();
        assert_eq!(ids(&flat), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
