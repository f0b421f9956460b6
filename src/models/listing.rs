use crate::error::RedditClientError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Untyped `data` member of a thing. Only the mapper looks inside it.
pub type RawData = Map<String, Value>;

pub const COMMENT_KIND: &str = "t1";
pub const ACCOUNT_KIND: &str = "t2";
pub const LINK_KIND: &str = "t3";
pub const SUBREDDIT_KIND: &str = "t5";
pub const MORE_KIND: &str = "more";

/// Top-level response for Reddit listings
#[derive(Deserialize, Debug, Clone)]
pub struct Listing {
    pub kind: String,
    pub data: ListingData,
}

/// Children of a listing plus the paging cursors
#[derive(Deserialize, Debug, Clone)]
pub struct ListingData {
    pub after: Option<String>,
    pub before: Option<String>,
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// A single kind-tagged entry (`t1`, `t3`, `more`, ...)
#[derive(Deserialize, Debug, Clone)]
pub struct Thing {
    pub kind: String,
    pub data: RawData,
}

impl Listing {
    pub fn from_value(value: Value) -> crate::error::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Data of every child of the given kind, in listing order.
    pub fn things_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a RawData> + 'a {
        self.data
            .children
            .iter()
            .filter(move |thing| thing.kind == kind)
            .map(|thing| &thing.data)
    }
}

impl Thing {
    pub fn from_value(value: Value) -> crate::error::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Take a thing apart without re-walking its `data`.
    pub(crate) fn from_object(value: Value) -> crate::error::Result<Self> {
        let mut object = match value {
            Value::Object(object) => object,
            _ => return Err(RedditClientError::malformed("thing is not an object")),
        };
        let kind = match object.remove("kind") {
            Some(Value::String(kind)) => kind,
            _ => return Err(RedditClientError::malformed("thing has no kind")),
        };
        match object.remove("data") {
            Some(Value::Object(data)) => Ok(Thing { kind, data }),
            _ => Err(RedditClientError::malformed(format!(
                "{} thing has no data object",
                kind
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_listing_and_filters_kinds() {
        let listing = Listing::from_value(json!({
            "kind": "Listing",
            "data": {
                "after": "t3_b",
                "before": null,
                "dist": 2,
                "modhash": "",
                "children": [
                    {"kind": "t3", "data": {"id": "a"}},
                    {"kind": "more", "data": {"count": 4}},
                    {"kind": "t3", "data": {"id": "b"}}
                ]
            }
        }))
        .unwrap();

        let ids: Vec<_> = listing
            .things_of_kind(LINK_KIND)
            .map(|data| data["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(listing.data.after.as_deref(), Some("t3_b"));
    }

    #[test]
    fn rejects_non_listing_shapes() {
        assert!(Listing::from_value(json!(["not", "a", "listing"])).is_err());
    }
}
