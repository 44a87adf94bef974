//! Shape-tagged view of a JSON tree.
//!
//! The ranker needs to treat "list", "object" and "anything else" differently,
//! so dictionary responses are
//! converted into a [`Node`] before ranking and back into `serde_json::Value`
//! before typed deserialization.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::text::normalize;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Sequence(Vec<Node>),
    /// Pairs keep the order of the source `serde_json::Map` (sorted by key).
    Mapping(Vec<(String, Node)>),
    Scalar(serde_json::Value),
}

impl Node {
    /// Look up a mapping key. `None` for sequences and scalars.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Node::Sequence(items) => items.len(),
            Node::Mapping(pairs) => pairs.len(),
            Node::Scalar(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to compact JSON and normalize into word tokens.
    pub fn tokens(&self) -> Vec<String> {
        normalize(&serde_json::to_string(self).unwrap_or_default())
    }

    /// Deserialize into a typed value.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(serde_json::Value::from(self.clone()))
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => {
                Node::Sequence(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            scalar => Node::Scalar(scalar),
        }
    }
}

impl From<Node> for serde_json::Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Node::Mapping(pairs) => serde_json::Value::Object(
                pairs.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
            Node::Scalar(value) => value,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::Scalar(value) => value.serialize(serializer),
        }
    }
}
