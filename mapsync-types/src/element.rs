//! Map elements.
//!
//! Ways reference nodes by id, relations reference members of any kind by
//! (kind, id). Order matters in both lists: it is the way's geometry and the
//! relation's member order.

use crate::{ElementId, ElementKey, ElementType, LatLon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag mapping of an element. Keys are unique.
pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: ElementId,
    pub position: LatLon,
    #[serde(default)]
    pub tags: Tags,
    pub version: i32,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp_edited: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    pub id: ElementId,
    pub node_ids: Vec<ElementId>,
    #[serde(default)]
    pub tags: Tags,
    pub version: i32,
    #[serde(default)]
    pub timestamp_edited: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationMember {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(rename = "ref")]
    pub ref_id: ElementId,
    #[serde(default)]
    pub role: String,
}

impl RelationMember {
    pub fn new(element_type: ElementType, ref_id: ElementId, role: impl Into<String>) -> Self {
        Self {
            element_type,
            ref_id,
            role: role.into(),
        }
    }

    /// Key of the referenced element.
    #[must_use]
    pub const fn key(&self) -> ElementKey {
        ElementKey::new(self.element_type, self.ref_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub id: ElementId,
    pub members: Vec<RelationMember>,
    #[serde(default)]
    pub tags: Tags,
    pub version: i32,
    #[serde(default)]
    pub timestamp_edited: Option<i64>,
}

/// Any map element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

impl Element {
    #[must_use]
    pub const fn id(&self) -> ElementId {
        match self {
            Element::Node(n) => n.id,
            Element::Way(w) => w.id,
            Element::Relation(r) => r.id,
        }
    }

    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Element::Node(_) => ElementType::Node,
            Element::Way(_) => ElementType::Way,
            Element::Relation(_) => ElementType::Relation,
        }
    }

    #[must_use]
    pub const fn key(&self) -> ElementKey {
        ElementKey::new(self.element_type(), self.id())
    }

    #[must_use]
    pub const fn version(&self) -> i32 {
        match self {
            Element::Node(n) => n.version,
            Element::Way(w) => w.version,
            Element::Relation(r) => r.version,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &Tags {
        match self {
            Element::Node(n) => &n.tags,
            Element::Way(w) => &w.tags,
            Element::Relation(r) => &r.tags,
        }
    }

    #[must_use]
    pub const fn timestamp_edited(&self) -> Option<i64> {
        match self {
            Element::Node(n) => n.timestamp_edited,
            Element::Way(w) => w.timestamp_edited,
            Element::Relation(r) => r.timestamp_edited,
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Way> for Element {
    fn from(way: Way) -> Self {
        Element::Way(way)
    }
}

impl From<Relation> for Element {
    fn from(relation: Relation) -> Self {
        Element::Relation(relation)
    }
}
