//! Diff records returned by the map service after an upload.
//!
//! One record per uploaded element. The record names the element by the id
//! the client used (`client_id`) and, if the element survived, the id and
//! version the server assigned. A record without a server id means the
//! element no longer exists on the server.

use crate::{DiffError, DiffResult};
use mapsync_types::{ElementId, ElementKey, ElementType};
use serde::{Deserialize, Deserializer, Serialize};

/// An upload outcome for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub client_id: ElementId,
    #[serde(default)]
    pub server_id: Option<ElementId>,
    #[serde(default)]
    pub server_version: Option<i32>,
}

/// Classification of a [`DiffElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOutcome {
    /// The element lives on under this id and version.
    Updated { id: ElementId, version: i32 },
    /// The element was deleted or merged on the server.
    Deleted,
    /// Server id without a version. Never applied.
    Malformed,
}

impl DiffElement {
    /// Outcome of an element the server kept.
    #[must_use]
    pub const fn updated(
        element_type: ElementType,
        client_id: ElementId,
        server_id: ElementId,
        server_version: i32,
    ) -> Self {
        Self {
            element_type,
            client_id,
            server_id: Some(server_id),
            server_version: Some(server_version),
        }
    }

    /// Outcome of an element the server deleted.
    #[must_use]
    pub const fn deleted(element_type: ElementType, client_id: ElementId) -> Self {
        Self {
            element_type,
            client_id,
            server_id: None,
            server_version: None,
        }
    }

    /// Key of the element as the client knows it.
    #[must_use]
    pub const fn key(&self) -> ElementKey {
        ElementKey::new(self.element_type, self.client_id)
    }

    #[must_use]
    pub const fn outcome(&self) -> DiffOutcome {
        match (self.server_id, self.server_version) {
            (Some(id), Some(version)) => DiffOutcome::Updated { id, version },
            (Some(_), None) => DiffOutcome::Malformed,
            // a version alone has no id to be applied to
            (None, _) => DiffOutcome::Deleted,
        }
    }

    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self.outcome(), DiffOutcome::Malformed)
    }
}

/// A diff record as decoded from the wire, before its type is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDiffElement {
    /// Kind tag as sent. Anything but a string decodes as `None`.
    #[serde(rename = "type", default, deserialize_with = "lenient_type")]
    pub element_type: Option<String>,
    #[serde(alias = "clientId", alias = "old_id")]
    pub client_id: ElementId,
    #[serde(default, alias = "serverId", alias = "new_id")]
    pub server_id: Option<ElementId>,
    #[serde(default, alias = "serverVersion", alias = "new_version")]
    pub server_version: Option<i32>,
}

impl RawDiffElement {
    /// Resolves the element type.
    pub fn resolve(self) -> DiffResult<DiffElement> {
        let raw_type = self
            .element_type
            .ok_or_else(|| DiffError::UnknownElementType(String::new()))?;
        let element_type = raw_type
            .parse::<ElementType>()
            .map_err(|_| DiffError::UnknownElementType(raw_type))?;

        Ok(DiffElement {
            element_type,
            client_id: self.client_id,
            server_id: self.server_id,
            server_version: self.server_version,
        })
    }
}

fn lenient_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Decodes a JSON array of raw diff records.
pub fn parse_diff_json(json: &str) -> DiffResult<Vec<RawDiffElement>> {
    Ok(serde_json::from_str(json)?)
}
