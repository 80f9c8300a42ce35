use serde::{Deserialize, Serialize};

/// What to do with a diff that has a server id but no server version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedDiffPolicy {
    /// Keep it in the index but never apply it, neither to the element
    /// itself nor to references pointing at it.
    #[default]
    Ignore,
    /// Refuse to ingest it.
    Reject,
}

/// Configuration for an [`UpdatedElementsHandler`](crate::UpdatedElementsHandler).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Handling of malformed diffs.
    pub malformed: MalformedDiffPolicy,
}
