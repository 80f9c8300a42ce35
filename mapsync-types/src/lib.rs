//! Core map data types for mapsync.
//!
//! This crate defines the element model shared by every mapsync subsystem:
//! - Element kinds and per-kind identity keys
//! - Nodes, ways and relations with their tags and versions
//! - Geographic positions
//!
//! Upload reconciliation lives in `mapsync-diff`; nothing here performs I/O.

mod element;
mod ids;
mod position;

pub use element::{Element, Node, Relation, RelationMember, Tags, Way};
pub use ids::{ElementId, ElementKey, ElementType};
pub use position::LatLon;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown element type: {0}")]
    UnknownElementType(String),

    #[error("invalid position: lat={latitude}, lon={longitude}")]
    InvalidPosition { latitude: f64, longitude: f64 },
}
