//! Upload diff reconciliation for mapsync.
//!
//! After a bulk upload the map service reports, per submitted element,
//! either the permanent id and version it assigned or that the element is
//! gone (deleted, or merged into another one). This crate turns that
//! outcome stream back into a plan for the local element store.
//!
//! # Components
//!
//! - **Diff**: one outcome record per uploaded element, typed or raw
//! - **Handler**: indexes outcomes and reconciles local elements against them
//! - **Updates**: the resulting plan of updated, deleted and re-keyed elements
//!
//! # Example
//!
//! ```
//! use mapsync_diff::{DiffElement, UpdatedElementsHandler};
//! use mapsync_types::{Element, ElementType, LatLon, Node};
//!
//! let mut handler = UpdatedElementsHandler::new();
//! handler
//!     .handle(DiffElement::updated(ElementType::Node, -1, 101, 1))
//!     .unwrap();
//!
//! let node = Element::Node(Node {
//!     id: -1,
//!     position: LatLon::new(52.0, 13.0).unwrap(),
//!     tags: Default::default(),
//!     version: 0,
//!     timestamp_edited: None,
//! });
//!
//! let updates = handler.get_element_updates([&node]);
//! assert_eq!(updates.updated[0].id(), 101);
//! assert_eq!(updates.id_updates[0].new_element_id, 101);
//! ```

mod config;
pub mod diff;
mod error;
pub mod handler;
pub mod updates;

pub use config::{DiffConfig, MalformedDiffPolicy};
pub use diff::{DiffElement, DiffOutcome, RawDiffElement, parse_diff_json};
pub use error::{DiffError, DiffResult};
pub use handler::UpdatedElementsHandler;
pub use updates::{ElementIdUpdate, ElementUpdates};
