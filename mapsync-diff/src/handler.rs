//! Reconciles the local element snapshot with an upload's diff result.
//!
//! The handler indexes every diff by the element's client key, then walks the
//! local elements once. Elements with a diff are either replaced (new id and
//! version, references rewritten) or marked deleted. References to elements
//! the server deleted are dropped from ways and relations; references to
//! elements outside the upload are left as they are.

use crate::{
    DiffConfig, DiffElement, DiffError, DiffOutcome, DiffResult, ElementIdUpdate, ElementUpdates,
    MalformedDiffPolicy, RawDiffElement,
};
use mapsync_types::{
    Element, ElementId, ElementKey, ElementType, Node, Relation, RelationMember, Way,
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Reads the diff result of an upload and turns it into [`ElementUpdates`].
#[derive(Debug, Default)]
pub struct UpdatedElementsHandler {
    config: DiffConfig,
    diffs: HashMap<ElementKey, DiffElement>,
}

impl UpdatedElementsHandler {
    /// Creates a handler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handler with a custom configuration.
    pub fn with_config(config: DiffConfig) -> Self {
        Self {
            config,
            diffs: HashMap::new(),
        }
    }

    /// Builds a handler from a complete diff stream.
    pub fn from_diffs(diffs: impl IntoIterator<Item = DiffElement>) -> DiffResult<Self> {
        Self::from_diffs_with_config(DiffConfig::default(), diffs)
    }

    /// Builds a handler with a custom configuration from a complete diff stream.
    pub fn from_diffs_with_config(
        config: DiffConfig,
        diffs: impl IntoIterator<Item = DiffElement>,
    ) -> DiffResult<Self> {
        let mut handler = Self::with_config(config);
        for diff in diffs {
            handler.handle(diff)?;
        }
        Ok(handler)
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Records one diff. A later diff for the same element replaces an
    /// earlier one.
    pub fn handle(&mut self, diff: DiffElement) -> DiffResult<()> {
        if diff.is_malformed() {
            match self.config.malformed {
                MalformedDiffPolicy::Reject => {
                    return Err(DiffError::MalformedDiff { key: diff.key() });
                }
                MalformedDiffPolicy::Ignore => {
                    warn!("Ignoring diff for {}: server id without version", diff.key());
                }
            }
        }

        if let Some(previous) = self.diffs.insert(diff.key(), diff) {
            debug!("Replaced earlier diff for {}", previous.key());
        }
        Ok(())
    }

    /// Records one diff as decoded from the wire. Diffs of unknown element
    /// types are skipped.
    pub fn handle_raw(&mut self, raw: RawDiffElement) -> DiffResult<()> {
        match raw.resolve() {
            Ok(diff) => self.handle(diff),
            Err(e) => {
                warn!("Skipping diff: {}", e);
                Ok(())
            }
        }
    }

    /// Returns the applicable diff for an element, if any. Malformed diffs
    /// are never returned.
    pub fn get_diff(&self, element_type: ElementType, id: ElementId) -> Option<&DiffElement> {
        self.diffs
            .get(&ElementKey::new(element_type, id))
            .filter(|d| !d.is_malformed())
    }

    /// Number of recorded diffs, malformed ones included.
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Computes the changes to apply to `elements`. Output order follows the
    /// input order.
    pub fn get_element_updates<'a>(
        &self,
        elements: impl IntoIterator<Item = &'a Element>,
    ) -> ElementUpdates {
        let mut updates = ElementUpdates::default();

        for element in elements {
            let Some(diff) = self.get_diff(element.element_type(), element.id()) else {
                continue;
            };

            match diff.outcome() {
                DiffOutcome::Updated { id, version } => {
                    updates.updated.push(self.create_updated_element(element, id, version));
                }
                DiffOutcome::Deleted => updates.deleted.push(diff.key()),
                DiffOutcome::Malformed => continue,
            }

            if let Some(server_id) = diff.server_id {
                if server_id != diff.client_id {
                    updates.id_updates.push(ElementIdUpdate {
                        element_type: diff.element_type,
                        old_element_id: diff.client_id,
                        new_element_id: server_id,
                    });
                }
            }
        }

        debug!(
            "Reconciled upload: {} updated, {} deleted, {} id updates",
            updates.updated.len(),
            updates.deleted.len(),
            updates.id_updates.len()
        );
        updates
    }

    fn create_updated_element(
        &self,
        element: &Element,
        new_id: ElementId,
        new_version: i32,
    ) -> Element {
        match element {
            Element::Node(node) => Element::Node(Node {
                id: new_id,
                version: new_version,
                ..node.clone()
            }),
            Element::Way(way) => Element::Way(self.create_updated_way(way, new_id, new_version)),
            Element::Relation(relation) => {
                Element::Relation(self.create_updated_relation(relation, new_id, new_version))
            }
        }
    }

    fn create_updated_way(&self, way: &Way, new_id: ElementId, new_version: i32) -> Way {
        let node_ids = way
            .node_ids
            .iter()
            .filter_map(|&node_id| self.updated_ref(ElementType::Node, node_id))
            .collect();

        Way {
            id: new_id,
            node_ids,
            tags: way.tags.clone(),
            version: new_version,
            timestamp_edited: way.timestamp_edited,
        }
    }

    fn create_updated_relation(
        &self,
        relation: &Relation,
        new_id: ElementId,
        new_version: i32,
    ) -> Relation {
        let members = relation
            .members
            .iter()
            .filter_map(|member| {
                self.updated_ref(member.element_type, member.ref_id)
                    .map(|ref_id| RelationMember {
                        ref_id,
                        ..member.clone()
                    })
            })
            .collect();

        Relation {
            id: new_id,
            members,
            tags: relation.tags.clone(),
            version: new_version,
            timestamp_edited: relation.timestamp_edited,
        }
    }

    /// Resolves a reference: `None` if the referenced element was deleted.
    fn updated_ref(&self, element_type: ElementType, id: ElementId) -> Option<ElementId> {
        match self.get_diff(element_type, id) {
            None => Some(id),
            Some(diff) => match diff.server_id {
                Some(server_id) => Some(server_id),
                None => {
                    debug!("Dropping reference to deleted {}/{}", element_type, id);
                    None
                }
            },
        }
    }
}
