//! The plan produced by reconciling an upload.

use mapsync_types::{Element, ElementId, ElementKey, ElementType};
use serde::{Deserialize, Serialize};

/// An element whose id changed during upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementIdUpdate {
    pub element_type: ElementType,
    pub old_element_id: ElementId,
    pub new_element_id: ElementId,
}

/// Changes the caller has to apply to its local element store.
///
/// `updated` elements replace the local ones; their references already point
/// at server ids. `deleted` elements must be purged. `id_updates` must be
/// applied to any other local state keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementUpdates {
    pub updated: Vec<Element>,
    pub deleted: Vec<ElementKey>,
    pub id_updates: Vec<ElementIdUpdate>,
}

impl ElementUpdates {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty() && self.deleted.is_empty() && self.id_updates.is_empty()
    }

    /// Returns the key `key` is known under after the upload.
    #[must_use]
    pub fn remap(&self, key: &ElementKey) -> ElementKey {
        self.id_updates
            .iter()
            .find(|u| u.element_type == key.element_type && u.old_element_id == key.id)
            .map_or(*key, |u| ElementKey::new(u.element_type, u.new_element_id))
    }
}
