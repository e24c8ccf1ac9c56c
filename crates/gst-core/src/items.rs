//! # Line Item List
//!
//! The ordered, never-empty list of rows on an invoice.
//!
//! ## Invariants
//! - At least one row always exists (the last row cannot be removed)
//! - Row ids are unique within the list
//! - New rows get `max(existing ids) + 1`, not `len + 1`
//!
//! ## Id Assignment
//! ```text
//! rows: [ id 5, id 3 ]          add() ──► [ id 5, id 3, id 6 ]
//!                                               (max 5 + 1)
//!
//! rows: [ id 1, id 2, id 3 ]    remove(2) ──► [ id 1, id 3 ]
//!                               add()     ──► [ id 1, id 3, id 4 ]
//!                                               (len + 1 would collide with 3)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::LineItem;

/// A never-empty, id-unique list of line items in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    /// A list holding one blank row with id 1.
    pub fn new() -> Self {
        LineItems {
            items: vec![LineItem::new(1)],
        }
    }

    /// Appends a blank row and returns its id.
    pub fn add(&mut self) -> u32 {
        let id = self.next_id();
        self.items.push(LineItem::new(id));
        id
    }

    /// The id the next added row will receive: one past the highest id.
    ///
    /// When the highest id is `u32::MAX` the smallest unused id is taken
    /// instead, so ids stay unique.
    pub fn next_id(&self) -> u32 {
        let max = self.items.iter().map(|i| i.id).max().unwrap_or(0);
        max.checked_add(1).unwrap_or_else(|| self.smallest_unused_id())
    }

    fn smallest_unused_id(&self) -> u32 {
        let taken: HashSet<u32> = self.items.iter().map(|i| i.id).collect();
        (1..=u32::MAX).find(|id| !taken.contains(id)).unwrap_or(0)
    }

    /// Removes the row with `id`, mirroring the form's remove button.
    ///
    /// ## Behavior
    /// - Only one row left: no-op, returns `false`
    /// - Unknown id: no-op, returns `false`
    /// - Otherwise: row removed, returns `true`
    pub fn remove(&mut self, id: u32) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Returns the row with `id`.
    pub fn get(&self, id: u32) -> CoreResult<&LineItem> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or(CoreError::ItemNotFound(id))
    }

    /// Returns the row with `id` for editing.
    ///
    /// The id itself is not reachable through the editable fields callers
    /// use, so uniqueness cannot be broken this way.
    pub fn get_mut(&mut self, id: u32) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::ItemNotFound(id))
    }

    pub fn as_slice(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Number of rows (always at least 1).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line amounts.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::amount).sum()
    }
}

impl Default for LineItems {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<LineItem>> for LineItems {
    type Error = CoreError;

    /// Accepts a list only if it upholds both invariants.
    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            return Err(ValidationError::Required {
                field: "items".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CoreError::DuplicateItemId(item.id));
            }
        }

        Ok(LineItems { items })
    }
}

impl From<LineItems> for Vec<LineItem> {
    fn from(list: LineItems) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a LineItems {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
