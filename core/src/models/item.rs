//! Item model
//!
//! Represents one unit of work extracted from the raw input string.
//! Each item has:
//! - A size (u32), one decimal digit's value under the parser contract
//! - A placed flag, set once a package has accepted it
//!
//! The type itself does not range-check `size`; the 0–9 bound is a
//! contract of the digit parser, not of the model.

use serde::{Deserialize, Serialize};

/// A unit of work with an integer size
///
/// The `placed` flag supports the placement scan: it starts `false`
/// and flips to `true` exactly once, when a package accepts the item.
///
/// # Example
/// ```
/// use bin_packer_core::Item;
///
/// let item = Item::new(3);
/// assert_eq!(item.size(), 3);
/// assert!(!item.is_placed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Size of the item
    size: u32,

    /// Whether the item has been accepted into a package
    placed: bool,
}

impl Item {
    /// Create a new unplaced item of the given size
    pub fn new(size: u32) -> Self {
        Self {
            size,
            placed: false,
        }
    }

    /// Get the item's size
    ///
    /// The size is immutable after construction.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Check whether the item has been placed into a package
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Mark the item as placed
    ///
    /// Called by [`Package::add_item`](crate::Package::add_item) when
    /// the item is accepted.
    pub fn mark_placed(&mut self) {
        self.placed = true;
    }
}
