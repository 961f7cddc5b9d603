//! Package model
//!
//! A bounded-capacity container of [`Item`]s. The package keeps its
//! items in insertion order (placement order) and answers occupancy
//! queries against a fixed maximum size.
//!
//! # Critical Invariants
//!
//! - The sum of item sizes never exceeds `max_size` **provided callers
//!   gate every `add_item` on `can_accept`**. `add_item` itself does
//!   not re-check capacity; overflow is a caller bug.
//! - Insertion order is preserved; rendering reads it back verbatim.

use serde::{Deserialize, Serialize};

use crate::models::item::Item;

/// Maximum total item size a single package may hold
pub const MAX_PACKAGE_SIZE: u32 = 10;

/// Separator between packages in the rendered output
pub const PACKAGE_DELIMITER: &str = "/";

/// A fixed-capacity container aggregating items
///
/// # Example
/// ```
/// use bin_packer_core::{Item, Package};
///
/// let mut package = Package::new();
/// let mut item = Item::new(3);
///
/// assert!(package.can_accept(&item));
/// package.add_item(&mut item);
/// assert!(item.is_placed());
/// assert_eq!(package.occupied_size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Items held by the package, in placement order
    items: Vec<Item>,

    /// Maximum total item size
    max_size: u32,
}

impl Package {
    /// Create a new empty package with the default capacity
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_size: MAX_PACKAGE_SIZE,
        }
    }

    /// Get the items held by the package, in placement order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total size occupied by the package's items
    ///
    /// Pure query, no side effect.
    pub fn occupied_size(&self) -> u32 {
        self.items.iter().map(|item| item.size()).sum()
    }

    /// Check whether the package has reached its capacity
    ///
    /// # Example
    /// ```
    /// use bin_packer_core::Package;
    ///
    /// let package = Package::new();
    /// assert!(!package.is_full());
    /// assert_eq!(package.occupied_size(), 0);
    /// ```
    pub fn is_full(&self) -> bool {
        self.occupied_size() >= self.max_size
    }

    /// Check whether the package can hold one more item
    ///
    /// Rejection is a boolean `false`, never an error.
    pub fn can_accept(&self, item: &Item) -> bool {
        self.occupied_size() + item.size() <= self.max_size
    }

    /// Add an item to the package and mark it placed
    ///
    /// The caller must have checked [`can_accept`](Self::can_accept)
    /// first; this operation does not re-validate capacity.
    pub fn add_item(&mut self, item: &mut Item) {
        item.mark_placed();
        self.items.push(*item);
    }

    /// Render the package's item sizes as one concatenated string
    ///
    /// # Example
    /// ```
    /// use bin_packer_core::{Item, Package};
    ///
    /// let mut package = Package::new();
    /// for size in [2, 3, 4] {
    ///     package.add_item(&mut Item::new(size));
    /// }
    /// assert_eq!(package.render_sizes(), "234");
    /// ```
    pub fn render_sizes(&self) -> String {
        self.items
            .iter()
            .map(|item| item.size().to_string())
            .collect()
    }

    /// Render a list of packages, joined by [`PACKAGE_DELIMITER`]
    ///
    /// An empty list renders the empty string.
    pub fn render_all(packages: &[Package]) -> String {
        packages
            .iter()
            .map(Package::render_sizes)
            .collect::<Vec<String>>()
            .join(PACKAGE_DELIMITER)
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}
