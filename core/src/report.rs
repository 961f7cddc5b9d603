//! Packing run summary
//!
//! Serializable snapshot of a finished packing run, consumed by the
//! CLI's JSON output.

use serde::{Deserialize, Serialize};

use crate::models::package::Package;

/// Summary of one packing run
///
/// # Example
/// ```
/// use bin_packer_core::{pack_all, PackingReport};
///
/// let packages = pack_all(&["99999".to_string()]).unwrap();
/// let report = PackingReport::from_packages(&packages);
///
/// assert_eq!(report.rendered(), "9/9/9/9/9");
/// assert_eq!(report.package_count(), 5);
/// assert_eq!(report.item_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingReport {
    /// Rendered digit string of each package, in finalization order
    packages: Vec<String>,

    /// Number of packages produced
    package_count: usize,

    /// Number of items placed across all packages
    item_count: usize,

    /// Delimiter-joined rendering of the whole run
    rendered: String,
}

impl PackingReport {
    /// Build a report from a finished package list
    pub fn from_packages(packages: &[Package]) -> Self {
        Self {
            packages: packages.iter().map(Package::render_sizes).collect(),
            package_count: packages.len(),
            item_count: packages.iter().map(|p| p.items().len()).sum(),
            rendered: Package::render_all(packages),
        }
    }

    /// Rendered digit strings, one per package
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Number of packages produced
    pub fn package_count(&self) -> usize {
        self.package_count
    }

    /// Number of items placed
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The `/`-joined rendering of the run
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}
