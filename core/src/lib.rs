//! Bin Packer Core - Packing Engine
//!
//! Groups digit-sized items into fixed-capacity packages using the
//! greedy first-fit-decreasing heuristic.
//!
//! # Architecture
//!
//! - **models**: Domain types (Item, Package)
//! - **packer**: Input validation, digit parsing, placement loop
//! - **report**: Serializable run summary for the CLI
//!
//! # Critical Invariants
//!
//! 1. Package capacity is the fixed constant [`MAX_PACKAGE_SIZE`] (10)
//! 2. Item sizes come from single decimal digits (0–9), which bounds
//!    them below the capacity and guarantees the placement loop
//!    terminates
//! 3. Every parsed item lands in exactly one output package; no output
//!    package is empty or over capacity

// Module declarations
pub mod models;
pub mod packer;
pub mod report;

// Re-exports for convenience
pub use models::{
    item::Item,
    package::{Package, MAX_PACKAGE_SIZE, PACKAGE_DELIMITER},
};
pub use packer::{pack_all, PackError};
pub use report::PackingReport;
