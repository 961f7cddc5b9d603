//! First-fit-decreasing packing engine
//!
//! This module implements the core grouping logic over the models.
//!
//! # Packing Flow
//!
//! ```text
//! raw args → validate → parse digits into Items → sort descending
//!          → place into Packages (first-fit) → Vec<Package>
//! ```
//!
//! The engine:
//! 1. Validates the raw argument list (exactly one non-empty token)
//! 2. Parses every character as a decimal digit, one [`Item`] each
//! 3. Sorts the items by size, descending, with a stable sort
//! 4. Fills packages by scanning the sorted list for the first
//!    unplaced item the current package still accepts
//!
//! # Critical Invariants
//!
//! - Every parsed item ends up in exactly one output package
//! - No output package exceeds [`MAX_PACKAGE_SIZE`](crate::MAX_PACKAGE_SIZE)
//! - No output package is empty; package count ≤ item count
//! - **Termination precondition**: every item size ≤ capacity. The
//!   digit parser guarantees this (sizes 0–9 against capacity 10); an
//!   item larger than the capacity would never be accepted by any
//!   package and the placement loop could not make progress.

use thiserror::Error;

use crate::models::item::Item;
use crate::models::package::Package;

/// Errors that can occur while validating or parsing the input
///
/// The first three variants are invalid-argument conditions, detected
/// before any parsing work. [`NonDigit`](PackError::NonDigit) is a
/// distinct format-error kind, raised on the first offending character.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("no input provided")]
    MissingInput,

    #[error("expected exactly one input string, got {count}")]
    TooManyInputs { count: usize },

    #[error("input string is empty")]
    EmptyInput,

    #[error("input contains a non-digit character {found:?} at position {position}")]
    NonDigit { found: char, position: usize },
}

impl PackError {
    /// Check whether the error is a format error rather than an
    /// invalid-argument condition
    pub fn is_format_error(&self) -> bool {
        matches!(self, PackError::NonDigit { .. })
    }
}

/// Pack a raw argument list into packages
///
/// Full pipeline: validate the argument list, parse the single token
/// into items, sort them descending, and run first-fit placement.
///
/// # Arguments
///
/// * `args` - Raw argument list; exactly one non-empty digit string
///
/// # Returns
///
/// - `Ok(Vec<Package>)` with every item placed, in finalization order
/// - `Err(PackError)` if validation or parsing fails; errors are
///   detected eagerly, before any placement work
///
/// # Example
///
/// ```rust
/// use bin_packer_core::{pack_all, Package};
///
/// let args = vec!["163841689525773".to_string()];
/// let packages = pack_all(&args).unwrap();
///
/// assert!(packages.iter().all(|p| p.occupied_size() <= 10));
/// assert!(!Package::render_all(&packages).is_empty());
/// ```
pub fn pack_all(args: &[String]) -> Result<Vec<Package>, PackError> {
    let input = validate_raw(args)?;
    let items = parse_items(input)?;
    Ok(place_items(items))
}

/// Validate the raw argument list
///
/// Accepts exactly one non-empty token and returns it.
fn validate_raw(args: &[String]) -> Result<&str, PackError> {
    if args.is_empty() {
        return Err(PackError::MissingInput);
    }
    if args.len() > 1 {
        return Err(PackError::TooManyInputs { count: args.len() });
    }
    if args[0].is_empty() {
        return Err(PackError::EmptyInput);
    }
    Ok(&args[0])
}

/// Parse the input string into a descending-sorted item list
///
/// Every character must be a decimal digit; the first offender fails
/// with [`PackError::NonDigit`]. The sort is stable, so equal sizes
/// keep their input-relative order. This realizes the "decreasing"
/// half of first-fit-decreasing.
fn parse_items(input: &str) -> Result<Vec<Item>, PackError> {
    let mut items = input
        .chars()
        .enumerate()
        .map(|(position, found)| {
            found
                .to_digit(10)
                .map(Item::new)
                .ok_or(PackError::NonDigit { found, position })
        })
        .collect::<Result<Vec<Item>, PackError>>()?;

    items.sort_by(|a, b| b.size().cmp(&a.size()));

    Ok(items)
}

/// Place a descending-sorted item list into packages (first-fit)
///
/// Scans the sorted list for the first unplaced item the current
/// package accepts. After each attempt, one post-add check decides
/// whether to finalize the current package: it is full, or nothing
/// fit, or everything is placed. A single combined check keeps a
/// trailing empty package out of the output.
///
/// Terminates because every iteration either places an item or
/// finalizes a package that nothing fits into; given the parser's
/// size bound (≤ [`MAX_PACKAGE_SIZE`](crate::MAX_PACKAGE_SIZE)), a
/// fresh package accepts any remaining item.
fn place_items(mut items: Vec<Item>) -> Vec<Package> {
    let mut packages = Vec::new();
    let mut current = Package::new();

    while items.iter().any(|item| !item.is_placed()) {
        let found = items
            .iter()
            .position(|item| !item.is_placed() && current.can_accept(item));

        if let Some(index) = found {
            current.add_item(&mut items[index]);
        }

        let all_placed = items.iter().all(|item| item.is_placed());
        if current.is_full() || found.is_none() || all_placed {
            packages.push(current);
            current = Package::new();
        }
    }

    packages
}
