//! Domain models
//!
//! - **item**: one unit of work, sized by a decimal digit
//! - **package**: fixed-capacity container of items

pub mod item;
pub mod package;

pub use item::Item;
pub use package::{Package, MAX_PACKAGE_SIZE, PACKAGE_DELIMITER};
