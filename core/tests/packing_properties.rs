//! Property tests for the packing pipeline
//!
//! Randomized counterparts of the unit suite: up to 50 items with
//! digit sizes, checked against the result guarantees (no item lost
//! or duplicated, capacity respected, no empty package, package count
//! bounded by item count).

use proptest::prelude::*;

use bin_packer_core::{pack_all, Package, MAX_PACKAGE_SIZE};

fn digits_to_args(digits: &[u32]) -> Vec<String> {
    let input: String = digits.iter().map(|digit| digit.to_string()).collect();
    vec![input]
}

fn output_sizes(packages: &[Package]) -> Vec<u32> {
    packages
        .iter()
        .flat_map(|package| package.items().iter().map(|item| item.size()))
        .collect()
}

proptest! {
    #[test]
    fn prop_all_items_present_in_packages(digits in prop::collection::vec(1u32..=9, 1..=50)) {
        let packages = pack_all(&digits_to_args(&digits)).unwrap();

        let mut expected = digits.clone();
        let mut actual = output_sizes(&packages);
        expected.sort_unstable();
        actual.sort_unstable();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_items_fit_in_packages(digits in prop::collection::vec(1u32..=9, 1..=50)) {
        let packages = pack_all(&digits_to_args(&digits)).unwrap();

        prop_assert!(packages.iter().all(|p| p.occupied_size() <= MAX_PACKAGE_SIZE));
    }

    #[test]
    fn prop_no_package_is_empty(digits in prop::collection::vec(1u32..=9, 1..=50)) {
        let packages = pack_all(&digits_to_args(&digits)).unwrap();

        prop_assert!(packages.iter().all(|p| !p.items().is_empty()));
    }

    #[test]
    fn prop_package_count_bounded_by_item_count(digits in prop::collection::vec(1u32..=9, 1..=50)) {
        let packages = pack_all(&digits_to_args(&digits)).unwrap();

        prop_assert!(packages.len() <= digits.len());
    }

    #[test]
    fn prop_zero_digits_are_packed_too(digits in prop::collection::vec(0u32..=9, 1..=50)) {
        // Same guarantees with zeros in the mix: zeros occupy no space
        // but must still appear in the output exactly once each.
        let packages = pack_all(&digits_to_args(&digits)).unwrap();

        let mut expected = digits.clone();
        let mut actual = output_sizes(&packages);
        expected.sort_unstable();
        actual.sort_unstable();

        prop_assert_eq!(actual, expected);
        prop_assert!(packages.iter().all(|p| p.occupied_size() <= MAX_PACKAGE_SIZE));
        prop_assert!(packages.iter().all(|p| !p.items().is_empty()));
    }

    #[test]
    fn prop_rendering_round_trips_package_contents(digits in prop::collection::vec(1u32..=9, 1..=50)) {
        let packages = pack_all(&digits_to_args(&digits)).unwrap();
        let rendered = Package::render_all(&packages);

        let rendered_digit_count = rendered.chars().filter(char::is_ascii_digit).count();
        prop_assert_eq!(rendered_digit_count, digits.len());
        prop_assert_eq!(rendered.matches('/').count(), packages.len().saturating_sub(1));
    }
}
