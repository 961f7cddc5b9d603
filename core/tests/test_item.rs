//! Tests for Item model

use bin_packer_core::Item;

#[test]
fn test_item_new() {
    let item = Item::new(7);

    assert_eq!(item.size(), 7);
    assert!(!item.is_placed());
}

#[test]
fn test_item_zero_size() {
    let item = Item::new(0);

    assert_eq!(item.size(), 0);
    assert!(!item.is_placed());
}

#[test]
fn test_item_mark_placed() {
    let mut item = Item::new(4);

    item.mark_placed();
    assert!(item.is_placed());
    assert_eq!(item.size(), 4);
}

#[test]
fn test_item_no_range_check() {
    // The 0-9 bound is the parser's contract; the type accepts any size.
    let item = Item::new(12);

    assert_eq!(item.size(), 12);
}
