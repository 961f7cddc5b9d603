//! Tests for the serializable run summary

use bin_packer_core::{pack_all, PackingReport};

#[test]
fn test_report_from_packages() {
    let packages = pack_all(&["99999".to_string()]).unwrap();
    let report = PackingReport::from_packages(&packages);

    assert_eq!(report.packages(), ["9", "9", "9", "9", "9"]);
    assert_eq!(report.package_count(), 5);
    assert_eq!(report.item_count(), 5);
    assert_eq!(report.rendered(), "9/9/9/9/9");
}

#[test]
fn test_report_empty_run() {
    let report = PackingReport::from_packages(&[]);

    assert!(report.packages().is_empty());
    assert_eq!(report.package_count(), 0);
    assert_eq!(report.item_count(), 0);
    assert_eq!(report.rendered(), "");
}

#[test]
fn test_report_serializes_to_json() {
    let packages = pack_all(&["2468".to_string()]).unwrap();
    let report = PackingReport::from_packages(&packages);

    let json = serde_json::to_string(&report).unwrap();
    let parsed: PackingReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, report);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["package_count"], 2);
    assert_eq!(value["rendered"], "82/64");
}
