//! Custom assertions for extraction testing.

use extractor::ScanResult;

/// Asserts that a raw sensitive value does not appear anywhere in the
/// serialized result.
///
/// # Panics
/// Panics if the value is found in the JSON output.
pub fn assert_not_leaked(result: &ScanResult, raw: &str) {
    let json = serde_json::to_string(result).expect("result serializes");
    assert!(
        !json.contains(raw),
        "Raw value '{}' should be masked but was found in output: {}",
        raw,
        json
    );
}

/// Asserts that only the listed categories produced findings.
///
/// # Panics
/// Panics if any other category is non-empty.
pub fn assert_only_categories(result: &ScanResult, expected: &[extractor::Category]) {
    for (category, count) in result.counts() {
        if !expected.contains(&category) {
            assert_eq!(
                count, 0,
                "Category '{}' should be empty but has {} finding(s)",
                category, count
            );
        }
    }
}
