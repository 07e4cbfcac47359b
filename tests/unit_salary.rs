// tests/unit_salary.rs
use orgaudit_core::analysis::{
    analyze_manager_salaries, salary_violations, Deviation, SalaryBand,
};
use orgaudit_core::{build, Employee, RecordStore, RootPolicy};

fn store(rows: &[(&str, &str, &str, u64, Option<&str>)]) -> RecordStore {
    rows.iter()
        .map(|(id, first, last, salary, manager)| Employee::new(*id, *first, *last, *salary, *manager))
        .collect()
}

fn report(s: &RecordStore) -> Vec<String> {
    let h = build(s, RootPolicy::Strict).unwrap();
    analyze_manager_salaries(h.root().unwrap(), &SalaryBand::default())
}

#[test]
fn test_all_within_band() {
    let s = store(&[
        ("E001", "John", "Doe", 140_000, None),
        ("E002", "Jane", "Smith", 100_000, Some("E001")),
        ("E003", "Alice", "Brown", 80_000, Some("E002")),
    ]);
    assert!(report(&s).is_empty(), "Expected no salary violations");
}

#[test]
fn test_single_node_has_no_report() {
    let s = store(&[("E001", "Solo", "Founder", 1, None)]);
    assert!(report(&s).is_empty());
}

#[test]
fn test_overpaid_manager() {
    let s = store(&[
        ("E001", "John", "Doe", 140_000, None),
        ("E002", "Alice", "Brown", 80_000, Some("E001")),
        ("E003", "Bob", "White", 90_000, Some("E001")),
    ]);
    assert_eq!(
        report(&s),
        vec!["Manager John Doe earns 12500.00 MORE than expected (should be at most 127500.00)"]
    );
}

#[test]
fn test_underpaid_manager() {
    let s = store(&[
        ("E001", "Jane", "Smith", 50_000, None),
        ("E002", "Alice", "Brown", 80_000, Some("E001")),
        ("E003", "Bob", "White", 90_000, Some("E001")),
    ]);
    assert_eq!(
        report(&s),
        vec!["Manager Jane Smith earns 52000.00 LESS than expected (should be at least 102000.00)"]
    );
}

#[test]
fn test_violations_in_pre_order() {
    let s = store(&[
        ("E001", "John", "Doe", 140_000, None),
        ("E002", "Jane", "Smith", 50_000, Some("E001")),
        ("E003", "Alice", "Brown", 80_000, Some("E002")),
        ("E004", "Bob", "White", 90_000, Some("E002")),
    ]);
    let lines = report(&s);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("John Doe earns"));
    assert!(lines[0].contains("MORE"));
    assert!(lines[1].contains("Jane Smith earns"));
    assert!(lines[1].contains("LESS"));
}

#[test]
fn test_band_edges_are_compliant() {
    // avg = 100_000: floor 120_000, cap 150_000
    for (salary, expected) in [
        (119_999, Some(Deviation::Underpaid)),
        (120_000, None),
        (135_000, None),
        (150_000, None),
        (150_001, Some(Deviation::Overpaid)),
    ] {
        let s = store(&[
            ("M", "Max", "Boss", salary, None),
            ("W", "Wendy", "Worker", 100_000, Some("M")),
        ]);
        let h = build(&s, RootPolicy::Strict).unwrap();
        let found = salary_violations(h.root().unwrap(), &SalaryBand::default());
        assert_eq!(
            found.first().map(|v| v.deviation),
            expected,
            "salary {salary}"
        );
    }
}

#[test]
fn test_structured_fields() {
    let s = store(&[
        ("E001", "John", "Doe", 140_000, None),
        ("E002", "Alice", "Brown", 80_000, Some("E001")),
        ("E003", "Bob", "White", 90_000, Some("E001")),
    ]);
    let h = build(&s, RootPolicy::Strict).unwrap();
    let found = salary_violations(h.root().unwrap(), &SalaryBand::default());
    let v = &found[0];
    assert_eq!(v.employee_id, "E001");
    assert_eq!(v.salary, 140_000);
    assert!((v.amount - 12_500.0).abs() < 1e-6);
    assert!((v.limit - 127_500.0).abs() < 1e-6);
}

#[test]
fn test_custom_band() {
    let s = store(&[
        ("M", "Max", "Boss", 100_000, None),
        ("W", "Wendy", "Worker", 100_000, Some("M")),
    ]);
    let h = build(&s, RootPolicy::Strict).unwrap();
    let root = h.root().unwrap();

    let flat = SalaryBand {
        min_ratio: 1.0,
        max_ratio: 1.0,
    };
    assert!(salary_violations(root, &flat).is_empty());
    assert_eq!(salary_violations(root, &SalaryBand::default()).len(), 1);
}

#[test]
fn test_idempotent() {
    let s = store(&[
        ("E001", "John", "Doe", 140_000, None),
        ("E002", "Jane", "Smith", 50_000, Some("E001")),
        ("E003", "Alice", "Brown", 80_000, Some("E002")),
    ]);
    let h = build(&s, RootPolicy::Strict).unwrap();
    let root = h.root().unwrap();
    let band = SalaryBand::default();
    assert_eq!(
        analyze_manager_salaries(root, &band),
        analyze_manager_salaries(root, &band)
    );
}

#[test]
fn test_tie_rounds_half_up() {
    // avg 27500.75 → cap exactly 41251.125, excess exactly 8748.875
    let s = store(&[
        ("M", "Max", "Boss", 50_000, None),
        ("A", "Ann", "One", 27_500, Some("M")),
        ("B", "Ben", "Two", 27_501, Some("M")),
        ("C", "Cat", "Three", 27_501, Some("M")),
        ("D", "Dov", "Four", 27_501, Some("M")),
    ]);
    assert_eq!(
        report(&s),
        vec!["Manager Max Boss earns 8748.88 MORE than expected (should be at most 41251.13)"]
    );
}
