// tests/property_hierarchy.rs
//! Properties that must hold for every well-formed record set.

use std::collections::HashMap;

use orgaudit_core::analysis::{analyze_manager_salaries, analyze_reporting_line_depth, SalaryBand};
use orgaudit_core::{build, Employee, OrgAuditError, RecordStore, RootPolicy};
use proptest::prelude::*;

/// A random tree: `parents[i]` is the manager of employee `i + 1`, always an
/// earlier index. Employee 0 is the root. Records arrive shuffled.
fn arb_org() -> impl Strategy<Value = Vec<Employee>> {
    (1usize..40)
        .prop_flat_map(|n| {
            let parents: Vec<_> = (1..n).map(|i| 0..i).collect();
            let salaries = prop::collection::vec(1u64..500_000, n);
            (parents, salaries)
        })
        .prop_map(|(parents, salaries)| {
            salaries
                .iter()
                .enumerate()
                .map(|(i, &salary)| {
                    let manager = i.checked_sub(1).map(|p| format!("E{}", parents[p]));
                    Employee::new(format!("E{i}"), format!("F{i}"), "L", salary, manager.as_deref())
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn build_links_every_non_root_once(records in arb_org()) {
        let store: RecordStore = records.into_iter().collect();
        let h = build(&store, RootPolicy::Strict).unwrap();
        let root = h.root().unwrap();
        prop_assert_eq!(root.employee().id(), "E0");

        let mut parents: HashMap<&str, usize> = HashMap::new();
        for employee in store.iter() {
            for child in h.node(employee.id()).unwrap().subordinates() {
                *parents.entry(child.employee().id()).or_default() += 1;
            }
        }
        prop_assert_eq!(parents.len(), store.len() - 1);
        prop_assert!(parents.values().all(|&count| count == 1));
        prop_assert!(!parents.contains_key("E0"));
        prop_assert_eq!(root.pre_order().count(), store.len());
    }

    #[test]
    fn subordinates_point_back_to_manager(records in arb_org()) {
        let store: RecordStore = records.into_iter().collect();
        let h = build(&store, RootPolicy::Strict).unwrap();
        for employee in store.iter() {
            for child in h.node(employee.id()).unwrap().subordinates() {
                prop_assert_eq!(child.employee().manager_id(), Some(employee.id()));
            }
        }
    }

    #[test]
    fn dangling_reference_always_fails(records in arb_org(), pick in any::<prop::sample::Index>()) {
        let mut store: RecordStore = records.into_iter().collect();
        let victim = pick.get(&store.iter().cloned().collect::<Vec<_>>()).clone();
        store.add(Employee::new(
            victim.id(),
            victim.first_name(),
            victim.last_name(),
            victim.salary(),
            Some("GHOST"),
        ));
        let result = build(&store, RootPolicy::Strict);
        let is_dangling = matches!(
            result,
            Err(OrgAuditError::DanglingManagerReference { ref manager_id, .. }) if manager_id == "GHOST"
        );
        prop_assert!(is_dangling);
    }

    #[test]
    fn analyses_are_idempotent(records in arb_org(), start in 0usize..3) {
        let store: RecordStore = records.into_iter().collect();
        let h = build(&store, RootPolicy::Strict).unwrap();
        let root = h.root().unwrap();
        let band = SalaryBand::default();

        prop_assert_eq!(
            analyze_manager_salaries(root, &band),
            analyze_manager_salaries(root, &band)
        );
        prop_assert_eq!(
            analyze_reporting_line_depth(root, start),
            analyze_reporting_line_depth(root, start)
        );
    }

    #[test]
    fn leaves_never_reported(records in arb_org()) {
        let store: RecordStore = records.into_iter().collect();
        let h = build(&store, RootPolicy::Strict).unwrap();
        let report = analyze_manager_salaries(h.root().unwrap(), &SalaryBand::default());
        for (node, _) in h.root().unwrap().pre_order() {
            if node.is_leaf() {
                let subject = format!("Manager {} earns", node.employee().full_name());
                prop_assert!(report.iter().all(|line| !line.starts_with(&subject)));
            }
        }
    }
}
