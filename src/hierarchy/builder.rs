// src/hierarchy/builder.rs
//! Links each stored employee to its manager.

use super::{Hierarchy, RootPolicy};
use crate::error::{OrgAuditError, Result};
use crate::store::RecordStore;

/// Builds the reporting tree for every employee in `store`.
///
/// Subordinate lists follow store order. The first manager id that does not
/// resolve aborts the build.
///
/// # Errors
/// - [`OrgAuditError::DanglingManagerReference`] for an unresolved manager id.
/// - [`OrgAuditError::MissingRoot`], [`OrgAuditError::MultipleRoots`] and
///   [`OrgAuditError::ManagerCycle`] under [`RootPolicy::Strict`].
pub fn build(store: &RecordStore, policy: RootPolicy) -> Result<Hierarchy<'_>> {
    let mut subordinates: Vec<Vec<usize>> = vec![Vec::new(); store.len()];
    let mut top_level = Vec::new();

    for (slot, employee) in store.iter().enumerate() {
        let Some(manager_id) = employee.manager_id() else {
            top_level.push(slot);
            continue;
        };
        let manager = store.slot_of(manager_id).ok_or_else(|| {
            OrgAuditError::DanglingManagerReference {
                manager_id: manager_id.to_string(),
                employee_id: employee.id().to_string(),
            }
        })?;
        tracing::debug!(employee = employee.id(), manager = manager_id, "linked");
        subordinates[manager].push(slot);
    }

    let root = select_root(store, &top_level, policy)?;
    let hierarchy = Hierarchy::new(store, subordinates, root);

    if policy == RootPolicy::Strict {
        ensure_reachable(&hierarchy)?;
    }

    tracing::info!(
        employees = store.len(),
        edges = hierarchy.edge_count(),
        root = hierarchy.root().map(|r| r.employee().id()),
        "hierarchy built"
    );
    Ok(hierarchy)
}

fn select_root(
    store: &RecordStore,
    top_level: &[usize],
    policy: RootPolicy,
) -> Result<Option<usize>> {
    match (policy, top_level) {
        (RootPolicy::Strict, []) => Err(OrgAuditError::MissingRoot),
        (RootPolicy::Strict, [only]) => Ok(Some(*only)),
        (RootPolicy::Strict, many) => Err(OrgAuditError::MultipleRoots {
            ids: ids_of(store, many.iter().copied()),
        }),
        (RootPolicy::LastSeen, []) => {
            tracing::warn!("no top-level employee; hierarchy has no root");
            Ok(None)
        }
        (RootPolicy::LastSeen, [.., last]) => {
            if top_level.len() > 1 {
                tracing::warn!(
                    candidates = top_level.len(),
                    root = store.at(*last).id(),
                    "several top-level employees; keeping the last one"
                );
            }
            Ok(Some(*last))
        }
    }
}

/// Under a single root, anything left unvisited sits on a manager cycle or
/// below one.
fn ensure_reachable(hierarchy: &Hierarchy<'_>) -> Result<()> {
    let store = hierarchy.store();
    let mut seen = vec![false; store.len()];
    if let Some(root) = hierarchy.root() {
        for (node, _) in root.pre_order() {
            seen[node.slot()] = true;
        }
    }

    let unreachable: Vec<usize> = (0..store.len()).filter(|&slot| !seen[slot]).collect();
    if unreachable.is_empty() {
        return Ok(());
    }
    Err(OrgAuditError::ManagerCycle {
        ids: ids_of(store, unreachable.into_iter()),
    })
}

fn ids_of(store: &RecordStore, slots: impl Iterator<Item = usize>) -> Vec<String> {
    slots.map(|slot| store.at(slot).id().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Employee;

    fn store(rows: &[(&str, Option<&str>)]) -> RecordStore {
        rows.iter()
            .map(|(id, manager)| Employee::new(*id, *id, "X", 100, *manager))
            .collect()
    }

    #[test]
    fn test_root_selection_cases() {
        let cases = vec![
            (vec![("a", None)], RootPolicy::Strict, Some("a"), "single root"),
            (
                vec![("a", None), ("b", None)],
                RootPolicy::LastSeen,
                Some("b"),
                "last seen wins",
            ),
            (
                vec![("a", Some("b")), ("b", Some("a"))],
                RootPolicy::LastSeen,
                None,
                "no root tolerated",
            ),
        ];

        for (rows, policy, expected, desc) in cases {
            let s = store(&rows);
            let h = build(&s, policy).unwrap();
            let root = h.root().map(|r| r.employee().id().to_string());
            assert_eq!(root.as_deref(), expected, "Failed: {desc}");
        }
    }

    #[test]
    fn test_self_managed_is_cycle() {
        let s = store(&[("a", None), ("b", Some("b"))]);
        let err = build(&s, RootPolicy::Strict).unwrap_err();
        assert!(matches!(err, OrgAuditError::ManagerCycle { ids } if ids == vec!["b"]));
    }
}
