//! Property tests for managed/unmanaged classification.

use chrono::Utc;
use proptest::prelude::*;

use cast::domain::entities::{FileRecord, Snapshot, SnapshotEntry};
use cast::domain::services::classify_conflicts;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,3}(\\.[a-z]{1,3})?").unwrap()
}

/// Snapshot whose entries deliver the given path groups
fn snapshot(groups: &[Vec<String>]) -> Snapshot {
    let entries = groups
        .iter()
        .enumerate()
        .map(|(i, paths)| {
            let files = paths
                .iter()
                .map(|p| FileRecord::new(p.clone(), "", Utc::now()))
                .collect();
            SnapshotEntry::new(format!("b{i}.tgz"), "", files)
        })
        .collect();
    Snapshot::from_entries(entries)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every conflict lands in exactly one list, order preserved.
    #[test]
    fn property_classification_is_an_ordered_partition(
        conflicts in proptest::collection::vec(name(), 0..12),
        groups in proptest::collection::vec(proptest::collection::vec(name(), 0..6), 0..4),
    ) {
        let snap = snapshot(&groups);
        let result = classify_conflicts(&conflicts, Some(&snap));

        prop_assert_eq!(result.len(), conflicts.len());

        let mut managed = result.managed.iter();
        let mut unmanaged = result.unmanaged.iter();
        for name in &conflicts {
            let recorded = groups.iter().flatten().any(|p| p == name);
            let next = if recorded { managed.next() } else { unmanaged.next() };
            prop_assert_eq!(next, Some(name));
        }
        prop_assert!(managed.next().is_none());
        prop_assert!(unmanaged.next().is_none());
    }

    /// PROPERTY: without history nothing is managed.
    #[test]
    fn property_absent_snapshot_means_all_unmanaged(
        conflicts in proptest::collection::vec(name(), 0..12),
    ) {
        let result = classify_conflicts(&conflicts, None);
        prop_assert!(result.managed.is_empty());
        prop_assert_eq!(result.unmanaged, conflicts);
    }

    /// PROPERTY: classifying either half again gives the same half back.
    #[test]
    fn property_classification_is_idempotent(
        conflicts in proptest::collection::vec(name(), 0..12),
        groups in proptest::collection::vec(proptest::collection::vec(name(), 0..6), 0..4),
    ) {
        let snap = snapshot(&groups);
        let first = classify_conflicts(&conflicts, Some(&snap));

        let again_managed = classify_conflicts(&first.managed, Some(&snap));
        prop_assert_eq!(&again_managed.managed, &first.managed);
        prop_assert!(again_managed.unmanaged.is_empty());

        let again_unmanaged = classify_conflicts(&first.unmanaged, Some(&snap));
        prop_assert!(again_unmanaged.managed.is_empty());
        prop_assert_eq!(&again_unmanaged.unmanaged, &first.unmanaged);

        prop_assert_eq!(classify_conflicts(&conflicts, Some(&snap)), first);
    }
}
