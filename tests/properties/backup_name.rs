//! Property tests for backup name selection.

use std::collections::HashSet;

use proptest::prelude::*;

use cast::domain::services::next_backup_name;

fn suffix() -> impl Strategy<Value = String> {
    proptest::string::string_regex("\\.[a-z]{1,5}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the chosen name is free and starts with `name + suffix`.
    #[test]
    fn property_backup_name_is_free(
        base in "[a-z]{1,8}",
        suffix in suffix(),
        taken_seqs in proptest::collection::hash_set(1u32..20, 0..10),
    ) {
        let taken: HashSet<String> = taken_seqs
            .iter()
            .map(|seq| if *seq == 1 {
                format!("{base}{suffix}")
            } else {
                format!("{base}{suffix}.{seq}")
            })
            .collect();

        let chosen = next_backup_name(&base, &suffix, |c| taken.contains(c));

        prop_assert!(!taken.contains(&chosen));
        let prefix = format!("{base}{suffix}");
        prop_assert!(chosen.starts_with(&prefix));
    }

    /// PROPERTY: the smallest free sequence number is chosen.
    #[test]
    fn property_backup_name_takes_first_gap(
        base in "[a-z]{1,8}",
        suffix in suffix(),
        taken_seqs in proptest::collection::hash_set(1u32..20, 0..10),
    ) {
        let first_free = (1u32..).find(|seq| !taken_seqs.contains(seq)).unwrap();
        let expected = if first_free == 1 {
            format!("{base}{suffix}")
        } else {
            format!("{base}{suffix}.{first_free}")
        };

        let chosen = next_backup_name(&base, &suffix, |candidate| {
            taken_seqs.iter().any(|seq| {
                let name = if *seq == 1 {
                    format!("{base}{suffix}")
                } else {
                    format!("{base}{suffix}.{seq}")
                };
                name == candidate
            })
        });

        prop_assert_eq!(chosen, expected);
    }
}
