//! Property-based tests for start/stop cycles.
//!
//! Generates crafting documents with a mix of valid and unresolvable entries
//! and checks that every stop exactly undoes the preceding start.

use craftbook_core::test_utils::*;
use craftbook_core::validation::Strictness;
use craftbook_data::MemoryConfigStore;
use craftbook_plugin::{ManagerSettings, RecipeManager};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Render a crafting document; `true` entries are valid, `false` entries
/// reference an unknown result item.
fn crafting_yaml(entries: &BTreeMap<String, bool>) -> String {
    entries
        .iter()
        .map(|(key, valid)| {
            let result = if *valid { "ns:STICK" } else { "ns:NOT_AN_ITEM" };
            format!(
                "{key}: {{type: shapeless, result: '{result}', amount: 1, ingredients: {{a: ['ns:OAK_PLANKS']}}}}\n"
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn n_valid_entries_give_n_adds_and_n_removes(
        entries in proptest::collection::btree_map("r_[a-z0-9_]{0,10}", any::<bool>(), 0..20),
        cycles in 1..4usize,
    ) {
        let valid = entries.values().filter(|v| **v).count();
        let store = MemoryConfigStore::new().with_yaml("crafting", &crafting_yaml(&entries));
        let settings = ManagerSettings {
            namespace: TEST_NAMESPACE.to_string(),
            strictness: Strictness::Strict,
            ..ManagerSettings::default()
        };
        let mut mgr = RecipeManager::new(standard_catalog(), RecordingRegistry::new(), store, settings);

        for cycle in 1..=cycles {
            let report = mgr.on_start().unwrap();
            prop_assert_eq!(report.registered_count(), valid);
            prop_assert_eq!(report.skipped_count(), entries.len() - valid);

            mgr.on_stop();
            prop_assert!(mgr.ledger().is_empty());
            prop_assert_eq!(mgr.registry().adds.len(), valid * cycle);
            prop_assert_eq!(mgr.registry().removes.len(), valid * cycle);
        }

        let host = mgr.registry();
        prop_assert!(host.removes.iter().all(|id| host.adds.contains(id)));
        prop_assert!(host.recipes.is_empty());
    }
}
