//! Property tests for the selection cascade derivations.

use std::collections::HashSet;

use automation_core::{
    derive_config, derive_levels, derive_result_tables, Dataset, ResultTables, Row, MANUAL_LEVEL,
    PAIR_COUNT,
};
use proptest::prelude::*;

// -- Strategy helpers --

fn arb_pair() -> impl Strategy<Value = Option<(String, String)>> {
    prop::option::of(("[A-C]", "[0-2]").prop_map(|(f, v)| (f.to_string(), v.to_string())))
}

fn arb_row() -> impl Strategy<Value = Row> {
    (
        "P[1-3]",
        prop_oneof![Just("AUTO"), Just("MANUAL"), Just("SEMI")],
        "CFG[1-4]",
        prop::collection::vec(arb_pair(), PAIR_COUNT),
        prop::option::of(prop_oneof![Just("AUTO"), Just("MANUAL")]),
        prop::option::of("F[1-3]"),
        prop::collection::vec(arb_pair(), PAIR_COUNT),
    )
        .prop_map(
            |(product, level, config, fields, feature_level, feature_id, features)| {
                let mut row = Row::new(product, level, config);
                for (i, pair) in fields.into_iter().enumerate() {
                    if let Some((f, v)) = pair {
                        row = row.with_field(i + 1, &f, &v);
                    }
                }
                row.feature_level = feature_level.map(str::to_string);
                row.feature_id = feature_id;
                for (i, pair) in features.into_iter().enumerate() {
                    if let Some((f, v)) = pair {
                        row = row.with_feature_field(i + 1, &f, &v);
                    }
                }
                row
            },
        )
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_row(), 0..24).prop_map(Dataset::from_rows)
}

proptest! {
    #[test]
    fn unknown_product_has_no_levels(ds in arb_dataset()) {
        let levels = derive_levels(&ds, Some("P9"));
        prop_assert!(levels.options.is_empty());
        prop_assert_eq!(levels.default, None);
    }

    #[test]
    fn config_identifiers_are_distinct(ds in arb_dataset(), product in "P[1-3]", level in "AUTO|MANUAL|SEMI") {
        let configs = derive_config(&ds, Some(product.as_str()), Some(level.as_str()));
        let ids: HashSet<_> = configs.options.iter().map(|o| o.value.as_str()).collect();
        prop_assert_eq!(ids.len(), configs.options.len());
        for (i, option) in configs.options.iter().enumerate() {
            prop_assert_eq!(&option.label, &format!("Configuration {}", i + 1));
        }
    }

    #[test]
    fn result_tables_are_idempotent(ds in arb_dataset(), product in "P[1-3]", level in "AUTO|MANUAL", config in "CFG[1-4]") {
        let first = derive_result_tables(&ds, Some(product.as_str()), Some(level.as_str()), Some(config.as_str()));
        let second = derive_result_tables(&ds, Some(product.as_str()), Some(level.as_str()), Some(config.as_str()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn feature_pairs_appear_once_in_first_seen_order(ds in arb_dataset(), product in "P[1-3]") {
        let Some(config) = ds.configs_for(&product, MANUAL_LEVEL).first().map(|c| c.to_string()) else {
            return Ok(());
        };
        let tables = derive_result_tables(&ds, Some(product.as_str()), Some(MANUAL_LEVEL), Some(config.as_str()));

        let mut expected = Vec::new();
        for row in ds.rows().iter().filter(|r| r.product == product && r.is_manual_feature()) {
            for pair in row.feature_conditions() {
                if !expected.contains(&pair) {
                    expected.push(pair);
                }
            }
        }
        prop_assert!(tables.feature_panel_visible);
        prop_assert_eq!(tables.feature_rows, expected);
    }

    #[test]
    fn non_manual_level_never_shows_features(ds in arb_dataset(), product in "P[1-3]", config in "CFG[1-4]") {
        for level in ["AUTO", "SEMI"] {
            let tables = derive_result_tables(&ds, Some(product.as_str()), Some(level), Some(config.as_str()));
            prop_assert!(tables.feature_rows.is_empty());
            prop_assert!(!tables.feature_panel_visible);
        }
    }

    #[test]
    fn missing_product_or_config_is_hidden(ds in arb_dataset(), config in "CFG[1-4]") {
        prop_assert_eq!(derive_result_tables(&ds, None, Some("AUTO"), Some(config.as_str())), ResultTables::hidden());
        prop_assert_eq!(derive_result_tables(&ds, Some("P1"), Some("AUTO"), None), ResultTables::hidden());
    }
}
