//! Property tests for the tokenizer and catalog indexing.

use std::collections::BTreeSet;

use proptest::prelude::*;
use scout_core::models::{Catalog, ModelRecord};
use scout_core::text::{tokenize, MIN_TOKEN_LEN};

proptest! {
    #[test]
    fn prop_tokens_are_lowercase_terms(text in "[ -~]{0,200}") {
        for tok in tokenize(&text) {
            prop_assert!(tok.chars().count() >= MIN_TOKEN_LEN);
            prop_assert!(tok.chars().all(|c| c.is_alphanumeric() || c == '_'));
            prop_assert_eq!(tok.to_lowercase(), tok.clone());
        }
    }

    #[test]
    fn prop_tokenize_is_case_insensitive(text in "[a-zA-Z ,.]{0,100}") {
        prop_assert_eq!(tokenize(&text), tokenize(&text.to_uppercase()));
    }

    #[test]
    fn prop_catalog_keeps_order_and_positions(names in prop::collection::btree_set("[a-z]{1,8}(/[a-z]{1,8})?", 0..50)) {
        let names: Vec<String> = names.into_iter().rev().collect();
        let records = names
            .iter()
            .map(|n| ModelRecord::new(n.clone(), "d", 1, 0))
            .collect();
        let catalog = Catalog::new(records).unwrap();

        prop_assert_eq!(catalog.len(), names.len());
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(catalog.position(name), Some(i));
            prop_assert_eq!(&catalog.at(i).unwrap().name, name);
        }
    }

    #[test]
    fn prop_duplicate_names_rejected(names in prop::collection::vec("[a-c]{1,2}", 2..20)) {
        let unique: BTreeSet<&String> = names.iter().collect();
        let records = names
            .iter()
            .map(|n| ModelRecord::new(n.clone(), "d", 1, 0))
            .collect();
        prop_assert_eq!(Catalog::new(records).is_ok(), unique.len() == names.len());
    }
}
