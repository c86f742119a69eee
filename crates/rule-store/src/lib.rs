//! Rule file loading and normalization
//!
//! Turns persisted style guide files (either key-naming scheme) into a
//! single ordered [`RuleSet`](shared_types::RuleSet). Loading fails soft:
//! a missing or broken file yields an empty rule set.

pub mod error;
pub mod schema;
pub mod store;

pub use error::RuleStoreError;
pub use store::{
    load_rules, parse_rules, save_rules, section_names, to_canonical_json, try_load_rules,
};
