use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use shared_types::{RuleSet, Severity};
use tracing::{debug, warn};

use crate::error::RuleStoreError;
use crate::schema::{CanonicalFile, CanonicalRule, RawRule, SectionKind, SECTION_ORDER};

/// Load rules, treating any failure as an empty rule set
pub fn load_rules(path: &Path) -> RuleSet {
    match try_load_rules(path) {
        Ok(rules) => rules,
        Err(e) => {
            warn!("Using empty rule set: {}", e);
            RuleSet::empty()
        }
    }
}

/// Load rules, surfacing I/O and parse failures
pub fn try_load_rules(path: &Path) -> Result<RuleSet, RuleStoreError> {
    let raw = fs::read_to_string(path).map_err(|source| RuleStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = parse_rules(&raw)?;
    debug!("Loaded {} rules from {}", rules.len(), path.display());
    Ok(rules)
}

/// Parse a rule file held in memory
pub fn parse_rules(raw: &str) -> Result<RuleSet, RuleStoreError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(sections) = value else {
        return Err(RuleStoreError::NotAnObject);
    };

    let mut rules = RuleSet::empty();

    // Known sections first in fixed order, then anything else in file order
    let known = SECTION_ORDER
        .iter()
        .filter_map(|&name| sections.get(name).map(|v| (name, v)));
    let unknown = sections
        .iter()
        .filter(|(name, _)| !SECTION_ORDER.contains(&name.as_str()))
        .map(|(name, v)| (name.as_str(), v));

    for (name, entries) in known.chain(unknown) {
        let kind = SectionKind::classify(name);
        let Some(entries) = entries.as_array() else {
            warn!("Skipping rule section {:?}: expected an array", name);
            continue;
        };
        for (idx, entry) in entries.iter().enumerate() {
            let raw_rule: RawRule = match serde_json::from_value(entry.clone()) {
                Ok(r) => r,
                Err(e) => {
                    warn!("Skipping malformed rule {}[{}]: {}", name, idx, e);
                    continue;
                }
            };
            match raw_rule.normalize(kind) {
                Some(rule) => rules.push(rule),
                None => warn!("Skipping rule {}[{}]: missing \"match\"", name, idx),
            }
        }
    }

    Ok(rules)
}

/// Render rules in the canonical key scheme
pub fn to_canonical_json(rules: &RuleSet) -> Result<String, RuleStoreError> {
    let mut file = CanonicalFile::default();
    for rule in rules {
        let entry = CanonicalRule::from(rule);
        match rule.severity {
            Severity::Error => file.style_guide_rule.push(entry),
            Severity::Warning => file.style_guide_caution.push(entry),
            Severity::Advice => file.style_guide_advice.push(entry),
        }
    }
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Write rules in the canonical key scheme, creating parent directories
pub fn save_rules(path: &Path, rules: &RuleSet) -> Result<(), RuleStoreError> {
    let io_err = |source| RuleStoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = to_canonical_json(rules)?;
    fs::write(path, json).map_err(io_err)?;
    debug!("Saved {} rules to {}", rules.len(), path.display());
    Ok(())
}

/// Section names present in a rule file, in file order
pub fn section_names(raw: &str) -> Result<Vec<String>, RuleStoreError> {
    let sections: Map<String, Value> = match serde_json::from_str(raw)? {
        Value::Object(map) => map,
        _ => return Err(RuleStoreError::NotAnObject),
    };
    Ok(sections.keys().cloned().collect())
}
