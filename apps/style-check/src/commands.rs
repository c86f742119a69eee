//! Subcommand implementations. Each returns the text destined for stdout.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use shared_types::RuleSet;
use style_engine::lexicon::{self, LayeredFrequency, Lexicon};
use style_engine::{render_report, EngineConfig, StyleEngine};
use tracing::info;

use crate::cli::{CheckArgs, OutputFormat, RulesArgs};
use crate::io::{read_document, write_document};

/// Build an engine from the rule file, config and optional extra word list
pub fn build_engine(args: &CheckArgs) -> Result<StyleEngine> {
    let rules = rule_store::load_rules(&args.rules);
    info!("Loaded {} rules from {}", rules.len(), args.rules.display());

    let mut engine = StyleEngine::new(rules);

    if let Some(path) = &args.config {
        let config = EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        engine = engine.with_config(config);
    }

    if let Some(path) = &args.frequencies {
        let extra = Lexicon::from_path(path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?;
        info!("Layering {} extra words over the English model", extra.len());
        engine = engine.with_lexicon(Arc::new(LayeredFrequency::new(lexicon::english(), extra)));
    }

    Ok(engine)
}

pub fn run_check(args: &CheckArgs) -> Result<String> {
    let engine = build_engine(args)?;
    let document = read_document(&args.document)?;

    let (annotated, report) = engine.annotate(document);

    if let Some(path) = &args.output {
        write_document(path, &annotated)?;
        info!("Annotated document written to {}", path.display());
    }

    match args.format {
        OutputFormat::Text => Ok(render_report(&report)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn run_rules(args: &RulesArgs) -> Result<String> {
    let raw = fs::read_to_string(&args.rules)
        .with_context(|| format!("Failed to read rules {}", args.rules.display()))?;
    let sections = rule_store::section_names(&raw)
        .with_context(|| format!("Invalid rule file {}", args.rules.display()))?;
    let rules = rule_store::parse_rules(&raw)
        .with_context(|| format!("Invalid rule file {}", args.rules.display()))?;
    info!("Sections: {}", sections.join(", "));

    if args.migrate {
        rule_store::save_rules(&args.rules, &rules)
            .with_context(|| format!("Failed to migrate {}", args.rules.display()))?;
        info!("Rewrote {} in canonical form", args.rules.display());
    }

    Ok(list_rules(&rules))
}

fn list_rules(rules: &RuleSet) -> String {
    let mut out = String::new();
    for rule in rules {
        let replacement = rule
            .replacement
            .as_deref()
            .map(|r| format!(" -> {}", r))
            .unwrap_or_default();
        out.push_str(&format!(
            "[{}] {}{}: {}\n",
            rule.severity, rule.pattern, replacement, rule.message
        ));
    }
    out.push_str(&format!("{} rule(s)\n", rules.len()));
    out
}
