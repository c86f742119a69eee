//! Reference-language word frequencies.
//!
//! A frequency lookup is a cheap stand-in for a full dictionary: anything
//! rarer than the configured threshold is treated as unrecognized. The
//! default table is the bundled wordfreq English model; house word lists
//! are layered over it with [`LayeredFrequency`].
//!
//! Word list format, one entry per line:
//!
//! ```text
//! # comment
//! the 0.0537
//! fiber
//! ```
//!
//! Entries without an explicit frequency get a Zipf estimate from their
//! position in the list (`0.1 / rank`), so a plain ranked word list works.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lazy_static::lazy_static;
use thiserror::Error;
use wordfreq::WordFreq;
use wordfreq_model::{load_wordfreq, ModelKind};

lazy_static! {
    static ref ENGLISH: Arc<EnglishModel> =
        Arc::new(EnglishModel::load().expect("bundled English model deserializes"));
}

/// Shared bundled English frequency table, loaded on first use
pub fn english() -> Arc<dyn WordFrequency> {
    let model: Arc<EnglishModel> = Arc::clone(&ENGLISH);
    model
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid frequency on line {line}: {value:?}")]
    InvalidFrequency { line: usize, value: String },

    #[error("Failed to load frequency model: {0}")]
    Model(String),
}

/// Frequency of a lowercase word in the reference language, 0.0 if unknown
pub trait WordFrequency: Send + Sync {
    fn frequency(&self, word: &str) -> f64;
}

/// wordfreq's large English list (frequencies down to 1e-8)
pub struct EnglishModel {
    model: WordFreq,
}

impl EnglishModel {
    pub fn load() -> Result<Self, LexiconError> {
        let model =
            load_wordfreq(ModelKind::LargeEn).map_err(|e| LexiconError::Model(e.to_string()))?;
        Ok(Self { model })
    }
}

impl WordFrequency for EnglishModel {
    fn frequency(&self, word: &str) -> f64 {
        f64::from(self.model.word_frequency(word))
    }
}

/// A word list over a base table; a word's frequency is the higher of the two
pub struct LayeredFrequency {
    base: Arc<dyn WordFrequency>,
    extra: Lexicon,
}

impl LayeredFrequency {
    pub fn new(base: Arc<dyn WordFrequency>, extra: Lexicon) -> Self {
        Self { base, extra }
    }
}

impl WordFrequency for LayeredFrequency {
    fn frequency(&self, word: &str) -> f64 {
        self.extra.frequency(word).max(self.base.frequency(word))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    frequencies: HashMap<String, f64>,
}

impl Lexicon {
    pub fn parse(raw: &str) -> Result<Self, LexiconError> {
        let mut frequencies = HashMap::new();
        let mut rank = 0usize;
        for (line_no, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            rank += 1;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let frequency = match fields.next() {
                Some(value) => value
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .ok_or_else(|| LexiconError::InvalidFrequency {
                        line: line_no + 1,
                        value: value.to_string(),
                    })?,
                None => zipf_estimate(rank),
            };
            // Earlier (more frequent) entries win over later duplicates
            frequencies.entry(word.to_lowercase()).or_insert(frequency);
        }
        Ok(Self { frequencies })
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let raw = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn from_pairs<I, W>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, f64)>,
        W: AsRef<str>,
    {
        Self {
            frequencies: pairs
                .into_iter()
                .map(|(w, f)| (w.as_ref().to_lowercase(), f))
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl WordFrequency for Lexicon {
    fn frequency(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }
}

fn zipf_estimate(rank: usize) -> f64 {
    0.1 / rank as f64
}
