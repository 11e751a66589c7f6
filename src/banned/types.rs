use std::collections::BTreeMap;

use regex::Regex;

use super::BannedPatternError;

/// An operator-maintained ban rule. `*` in the pattern matches any run of
/// characters.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BannedEntry {
    pub pattern: String,
    pub reason: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

impl BannedEntry {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledEntry {
    pub entry: BannedEntry,
    pub matcher: Regex,
}

/// Ordered set of ban rules, compiled once when the set is built.
#[derive(Debug, Clone, Default)]
pub struct BannedPatterns {
    entries: Vec<CompiledEntry>,
}

impl BannedPatterns {
    pub fn new<I>(entries: I) -> Result<Self, BannedPatternError>
    where
        I: IntoIterator<Item = BannedEntry>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| {
                let matcher = wildcard_regex(&entry.pattern)?;
                Ok(CompiledEntry { entry, matcher })
            })
            .collect::<Result<Vec<_>, BannedPatternError>>()?;
        Ok(Self { entries })
    }

    /// Builds the set from bare patterns with no reason attached.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, BannedPatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(patterns.into_iter().map(BannedEntry::new))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &BannedEntry> {
        self.entries.iter().map(|compiled| &compiled.entry)
    }

    pub(crate) fn compiled(&self) -> &[CompiledEntry] {
        &self.entries
    }
}

fn wildcard_regex(pattern: &str) -> Result<Regex, BannedPatternError> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return Err(BannedPatternError::EmptyPattern);
    }
    let body = trimmed
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    let source = format!("(?i)^{body}$");
    Regex::new(&source).map_err(|err| BannedPatternError::compile(trimmed, err))
}
