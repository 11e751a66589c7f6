use std::collections::{BTreeSet, HashMap};

use super::seeds::{PROVIDER_SEEDS, ProviderSeeds, TLD_SEEDS, TldSeeds};

/// The two static seed tables a [`MisspellingTable`] is generated from.
#[derive(Clone, Copy)]
pub struct MisspellingSeeds {
    pub providers: &'static ProviderSeeds,
    pub tlds: &'static TldSeeds,
}

impl Default for MisspellingSeeds {
    fn default() -> Self {
        Self {
            providers: &PROVIDER_SEEDS,
            tlds: &TLD_SEEDS,
        }
    }
}

impl std::fmt::Debug for MisspellingSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MisspellingSeeds")
            .field("providers", &self.providers.len())
            .field("tlds", &self.tlds.len())
            .finish()
    }
}

/// Misspelled `domain.tld` -> canonical `domain.tld`.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MisspellingTable {
    entries: HashMap<String, String>,
}

impl MisspellingTable {
    /// Builds the full cross product for every canonical provider domain:
    /// misspelled name × canonical TLD, canonical name × misspelled TLD, and
    /// misspelled name × misspelled TLD.
    ///
    /// Providers are visited in name order and the first canonical to claim a
    /// key keeps it, so the result does not depend on seed iteration order.
    /// Canonical domains are never keys.
    pub fn build(seeds: MisspellingSeeds) -> Self {
        let mut providers: Vec<_> = seeds.providers.entries().collect();
        providers.sort_by_key(|(name, _)| **name);

        let mut canonicals = BTreeSet::new();
        let mut entries = HashMap::new();

        for (name, seed) in providers {
            for tld in seed.tlds {
                let canonical = format!("{name}.{tld}");
                let tld_typos: &[&str] = seeds.tlds.get(*tld).copied().unwrap_or(&[]);

                for typo in seed.misspellings {
                    entries
                        .entry(format!("{typo}.{tld}"))
                        .or_insert_with(|| canonical.clone());
                    for tld_typo in tld_typos {
                        entries
                            .entry(format!("{typo}.{tld_typo}"))
                            .or_insert_with(|| canonical.clone());
                    }
                }
                for tld_typo in tld_typos {
                    entries
                        .entry(format!("{name}.{tld_typo}"))
                        .or_insert_with(|| canonical.clone());
                }

                canonicals.insert(canonical);
            }
        }

        entries.retain(|key, _| !canonicals.contains(key));

        crate::log::debug!(entries = entries.len(), "misspelling table built");
        Self { entries }
    }

    /// Exact-match lookup of an already lower-cased domain.
    pub fn get(&self, domain: &str) -> Option<&str> {
        self.entries.get(domain).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
