//! Provider-domain misspelling detection.
//!
//! [`MisspellingTable::build`] expands the static seeds once at startup; the
//! resulting table is handed to a [`TypoMatcher`] (or to
//! [`DomainValidator`](crate::DomainValidator)) by reference.

mod seeds;
mod table;

pub use seeds::{PROVIDER_SEEDS, ProviderSeed, ProviderSeeds, TLD_SEEDS, TldSeeds};
pub use table::{MisspellingSeeds, MisspellingTable};

/// Looks up a candidate domain in the misspelling table.
///
/// A domain typed with a trailing dot is trusted verbatim: it is only
/// compared with itself minus the dot, which is never a typo.
pub fn find_typo(table: &MisspellingTable, domain: &str) -> Option<String> {
    let domain = domain.to_lowercase();
    if domain.ends_with('.') {
        return None;
    }
    table.get(&domain).map(str::to_string)
}

/// Borrowing wrapper so callers can hold the table next to the lookup.
#[derive(Debug, Clone, Copy)]
pub struct TypoMatcher<'a> {
    table: &'a MisspellingTable,
}

impl<'a> TypoMatcher<'a> {
    pub fn new(table: &'a MisspellingTable) -> Self {
        Self { table }
    }

    pub fn find_typo(&self, domain: &str) -> Option<String> {
        find_typo(self.table, domain)
    }
}

#[cfg(test)]
mod tests;
