//! Banned address/domain cross-checks.
//!
//! The data store behind the rules belongs to the host; the engine talks to
//! it through [`BannedLookup`]. [`WildcardBanLookup`] matches an in-memory
//! [`BannedPatterns`] set.

mod error;
mod types;

pub use error::BannedPatternError;
pub use types::{BannedEntry, BannedPatterns};

/// Point lookup of a synthesized `local@mx-target` candidate against a rule
/// set. The first matching entry wins; no ordering is promised across
/// several matches.
pub trait BannedLookup {
    fn find_banned(&self, candidate: &str, patterns: &BannedPatterns) -> Option<BannedEntry>;
}

impl<T: BannedLookup + ?Sized> BannedLookup for &T {
    fn find_banned(&self, candidate: &str, patterns: &BannedPatterns) -> Option<BannedEntry> {
        (**self).find_banned(candidate, patterns)
    }
}

/// Case-insensitive `*` wildcard matching over the compiled patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardBanLookup;

impl BannedLookup for WildcardBanLookup {
    fn find_banned(&self, candidate: &str, patterns: &BannedPatterns) -> Option<BannedEntry> {
        patterns
            .compiled()
            .iter()
            .find(|compiled| compiled.matcher.is_match(candidate))
            .map(|compiled| compiled.entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_entry_returned() {
        let patterns = BannedPatterns::new([
            BannedEntry::new("*@mx.spam.example").with_reason("spam relay"),
            BannedEntry::new("*@*.spam.example").with_reason("spam zone"),
        ])
        .unwrap();
        let hit = WildcardBanLookup
            .find_banned("bob@mx.spam.example", &patterns)
            .expect("banned");
        assert_eq!(hit.reason.as_deref(), Some("spam relay"));
    }

    #[test]
    fn no_match_returns_none() {
        let patterns = BannedPatterns::from_patterns(["*@spam.example"]).unwrap();
        assert_eq!(WildcardBanLookup.find_banned("bob@mail.example", &patterns), None);
        assert_eq!(
            WildcardBanLookup.find_banned("bob@mail.example", &BannedPatterns::empty()),
            None
        );
    }
}
