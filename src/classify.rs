//! Rejects domains that can never receive mail before any DNS round-trip.

use crate::log;

/// Reserved top-level names (RFC 2606), mDNS (RFC 6762) and private DNS
/// namespaces (RFC 6762 appendix G).
pub const RESERVED_TOP_LEVEL_NAMES: [&str; 11] = [
    "test",
    "example",
    "invalid",
    "localhost",
    "local",
    "intranet",
    "internal",
    "private",
    "corp",
    "home",
    "lan",
];

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainClass {
    /// At least two labels under a public top-level name.
    Routable,
    /// One label only (`localhost`, `mailserver`).
    SingleLabel,
    /// Last label is one of [`RESERVED_TOP_LEVEL_NAMES`].
    ReservedTopLevel,
}

impl DomainClass {
    pub fn is_routable(self) -> bool {
        matches!(self, Self::Routable)
    }
}

/// Classifies an already lower-cased domain. The reserved-name match is exact
/// and case-sensitive.
pub fn classify_domain(domain: &str) -> DomainClass {
    let labels: Vec<&str> = domain.split('.').collect();
    let class = if labels.len() <= 1 {
        DomainClass::SingleLabel
    } else if labels
        .last()
        .is_some_and(|tld| RESERVED_TOP_LEVEL_NAMES.contains(tld))
    {
        DomainClass::ReservedTopLevel
    } else {
        DomainClass::Routable
    };
    log::debug!(domain, ?class, "domain classified");
    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_label_is_local() {
        assert_eq!(classify_domain("localhost"), DomainClass::SingleLabel);
        assert_eq!(classify_domain("intranetbox"), DomainClass::SingleLabel);
    }

    #[test]
    fn reserved_last_label_rejected() {
        assert_eq!(classify_domain("foo.test"), DomainClass::ReservedTopLevel);
        assert_eq!(classify_domain("bar.internal"), DomainClass::ReservedTopLevel);
        assert_eq!(classify_domain("a.b.lan"), DomainClass::ReservedTopLevel);
    }

    #[test]
    fn reserved_name_elsewhere_is_fine() {
        assert_eq!(classify_domain("test.com"), DomainClass::Routable);
        assert_eq!(classify_domain("example.org"), DomainClass::Routable);
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(classify_domain("foo.TEST"), DomainClass::Routable);
    }

    proptest! {
        #[test]
        fn dotless_never_routable(domain in "[a-z0-9-]{0,20}") {
            prop_assert_eq!(classify_domain(&domain), DomainClass::SingleLabel);
        }

        #[test]
        fn reserved_suffix_never_routable(
            head in "[a-z0-9]{1,12}",
            idx in 0usize..RESERVED_TOP_LEVEL_NAMES.len(),
        ) {
            let domain = format!("{head}.{}", RESERVED_TOP_LEVEL_NAMES[idx]);
            prop_assert!(!classify_domain(&domain).is_routable());
        }
    }
}
