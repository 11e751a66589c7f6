//! Error and warning taxonomy shared by the resolver and the orchestrator,
//! plus the [`DomainReputationChecker`] capability the orchestrator depends on.

use std::collections::BTreeMap;
use std::fmt;

use crate::banned::{BannedEntry, BannedPatterns};
use crate::dns::MxRecord;

/// Primary errors. At most one per outcome; the first decisive failure wins.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// No `@`, or the host syntax validator rejected the address.
    InvalidSyntax,
    /// The domain is a known misspelling of a popular provider.
    Typo,
    /// Single-label domain or reserved top-level name.
    LocalOrReservedDomain,
    /// The domain cannot be converted to ASCII (IDNA/UTS #46).
    ConversionError,
    /// No MX, A or AAAA records (resolver failures included by default).
    NoDnsRecord,
    /// The resolver failed and the failure policy asked to say so.
    ResolverUnavailable,
    /// RFC 7505 null MX.
    DomainAcceptsNoMail,
    /// `local@mx-target` matched a banned pattern.
    BannedEmail,
}

impl ErrorKind {
    /// Key used by the compact rendering mode.
    pub fn compact_key(self) -> &'static str {
        match self {
            Self::InvalidSyntax => "invalid",
            Self::Typo => "typo",
            Self::BannedEmail => "banned",
            Self::LocalOrReservedDomain
            | Self::ConversionError
            | Self::NoDnsRecord
            | Self::ResolverUnavailable
            | Self::DomainAcceptsNoMail => "invaliddomain",
        }
    }

    /// Stable identifier used by the extended rendering mode.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidSyntax => "invalid",
            Self::Typo => "typo",
            Self::LocalOrReservedDomain => "local_or_reserved_domain",
            Self::ConversionError => "conversion_error",
            Self::NoDnsRecord => "no_dns_record",
            Self::ResolverUnavailable => "resolver_unavailable",
            Self::DomainAcceptsNoMail => "domain_accepts_no_mail",
            Self::BannedEmail => "banned_email",
        }
    }

    /// Whether retrying later may give a different answer.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::ResolverUnavailable)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Non-fatal signals. Declaration order is rendering priority.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningKind {
    BannedEmail,
    Typo,
    /// Only A/AAAA records: mail goes to the implicit MX (RFC 5321 §5.1).
    NoDnsMxRecord,
}

impl WarningKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::BannedEmail => "banned_email",
            Self::Typo => "typo",
            Self::NoDnsMxRecord => "no_dns_mx_record",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Data attached to a warning or a rendered signal.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(tag = "type", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Flag,
    Suggestion { domain: String },
    Banned { entry: BannedEntry },
    Reasons { reasons: Vec<String> },
}

pub type Warnings = BTreeMap<WarningKind, Payload>;

/// What a [`DomainReputationChecker`] concluded about one domain.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainVerdict {
    pub error: Option<ErrorKind>,
    pub warnings: Warnings,
    pub accepted_mx: Vec<MxRecord>,
}

impl DomainVerdict {
    pub fn rejected(error: ErrorKind) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Capability the orchestrator injects to judge a syntactically valid,
/// routable domain. [`DnsReputation`](crate::DnsReputation) is the live
/// implementation.
pub trait DomainReputationChecker {
    fn check_domain(
        &self,
        local_part: &str,
        domain: &str,
        banned: &BannedPatterns,
    ) -> DomainVerdict;
}

impl<T: DomainReputationChecker + ?Sized> DomainReputationChecker for &T {
    fn check_domain(
        &self,
        local_part: &str,
        domain: &str,
        banned: &BannedPatterns,
    ) -> DomainVerdict {
        (**self).check_domain(local_part, domain, banned)
    }
}

impl<T: DomainReputationChecker + ?Sized> DomainReputationChecker for Box<T> {
    fn check_domain(
        &self,
        local_part: &str,
        domain: &str,
        banned: &BannedPatterns,
    ) -> DomainVerdict {
        (**self).check_domain(local_part, domain, banned)
    }
}
