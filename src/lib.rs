#![forbid(unsafe_code)]
//! domaincheck_lib: email domain reputation checks
//!
//! Decides whether the domain of an address can plausibly receive mail:
//! reserved and single-label names, provider misspellings, MX / null MX /
//! A-only answers, and banned MX targets. [`DomainValidator`] runs the
//! pipeline; each stage is also usable on its own.

mod log;

pub mod banned;
pub mod check;
pub mod classify;
pub mod dns;
pub mod syntax;
pub mod typo;
pub mod verdict;

pub use banned::{BannedEntry, BannedLookup, BannedPatternError, BannedPatterns, WildcardBanLookup};
pub use check::{
    DiagnosticReport, DomainValidator, ErrorMode, NoSignupChecks, RenderedError, Signal,
    SignupChecker, Stage, ValidationOptions, ValidationOutcome,
};
pub use classify::{DomainClass, RESERVED_TOP_LEVEL_NAMES, classify_domain};
pub use dns::{
    DnsError, DnsLookup, DnsOptions, DnsRecord, DnsReputation, MxRecord, Nameservers, RecordKind,
    ResolverFailurePolicy, SystemDnsLookup,
};
pub use syntax::{
    AcceptAllSyntax, RfcSyntaxValidator, SyntaxRejection, SyntaxValidator, ValidationMode,
};
pub use typo::{MisspellingSeeds, MisspellingTable, TypoMatcher, find_typo};
pub use verdict::{
    DomainReputationChecker, DomainVerdict, ErrorKind, Payload, WarningKind, Warnings,
};
