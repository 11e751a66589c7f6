//! DNS resolution and interpretation for mail domains.
//!
//! [`DnsReputation::resolve`] is the entry point: it turns a domain into a
//! [`DomainVerdict`](crate::DomainVerdict) from a single MX + A + AAAA lookup.
//! The lookup itself sits behind [`DnsLookup`] so tests and hosts can swap it.

mod error;
mod options;
mod reputation;
mod resolver;
mod types;

pub use error::DnsError;
pub use options::{DnsOptions, Nameservers, ResolverFailurePolicy};
pub use reputation::DnsReputation;
pub use resolver::{DnsLookup, SystemDnsLookup};
pub use types::{DnsRecord, MxRecord, RecordKind};
