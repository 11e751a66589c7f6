use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};
use trust_dns_resolver::config::ResolverConfig;

/// Which upstream servers the resolver talks to.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nameservers {
    /// `/etc/resolv.conf` (or the platform equivalent).
    #[default]
    System,
    Google,
    Cloudflare,
    Quad9,
}

impl Nameservers {
    pub(crate) fn public_config(self) -> Option<ResolverConfig> {
        match self {
            Self::System => None,
            Self::Google => Some(ResolverConfig::google()),
            Self::Cloudflare => Some(ResolverConfig::cloudflare()),
            Self::Quad9 => Some(ResolverConfig::quad9()),
        }
    }
}

/// What a failed lookup (timeout, SERVFAIL, unreachable server) turns into.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverFailurePolicy {
    /// Same as an empty answer: `NoDnsRecord`.
    #[default]
    TreatAsMissing,
    /// Retryable `ResolverUnavailable`.
    Distinct,
}

const QUERIES_PER_CHECK: usize = 3;

/// Resolver knobs for [`SystemDnsLookup`](super::SystemDnsLookup).
///
/// One check runs the MX, A and AAAA queries one after the other, each
/// tried up to `attempts` times with `timeout_ms` per try, so a check can
/// block for up to [`worst_case`](Self::worst_case) (3 × 2 × 3 s by default).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsOptions {
    /// Timeout of a single try.
    pub timeout_ms: u64,
    /// Total tries per query, first one included.
    pub attempts: usize,
    pub nameservers: Nameservers,
    pub failure_policy: ResolverFailurePolicy,
}

impl Default for DnsOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 3_000,
            attempts: 2,
            nameservers: Nameservers::System,
            failure_policy: ResolverFailurePolicy::TreatAsMissing,
        }
    }
}

impl DnsOptions {
    /// Per-attempt timeout. Zero falls back to the default rather than
    /// waiting forever.
    pub fn timeout(&self) -> Duration {
        if self.timeout_ms == 0 {
            Duration::from_millis(Self::default().timeout_ms)
        } else {
            Duration::from_millis(self.timeout_ms)
        }
    }

    /// Retries after the first try, the unit trust-dns counts in.
    pub(crate) fn retries(&self) -> usize {
        self.attempts.max(1) - 1
    }

    /// Upper bound on one MX + A + AAAA check.
    pub fn worst_case(&self) -> Duration {
        let tries = u32::try_from(QUERIES_PER_CHECK * self.attempts.max(1)).unwrap_or(u32::MAX);
        self.timeout().saturating_mul(tries)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn with_nameservers(mut self, nameservers: Nameservers) -> Self {
        self.nameservers = nameservers;
        self
    }

    pub fn with_failure_policy(mut self, policy: ResolverFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
