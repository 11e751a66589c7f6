use crate::banned::{BannedLookup, BannedPatterns, WildcardBanLookup};
use crate::log;
use crate::verdict::{DomainReputationChecker, DomainVerdict, ErrorKind, Payload, WarningKind};

use super::resolver::to_fqdn;
use super::{DnsError, DnsLookup, DnsOptions, DnsRecord, ResolverFailurePolicy, SystemDnsLookup};

/// DNS-backed [`DomainReputationChecker`].
///
/// For one domain: IDNA conversion, one MX + A + AAAA lookup, null-MX
/// detection, then a banned-pattern check of `local@target` for every usable
/// MX target.
#[derive(Debug)]
pub struct DnsReputation<L, B = WildcardBanLookup> {
    lookup: L,
    banned: B,
    failure_policy: ResolverFailurePolicy,
}

impl DnsReputation<SystemDnsLookup> {
    /// Live resolver built from `options`, wildcard banned matching.
    pub fn system(options: &DnsOptions) -> Result<Self, DnsError> {
        let lookup = SystemDnsLookup::new(options)?;
        Ok(Self::new(lookup, WildcardBanLookup).with_failure_policy(options.failure_policy))
    }
}

impl<L, B> DnsReputation<L, B>
where
    L: DnsLookup,
    B: BannedLookup,
{
    pub fn new(lookup: L, banned: B) -> Self {
        Self {
            lookup,
            banned,
            failure_policy: ResolverFailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: ResolverFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[cfg_attr(not(feature = "with-tracing"), allow(unused_variables))]
    pub fn resolve(&self, local_part: &str, domain: &str, banned: &BannedPatterns) -> DomainVerdict {
        let fqdn = match to_fqdn(domain) {
            Ok(fqdn) => fqdn,
            Err(err) => {
                log::debug!(domain, error = %err, "domain cannot be converted to ASCII");
                return DomainVerdict::rejected(ErrorKind::ConversionError);
            }
        };

        let records = match self.lookup.lookup_mail_records(&fqdn) {
            Ok(records) => records,
            Err(err) => {
                log::warning!(fqdn = %fqdn, error = %err, "DNS lookup failed");
                match self.failure_policy {
                    ResolverFailurePolicy::TreatAsMissing => Vec::new(),
                    ResolverFailurePolicy::Distinct => {
                        return DomainVerdict::rejected(ErrorKind::ResolverUnavailable);
                    }
                }
            }
        };

        if records.is_empty() {
            log::debug!(fqdn = %fqdn, "no MX, A or AAAA records");
            return DomainVerdict::rejected(ErrorKind::NoDnsRecord);
        }

        let mut verdict = DomainVerdict::default();
        for record in records {
            let DnsRecord::Mx(mx) = record else {
                // A/AAAA keep the implicit MX path open
                continue;
            };

            if mx.is_null() {
                log::debug!(fqdn = %fqdn, "null MX, domain accepts no mail");
                verdict.error = Some(ErrorKind::DomainAcceptsNoMail);
                return verdict;
            }

            if !banned.is_empty() {
                let candidate = format!("{local_part}@{}", mx.exchange);
                if let Some(entry) = self.banned.find_banned(&candidate, banned) {
                    log::debug!(candidate = %candidate, pattern = %entry.pattern, "MX target banned");
                    verdict
                        .warnings
                        .insert(WarningKind::BannedEmail, Payload::Banned { entry });
                    verdict.error = Some(ErrorKind::BannedEmail);
                    return verdict;
                }
            }

            verdict.accepted_mx.push(mx);
        }

        if verdict.accepted_mx.is_empty() {
            verdict
                .warnings
                .insert(WarningKind::NoDnsMxRecord, Payload::Flag);
        }

        verdict
    }
}

impl<L, B> DomainReputationChecker for DnsReputation<L, B>
where
    L: DnsLookup,
    B: BannedLookup,
{
    fn check_domain(
        &self,
        local_part: &str,
        domain: &str,
        banned: &BannedPatterns,
    ) -> DomainVerdict {
        self.resolve(local_part, domain, banned)
    }
}
