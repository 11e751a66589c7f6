use trust_dns_resolver::{
    Resolver,
    config::ResolverOpts,
    error::{ResolveError, ResolveErrorKind},
    system_conf,
};

use super::{DnsError, DnsOptions, DnsRecord, MxRecord};

/// One batched MX + A + AAAA query against a fully-qualified name.
///
/// Records come back in answer order (MX first, then A, then AAAA). An absent
/// record type is an empty contribution, not an error.
pub trait DnsLookup {
    fn lookup_mail_records(&self, fqdn: &str) -> Result<Vec<DnsRecord>, DnsError>;
}

impl<T: DnsLookup + ?Sized> DnsLookup for &T {
    fn lookup_mail_records(&self, fqdn: &str) -> Result<Vec<DnsRecord>, DnsError> {
        (**self).lookup_mail_records(fqdn)
    }
}

/// [`DnsLookup`] backed by a synchronous trust-dns [`Resolver`] with bounded
/// timeouts.
pub struct SystemDnsLookup {
    resolver: Resolver,
}

impl SystemDnsLookup {
    pub fn new(options: &DnsOptions) -> Result<Self, DnsError> {
        let (config, mut opts) = match options.nameservers.public_config() {
            Some(config) => (config, ResolverOpts::default()),
            None => system_conf::read_system_conf().map_err(DnsError::resolver_init)?,
        };
        opts.timeout = options.timeout();
        opts.attempts = options.retries();

        let resolver = Resolver::new(config, opts).map_err(DnsError::resolver_init)?;
        Ok(Self { resolver })
    }
}

impl std::fmt::Debug for SystemDnsLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemDnsLookup").finish_non_exhaustive()
    }
}

impl DnsLookup for SystemDnsLookup {
    fn lookup_mail_records(&self, fqdn: &str) -> Result<Vec<DnsRecord>, DnsError> {
        let mut records = Vec::new();

        if let Some(lookup) = absent_as_none(self.resolver.mx_lookup(fqdn))
            .map_err(|err| DnsError::lookup(fqdn, "MX", err))?
        {
            for mx in lookup.iter() {
                let exchange = normalize_exchange(&mx.exchange().to_ascii());
                records.push(DnsRecord::Mx(MxRecord::new(mx.preference(), exchange)));
            }
        }

        if let Some(lookup) = absent_as_none(self.resolver.ipv4_lookup(fqdn))
            .map_err(|err| DnsError::lookup(fqdn, "A", err))?
        {
            records.extend(lookup.iter().map(|a| DnsRecord::A(a.0)));
        }

        if let Some(lookup) = absent_as_none(self.resolver.ipv6_lookup(fqdn))
            .map_err(|err| DnsError::lookup(fqdn, "AAAA", err))?
        {
            records.extend(lookup.iter().map(|aaaa| DnsRecord::Aaaa(aaaa.0)));
        }

        Ok(records)
    }
}

/// `NoRecordsFound` (NXDOMAIN or NODATA) is an empty answer, anything else a
/// resolver failure.
pub(crate) fn absent_as_none<T>(
    result: Result<T, ResolveError>,
) -> Result<Option<T>, ResolveError> {
    match result {
        Ok(lookup) => Ok(Some(lookup)),
        Err(err) if matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

/// IDNA (UTS #46) ASCII form with exactly one trailing dot.
pub(crate) fn to_fqdn(domain: &str) -> Result<String, DnsError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(DnsError::EmptyDomain);
    }
    let ascii = idna::domain_to_ascii(trimmed).map_err(DnsError::idna)?;
    let mut fqdn = ascii.trim_end_matches('.').to_string();
    if fqdn.is_empty() {
        return Err(DnsError::EmptyDomain);
    }
    fqdn.push('.');
    Ok(fqdn)
}

/// Exchange names without the root dot, lower-cased. The root itself
/// becomes the empty string.
pub(crate) fn normalize_exchange(exchange: &str) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}
