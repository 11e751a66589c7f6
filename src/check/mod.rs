//! Validation orchestrator: typo check, host syntax check, domain
//! classification, DNS reputation, in that order.

mod diagnostics;
mod options;
mod outcome;
mod signup;

pub use diagnostics::DiagnosticReport;
pub use options::{ErrorMode, ValidationOptions};
pub use outcome::{RenderedError, Signal, Stage, ValidationOutcome};
pub use signup::{NoSignupChecks, SignupChecker};

use std::sync::Arc;

use crate::banned::BannedPatterns;
use crate::classify::classify_domain;
use crate::dns::{DnsError, DnsOptions, DnsReputation, SystemDnsLookup};
use crate::log;
use crate::syntax::{RfcSyntaxValidator, SyntaxValidator};
use crate::typo::{MisspellingSeeds, MisspellingTable, find_typo};
use crate::verdict::{DomainReputationChecker, ErrorKind, Payload, WarningKind};

/// Runs the full pipeline for one address per call. Holds no per-call state,
/// so one instance can serve any number of calls.
pub struct DomainValidator<C, S = RfcSyntaxValidator> {
    checker: C,
    syntax: S,
    typos: Arc<MisspellingTable>,
}

impl DomainValidator<DnsReputation<SystemDnsLookup>> {
    /// Live DNS checker, default syntax rules, freshly built misspelling table.
    /// Meant to be called once at startup.
    pub fn system(dns: &DnsOptions) -> Result<Self, DnsError> {
        let checker = DnsReputation::system(dns)?;
        let typos = Arc::new(MisspellingTable::build(MisspellingSeeds::default()));
        Ok(Self::new(checker, typos))
    }
}

impl<C: DomainReputationChecker> DomainValidator<C> {
    pub fn new(checker: C, typos: Arc<MisspellingTable>) -> Self {
        Self {
            checker,
            syntax: RfcSyntaxValidator::default(),
            typos,
        }
    }
}

impl<C, S> DomainValidator<C, S>
where
    C: DomainReputationChecker,
    S: SyntaxValidator,
{
    /// Swaps the host syntax validator.
    pub fn with_syntax<T: SyntaxValidator>(self, syntax: T) -> DomainValidator<C, T> {
        DomainValidator {
            checker: self.checker,
            syntax,
            typos: self.typos,
        }
    }

    pub fn typo_table(&self) -> &MisspellingTable {
        &self.typos
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Validates `address`. The first failing stage decides the outcome; a
    /// domain with only A/AAAA records stays valid with a
    /// [`WarningKind::NoDnsMxRecord`] warning.
    pub fn validate(
        &self,
        address: &str,
        banned: &BannedPatterns,
        options: &ValidationOptions,
    ) -> ValidationOutcome {
        let address = self.syntax.coerce(address);
        let mut outcome = ValidationOutcome::new(address.clone(), options.error_mode);

        let Some((local_part, domain)) = address.rsplit_once('@') else {
            outcome.syntax_reasons.push("must contain an '@'".to_string());
            outcome.reject(Stage::Init, ErrorKind::InvalidSyntax);
            return outcome;
        };
        let domain = domain.to_lowercase();
        outcome.local_part = local_part.to_string();
        outcome.domain = domain.clone();

        if options.typo_check {
            if let Some(canonical) = find_typo(&self.typos, &domain) {
                log::debug!(domain = %domain, suggestion = %canonical, "provider typo");
                outcome
                    .warnings
                    .insert(WarningKind::Typo, Payload::Suggestion { domain: canonical });
                outcome.reject(Stage::TypoCheck, ErrorKind::Typo);
                return outcome;
            }
        }

        if let Err(rejection) = self.syntax.validate(&address) {
            log::debug!(address = %address, reasons = ?rejection.reasons, "syntax rejected");
            outcome.syntax_reasons = rejection.reasons;
            outcome.reject(Stage::SyntaxCheck, ErrorKind::InvalidSyntax);
            return outcome;
        }

        if !options.dns_validate {
            outcome.accept();
            return outcome;
        }

        let bare = domain.strip_suffix('.').unwrap_or(&domain);
        if !classify_domain(bare).is_routable() {
            outcome.reject(Stage::DomainClassify, ErrorKind::LocalOrReservedDomain);
            return outcome;
        }

        let verdict = self.checker.check_domain(local_part, &domain, banned);
        outcome.warnings.extend(verdict.warnings);
        outcome.accepted_mx = verdict.accepted_mx;
        match verdict.error {
            Some(error) => outcome.reject(Stage::DnsResolve, error),
            None => outcome.accept(),
        }
        log::debug!(
            address = %outcome.address,
            valid = outcome.valid,
            error = ?outcome.error,
            "validation finished"
        );
        outcome
    }
}

#[cfg(test)]
mod tests;
