use crate::banned::BannedPatterns;
use crate::syntax::SyntaxValidator;
use crate::verdict::{DomainReputationChecker, Payload};

use super::{
    DomainValidator, ErrorMode, NoSignupChecks, Signal, SignupChecker, ValidationOptions,
    ValidationOutcome,
};

/// Support/troubleshooting view of one address: every check enabled, every
/// signal spelled out. Callers gate access to it.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub email: String,
    pub formatted_email: String,
    pub valid: bool,
    /// Leads with a generic `invalid` entry when the address failed.
    pub errors: Vec<Signal>,
    pub warnings: Vec<Signal>,
    /// Findings of the host's [`SignupChecker`], independent of `valid`.
    pub signup_errors: Vec<String>,
    pub outcome: ValidationOutcome,
}

impl<C, S> DomainValidator<C, S>
where
    C: DomainReputationChecker,
    S: SyntaxValidator,
{
    pub fn diagnose(&self, email: &str, banned: &BannedPatterns) -> DiagnosticReport {
        self.diagnose_with_signup(email, banned, &NoSignupChecks)
    }

    /// [`diagnose`](Self::diagnose), also running `signup` against the
    /// formatted address.
    pub fn diagnose_with_signup<G>(
        &self,
        email: &str,
        banned: &BannedPatterns,
        signup: &G,
    ) -> DiagnosticReport
    where
        G: SignupChecker + ?Sized,
    {
        let options = ValidationOptions::default()
            .with_typo_check(true)
            .with_dns_validation(true)
            .with_error_mode(ErrorMode::Extended);
        let outcome = self.validate(email, banned, &options);
        let signup_errors = signup.check_signup(&outcome.address);

        let mut signals = outcome.signals();
        let (errors, warnings) = if outcome.valid {
            (Vec::new(), signals)
        } else {
            let warnings = signals.split_off(1.min(signals.len()));
            let mut errors = Vec::with_capacity(2);
            if signals.first().is_none_or(|primary| primary.code != "invalid") {
                errors.push(Signal::new("invalid", Payload::Flag));
            }
            errors.extend(signals);
            (errors, warnings)
        };

        DiagnosticReport {
            email: email.to_string(),
            formatted_email: outcome.address.clone(),
            valid: outcome.valid,
            errors,
            warnings,
            signup_errors,
            outcome,
        }
    }
}
