//! Address syntax checks run before any domain reputation work.
//!
//! The orchestrator only needs the [`SyntaxValidator`] trait; hosts with
//! their own RFC validator plug it in there. [`RfcSyntaxValidator`] is the
//! RFC 5321/5322 subset used by default.

mod domain;
mod local;
mod types;

pub use types::{SyntaxRejection, ValidationMode};

use domain::check_domain;
use local::check_local;

/// Host-side syntax validation. The reputation engine runs strictly after
/// this succeeds.
pub trait SyntaxValidator {
    /// Canonical form of the raw input that the rest of the pipeline sees.
    fn coerce(&self, address: &str) -> String {
        address.trim().to_string()
    }

    fn validate(&self, address: &str) -> Result<(), SyntaxRejection>;
}

impl<T: SyntaxValidator + ?Sized> SyntaxValidator for &T {
    fn coerce(&self, address: &str) -> String {
        (**self).coerce(address)
    }

    fn validate(&self, address: &str) -> Result<(), SyntaxRejection> {
        (**self).validate(address)
    }
}

/// Default syntax validator: length limits, local-part rules per
/// [`ValidationMode`], domain label rules.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RfcSyntaxValidator {
    pub mode: ValidationMode,
}

impl RfcSyntaxValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }
}

impl SyntaxValidator for RfcSyntaxValidator {
    fn validate(&self, address: &str) -> Result<(), SyntaxRejection> {
        let (local, domain) = match self.mode {
            ValidationMode::Strict => match address.split_once('@') {
                Some((local, domain)) if !domain.contains('@') => (local, domain),
                _ => return Err(SyntaxRejection::single("must contain exactly one '@'")),
            },
            // quoted local parts may carry their own '@'
            ValidationMode::Relaxed => address
                .rsplit_once('@')
                .ok_or_else(|| SyntaxRejection::single("must contain an '@'"))?,
        };

        let mut reasons = Vec::new();
        if address.len() > 254 {
            reasons.push(format!("total length {} > 254", address.len()));
        }
        check_local(local, self.mode, &mut reasons);
        check_domain(domain, &mut reasons);

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(SyntaxRejection::new(reasons))
        }
    }
}

/// Validator that accepts everything, for hosts that already ran their own
/// syntax checks upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllSyntax;

impl SyntaxValidator for AcceptAllSyntax {
    fn validate(&self, _address: &str) -> Result<(), SyntaxRejection> {
        Ok(())
    }
}
