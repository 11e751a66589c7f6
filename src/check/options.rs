#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// How a failed outcome is rendered for the caller.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// One symbolic key (`invalid`, `typo`, `invaliddomain`, `banned`).
    #[default]
    Compact,
    /// Every contributing signal with its payload.
    Extended,
}

/// Per-call switches for [`DomainValidator::validate`](super::DomainValidator::validate).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    pub error_mode: ErrorMode,
    /// Look the domain up in the misspelling table before anything else.
    pub typo_check: bool,
    /// Run domain classification and the DNS reputation check.
    pub dns_validate: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Compact,
            typo_check: true,
            dns_validate: true,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for an account email change. An administrator editing an
    /// account may be allowed to skip the DNS checks.
    pub fn for_account_edit(admin_edit: bool, admin_bypass_dns: bool) -> Self {
        Self {
            dns_validate: !(admin_edit && admin_bypass_dns),
            ..Self::default()
        }
    }

    pub fn extended(mut self) -> Self {
        self.error_mode = ErrorMode::Extended;
        self
    }

    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn with_typo_check(mut self, value: bool) -> Self {
        self.typo_check = value;
        self
    }

    pub fn with_dns_validation(mut self, value: bool) -> Self {
        self.dns_validate = value;
        self
    }
}
