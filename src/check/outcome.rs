use std::fmt;

use crate::dns::MxRecord;
use crate::verdict::{ErrorKind, Payload, WarningKind, Warnings};

use super::ErrorMode;

/// Pipeline stages, in the order they run.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Init,
    TypoCheck,
    SyntaxCheck,
    DomainClassify,
    DnsResolve,
    Done,
}

/// Everything one `validate` call found out. Fresh per call, never shared.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// The address as the pipeline saw it, after syntax coercion.
    pub address: String,
    pub local_part: String,
    /// Lower-cased domain part.
    pub domain: String,
    pub valid: bool,
    pub error: Option<ErrorKind>,
    pub warnings: Warnings,
    pub accepted_mx: Vec<MxRecord>,
    /// Why the syntax validator rejected the address, if it did.
    pub syntax_reasons: Vec<String>,
    /// Stage that settled the outcome; `Done` when every stage passed.
    pub decided_at: Stage,
    pub error_mode: ErrorMode,
}

/// One entry of the extended rendering.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub code: &'static str,
    pub payload: Payload,
}

impl Signal {
    pub fn new(code: &'static str, payload: Payload) -> Self {
        Self { code, payload }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedError {
    Compact(&'static str),
    Extended(Vec<Signal>),
}

impl fmt::Display for RenderedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact(key) => f.write_str(key),
            Self::Extended(signals) => {
                let codes: Vec<&str> = signals.iter().map(|s| s.code).collect();
                f.write_str(&codes.join(", "))
            }
        }
    }
}

impl ValidationOutcome {
    pub(crate) fn new(address: String, error_mode: ErrorMode) -> Self {
        Self {
            address,
            local_part: String::new(),
            domain: String::new(),
            valid: false,
            error: None,
            warnings: Warnings::new(),
            accepted_mx: Vec::new(),
            syntax_reasons: Vec::new(),
            decided_at: Stage::Init,
            error_mode,
        }
    }

    pub(crate) fn reject(&mut self, stage: Stage, error: ErrorKind) {
        self.valid = false;
        self.error = Some(error);
        self.decided_at = stage;
    }

    pub(crate) fn accept(&mut self) {
        self.valid = true;
        self.error = None;
        self.decided_at = Stage::Done;
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.contains_key(&kind)
    }

    /// The suggested domain when the address looked like a provider typo.
    pub fn suggestion(&self) -> Option<&str> {
        match self.warnings.get(&WarningKind::Typo) {
            Some(Payload::Suggestion { domain }) => Some(domain),
            _ => None,
        }
    }

    /// Single symbolic key, `None` for a valid outcome.
    pub fn compact_key(&self) -> Option<&'static str> {
        self.error.map(ErrorKind::compact_key)
    }

    /// Primary error first, then warnings by priority. A warning that only
    /// restates the primary error is folded into it.
    pub fn signals(&self) -> Vec<Signal> {
        let mut signals = Vec::new();
        let mut folded = None;

        if let Some(error) = self.error {
            let twin = warning_twin(error);
            let payload = if error == ErrorKind::InvalidSyntax && !self.syntax_reasons.is_empty() {
                Payload::Reasons {
                    reasons: self.syntax_reasons.clone(),
                }
            } else {
                twin.and_then(|kind| self.warnings.get(&kind).cloned())
                    .unwrap_or(Payload::Flag)
            };
            folded = twin;
            signals.push(Signal::new(error.code(), payload));
        }

        for (kind, payload) in &self.warnings {
            if Some(*kind) == folded {
                continue;
            }
            signals.push(Signal::new(kind.code(), payload.clone()));
        }
        signals
    }

    /// Renders the failure in `mode`; `None` when the address is valid.
    pub fn render(&self, mode: ErrorMode) -> Option<RenderedError> {
        let error = self.error?;
        Some(match mode {
            ErrorMode::Compact => RenderedError::Compact(error.compact_key()),
            ErrorMode::Extended => RenderedError::Extended(self.signals()),
        })
    }

    /// [`render`](Self::render) in the mode the call was configured with.
    pub fn rendered_error(&self) -> Option<RenderedError> {
        self.render(self.error_mode)
    }
}

fn warning_twin(error: ErrorKind) -> Option<WarningKind> {
    match error {
        ErrorKind::BannedEmail => Some(WarningKind::BannedEmail),
        ErrorKind::Typo => Some(WarningKind::Typo),
        _ => None,
    }
}
