use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannedPatternError {
    #[error("banned pattern is empty")]
    EmptyPattern,
    #[error("banned pattern '{pattern}' cannot be compiled: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl BannedPatternError {
    pub(crate) fn compile(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Compile {
            pattern: pattern.into(),
            source,
        }
    }
}
