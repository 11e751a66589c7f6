//! Thin wrappers around `tracing` so call sites compile away without the
//! `with-tracing` feature.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with-tracing")]
        tracing::debug!($($arg)*);
    }};
}

macro_rules! warning {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with-tracing")]
        tracing::warn!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use warning;
