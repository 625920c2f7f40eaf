use core::fmt;

use firdec_core::{Backend, VectorWidth};

/// Validation errors raised at kernel construction or adapter binding time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required input or configuration field is empty.
    EmptyInput {
        /// Name of the argument that is empty.
        arg: &'static str,
    },
    /// A configuration argument value is invalid.
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },
    /// A contiguous 1D slice view could not be obtained.
    NonContiguous {
        /// Name of the argument that is non-contiguous.
        arg: &'static str,
    },
    /// A tap count does not fill whole vector registers.
    Misaligned {
        /// Name of the argument.
        arg: &'static str,
        /// Lane count the length must be a multiple of.
        lanes: usize,
        /// Received length.
        got: usize,
    },
    /// The requested backend cannot run the requested width here.
    Backend {
        /// Backend that was requested.
        backend: Backend,
        /// Width that was requested.
        width: VectorWidth,
        /// Whether the backend implements the width at all.
        supported: bool,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyInput { arg } => write!(f, "Input `{arg}` was empty."),
            ConfigError::InvalidArgument { arg, reason } => {
                write!(f, "Invalid argument `{arg}`: {reason}")
            }
            ConfigError::NonContiguous { arg } => {
                write!(f, "Argument `{arg}` is not contiguous in memory.")
            }
            ConfigError::Misaligned { arg, lanes, got } => {
                write!(
                    f,
                    "Length of `{arg}` must be a multiple of {lanes}, got {got}."
                )
            }
            ConfigError::Backend {
                backend,
                width,
                supported: false,
            } => write!(f, "Backend `{backend}` has no {width} kernels."),
            ConfigError::Backend { backend, .. } => {
                write!(f, "Backend `{backend}` is not available on this CPU.")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Runtime invariant violations for checked kernel entrypoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecInvariantViolation {
    /// A slice kernel precondition failed (buffer geometry, lengths).
    Kernel(firdec_core::Error),
    /// Adapter binding/configuration failure.
    Config(ConfigError),
}

impl From<ConfigError> for ExecInvariantViolation {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<firdec_core::Error> for ExecInvariantViolation {
    fn from(value: firdec_core::Error) -> Self {
        Self::Kernel(value)
    }
}

impl fmt::Display for ExecInvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecInvariantViolation::Kernel(err) => {
                write!(f, "Execution invariant violation: {err}")
            }
            ExecInvariantViolation::Config(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExecInvariantViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecInvariantViolation::Kernel(err) => Some(err),
            ExecInvariantViolation::Config(err) => Some(err),
        }
    }
}
