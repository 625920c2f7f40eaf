use core::fmt;

use crate::simd::{Backend, VectorWidth};

/// Precondition violations reported by the raw kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The coefficient slice was empty.
    EmptyCoefficients,
    /// A decimation factor of zero was requested.
    ZeroFactor,
    /// The tap count is not a multiple of the vector lane count.
    MisalignedTaps {
        /// Number of taps supplied.
        taps: usize,
        /// Lane count of the requested vector width.
        lanes: usize,
    },
    /// The input cannot cover every window the output asks for.
    InputTooShort {
        /// Minimum input length for the requested output count.
        required: usize,
        /// Input length supplied.
        got: usize,
    },
    /// An interleaved complex buffer held an odd number of floats.
    OddInterleavedLength {
        /// Name of the argument.
        arg: &'static str,
        /// Length supplied.
        len: usize,
    },
    /// Two buffers that must match in length did not.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// The backend cannot run on this CPU.
    BackendUnavailable {
        /// Backend that was requested.
        backend: Backend,
    },
    /// The backend has no implementation for the vector width.
    UnsupportedWidth {
        /// Backend that was requested.
        backend: Backend,
        /// Width that was requested.
        width: VectorWidth,
    },
}

/// Result alias for the raw kernels.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCoefficients => write!(f, "Coefficient slice was empty."),
            Error::ZeroFactor => write!(f, "Decimation factor must be at least 1."),
            Error::MisalignedTaps { taps, lanes } => {
                write!(f, "Tap count {taps} is not a multiple of {lanes} lanes.")
            }
            Error::InputTooShort { required, got } => {
                write!(
                    f,
                    "Input too short. Expected at least {required} samples, got {got}."
                )
            }
            Error::OddInterleavedLength { arg, len } => {
                write!(f, "Interleaved buffer `{arg}` has odd length {len}.")
            }
            Error::LengthMismatch { arg, expected, got } => {
                write!(
                    f,
                    "Length mismatch on `{arg}`. Expected {expected}, got {got}."
                )
            }
            Error::BackendUnavailable { backend } => {
                write!(f, "Backend `{backend}` is not available on this CPU.")
            }
            Error::UnsupportedWidth { backend, width } => {
                write!(f, "Backend `{backend}` has no {width} implementation.")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
