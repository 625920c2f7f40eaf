use firdec_core::window::{output_len, output_len_complex};
use firdec_core::{Backend, VectorWidth};

use crate::kernel::{validate_backend, validate_taps, ConfigError, ExecInvariantViolation};

/// Execution path of a real-signal FIR or decimation kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirPath {
    /// Scalar reference loop; any tap count.
    #[default]
    Scalar,
    /// Vector loop of the given width on the best backend detected at construction.
    Vector(VectorWidth),
    /// Vector loop of the given width on an explicit backend.
    VectorWith(Backend, VectorWidth),
}

/// A [`FirPath`] after validation, with its backend pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedPath {
    Scalar,
    Vector(Backend, VectorWidth),
}

impl FirPath {
    pub(crate) fn resolve(self, coeffs: &[f32]) -> Result<ResolvedPath, ConfigError> {
        match self {
            FirPath::Scalar => {
                validate_taps(coeffs, 1)?;
                Ok(ResolvedPath::Scalar)
            }
            FirPath::Vector(width) => {
                validate_taps(coeffs, width.lanes())?;
                Ok(ResolvedPath::Vector(Backend::detect(width), width))
            }
            FirPath::VectorWith(backend, width) => {
                validate_backend(backend, width)?;
                validate_taps(coeffs, width.lanes())?;
                Ok(ResolvedPath::Vector(backend, width))
            }
        }
    }
}

impl ResolvedPath {
    pub(crate) fn backend(self) -> Option<Backend> {
        match self {
            ResolvedPath::Scalar => None,
            ResolvedPath::Vector(backend, _) => Some(backend),
        }
    }

    pub(crate) fn run(
        self,
        factor: usize,
        coeffs: &[f32],
        input: &[f32],
        out: &mut [f32],
    ) -> Result<(), firdec_core::Error> {
        match self {
            ResolvedPath::Scalar => firdec_core::decimate_rr(factor, coeffs, input, out),
            ResolvedPath::Vector(backend, width) => {
                firdec_core::decimate_rr_with(backend, width, factor, coeffs, input, out)
            }
        }
    }
}

/// Number of full windows in `input_len`, or the shortfall as an error.
pub(crate) fn full_windows(
    input_len: usize,
    taps: usize,
    factor: usize,
) -> Result<usize, ExecInvariantViolation> {
    match output_len(input_len, taps, factor) {
        0 => Err(ExecInvariantViolation::Kernel(
            firdec_core::Error::InputTooShort {
                required: taps,
                got: input_len,
            },
        )),
        n => Ok(n),
    }
}

/// Interleaved output length (floats) covering every full complex window,
/// or the shortfall as an error.
pub(crate) fn full_windows_complex(
    input_len: usize,
    taps: usize,
    factor: usize,
) -> Result<usize, ExecInvariantViolation> {
    match output_len_complex(input_len, taps, factor) {
        0 => Err(ExecInvariantViolation::Kernel(
            firdec_core::Error::InputTooShort {
                required: taps + 1,
                got: input_len,
            },
        )),
        n => Ok(n),
    }
}
