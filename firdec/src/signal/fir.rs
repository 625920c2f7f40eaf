//! FIR filter kernels over real and interleaved complex signals.

use alloc::vec;
use alloc::vec::Vec;

use firdec_core::Backend;
use num_complex::Complex32;

use super::complex::{deinterleave, interleave};
use super::path::{full_windows, full_windows_complex, FirPath, ResolvedPath};
use crate::kernel::{validate_taps, ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::Fir1D;

/// Constructor config for [`FirKernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct FirConfig {
    /// Filter taps, applied in forward order.
    pub coeffs: Vec<f32>,
    /// Scalar or vector execution.
    pub path: FirPath,
}

/// Real-signal FIR filter: `out[i] = Σ_j input[i + j] * coeffs[j]`.
#[derive(Debug, Clone)]
pub struct FirKernel {
    coeffs: Vec<f32>,
    path: ResolvedPath,
}

impl FirKernel {
    /// Filter taps.
    pub fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }

    /// Vector backend pinned at construction, `None` on the scalar path.
    pub fn backend(&self) -> Option<Backend> {
        self.path.backend()
    }
}

impl KernelLifecycle for FirKernel {
    type Config = FirConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        let path = config.path.resolve(&config.coeffs)?;
        log::trace!("fir kernel: {} taps, {:?}", config.coeffs.len(), path);
        Ok(Self {
            coeffs: config.coeffs,
            path,
        })
    }
}

impl Fir1D<f32> for FirKernel {
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
        O: Write1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        self.path.run(1, &self.coeffs, input, out_slice)?;
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<f32>, ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let mut out = vec![0.0f32; full_windows(input.len(), self.coeffs.len(), 1)?];
        self.path.run(1, &self.coeffs, input, &mut out)?;
        Ok(out)
    }
}

/// Constructor config for [`ComplexFirKernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexFirConfig {
    /// Real filter taps, applied to both channels.
    pub coeffs: Vec<f32>,
}

/// FIR filter over interleaved `re, im` samples with real taps.
///
/// Buffers are flat `f32` with even length; `out[2m]` and `out[2m + 1]`
/// are the real and imaginary parts of complex output `m`. Each window
/// spans `coeffs.len() + 1` floats, see [`firdec_core::filter_rc`].
#[derive(Debug, Clone)]
pub struct ComplexFirKernel {
    coeffs: Vec<f32>,
}

impl ComplexFirKernel {
    /// Filter taps.
    pub fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }

    /// Filter every full window of a complex signal.
    pub fn run_complex(&self, input: &[Complex32]) -> Result<Vec<Complex32>, ExecInvariantViolation> {
        let flat = interleave(input);
        let out = self.run_alloc(flat.as_slice())?;
        Ok(deinterleave(&out)?)
    }
}

impl KernelLifecycle for ComplexFirKernel {
    type Config = ComplexFirConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        validate_taps(&config.coeffs, 1)?;
        log::trace!("complex fir kernel: {} taps", config.coeffs.len());
        Ok(Self {
            coeffs: config.coeffs,
        })
    }
}

impl Fir1D<f32> for ComplexFirKernel {
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
        O: Write1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        firdec_core::filter_rc(&self.coeffs, input, out_slice)?;
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<f32>, ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let mut out = vec![0.0f32; full_windows_complex(input.len(), self.coeffs.len(), 1)?];
        firdec_core::filter_rc(&self.coeffs, input, &mut out)?;
        Ok(out)
    }
}
