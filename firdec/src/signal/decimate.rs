//! Decimating FIR kernels: one filtered output per `factor` input samples.

use alloc::vec;
use alloc::vec::Vec;

use firdec_core::Backend;
use num_complex::Complex32;

use super::complex::{deinterleave, interleave};
use super::path::{full_windows, full_windows_complex, FirPath, ResolvedPath};
use crate::kernel::{
    validate_factor, validate_taps, ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D,
    Write1D,
};
use crate::signal::traits::Decimate1D;

/// Constructor config for [`DecimateKernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecimateConfig {
    /// Filter taps, applied in forward order.
    pub coeffs: Vec<f32>,
    /// Input samples consumed per output sample.
    pub factor: usize,
    /// Scalar or vector execution.
    pub path: FirPath,
}

/// Real-signal decimating FIR: `out[i] = Σ_j input[i * factor + j] * coeffs[j]`.
#[derive(Debug, Clone)]
pub struct DecimateKernel {
    coeffs: Vec<f32>,
    factor: usize,
    path: ResolvedPath,
}

impl DecimateKernel {
    /// Filter taps.
    pub fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }

    /// Vector backend pinned at construction, `None` on the scalar path.
    pub fn backend(&self) -> Option<Backend> {
        self.path.backend()
    }
}

impl KernelLifecycle for DecimateKernel {
    type Config = DecimateConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        validate_factor(config.factor)?;
        let path = config.path.resolve(&config.coeffs)?;
        log::trace!(
            "decimate kernel: {} taps, factor {}, {:?}",
            config.coeffs.len(),
            config.factor,
            path
        );
        Ok(Self {
            coeffs: config.coeffs,
            factor: config.factor,
            path,
        })
    }
}

impl Decimate1D<f32> for DecimateKernel {
    fn factor(&self) -> usize {
        self.factor
    }

    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
        O: Write1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        self.path.run(self.factor, &self.coeffs, input, out_slice)?;
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<f32>, ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let len = full_windows(input.len(), self.coeffs.len(), self.factor)?;
        let mut out = vec![0.0f32; len];
        self.path.run(self.factor, &self.coeffs, input, &mut out)?;
        Ok(out)
    }
}

/// Constructor config for [`ComplexDecimateKernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexDecimateConfig {
    /// Real filter taps, applied to both channels.
    pub coeffs: Vec<f32>,
    /// Complex input samples consumed per complex output sample.
    pub factor: usize,
}

/// Decimating FIR over interleaved `re, im` samples with real taps.
///
/// The window advances `2 * factor` floats per complex output and spans
/// `coeffs.len() + 1` floats, see [`firdec_core::decimate_rc`].
#[derive(Debug, Clone)]
pub struct ComplexDecimateKernel {
    coeffs: Vec<f32>,
    factor: usize,
}

impl ComplexDecimateKernel {
    /// Filter taps.
    pub fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }

    /// Decimate every full window of a complex signal.
    pub fn run_complex(&self, input: &[Complex32]) -> Result<Vec<Complex32>, ExecInvariantViolation> {
        let flat = interleave(input);
        let out = self.run_alloc(flat.as_slice())?;
        Ok(deinterleave(&out)?)
    }
}

impl KernelLifecycle for ComplexDecimateKernel {
    type Config = ComplexDecimateConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        validate_factor(config.factor)?;
        validate_taps(&config.coeffs, 1)?;
        log::trace!(
            "complex decimate kernel: {} taps, factor {}",
            config.coeffs.len(),
            config.factor
        );
        Ok(Self {
            coeffs: config.coeffs,
            factor: config.factor,
        })
    }
}

impl Decimate1D<f32> for ComplexDecimateKernel {
    fn factor(&self) -> usize {
        self.factor
    }

    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
        O: Write1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        firdec_core::decimate_rc(self.factor, &self.coeffs, input, out_slice)?;
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<f32>, ExecInvariantViolation>
    where
        I: Read1D<f32> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let len = full_windows_complex(input.len(), self.coeffs.len(), self.factor)?;
        let mut out = vec![0.0f32; len];
        firdec_core::decimate_rc(self.factor, &self.coeffs, input, &mut out)?;
        Ok(out)
    }
}
