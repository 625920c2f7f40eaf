//! `u8` sample widening.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::SampleConvert1D;

/// Constructor config for [`SampleConvertKernel`]. The conversion has no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleConvertConfig;

/// Lossless `u8 -> f32` (or `f64`) sample conversion, no scaling or offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleConvertKernel;

impl KernelLifecycle for SampleConvertKernel {
    type Config = SampleConvertConfig;

    fn try_new(_config: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl<T> SampleConvert1D<u8, T> for SampleConvertKernel
where
    T: From<u8> + Clone,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<u8> + ?Sized,
        O: Write1D<T> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        firdec_core::convert_u8(input, out_slice)?;
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<u8> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let mut out = vec![T::from(0u8); input.len()];
        firdec_core::convert_u8(input, &mut out)?;
        Ok(out)
    }
}
