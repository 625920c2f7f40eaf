//! Capability traits implemented by the signal kernels.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// 1D FIR filtering capability (one output per input shift).
pub trait Fir1D<T> {
    /// Filter into a caller-provided output buffer. `out`'s length is the
    /// number of outputs computed.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Filter every full window of `input` and allocate the output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}

/// 1D decimating FIR capability (one output per `factor` input samples).
pub trait Decimate1D<T> {
    /// Input samples consumed per output sample.
    fn factor(&self) -> usize;

    /// Decimate into a caller-provided output buffer. `out`'s length is the
    /// number of outputs computed.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Decimate every full window of `input` and allocate the output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}

/// Elementwise sample-format conversion capability.
pub trait SampleConvert1D<S, T> {
    /// Convert into a caller-provided buffer of the same length.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<S> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Convert and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<S> + ?Sized;
}
