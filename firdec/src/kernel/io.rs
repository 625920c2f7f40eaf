//! Buffer adapters for kernel inputs and outputs.
//!
//! Kernels only ever see contiguous slices. Anything that can lend one
//! (slices, fixed arrays, `Vec`, contiguous `ndarray` storage) plugs in
//! directly; strided `ndarray` views are refused with
//! [`ConfigError::NonContiguous`] instead of being gathered into a copy.

use super::ConfigError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use ndarray::{Array1, ArrayView1, ArrayViewMut1};

/// Samples a kernel reads from.
pub trait Read1D<T> {
    /// Lend the samples as one contiguous slice.
    fn read_slice(&self) -> Result<&[T], ConfigError>;
}

/// Buffer a kernel writes into. Its length is the number of outputs requested.
pub trait Write1D<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError>;
}

impl<T> Read1D<T> for [T] {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T> Write1D<T> for [T] {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

/// Containers that always deref to a slice.
macro_rules! slice_backed {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {$(
        impl<$($gen)*> Read1D<T> for $ty {
            fn read_slice(&self) -> Result<&[T], ConfigError> {
                Ok(&self[..])
            }
        }

        impl<$($gen)*> Write1D<T> for $ty {
            fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
                Ok(&mut self[..])
            }
        }
    )+};
}

slice_backed!([T, const N: usize] [T; N]);
#[cfg(feature = "alloc")]
slice_backed!([T] Vec<T>);

#[cfg(feature = "alloc")]
fn contiguous_input<T>(samples: Option<&[T]>) -> Result<&[T], ConfigError> {
    samples.ok_or(ConfigError::NonContiguous { arg: "input" })
}

#[cfg(feature = "alloc")]
fn contiguous_out<T>(samples: Option<&mut [T]>) -> Result<&mut [T], ConfigError> {
    samples.ok_or(ConfigError::NonContiguous { arg: "out" })
}

#[cfg(feature = "alloc")]
impl<T> Read1D<T> for Array1<T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        contiguous_input(self.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T> Write1D<T> for Array1<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        contiguous_out(self.as_slice_mut())
    }
}

#[cfg(feature = "alloc")]
impl<T> Read1D<T> for ArrayView1<'_, T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        contiguous_input(self.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T> Write1D<T> for ArrayViewMut1<'_, T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        contiguous_out(self.as_slice_mut())
    }
}
