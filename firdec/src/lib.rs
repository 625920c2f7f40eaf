//! Trait-first FIR filtering, decimation and sample conversion kernels.
//!
//! Kernels are built once from a validated config through
//! [`kernel::KernelLifecycle::try_new`], then run against any contiguous
//! 1D buffer ([`kernel::Read1D`] / [`kernel::Write1D`]): slices, arrays,
//! `Vec`s and `ndarray` arrays.
//!
//! ```
//! use firdec::kernel::KernelLifecycle;
//! use firdec::signal::traits::Decimate1D;
//! use firdec::signal::{DecimateConfig, DecimateKernel, FirPath};
//!
//! let kernel = DecimateKernel::try_new(DecimateConfig {
//!     coeffs: vec![1.0; 4],
//!     factor: 2,
//!     path: FirPath::Scalar,
//! })
//! .unwrap();
//! let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let mut out = [0.0f32; 2];
//! kernel.run_into(&input, &mut out).unwrap();
//! assert_eq!(out, [10.0, 18.0]);
//! ```
//!
//! The raw slice kernels live in [`raw`] (the `firdec-core` crate).

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Raw slice kernels.
pub use firdec_core as raw;
pub use firdec_core::{Backend, VectorWidth};

pub mod kernel;
pub mod signal;
