//! Raw FIR filtering and decimation kernels over flat sample buffers.
//!
//! Every kernel computes a forward-order sliding dot product of `coeffs`
//! against windows of `input`, writing one value per window into `out`.
//! The number of outputs is `out.len()`. Preconditions (tap count, vector
//! lane alignment, decimation factor, input length) are checked before any
//! sample is read, and a violation is reported as an [`Error`] with `out`
//! left untouched.
//!
//! | kernel | signal | path |
//! |---|---|---|
//! | [`filter_rr`] / [`decimate_rr`] | real | scalar reference |
//! | [`filter_rc`] / [`decimate_rc`] | interleaved complex | scalar |
//! | [`filter_rr_v128`] / [`decimate_rr_v128`] | real | 4 lanes |
//! | [`filter_rr_v256`] / [`decimate_rr_v256`] | real | 8 lanes |
//! | [`convert_u8`] | `u8` to float | scalar |
//!
//! The vector kernels pick a [`Backend`] for the running CPU; see
//! [`simd`] for the accumulation order they share.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod convert;
mod error;
mod scalar;
pub mod simd;
pub mod window;

pub use convert::convert_u8;
pub use error::{Error, Result};
pub use scalar::{decimate_rc, decimate_rr, filter_rc, filter_rr};
pub use simd::{
    decimate_rr_v128, decimate_rr_v256, decimate_rr_with, filter_rr_v128, filter_rr_v256, Backend,
    VectorWidth,
};
