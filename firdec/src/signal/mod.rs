//! FIR filtering, decimation and sample conversion kernels.

pub mod traits;

mod convert;
pub use convert::*;

#[cfg(feature = "alloc")]
mod complex;
#[cfg(feature = "alloc")]
mod decimate;
#[cfg(feature = "alloc")]
mod fir;
#[cfg(feature = "alloc")]
mod path;

#[cfg(feature = "alloc")]
pub use complex::*;
#[cfg(feature = "alloc")]
pub use decimate::*;
#[cfg(feature = "alloc")]
pub use fir::*;
#[cfg(feature = "alloc")]
pub use path::FirPath;
