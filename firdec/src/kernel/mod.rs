//! Kernel substrate shared by every FIR, decimation and conversion kernel.
//!
//! Construction goes through [`KernelLifecycle`] and fails with a
//! [`ConfigError`]; execution reads and writes through [`Read1D`] /
//! [`Write1D`] and fails with an [`ExecInvariantViolation`].

mod errors;
mod io;
mod lifecycle;

pub use errors::*;
pub use io::*;
pub use lifecycle::*;
