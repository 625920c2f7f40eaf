use firdec_core::{Backend, VectorWidth};

use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}

/// Reject an empty tap set, or one that does not fill whole registers of `lanes`.
pub fn validate_taps<T>(coeffs: &[T], lanes: usize) -> Result<(), ConfigError> {
    if coeffs.is_empty() {
        return Err(ConfigError::EmptyInput { arg: "coeffs" });
    }
    if coeffs.len() % lanes != 0 {
        return Err(ConfigError::Misaligned {
            arg: "coeffs",
            lanes,
            got: coeffs.len(),
        });
    }
    Ok(())
}

/// Reject a zero decimation factor.
pub fn validate_factor(factor: usize) -> Result<(), ConfigError> {
    if factor == 0 {
        return Err(ConfigError::InvalidArgument {
            arg: "factor",
            reason: "decimation factor must be >= 1",
        });
    }
    Ok(())
}

/// Reject a backend that cannot run `width` kernels on this CPU.
pub fn validate_backend(backend: Backend, width: VectorWidth) -> Result<(), ConfigError> {
    if backend.ensure(width).is_err() {
        return Err(ConfigError::Backend {
            backend,
            width,
            supported: backend.supports(width),
        });
    }
    Ok(())
}
