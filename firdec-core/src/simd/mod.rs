//! Vectorized real-signal kernels.
//!
//! All backends share one accumulation order so their results are
//! bit-identical to each other (but not to the scalar reference):
//!
//! * per lane `acc[l] = acc[l] + coeff[l] * sample[l]`, multiply then add,
//!   never fused;
//! * 128-bit reduction `(a0 + a1) + (a2 + a3)`;
//! * 256-bit reduction: each 128-bit half reduced as above, then
//!   `low + high`.
//!
//! There is no tail loop. The tap count must be a multiple of the lane
//! count or the call fails with [`Error::MisalignedTaps`].

use core::fmt;

use crate::window::{check_real, for_each_window};
use crate::{Error, Result};

#[cfg(target_arch = "aarch64")]
mod neon;
mod portable;
#[cfg(target_arch = "x86_64")]
mod x86;

/// Vector register width of a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorWidth {
    /// 128-bit registers, 4 `f32` lanes.
    W128,
    /// 256-bit registers, 8 `f32` lanes.
    W256,
}

impl VectorWidth {
    /// Number of `f32` lanes per register.
    pub const fn lanes(self) -> usize {
        match self {
            VectorWidth::W128 => 4,
            VectorWidth::W256 => 8,
        }
    }
}

impl fmt::Display for VectorWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorWidth::W128 => write!(f, "128-bit"),
            VectorWidth::W256 => write!(f, "256-bit"),
        }
    }
}

/// Instruction set used to run a vector kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Fixed-size lane arrays, available on every target.
    Portable,
    /// x86_64 SSE3 (128-bit only).
    Sse3,
    /// x86_64 AVX (256-bit only).
    Avx,
    /// aarch64 NEON (128-bit only).
    Neon,
}

impl Backend {
    /// Every backend, in no particular order.
    pub const ALL: [Backend; 4] = [Backend::Portable, Backend::Sse3, Backend::Avx, Backend::Neon];

    /// Best backend for `width` on the running CPU, without logging.
    pub fn best(width: VectorWidth) -> Self {
        match width {
            VectorWidth::W128 if Backend::Sse3.is_available() => Backend::Sse3,
            VectorWidth::W128 if Backend::Neon.is_available() => Backend::Neon,
            VectorWidth::W256 if Backend::Avx.is_available() => Backend::Avx,
            _ => Backend::Portable,
        }
    }

    /// Select the best backend for `width` and log the choice.
    ///
    /// Kernels call this once at construction.
    pub fn detect(width: VectorWidth) -> Self {
        let backend = Backend::best(width);
        log::debug!("selected {backend} backend for {width} FIR kernels");
        backend
    }

    /// Whether the running CPU can execute this backend.
    ///
    /// With the `std` feature this queries the CPU at runtime; without it
    /// only features enabled at compile time count.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Portable => true,
            Backend::Sse3 => has_sse3(),
            Backend::Avx => has_avx(),
            Backend::Neon => has_neon(),
        }
    }

    /// Whether this backend implements `width`.
    pub const fn supports(self, width: VectorWidth) -> bool {
        matches!(
            (self, width),
            (Backend::Portable, _)
                | (Backend::Sse3, VectorWidth::W128)
                | (Backend::Neon, VectorWidth::W128)
                | (Backend::Avx, VectorWidth::W256)
        )
    }

    /// Fail unless this backend can run `width` kernels here.
    pub fn ensure(self, width: VectorWidth) -> Result<()> {
        if !self.supports(width) {
            return Err(Error::UnsupportedWidth {
                backend: self,
                width,
            });
        }
        if !self.is_available() {
            return Err(Error::BackendUnavailable { backend: self });
        }
        Ok(())
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Portable => "portable",
            Backend::Sse3 => "sse3",
            Backend::Avx => "avx",
            Backend::Neon => "neon",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(all(target_arch = "x86_64", feature = "std"))]
fn has_sse3() -> bool {
    std::is_x86_feature_detected!("sse3")
}

#[cfg(all(target_arch = "x86_64", not(feature = "std")))]
fn has_sse3() -> bool {
    cfg!(target_feature = "sse3")
}

#[cfg(not(target_arch = "x86_64"))]
fn has_sse3() -> bool {
    false
}

#[cfg(all(target_arch = "x86_64", feature = "std"))]
fn has_avx() -> bool {
    std::is_x86_feature_detected!("avx")
}

#[cfg(all(target_arch = "x86_64", not(feature = "std")))]
fn has_avx() -> bool {
    cfg!(target_feature = "avx")
}

#[cfg(not(target_arch = "x86_64"))]
fn has_avx() -> bool {
    false
}

#[cfg(all(target_arch = "aarch64", feature = "std"))]
fn has_neon() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(all(target_arch = "aarch64", not(feature = "std")))]
fn has_neon() -> bool {
    cfg!(target_feature = "neon")
}

#[cfg(not(target_arch = "aarch64"))]
fn has_neon() -> bool {
    false
}

/// 128-bit real FIR filter on the best available backend.
pub fn filter_rr_v128(coeffs: &[f32], input: &[f32], out: &mut [f32]) -> Result<()> {
    decimate_rr_v128(1, coeffs, input, out)
}

/// 256-bit real FIR filter on the best available backend.
pub fn filter_rr_v256(coeffs: &[f32], input: &[f32], out: &mut [f32]) -> Result<()> {
    decimate_rr_v256(1, coeffs, input, out)
}

/// 128-bit decimating real FIR filter on the best available backend.
///
/// `coeffs.len()` must be a multiple of 4.
pub fn decimate_rr_v128(factor: usize, coeffs: &[f32], input: &[f32], out: &mut [f32]) -> Result<()> {
    let width = VectorWidth::W128;
    decimate_rr_with(Backend::best(width), width, factor, coeffs, input, out)
}

/// 256-bit decimating real FIR filter on the best available backend.
///
/// `coeffs.len()` must be a multiple of 8.
pub fn decimate_rr_v256(factor: usize, coeffs: &[f32], input: &[f32], out: &mut [f32]) -> Result<()> {
    let width = VectorWidth::W256;
    decimate_rr_with(Backend::best(width), width, factor, coeffs, input, out)
}

/// Decimating real FIR filter on an explicit backend and width.
pub fn decimate_rr_with(
    backend: Backend,
    width: VectorWidth,
    factor: usize,
    coeffs: &[f32],
    input: &[f32],
    out: &mut [f32],
) -> Result<()> {
    backend.ensure(width)?;
    check_real(coeffs.len(), input.len(), out.len(), factor, width.lanes())?;
    let taps = coeffs.len();
    match (backend, width) {
        (Backend::Portable, VectorWidth::W128) => {
            for_each_window(input, taps, factor, out, |w| portable::dot_x4(w, coeffs));
        }
        (Backend::Portable, VectorWidth::W256) => {
            for_each_window(input, taps, factor, out, |w| portable::dot_x8(w, coeffs));
        }
        // SAFETY: `ensure` confirmed the CPU feature and `check_real` the
        // lane alignment and input length.
        #[cfg(target_arch = "x86_64")]
        (Backend::Sse3, VectorWidth::W128) => unsafe {
            x86::decimate_sse3(factor, coeffs, input, out)
        },
        #[cfg(target_arch = "x86_64")]
        (Backend::Avx, VectorWidth::W256) => unsafe {
            x86::decimate_avx(factor, coeffs, input, out)
        },
        #[cfg(target_arch = "aarch64")]
        (Backend::Neon, VectorWidth::W128) => unsafe {
            neon::decimate_neon(factor, coeffs, input, out)
        },
        _ => return Err(Error::UnsupportedWidth { backend, width }),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decimate_rr, filter_rr};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f32> {
        (0..len).map(|_| rng.random_range(-1.0f32..1.0)).collect()
    }

    fn available(width: VectorWidth) -> Vec<Backend> {
        Backend::ALL
            .into_iter()
            .filter(|b| b.supports(width) && b.is_available())
            .collect()
    }

    #[test]
    fn lanes_follow_width() {
        assert_eq!(VectorWidth::W128.lanes(), 4);
        assert_eq!(VectorWidth::W256.lanes(), 8);
    }

    #[test]
    fn detection_returns_usable_backend() {
        for width in [VectorWidth::W128, VectorWidth::W256] {
            let backend = Backend::detect(width);
            assert!(backend.supports(width));
            assert_eq!(backend.ensure(width), Ok(()));
        }
    }

    #[test]
    fn width_support_table() {
        assert!(Backend::Portable.supports(VectorWidth::W128));
        assert!(Backend::Portable.supports(VectorWidth::W256));
        assert!(Backend::Sse3.supports(VectorWidth::W128));
        assert!(!Backend::Sse3.supports(VectorWidth::W256));
        assert!(!Backend::Avx.supports(VectorWidth::W128));
        assert!(!Backend::Neon.supports(VectorWidth::W256));
        assert_eq!(
            Backend::Avx.ensure(VectorWidth::W128),
            Err(Error::UnsupportedWidth {
                backend: Backend::Avx,
                width: VectorWidth::W128
            })
        );
    }

    #[test]
    fn unavailable_backend_is_reported() {
        #[cfg(not(target_arch = "aarch64"))]
        assert_eq!(
            Backend::Neon.ensure(VectorWidth::W128),
            Err(Error::BackendUnavailable {
                backend: Backend::Neon
            })
        );
        #[cfg(not(target_arch = "x86_64"))]
        assert_eq!(
            Backend::Sse3.ensure(VectorWidth::W128),
            Err(Error::BackendUnavailable {
                backend: Backend::Sse3
            })
        );
    }

    #[test]
    fn vector_filters_track_scalar_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        for taps in [8usize, 16, 24, 64] {
            let coeffs = random_vec(&mut rng, taps);
            let input = random_vec(&mut rng, 512);
            let num = input.len() - taps + 1;

            let mut reference = vec![0.0f32; num];
            filter_rr(&coeffs, &input, &mut reference).expect("scalar filter");

            let mut v128 = vec![0.0f32; num];
            filter_rr_v128(&coeffs, &input, &mut v128).expect("128-bit filter");
            let mut v256 = vec![0.0f32; num];
            filter_rr_v256(&coeffs, &input, &mut v256).expect("256-bit filter");

            for i in 0..num {
                assert_relative_eq!(v128[i], reference[i], epsilon = 1e-4, max_relative = 1e-5);
                assert_relative_eq!(v256[i], reference[i], epsilon = 1e-4, max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn vector_decimators_track_scalar_reference() {
        let mut rng = StdRng::seed_from_u64(7);
        let coeffs = random_vec(&mut rng, 32);
        let input = random_vec(&mut rng, 1000);
        for factor in [1usize, 2, 3, 5, 16] {
            let num = crate::window::output_len(input.len(), coeffs.len(), factor);
            let mut reference = vec![0.0f32; num];
            decimate_rr(factor, &coeffs, &input, &mut reference).expect("scalar decimate");

            let mut v128 = vec![0.0f32; num];
            decimate_rr_v128(factor, &coeffs, &input, &mut v128).expect("128-bit decimate");
            let mut v256 = vec![0.0f32; num];
            decimate_rr_v256(factor, &coeffs, &input, &mut v256).expect("256-bit decimate");

            for i in 0..num {
                assert_relative_eq!(v128[i], reference[i], epsilon = 1e-4, max_relative = 1e-5);
                assert_relative_eq!(v256[i], reference[i], epsilon = 1e-4, max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn native_backends_are_bit_identical_to_portable() {
        let mut rng = StdRng::seed_from_u64(1234);
        let coeffs = random_vec(&mut rng, 40);
        let input = random_vec(&mut rng, 300);
        for width in [VectorWidth::W128, VectorWidth::W256] {
            for factor in [1usize, 4] {
                let num = crate::window::output_len(input.len(), coeffs.len(), factor);
                let mut expected = vec![0.0f32; num];
                decimate_rr_with(Backend::Portable, width, factor, &coeffs, &input, &mut expected)
                    .expect("portable path");
                for backend in available(width) {
                    let mut got = vec![0.0f32; num];
                    decimate_rr_with(backend, width, factor, &coeffs, &input, &mut got)
                        .expect("available backend");
                    assert_eq!(got, expected, "{backend} {width} factor {factor}");
                }
            }
        }
    }

    #[test]
    fn decimate_factor_one_equals_filter() {
        let mut rng = StdRng::seed_from_u64(99);
        let coeffs = random_vec(&mut rng, 16);
        let input = random_vec(&mut rng, 128);
        let num = input.len() - coeffs.len() + 1;

        let mut filtered = vec![0.0f32; num];
        let mut decimated = vec![0.0f32; num];
        filter_rr_v128(&coeffs, &input, &mut filtered).expect("128-bit filter");
        decimate_rr_v128(1, &coeffs, &input, &mut decimated).expect("128-bit decimate");
        assert_eq!(filtered, decimated);

        filter_rr_v256(&coeffs, &input, &mut filtered).expect("256-bit filter");
        decimate_rr_v256(1, &coeffs, &input, &mut decimated).expect("256-bit decimate");
        assert_eq!(filtered, decimated);
    }

    #[test]
    fn box_filter_scenarios_hold_on_vector_paths() {
        let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut out = [0.0f32; 2];
        decimate_rr_v128(2, &[1.0; 4], &input, &mut out).expect("aligned taps");
        assert_eq!(out, [10.0, 18.0]);

        let mut out = [0.0f32; 1];
        filter_rr_v128(&[1.0, 0.0, 0.0, 0.0], &[5.0, 9.0, 9.0, 9.0], &mut out)
            .expect("aligned taps");
        assert_eq!(out, [5.0]);

        let mut out = [0.0f32; 1];
        filter_rr_v256(&[1.0; 8], &input, &mut out).expect("aligned taps");
        assert_eq!(out, [36.0]);
    }

    #[test]
    fn misaligned_taps_are_rejected() {
        let input = [0.0f32; 32];
        let mut out = [7.0f32; 4];
        assert_eq!(
            filter_rr_v128(&[1.0; 6], &input, &mut out),
            Err(Error::MisalignedTaps { taps: 6, lanes: 4 })
        );
        assert_eq!(
            filter_rr_v256(&[1.0; 12], &input, &mut out),
            Err(Error::MisalignedTaps { taps: 12, lanes: 8 })
        );
        assert_eq!(out, [7.0; 4]);
        // 12 taps are fine on four lanes.
        filter_rr_v128(&[1.0; 12], &input, &mut out).expect("aligned on 4 lanes");
    }

    #[test]
    fn vector_paths_check_input_length() {
        let mut out = [0.0f32; 3];
        assert_eq!(
            decimate_rr_v256(2, &[1.0; 8], &[0.0; 11], &mut out),
            Err(Error::InputTooShort {
                required: 12,
                got: 11
            })
        );
        assert_eq!(
            decimate_rr_v128(0, &[1.0; 8], &[0.0; 64], &mut out),
            Err(Error::ZeroFactor)
        );
    }
}
