//! SSE3 and AVX kernels.

use core::arch::x86_64::*;

/// # Safety
///
/// The CPU must support SSE3. `coeffs.len()` must be a multiple of 4 and
/// `input` must cover every window `out` asks for.
#[target_feature(enable = "sse3")]
pub(super) unsafe fn decimate_sse3(factor: usize, coeffs: &[f32], input: &[f32], out: &mut [f32]) {
    let taps = coeffs.len();
    for (i, y) in out.iter_mut().enumerate() {
        let start = i * factor;
        *y = unsafe { dot_sse3(&input[start..start + taps], coeffs) };
    }
}

#[target_feature(enable = "sse3")]
unsafe fn dot_sse3(window: &[f32], coeffs: &[f32]) -> f32 {
    unsafe {
        let mut accum = _mm_setzero_ps();
        for (w, c) in window.chunks_exact(4).zip(coeffs.chunks_exact(4)) {
            let coeff = _mm_loadu_ps(c.as_ptr());
            let val = _mm_loadu_ps(w.as_ptr());
            accum = _mm_add_ps(accum, _mm_mul_ps(coeff, val));
        }
        accum = _mm_hadd_ps(accum, accum);
        accum = _mm_hadd_ps(accum, accum);
        _mm_cvtss_f32(accum)
    }
}

/// # Safety
///
/// The CPU must support AVX. `coeffs.len()` must be a multiple of 8 and
/// `input` must cover every window `out` asks for.
#[target_feature(enable = "avx")]
pub(super) unsafe fn decimate_avx(factor: usize, coeffs: &[f32], input: &[f32], out: &mut [f32]) {
    let taps = coeffs.len();
    for (i, y) in out.iter_mut().enumerate() {
        let start = i * factor;
        *y = unsafe { dot_avx(&input[start..start + taps], coeffs) };
    }
}

#[target_feature(enable = "avx")]
unsafe fn dot_avx(window: &[f32], coeffs: &[f32]) -> f32 {
    unsafe {
        let mut accum = _mm256_setzero_ps();
        for (w, c) in window.chunks_exact(8).zip(coeffs.chunks_exact(8)) {
            let coeff = _mm256_loadu_ps(c.as_ptr());
            let val = _mm256_loadu_ps(w.as_ptr());
            accum = _mm256_add_ps(accum, _mm256_mul_ps(coeff, val));
        }

        let mut low = _mm256_extractf128_ps(accum, 0);
        let mut high = _mm256_extractf128_ps(accum, 1);

        low = _mm_hadd_ps(low, low);
        low = _mm_hadd_ps(low, low);

        high = _mm_hadd_ps(high, high);
        high = _mm_hadd_ps(high, high);

        _mm_cvtss_f32(_mm_add_ss(low, high))
    }
}
