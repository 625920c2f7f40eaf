//! NEON kernel (128-bit).

use core::arch::aarch64::*;

/// # Safety
///
/// The CPU must support NEON. `coeffs.len()` must be a multiple of 4 and
/// `input` must cover every window `out` asks for.
#[target_feature(enable = "neon")]
pub(super) unsafe fn decimate_neon(factor: usize, coeffs: &[f32], input: &[f32], out: &mut [f32]) {
    let taps = coeffs.len();
    for (i, y) in out.iter_mut().enumerate() {
        let start = i * factor;
        *y = unsafe { dot_neon(&input[start..start + taps], coeffs) };
    }
}

#[target_feature(enable = "neon")]
unsafe fn dot_neon(window: &[f32], coeffs: &[f32]) -> f32 {
    unsafe {
        let mut accum = vdupq_n_f32(0.0);
        for (w, c) in window.chunks_exact(4).zip(coeffs.chunks_exact(4)) {
            let coeff = vld1q_f32(c.as_ptr());
            let val = vld1q_f32(w.as_ptr());
            accum = vaddq_f32(accum, vmulq_f32(coeff, val));
        }
        // [a0 + a1, a2 + a3, ..] then [(a0 + a1) + (a2 + a3), ..]
        let pairs = vpaddq_f32(accum, accum);
        let sum = vpaddq_f32(pairs, pairs);
        vgetq_lane_f32::<0>(sum)
    }
}
