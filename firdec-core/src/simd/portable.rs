//! Lane-array fallback with the same accumulation order as the intrinsic paths.

#[inline(always)]
fn accumulate<const LANES: usize>(window: &[f32], coeffs: &[f32]) -> [f32; LANES] {
    let mut acc = [0.0f32; LANES];
    for (w, c) in window.chunks_exact(LANES).zip(coeffs.chunks_exact(LANES)) {
        for lane in 0..LANES {
            acc[lane] += c[lane] * w[lane];
        }
    }
    acc
}

/// Pairwise reduction of one 128-bit register, as two horizontal adds do it.
#[inline(always)]
fn reduce_x4(a: &[f32]) -> f32 {
    (a[0] + a[1]) + (a[2] + a[3])
}

pub(super) fn dot_x4(window: &[f32], coeffs: &[f32]) -> f32 {
    let acc = accumulate::<4>(window, coeffs);
    reduce_x4(&acc)
}

pub(super) fn dot_x8(window: &[f32], coeffs: &[f32]) -> f32 {
    let acc = accumulate::<8>(window, coeffs);
    reduce_x4(&acc[..4]) + reduce_x4(&acc[4..])
}
