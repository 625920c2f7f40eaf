//! Scalar reference loops.

use num_traits::NumAssign;

use crate::window::{check_complex, check_real, for_each_window};
use crate::Result;

#[inline]
fn dot<F>(window: &[F], coeffs: &[F]) -> F
where
    F: NumAssign + Copy,
{
    let mut acc = F::zero();
    for (&x, &c) in window.iter().zip(coeffs) {
        acc += x * c;
    }
    acc
}

#[inline]
fn dot_interleaved<F>(window: &[F], coeffs: &[F]) -> (F, F)
where
    F: NumAssign + Copy,
{
    let mut re = F::zero();
    let mut im = F::zero();
    for ((&x, &y), &c) in window.iter().zip(&window[1..]).zip(coeffs) {
        re += x * c;
        im += y * c;
    }
    (re, im)
}

/// Real FIR filter: `out[i] = Σ_j input[i + j] * coeffs[j]`.
///
/// Coefficients are applied in forward order (a correlation, not a flipped
/// convolution). `input` must hold at least `out.len() + coeffs.len() - 1`
/// samples.
///
/// ```
/// let mut out = [0.0f32; 1];
/// firdec_core::filter_rr(&[1.0, 0.0, 0.0, 0.0], &[5.0, 9.0, 9.0, 9.0], &mut out).unwrap();
/// assert_eq!(out, [5.0]);
/// ```
pub fn filter_rr<F>(coeffs: &[F], input: &[F], out: &mut [F]) -> Result<()>
where
    F: NumAssign + Copy,
{
    decimate_rr(1, coeffs, input, out)
}

/// Complex FIR filter over interleaved `re, im` pairs.
///
/// Pair `m` correlates the taps against the `coeffs.len()` consecutive
/// floats starting at `2m` for the real part, and against the same run
/// shifted by one float for the imaginary part:
/// `out[2m] = Σ_j input[2m + j] * coeffs[j]` and
/// `out[2m + 1] = Σ_j input[2m + j + 1] * coeffs[j]`.
/// `out.len()` must be even; `input` must hold `out.len() + coeffs.len() - 1`
/// floats.
///
/// ```
/// let mut out = [0.0f32; 2];
/// let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// firdec_core::filter_rc(&[1.0, 0.5, 0.25, 0.125], &input, &mut out).unwrap();
/// assert_eq!(out, [3.25, 5.125]);
/// ```
pub fn filter_rc<F>(coeffs: &[F], input: &[F], out: &mut [F]) -> Result<()>
where
    F: NumAssign + Copy,
{
    decimate_rc(1, coeffs, input, out)
}

/// Decimating real FIR filter. The window advances `factor` samples per output.
///
/// ```
/// let mut out = [0.0f32; 2];
/// let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// firdec_core::decimate_rr(2, &[1.0; 4], &input, &mut out).unwrap();
/// assert_eq!(out, [10.0, 18.0]);
/// ```
pub fn decimate_rr<F>(factor: usize, coeffs: &[F], input: &[F], out: &mut [F]) -> Result<()>
where
    F: NumAssign + Copy,
{
    check_real(coeffs.len(), input.len(), out.len(), factor, 1)?;
    for_each_window(input, coeffs.len(), factor, out, |window| {
        dot(window, coeffs)
    });
    Ok(())
}

/// Decimating complex FIR filter. The window advances `factor` complex
/// samples (`2 * factor` floats) per complex output.
pub fn decimate_rc<F>(factor: usize, coeffs: &[F], input: &[F], out: &mut [F]) -> Result<()>
where
    F: NumAssign + Copy,
{
    check_complex(coeffs.len(), input.len(), out.len(), factor)?;
    let span = coeffs.len() + 1;
    let stride = 2 * factor;
    for (m, pair) in out.chunks_exact_mut(2).enumerate() {
        let start = m * stride;
        let (re, im) = dot_interleaved(&input[start..start + span], coeffs);
        pair[0] = re;
        pair[1] = im;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f32> {
        (0..len).map(|_| rng.random_range(-1.0f32..1.0)).collect()
    }

    #[test]
    fn filter_rr_picks_first_sample_with_unit_impulse() {
        let mut out = [0.0f32; 1];
        filter_rr(&[1.0, 0.0, 0.0, 0.0], &[5.0, 9.0, 9.0, 9.0], &mut out)
            .expect("input covers one window");
        assert_eq!(out, [5.0]);
    }

    #[test]
    fn filter_rr_is_forward_correlation() {
        let coeffs = [1.0f32, 10.0, 100.0];
        let input = [1.0f32, 2.0, 3.0, 4.0];
        let mut out = [0.0f32; 2];
        filter_rr(&coeffs, &input, &mut out).expect("valid geometry");
        assert_eq!(out, [321.0, 432.0]);
    }

    #[test]
    fn decimate_rr_box_filter() {
        let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut out = [0.0f32; 2];
        decimate_rr(2, &[1.0; 4], &input, &mut out).expect("valid geometry");
        assert_eq!(out, [10.0, 18.0]);
    }

    #[test]
    fn decimate_factor_one_equals_filter() {
        let mut rng = StdRng::seed_from_u64(11);
        let coeffs = random_vec(&mut rng, 13);
        let input = random_vec(&mut rng, 200);

        let mut filtered = vec![0.0f32; 188];
        let mut decimated = vec![0.0f32; 188];
        filter_rr(&coeffs, &input, &mut filtered).expect("valid geometry");
        decimate_rr(1, &coeffs, &input, &mut decimated).expect("valid geometry");
        assert_eq!(filtered, decimated);

        let mut filtered_c = vec![0.0f32; 160];
        let mut decimated_c = vec![0.0f32; 160];
        filter_rc(&coeffs, &input, &mut filtered_c).expect("valid geometry");
        decimate_rc(1, &coeffs, &input, &mut decimated_c).expect("valid geometry");
        assert_eq!(filtered_c, decimated_c);
    }

    #[test]
    fn complex_parts_are_shifted_real_windows() {
        let mut rng = StdRng::seed_from_u64(3);
        let coeffs = random_vec(&mut rng, 7);
        let factor = 3;
        let pairs = 5;
        let input = random_vec(&mut rng, (pairs - 1) * 2 * factor + coeffs.len() + 1);

        let mut out = vec![0.0f32; 2 * pairs];
        decimate_rc(factor, &coeffs, &input, &mut out).expect("valid geometry");

        // Real parts start on even floats, imaginary parts one float later.
        let mut re_out = vec![0.0f32; pairs];
        let mut im_out = vec![0.0f32; pairs];
        decimate_rr(2 * factor, &coeffs, &input, &mut re_out).expect("valid geometry");
        decimate_rr(2 * factor, &coeffs, &input[1..], &mut im_out).expect("valid geometry");

        for m in 0..pairs {
            assert_relative_eq!(out[2 * m], re_out[m]);
            assert_relative_eq!(out[2 * m + 1], im_out[m]);
        }
    }

    #[test]
    fn complex_pair_matches_hand_computation() {
        let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = [0.0f32; 4];
        filter_rc(&[1.0, 0.5], &input, &mut out).expect("valid geometry");
        // [1, 2] . [1, .5], [2, 3] . [1, .5], then the same two steps later.
        assert_eq!(out, [2.0, 3.5, 5.0, 6.5]);
    }

    #[test]
    fn complex_input_of_num_plus_taps_covers_every_window() {
        let coeffs = [1.0f32, 0.5, 0.25, 0.125];

        let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = [0.0f32; 2];
        filter_rc(&coeffs, &input, &mut out).expect("num + taps floats");
        assert_eq!(out, [3.25, 5.125]);

        let input: Vec<f32> = (1..=8).map(|x| x as f32).collect();
        let mut out = [0.0f32; 4];
        filter_rc(&coeffs, &input, &mut out).expect("num + taps floats");
        assert_eq!(out, [3.25, 5.125, 7.0, 8.875]);

        // The last window reads exactly to the end.
        filter_rc(&coeffs, &input[..7], &mut out).expect("num + taps - 1 floats");
        assert_eq!(
            filter_rc(&coeffs, &input[..6], &mut out),
            Err(Error::InputTooShort {
                required: 7,
                got: 6
            })
        );
    }

    #[test]
    fn works_for_f64() {
        let mut out = [0.0f64; 3];
        filter_rr(&[0.5f64, 0.5], &[2.0, 4.0, 6.0, 8.0], &mut out).expect("valid geometry");
        assert_eq!(out, [3.0, 5.0, 7.0]);
    }

    #[test]
    fn short_input_is_reported_and_output_untouched() {
        let mut out = [-1.0f32; 3];
        let err = filter_rr(&[1.0; 4], &[0.0; 5], &mut out).expect_err("needs 6 samples");
        assert_eq!(
            err,
            Error::InputTooShort {
                required: 6,
                got: 5
            }
        );
        assert_eq!(out, [-1.0; 3]);

        let err = decimate_rc(2, &[1.0; 2], &[0.0; 6], &mut [0.0f32; 4])
            .expect_err("needs 7 floats");
        assert_eq!(
            err,
            Error::InputTooShort {
                required: 7,
                got: 6
            }
        );
    }

    #[test]
    fn degenerate_arguments_are_rejected() {
        let mut out = [0.0f32; 2];
        assert_eq!(
            filter_rr::<f32>(&[], &[1.0; 4], &mut out),
            Err(Error::EmptyCoefficients)
        );
        assert_eq!(
            decimate_rr(0, &[1.0f32], &[1.0; 4], &mut out),
            Err(Error::ZeroFactor)
        );
        assert_eq!(
            filter_rc(&[1.0f32], &[1.0; 4], &mut [0.0; 3]),
            Err(Error::OddInterleavedLength { arg: "out", len: 3 })
        );
    }

    #[test]
    fn empty_output_reads_nothing() {
        filter_rr(&[1.0f32; 8], &[], &mut []).expect("no windows requested");
        filter_rc(&[1.0f32; 8], &[], &mut []).expect("no windows requested");
    }
}
