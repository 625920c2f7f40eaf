//! Sliding-window geometry shared by every kernel.
//!
//! Real kernels place output `i` over `input[i * factor..i * factor + taps]`.
//! Complex kernels work on interleaved `re, im` pairs: output pair `m`
//! reads `taps + 1` floats starting at `m * 2 * factor`, the real part from
//! the first `taps` of them and the imaginary part from the last `taps`.

use crate::{Error, Result};

/// Minimum input length for `num` real outputs.
///
/// Saturates instead of overflowing, so absurd requests fail the length
/// check rather than wrapping.
pub fn required_input_len(num: usize, taps: usize, factor: usize) -> usize {
    if num == 0 {
        return 0;
    }
    (num - 1).saturating_mul(factor).saturating_add(taps)
}

/// Minimum interleaved input length (floats) for `num` interleaved output floats.
pub fn required_input_len_complex(num: usize, taps: usize, factor: usize) -> usize {
    let pairs = num / 2;
    if pairs == 0 {
        return 0;
    }
    (pairs - 1)
        .saturating_mul(factor.saturating_mul(2))
        .saturating_add(taps)
        .saturating_add(1)
}

/// Largest number of real outputs `input_len` samples can feed.
pub fn output_len(input_len: usize, taps: usize, factor: usize) -> usize {
    if taps == 0 || factor == 0 || input_len < taps {
        return 0;
    }
    (input_len - taps) / factor + 1
}

/// Largest interleaved output length (floats) `input_len` interleaved floats can feed.
pub fn output_len_complex(input_len: usize, taps: usize, factor: usize) -> usize {
    if taps == 0 || factor == 0 || input_len <= taps {
        return 0;
    }
    2 * ((input_len - taps - 1) / factor.saturating_mul(2) + 1)
}

pub(crate) fn check_real(
    taps: usize,
    input_len: usize,
    num: usize,
    factor: usize,
    lanes: usize,
) -> Result<()> {
    if taps == 0 {
        return Err(Error::EmptyCoefficients);
    }
    if factor == 0 {
        return Err(Error::ZeroFactor);
    }
    if taps % lanes != 0 {
        return Err(Error::MisalignedTaps { taps, lanes });
    }
    let required = required_input_len(num, taps, factor);
    if input_len < required {
        return Err(Error::InputTooShort {
            required,
            got: input_len,
        });
    }
    Ok(())
}

pub(crate) fn check_complex(taps: usize, input_len: usize, num: usize, factor: usize) -> Result<()> {
    if taps == 0 {
        return Err(Error::EmptyCoefficients);
    }
    if factor == 0 {
        return Err(Error::ZeroFactor);
    }
    if num % 2 != 0 {
        return Err(Error::OddInterleavedLength { arg: "out", len: num });
    }
    let required = required_input_len_complex(num, taps, factor);
    if input_len < required {
        return Err(Error::InputTooShort {
            required,
            got: input_len,
        });
    }
    Ok(())
}

/// Write `dot(window)` for every real output window.
///
/// Callers run [`check_real`] first; the slicing below is then in bounds.
#[inline]
pub(crate) fn for_each_window<T, F>(input: &[T], taps: usize, factor: usize, out: &mut [T], mut dot: F)
where
    F: FnMut(&[T]) -> T,
{
    for (i, y) in out.iter_mut().enumerate() {
        let start = i * factor;
        *y = dot(&input[start..start + taps]);
    }
}
