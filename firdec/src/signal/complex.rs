//! Conversions between `Complex32` samples and the flat interleaved layout
//! the complex kernels run on.

use alloc::vec::Vec;

use num_complex::Complex32;

/// Flatten complex samples into `re, im, re, im, ..`.
pub fn interleave(samples: &[Complex32]) -> Vec<f32> {
    samples.iter().flat_map(|c| [c.re, c.im]).collect()
}

/// Pair up an interleaved `re, im` buffer.
pub fn deinterleave(data: &[f32]) -> Result<Vec<Complex32>, firdec_core::Error> {
    if data.len() % 2 != 0 {
        return Err(firdec_core::Error::OddInterleavedLength {
            arg: "data",
            len: data.len(),
        });
    }
    Ok(data
        .chunks_exact(2)
        .map(|pair| Complex32::new(pair[0], pair[1]))
        .collect())
}
