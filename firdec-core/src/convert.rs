use crate::{Error, Result};

/// Widen unsigned 8-bit samples to floats, one to one, no scaling or offset.
///
/// `out.len()` must equal `input.len()`. Every `u8` is exactly
/// representable in `f32`, so the conversion is lossless.
pub fn convert_u8<F>(input: &[u8], out: &mut [F]) -> Result<()>
where
    F: From<u8>,
{
    if out.len() != input.len() {
        return Err(Error::LengthMismatch {
            arg: "out",
            expected: input.len(),
            got: out.len(),
        });
    }
    for (y, &x) in out.iter_mut().zip(input) {
        *y = F::from(x);
    }
    Ok(())
}
