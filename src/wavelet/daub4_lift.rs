//! Daubechies-4 wavelet, lifting form.
//!
//! Three sequential lifting sweeps (odd-predict, even-update, odd-update)
//! followed by a de-interleave that folds in the two normalization
//! constants `k1`/`k2`. Every sweep after the first reads values already
//! touched by the previous sweep, so forward and inverse must apply their
//! sweeps in exactly reversed order -- see the `tests` module for a
//! worked check of that dependency chain.
//!
//! Unlike the other four families, this one does not take a `subtile`
//! argument on its 2D/3D entry points: the original library always runs
//! it as a fully joint (non-subtile) transform.

use super::driver::{self, Step1D};
use super::WaveletError;

const A1: f64 = 1.7320508075688772; // sqrt(3)
const B1: f64 = 0.4330127018922193; // sqrt(3) / 4
const B2: f64 = -6.698_729_810_778_07e-2; // (sqrt(3) - 2) / 4
const K1: f64 = 1.3660254037844386; // (sqrt(3) + 1) / 2
const K2: f64 = 0.3660254037844386; // (sqrt(3) - 1) / 2
const IK1: f64 = 0.7320508075688773; // 1 / k1
const IK2: f64 = 2.7320508075688776; // 1 / k2

pub(crate) struct Daub4Lift;

impl Step1D for Daub4Lift {
    fn forward_step(
        s: &mut [f64],
        base: usize,
        width: usize,
        stride: usize,
        work: &mut [f64],
    ) -> Result<(), WaveletError> {
        driver::require_even_and_long_enough(width, work.len())?;
        let w = &mut work[..width];

        for i in 0..width {
            w[i] = s[base + stride * i];
        }

        let mut i = 1;
        while i < width {
            w[i] -= A1 * w[i - 1];
            i += 2;
        }

        let mut i = 0;
        while i < width {
            w[i] += B1 * w[i + 1] + B2 * w[(i + 3) % width];
            i += 2;
        }

        let mut i = 1;
        while i < width {
            w[i] += w[(width + i - 3) % width];
            i += 2;
        }

        let half = width / 2;
        for k in 0..half {
            s[base + stride * k] = K1 * w[2 * k];
            s[base + stride * (half + k)] = K2 * w[2 * k + 1];
        }

        Ok(())
    }

    fn inverse_step(
        s: &mut [f64],
        base: usize,
        width: usize,
        stride: usize,
        work: &mut [f64],
    ) -> Result<(), WaveletError> {
        driver::require_even_and_long_enough(width, work.len())?;
        let w = &mut work[..width];
        let half = width / 2;

        for k in 0..half {
            w[2 * k] = IK1 * s[base + stride * k];
            w[2 * k + 1] = IK2 * s[base + stride * (half + k)];
        }

        let mut i = 1;
        while i < width {
            w[i] -= w[(width + i - 3) % width];
            i += 2;
        }

        let mut i = 0;
        while i < width {
            w[i] -= B1 * w[i + 1] + B2 * w[(i + 3) % width];
            i += 2;
        }

        let mut i = 1;
        while i < width {
            w[i] += A1 * w[i - 1];
            i += 2;
        }

        for i in 0..width {
            s[base + stride * i] = w[i];
        }

        Ok(())
    }

    const SUPPORTS_SUBTILE: bool = false;
}

pub fn forward1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::forward1d::<Daub4Lift>(s, width, stride, work)
}

pub fn inverse1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::inverse1d::<Daub4Lift>(s, width, stride, work)
}

pub fn forward1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Daub4Lift::forward_step(s, 0, width, stride, work)
}

pub fn inverse1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Daub4Lift::inverse_step(s, 0, width, stride, work)
}

pub fn forward2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward2d::<Daub4Lift>(s, width, height, rowstride, work, false)
}

pub fn inverse2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse2d::<Daub4Lift>(s, width, height, rowstride, work, false)
}

pub fn forward2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward2d_step::<Daub4Lift>(s, width, height, rowstride, work)
}

pub fn inverse2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse2d_step::<Daub4Lift>(s, width, height, rowstride, work)
}

#[allow(clippy::too_many_arguments)]
pub fn forward3d(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward3d::<Daub4Lift>(s, width, height, depth, rowstride, slicestride, work, false)
}

#[allow(clippy::too_many_arguments)]
pub fn inverse3d(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse3d::<Daub4Lift>(s, width, height, depth, rowstride, slicestride, work, false)
}

#[allow(clippy::too_many_arguments)]
pub fn forward3d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward3d_step::<Daub4Lift>(s, width, height, depth, rowstride, slicestride, work)
}

#[allow(clippy::too_many_arguments)]
pub fn inverse3d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse3d_step::<Daub4Lift>(s, width, height, depth, rowstride, slicestride, work)
}

pub fn forward3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward3d_2dstep::<Daub4Lift>(s, width, height, stride, rowstride, work)
}

pub fn inverse3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse3d_2dstep::<Daub4Lift>(s, width, height, stride, rowstride, work)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_single_step() {
        let input: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut s = input;
        let mut work = [0.0; 8];
        forward1d_step(&mut s, 8, 1, &mut work).unwrap();
        inverse1d_step(&mut s, 8, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn roundtrip_multilevel() {
        let input: [f64; 32] = {
            let mut v = [0.0; 32];
            for (i, x) in v.iter_mut().enumerate() {
                *x = (i as f64 * 0.37).sin() * 5.0 - 1.0;
            }
            v
        };
        let mut s = input;
        let mut work = [0.0; 32];
        forward1d(&mut s, 32, 1, &mut work).unwrap();
        inverse1d(&mut s, 32, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn roundtrip_2d_non_square() {
        const W: usize = 16;
        const H: usize = 8;
        let mut s = [0.0; W * H];
        for (i, v) in s.iter_mut().enumerate() {
            *v = ((i * 7 + 3) % 11) as f64 - 5.0;
        }
        let original = s;
        let mut work = [0.0; W];
        forward2d(&mut s, W, H, W, &mut work).unwrap();
        inverse2d(&mut s, W, H, W, &mut work).unwrap();
        for (a, b) in original.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }
}
