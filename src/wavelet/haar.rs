//! Haar wavelet, lifting form.
//!
//! Forward step: predict every odd sample from its left neighbor, update
//! every even sample from its (already-predicted) right neighbor, then
//! de-interleave with a `-0.5` scale on the detail half so that a
//! constant input maps to a constant approximation coefficient and zero
//! detail, preserving the signal's DC component in the approximation
//! band.

use super::driver::{self, Step1D};
use super::WaveletError;

pub(crate) struct Haar;

impl Step1D for Haar {
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
            w[i] -= w[i - 1];
            i += 2;
        }

        let mut i = 0;
        while i < width {
            w[i] += 0.5 * w[i + 1];
            i += 2;
        }

        let half = width / 2;
        for k in 0..half {
            s[base + stride * k] = w[2 * k];
            s[base + stride * (half + k)] = -0.5 * w[2 * k + 1];
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
            w[2 * k] = s[base + stride * k];
            w[2 * k + 1] = -2.0 * s[base + stride * (half + k)];
        }

        let mut i = 0;
        while i < width {
            w[i] -= 0.5 * w[i + 1];
            i += 2;
        }

        let mut i = 1;
        while i < width {
            w[i] += w[i - 1];
            i += 2;
        }

        for i in 0..width {
            s[base + stride * i] = w[i];
        }

        Ok(())
    }
}

pub fn forward1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::forward1d::<Haar>(s, width, stride, work)
}

pub fn inverse1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::inverse1d::<Haar>(s, width, stride, work)
}

pub fn forward1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Haar::forward_step(s, 0, width, stride, work)
}

pub fn inverse1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Haar::inverse_step(s, 0, width, stride, work)
}

pub fn forward2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::forward2d::<Haar>(s, width, height, rowstride, work, subtile)
}

pub fn inverse2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::inverse2d::<Haar>(s, width, height, rowstride, work, subtile)
}

pub fn forward2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward2d_step::<Haar>(s, width, height, rowstride, work)
}

pub fn inverse2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse2d_step::<Haar>(s, width, height, rowstride, work)
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
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::forward3d::<Haar>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::inverse3d::<Haar>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    driver::forward3d_step::<Haar>(s, width, height, depth, rowstride, slicestride, work)
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
    driver::inverse3d_step::<Haar>(s, width, height, depth, rowstride, slicestride, work)
}

pub fn forward3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward3d_2dstep::<Haar>(s, width, height, stride, rowstride, work)
}

pub fn inverse3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse3d_2dstep::<Haar>(s, width, height, stride, rowstride, work)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_signal_collapses_to_dc() {
        let mut s = [3.14; 32];
        let mut work = [0.0; 32];
        forward1d(&mut s, 32, 1, &mut work).unwrap();
        assert!((s[0] - 3.14).abs() < 1e-6);
        for &v in &s[1..] {
            assert!(v.abs() < 1e-6, "expected ~0, got {v}");
        }
        inverse1d(&mut s, 32, 1, &mut work).unwrap();
        for &v in &s {
            assert!((v - 3.14).abs() < 1e-6);
        }
    }

    #[test]
    fn roundtrip_random_signal() {
        let input: [f64; 16] = [
            0.3, -1.2, 4.5, 2.2, -0.1, 9.9, 3.3, -4.4, 1.1, 0.0, -8.8, 6.6, 2.9, -3.1, 7.7, -2.2,
        ];
        let mut s = input;
        let mut work = [0.0; 16];
        forward1d(&mut s, 16, 1, &mut work).unwrap();
        inverse1d(&mut s, 16, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn single_step_is_its_own_inverse_partner() {
        let input: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut s = input;
        let mut work = [0.0; 8];
        forward1d_step(&mut s, 8, 1, &mut work).unwrap();
        inverse1d_step(&mut s, 8, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn rejects_odd_extent() {
        let mut s = [1.0, 2.0, 3.0];
        let mut work = [0.0; 3];
        assert_eq!(
            forward1d_step(&mut s, 3, 1, &mut work),
            Err(WaveletError::OddOrTooShort { width: 3 })
        );
    }

    #[test]
    fn rejects_non_power_of_two_in_multilevel_driver() {
        let mut s = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut work = [0.0; 6];
        assert_eq!(
            forward1d(&mut s, 6, 1, &mut work),
            Err(WaveletError::NonPowerOfTwo { extent: 6 })
        );
    }
}
