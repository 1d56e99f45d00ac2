//! Daubechies-4 wavelet, direct convolution (DWT) form.
//!
//! Unlike [`super::daub4_lift`], this family convolves against explicit
//! filter taps with periodic boundary wraparound rather than lifting in
//! place. `H0..H3` are the analysis low-pass taps (summing to `1`, so a
//! constant signal maps to a constant approximation and zero detail);
//! `G0..G3` are the quadrature-mirror high-pass taps built from them.
//! `HB`/`GB` are the doubled synthesis duals the inverse needs to undo
//! the energy loss of decimate-by-2 (`HBk = 2*Hk`, `GBk = 2*Gk`).

use super::boundary::periodic;
use super::driver::{self, Step1D};
use super::WaveletError;

const H0: f64 = 0.341_506_350_946_109_65;
const H1: f64 = 0.591_506_350_946_109_6;
const H2: f64 = 0.158_493_649_053_890_32;
const H3: f64 = -0.091_506_350_946_109_65;

const G0: f64 = H3;
const G1: f64 = -H2;
const G2: f64 = H1;
const G3: f64 = -H0;

const HB: [f64; 4] = [2.0 * H0, 2.0 * H1, 2.0 * H2, 2.0 * H3];
const GB: [f64; 4] = [2.0 * G0, 2.0 * G1, 2.0 * G2, 2.0 * G3];

pub(crate) struct Daub4Dwt;

impl Step1D for Daub4Dwt {
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

        let half = width / 2;
        for k in 0..half {
            let t0 = w[periodic(2 * k as i64, width)];
            let t1 = w[periodic(2 * k as i64 + 1, width)];
            let t2 = w[periodic(2 * k as i64 + 2, width)];
            let t3 = w[periodic(2 * k as i64 + 3, width)];

            s[base + stride * k] = H0 * t0 + H1 * t1 + H2 * t2 + H3 * t3;
            s[base + stride * (half + k)] = G0 * t0 + G1 * t1 + G2 * t2 + G3 * t3;
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
        let half = width / 2;
        let w = &mut work[..width];

        for i in 0..half {
            w[2 * i] = s[base + stride * i];
            w[2 * i + 1] = s[base + stride * (i + half)];
        }

        for i in 0..half {
            let near = w[2 * i];
            let near_hi = w[2 * i + 1];
            let far0 = w[periodic(2 * i as i64 - 2, width)];
            let far1 = w[periodic(2 * i as i64 - 1, width)];

            s[base + stride * (2 * i)] = HB[2] * far0 + HB[1] * far1 + HB[0] * near + HB[3] * near_hi;
            s[base + stride * (2 * i + 1)] = GB[0] * far0 + GB[3] * far1 + GB[2] * near + GB[1] * near_hi;
        }

        Ok(())
    }
}

pub fn forward1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::forward1d::<Daub4Dwt>(s, width, stride, work)
}

pub fn inverse1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::inverse1d::<Daub4Dwt>(s, width, stride, work)
}

pub fn forward1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Daub4Dwt::forward_step(s, 0, width, stride, work)
}

pub fn inverse1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Daub4Dwt::inverse_step(s, 0, width, stride, work)
}

pub fn forward2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::forward2d::<Daub4Dwt>(s, width, height, rowstride, work, subtile)
}

pub fn inverse2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::inverse2d::<Daub4Dwt>(s, width, height, rowstride, work, subtile)
}

pub fn forward2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward2d_step::<Daub4Dwt>(s, width, height, rowstride, work)
}

pub fn inverse2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse2d_step::<Daub4Dwt>(s, width, height, rowstride, work)
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
    driver::forward3d::<Daub4Dwt>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    driver::inverse3d::<Daub4Dwt>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    driver::forward3d_step::<Daub4Dwt>(s, width, height, depth, rowstride, slicestride, work)
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
    driver::inverse3d_step::<Daub4Dwt>(s, width, height, depth, rowstride, slicestride, work)
}

pub fn forward3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward3d_2dstep::<Daub4Dwt>(s, width, height, stride, rowstride, work)
}

pub fn inverse3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse3d_2dstep::<Daub4Dwt>(s, width, height, stride, rowstride, work)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_signal_collapses_to_dc() {
        let mut s = [2.5; 16];
        let mut work = [0.0; 16];
        forward1d_step(&mut s, 16, 1, &mut work).unwrap();
        for &v in &s[..8] {
            assert!((v - 2.5).abs() < 1e-9, "expected ~2.5, got {v}");
        }
        for &v in &s[8..] {
            assert!(v.abs() < 1e-9, "expected ~0, got {v}");
        }
    }

    #[test]
    fn roundtrip_single_step() {
        let input: [f64; 8] = [1.0, -2.0, 3.5, 0.5, -1.5, 4.0, -3.0, 2.0];
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
        let mut input = [0.0; 64];
        for (i, x) in input.iter_mut().enumerate() {
            *x = (i as f64 * 0.21).cos() * 3.0;
        }
        let mut s = input;
        let mut work = [0.0; 64];
        forward1d(&mut s, 64, 1, &mut work).unwrap();
        inverse1d(&mut s, 64, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn roundtrip_2d_non_square_subtile() {
        const W: usize = 16;
        const H: usize = 8;
        let mut s = [0.0; W * H];
        for (i, v) in s.iter_mut().enumerate() {
            *v = ((i * 5 + 1) % 13) as f64 - 6.0;
        }
        let original = s;
        let mut work = [0.0; W];
        forward2d(&mut s, W, H, W, &mut work, true).unwrap();
        inverse2d(&mut s, W, H, W, &mut work, true).unwrap();
        for (a, b) in original.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }
}
