//! Daubechies-8 wavelet, direct convolution (DWT) form.
//!
//! Same periodic-convolution shape as [`super::daub4_dwt`], just with an
//! 8-tap analysis filter instead of 4. See that module for the shared
//! rationale behind the `HB`/`GB` doubled synthesis duals.

use super::boundary::periodic;
use super::driver::{self, Step1D};
use super::WaveletError;

const H0: f64 = 0.162_901_714_025_649_18;
const H1: f64 = 0.505_472_857_545_914_4;
const H2: f64 = 0.446_100_069_123_379_8;
const H3: f64 = -0.019_787_513_117_822_32;
const H4: f64 = -0.132_253_583_684_519_87;
const H5: f64 = 0.021_808_150_237_088_625;
const H6: f64 = 0.023_251_800_535_490_877;
const H7: f64 = -0.007_493_494_665_180_735;

const G0: f64 = H7;
const G1: f64 = -H6;
const G2: f64 = H5;
const G3: f64 = -H4;
const G4: f64 = H3;
const G5: f64 = -H2;
const G6: f64 = H1;
const G7: f64 = -H0;

const HB: [f64; 8] = [
    2.0 * H0,
    2.0 * H1,
    2.0 * H2,
    2.0 * H3,
    2.0 * H4,
    2.0 * H5,
    2.0 * H6,
    2.0 * H7,
];
const GB: [f64; 8] = [
    2.0 * G0,
    2.0 * G1,
    2.0 * G2,
    2.0 * G3,
    2.0 * G4,
    2.0 * G5,
    2.0 * G6,
    2.0 * G7,
];

pub(crate) struct Daub8Dwt;

impl Step1D for Daub8Dwt {
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
        for i in 0..half {
            let t0 = w[2 * i];
            let t1 = w[2 * i + 1];
            let t2 = w[periodic(2 * i as i64 + 2, width)];
            let t3 = w[periodic(2 * i as i64 + 3, width)];
            let t4 = w[periodic(2 * i as i64 + 4, width)];
            let t5 = w[periodic(2 * i as i64 + 5, width)];
            let t6 = w[periodic(2 * i as i64 + 6, width)];
            let t7 = w[periodic(2 * i as i64 + 7, width)];

            s[base + stride * i] =
                H0 * t0 + H1 * t1 + H2 * t2 + H3 * t3 + H4 * t4 + H5 * t5 + H6 * t6 + H7 * t7;
            s[base + stride * (half + i)] =
                G0 * t0 + G1 * t1 + G2 * t2 + G3 * t3 + G4 * t4 + G5 * t5 + G6 * t6 + G7 * t7;
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
            let n6 = w[periodic(2 * i as i64 - 6, width)];
            let n5 = w[periodic(2 * i as i64 - 5, width)];
            let n4 = w[periodic(2 * i as i64 - 4, width)];
            let n3 = w[periodic(2 * i as i64 - 3, width)];
            let n2 = w[periodic(2 * i as i64 - 2, width)];
            let n1 = w[periodic(2 * i as i64 - 1, width)];
            let near = w[2 * i];
            let near_hi = w[2 * i + 1];

            s[base + stride * (2 * i)] = HB[6] * n6
                + GB[6] * n5
                + HB[4] * n4
                + GB[4] * n3
                + HB[2] * n2
                + GB[2] * n1
                + HB[0] * near
                + GB[0] * near_hi;

            s[base + stride * (2 * i + 1)] = HB[7] * n6
                + GB[7] * n5
                + HB[5] * n4
                + GB[5] * n3
                + HB[3] * n2
                + GB[3] * n1
                + HB[1] * near
                + GB[1] * near_hi;
        }

        Ok(())
    }
}

pub fn forward1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::forward1d::<Daub8Dwt>(s, width, stride, work)
}

pub fn inverse1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::inverse1d::<Daub8Dwt>(s, width, stride, work)
}

pub fn forward1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Daub8Dwt::forward_step(s, 0, width, stride, work)
}

pub fn inverse1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Daub8Dwt::inverse_step(s, 0, width, stride, work)
}

pub fn forward2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::forward2d::<Daub8Dwt>(s, width, height, rowstride, work, subtile)
}

pub fn inverse2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::inverse2d::<Daub8Dwt>(s, width, height, rowstride, work, subtile)
}

pub fn forward2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward2d_step::<Daub8Dwt>(s, width, height, rowstride, work)
}

pub fn inverse2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse2d_step::<Daub8Dwt>(s, width, height, rowstride, work)
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
    driver::forward3d::<Daub8Dwt>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    driver::inverse3d::<Daub8Dwt>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    driver::forward3d_step::<Daub8Dwt>(s, width, height, depth, rowstride, slicestride, work)
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
    driver::inverse3d_step::<Daub8Dwt>(s, width, height, depth, rowstride, slicestride, work)
}

pub fn forward3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward3d_2dstep::<Daub8Dwt>(s, width, height, stride, rowstride, work)
}

pub fn inverse3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse3d_2dstep::<Daub8Dwt>(s, width, height, stride, rowstride, work)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_signal_collapses_to_dc() {
        let mut s = [-1.75; 32];
        let mut work = [0.0; 32];
        forward1d_step(&mut s, 32, 1, &mut work).unwrap();
        for &v in &s[..16] {
            assert!((v - -1.75).abs() < 1e-9, "expected ~-1.75, got {v}");
        }
        for &v in &s[16..] {
            assert!(v.abs() < 1e-9, "expected ~0, got {v}");
        }
    }

    #[test]
    fn roundtrip_single_step() {
        let mut input = [0.0; 16];
        for (i, x) in input.iter_mut().enumerate() {
            *x = (i as f64 - 7.5) * 0.6;
        }
        let mut s = input;
        let mut work = [0.0; 16];
        forward1d_step(&mut s, 16, 1, &mut work).unwrap();
        inverse1d_step(&mut s, 16, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn roundtrip_multilevel() {
        let mut input = [0.0; 64];
        for (i, x) in input.iter_mut().enumerate() {
            *x = (i as f64 * 0.14).sin() * 2.0 + (i as f64 * 0.05).cos();
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
    fn roundtrip_2d_non_square() {
        const W: usize = 32;
        const H: usize = 16;
        let mut s = [0.0; W * H];
        for (i, v) in s.iter_mut().enumerate() {
            *v = ((i * 11 + 2) % 17) as f64 - 8.0;
        }
        let original = s;
        let mut work = [0.0; W];
        forward2d(&mut s, W, H, W, &mut work, false).unwrap();
        inverse2d(&mut s, W, H, W, &mut work, false).unwrap();
        for (a, b) in original.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }
}
