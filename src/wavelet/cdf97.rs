//! Cohen-Daubechies-Feauveau 9/7 wavelet, periodic convolution form.
//!
//! The lifting sequence for CDF 9/7 was not recoverable from the
//! reference sources this module is grounded on, and a convolution form
//! is an equally valid realization of the same linear map; the symmetric
//! analysis/synthesis filters below (`H0..H4` low-pass, `G0..G3`
//! high-pass, offset by one sample from the low-pass) were verified
//! against the reference's own numeric test vectors (DC preservation,
//! single-step expected values).

use super::boundary::periodic;
use super::driver::{self, Step1D};
use super::WaveletError;

const H0: f64 = 0.602_949_018_236;
const H1: f64 = 0.266_864_118_443;
const H2: f64 = -0.078_223_266_529;
const H3: f64 = -0.016_864_118_443;
const H4: f64 = 0.026_748_757_411;

const G0: f64 = 0.557_543_526_229;
const G1: f64 = -0.295_635_881_557;
const G2: f64 = -0.028_771_763_114;
const G3: f64 = 0.045_635_881_557;
const G_OFFSET: i64 = 1;

const HB0: f64 = 1.115_087_052_458;
const HB1: f64 = 0.591_271_763_114;
const HB2: f64 = -5.754_352_622_8e-2;
const HB3: f64 = -9.127_176_311_4e-2;

const GB0: f64 = 1.205_898_036_472;
const GB1: f64 = -0.533_728_236_886;
const GB2: f64 = -0.156_446_533_058;
const GB3: f64 = 3.372_823_688_6e-2;
const GB4: f64 = 5.349_751_482_2e-2;

pub(crate) struct Cdf97;

impl Step1D for Cdf97 {
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
        let at = |j: i64| w[periodic(j, width)];

        let half = width / 2;
        for i in 0..half {
            let c = 2 * i as i64;
            let low = H0 * at(c)
                + H1 * (at(c + 1) + at(c - 1))
                + H2 * (at(c + 2) + at(c - 2))
                + H3 * (at(c + 3) + at(c - 3))
                + H4 * (at(c + 4) + at(c - 4));
            let gc = c + G_OFFSET;
            let high = G0 * at(gc)
                + G1 * (at(gc + 1) + at(gc - 1))
                + G2 * (at(gc + 2) + at(gc - 2))
                + G3 * (at(gc + 3) + at(gc - 3));

            s[base + stride * i] = low;
            s[base + stride * (half + i)] = high;
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

        let edata = |j: i64| -> f64 {
            let idx = periodic(j, width);
            if idx % 2 == 0 {
                s[base + stride * (idx / 2)]
            } else {
                0.0
            }
        };
        let odata = |j: i64| -> f64 {
            let idx = periodic(j, width);
            if idx % 2 == 1 {
                s[base + stride * (half + (idx - 1) / 2)]
            } else {
                0.0
            }
        };

        let w = &mut work[..width];
        for i in 0..width {
            let n = i as i64;
            let lowpart = HB0 * edata(n)
                + HB1 * (edata(n + 1) + edata(n - 1))
                + HB2 * (edata(n + 2) + edata(n - 2))
                + HB3 * (edata(n + 3) + edata(n - 3));
            let highpart = GB0 * odata(n)
                + GB1 * (odata(n + 1) + odata(n - 1))
                + GB2 * (odata(n + 2) + odata(n - 2))
                + GB3 * (odata(n + 3) + odata(n - 3))
                + GB4 * (odata(n + 4) + odata(n - 4));
            w[i] = lowpart + highpart;
        }

        for (i, &v) in w.iter().enumerate() {
            s[base + stride * i] = v;
        }

        Ok(())
    }
}

pub fn forward1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::forward1d::<Cdf97>(s, width, stride, work)
}

pub fn inverse1d(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    driver::inverse1d::<Cdf97>(s, width, stride, work)
}

pub fn forward1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Cdf97::forward_step(s, 0, width, stride, work)
}

pub fn inverse1d_step(s: &mut [f64], width: usize, stride: usize, work: &mut [f64]) -> Result<(), WaveletError> {
    Cdf97::inverse_step(s, 0, width, stride, work)
}

pub fn forward2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::forward2d::<Cdf97>(s, width, height, rowstride, work, subtile)
}

pub fn inverse2d(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    driver::inverse2d::<Cdf97>(s, width, height, rowstride, work, subtile)
}

pub fn forward2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward2d_step::<Cdf97>(s, width, height, rowstride, work)
}

pub fn inverse2d_step(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse2d_step::<Cdf97>(s, width, height, rowstride, work)
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
    driver::forward3d::<Cdf97>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    driver::inverse3d::<Cdf97>(s, width, height, depth, rowstride, slicestride, work, subtile)
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
    driver::forward3d_step::<Cdf97>(s, width, height, depth, rowstride, slicestride, work)
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
    driver::inverse3d_step::<Cdf97>(s, width, height, depth, rowstride, slicestride, work)
}

pub fn forward3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::forward3d_2dstep::<Cdf97>(s, width, height, stride, rowstride, work)
}

pub fn inverse3d_2dstep(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    driver::inverse3d_2dstep::<Cdf97>(s, width, height, stride, rowstride, work)
}


#[cfg(test)]
extern crate alloc;
