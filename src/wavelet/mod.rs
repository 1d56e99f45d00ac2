//! Multiresolution wavelet transforms over dense, strided `f64` buffers.
//!
//! All transforms here are in-place: the caller owns both the signal
//! buffer and a scratch `work` buffer, and no allocation happens inside
//! any kernel (see [`driver`] for the shared 1D/2D/3D machinery). Five
//! wavelet families are provided, one submodule each:
//!
//! - [`haar`] — Haar, lifting form.
//! - [`daub4_lift`] — Daubechies-4, lifting form.
//! - [`daub4_dwt`] — Daubechies-4, direct convolution (DWT) form.
//! - [`daub8_dwt`] — Daubechies-8, direct convolution (DWT) form.
//! - [`cdf97`] — Cohen-Daubechies-Feauveau 9/7, periodic convolution form.
//!
//! Every family exposes the same function surface: `forward1d`/`inverse1d`
//! (full multiresolution), `forward1d_step`/`inverse1d_step` (single
//! level), and 2D/3D analogues of both. `daub4_lift` does not accept a
//! `subtile` argument (it behaves as `subtile = false` always), matching
//! the original library's API.

extern crate alloc;

mod boundary;
mod driver;

pub mod cdf97;
pub mod daub4_dwt;
pub mod daub4_lift;
pub mod daub8_dwt;
pub mod haar;
pub mod healpix;

pub use boundary::{periodic, reflect};

/// Failure modes for every transform in this module.
///
/// Every operation is a pure function of its buffers and returns `0` on
/// success in the original C library; here that convention becomes
/// `Result<(), WaveletError>`. A failure leaves `s` in an unspecified but
/// valid (no out-of-bounds writes, no undefined behavior) state -- these
/// transforms are not transactional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveletError {
    /// A single-level step kernel requires an even extent of at least 2.
    OddOrTooShort { width: usize },
    /// A multiresolution driver requires every active extent to be a
    /// positive power of two.
    NonPowerOfTwo { extent: usize },
    /// The caller-supplied scratch buffer is smaller than the largest
    /// active extent the driver will touch.
    WorkBufferTooSmall { needed: usize, got: usize },
    /// A HEALPix tile index was outside `[0, 12)`.
    InvalidTileIndex { tile: i32 },
    /// The requested operation is a documented stub (spherical-wavelet
    /// subsystem, CDF 9/7 HEALPix transform).
    NotImplemented,
}

pub(crate) use driver::Step1D;
