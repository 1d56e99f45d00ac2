//! Shared multiresolution machinery: the 1D/2D/3D step and driver
//! functions are identical in shape across every wavelet family (only the
//! per-sample math differs), so they are written once here, generic over
//! a per-family [`Step1D`] implementation, rather than five times.
//!
//! Every axis sweep is expressed as a base offset into the flat signal
//! buffer plus an extent and a stride -- the "axis view" the design notes
//! call for -- instead of re-deriving offsets inline at each call site.

use super::WaveletError;

/// One wavelet family's single-level forward/inverse step.
///
/// `base` is the flat-buffer offset of the axis's first sample; `width`
/// is the number of samples along the axis; `stride` is the element
/// distance between consecutive samples. Implementations validate
/// `width` is even and at least 2 and that `work` is long enough before
/// touching either buffer.
pub(crate) trait Step1D {
    fn forward_step(
        s: &mut [f64],
        base: usize,
        width: usize,
        stride: usize,
        work: &mut [f64],
    ) -> Result<(), WaveletError>;

    fn inverse_step(
        s: &mut [f64],
        base: usize,
        width: usize,
        stride: usize,
        work: &mut [f64],
    ) -> Result<(), WaveletError>;

    /// Whether this family's 2D/3D drivers accept a `subtile` flag.
    /// `daub4_lift` is the one family that fixes this to `false`.
    const SUPPORTS_SUBTILE: bool = true;
}

pub(crate) fn require_even_and_long_enough(width: usize, work_len: usize) -> Result<(), WaveletError> {
    if width < 2 || width % 2 != 0 {
        return Err(WaveletError::OddOrTooShort { width });
    }
    if work_len < width {
        return Err(WaveletError::WorkBufferTooSmall {
            needed: width,
            got: work_len,
        });
    }
    Ok(())
}

fn require_power_of_two(extent: usize) -> Result<(), WaveletError> {
    if extent == 0 || (extent & (extent - 1)) != 0 {
        return Err(WaveletError::NonPowerOfTwo { extent });
    }
    Ok(())
}

fn require_work_at_least(work_len: usize, needed: usize) -> Result<(), WaveletError> {
    if work_len < needed {
        return Err(WaveletError::WorkBufferTooSmall {
            needed,
            got: work_len,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------
// 1D
// ---------------------------------------------------------------------

pub(crate) fn forward1d<S: Step1D>(
    s: &mut [f64],
    width: usize,
    stride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_power_of_two(width)?;
    require_work_at_least(work.len(), width)?;
    let mut w = width;
    while w > 1 {
        S::forward_step(s, 0, w, stride, work)?;
        w >>= 1;
    }
    Ok(())
}

pub(crate) fn inverse1d<S: Step1D>(
    s: &mut [f64],
    width: usize,
    stride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_power_of_two(width)?;
    require_work_at_least(work.len(), width)?;
    // `width == 1` is the degenerate power-of-two extent the forward
    // driver's `while w > 1` loop never enters either: there is no
    // single-level step to undo.
    if width <= 1 {
        return Ok(());
    }
    let mut w = width;
    let mut levels = 0usize;
    while w > 2 {
        levels += 1;
        w >>= 1;
    }
    for _ in 0..=levels {
        S::inverse_step(s, 0, w, stride, work)?;
        w <<= 1;
    }
    Ok(())
}

// ---------------------------------------------------------------------
// 2D
// ---------------------------------------------------------------------

pub(crate) fn forward2d_step<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_work_at_least(work.len(), width.max(height))?;
    // Columns: `height` samples spaced by `rowstride`, one per column.
    for i in 0..width {
        S::forward_step(s, i, height, rowstride, work)?;
    }
    // Rows: `width` samples spaced by 1, one per row.
    for i in 0..height {
        S::forward_step(s, i * rowstride, width, 1, work)?;
    }
    Ok(())
}

pub(crate) fn inverse2d_step<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_work_at_least(work.len(), width.max(height))?;
    // Rows first, then columns: the mirror of the forward step's order.
    for i in 0..height {
        S::inverse_step(s, i * rowstride, width, 1, work)?;
    }
    for i in 0..width {
        S::inverse_step(s, i, height, rowstride, work)?;
    }
    Ok(())
}

pub(crate) fn forward2d<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    require_power_of_two(width)?;
    require_power_of_two(height)?;
    require_work_at_least(work.len(), width.max(height))?;
    let mut w = width;
    let mut h = height;

    while w > 1 && h > 1 {
        forward2d_step::<S>(s, w, h, rowstride, work)?;
        w >>= 1;
        h >>= 1;
    }

    if !subtile {
        while w > 1 {
            S::forward_step(s, 0, w, 1, work)?;
            w >>= 1;
        }
        while h > 1 {
            S::forward_step(s, 0, h, rowstride, work)?;
            h >>= 1;
        }
    }

    Ok(())
}

pub(crate) fn inverse2d<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    rowstride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    require_power_of_two(width)?;
    require_power_of_two(height)?;
    require_work_at_least(work.len(), width.max(height))?;
    let mut w = width;
    let mut h = height;
    let mut levels = 0usize;

    while w > 2 && h > 2 {
        levels += 1;
        w >>= 1;
        h >>= 1;
    }

    if !subtile {
        let mut wlevels = 0usize;
        while w > 2 {
            wlevels += 1;
            w >>= 1;
        }
        let mut hlevels = 0usize;
        while h > 2 {
            hlevels += 1;
            h >>= 1;
        }

        for _ in 0..wlevels {
            S::inverse_step(s, 0, w, 1, work)?;
            w <<= 1;
        }
        for _ in 0..hlevels {
            S::inverse_step(s, 0, h, rowstride, work)?;
            h <<= 1;
        }
    }

    for _ in 0..=levels {
        inverse2d_step::<S>(s, w, h, rowstride, work)?;
        w <<= 1;
        h <<= 1;
    }

    Ok(())
}

// ---------------------------------------------------------------------
// 3D
// ---------------------------------------------------------------------

pub(crate) fn forward3d_step<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_work_at_least(work.len(), width.max(height).max(depth))?;

    // Rows.
    for i in 0..height {
        for j in 0..depth {
            let o = j * slicestride + i * rowstride;
            S::forward_step(s, o, width, 1, work)?;
        }
    }
    // Columns.
    for i in 0..width {
        for j in 0..depth {
            let o = j * slicestride + i;
            S::forward_step(s, o, height, rowstride, work)?;
        }
    }
    // Slices.
    for i in 0..width {
        for j in 0..height {
            let o = j * rowstride + i;
            S::forward_step(s, o, depth, slicestride, work)?;
        }
    }

    Ok(())
}

pub(crate) fn inverse3d_step<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_work_at_least(work.len(), width.max(height).max(depth))?;

    // Slices first, mirroring forward's row-column-slice order.
    for i in 0..width {
        for j in 0..height {
            let o = j * rowstride + i;
            S::inverse_step(s, o, depth, slicestride, work)?;
        }
    }
    // Columns.
    for i in 0..width {
        for j in 0..depth {
            let o = j * slicestride + i;
            S::inverse_step(s, o, height, rowstride, work)?;
        }
    }
    // Rows.
    for i in 0..height {
        for j in 0..depth {
            let o = j * slicestride + i * rowstride;
            S::inverse_step(s, o, width, 1, work)?;
        }
    }

    Ok(())
}

/// 2D step on an arbitrary axis pair within a 3D buffer: `stride` is the
/// first axis's element distance, `rowstride` the second's.
pub(crate) fn forward3d_2dstep<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_work_at_least(work.len(), width.max(height))?;
    for i in 0..height {
        S::forward_step(s, i * rowstride, width, stride, work)?;
    }
    for i in 0..width {
        S::forward_step(s, i * stride, height, rowstride, work)?;
    }
    Ok(())
}

pub(crate) fn inverse3d_2dstep<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    stride: usize,
    rowstride: usize,
    work: &mut [f64],
) -> Result<(), WaveletError> {
    require_work_at_least(work.len(), width.max(height))?;
    for i in 0..width {
        S::inverse_step(s, i * stride, height, rowstride, work)?;
    }
    for i in 0..height {
        S::inverse_step(s, i * rowstride, width, stride, work)?;
    }
    Ok(())
}

pub(crate) fn forward3d<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    require_power_of_two(width)?;
    require_power_of_two(height)?;
    require_power_of_two(depth)?;
    require_work_at_least(work.len(), width.max(height).max(depth))?;

    let mut w = width;
    let mut h = height;
    let mut d = depth;

    while w > 1 && h > 1 && d > 1 {
        forward3d_step::<S>(s, w, h, d, rowstride, slicestride, work)?;
        w >>= 1;
        h >>= 1;
        d >>= 1;
    }

    if !subtile {
        if d == 1 {
            while w > 1 && h > 1 {
                forward3d_2dstep::<S>(s, w, h, 1, rowstride, work)?;
                w >>= 1;
                h >>= 1;
            }
            while w > 1 {
                S::forward_step(s, 0, w, 1, work)?;
                w >>= 1;
            }
            while h > 1 {
                S::forward_step(s, 0, h, rowstride, work)?;
                h >>= 1;
            }
        } else if h == 1 {
            while w > 1 && d > 1 {
                forward3d_2dstep::<S>(s, w, d, 1, slicestride, work)?;
                w >>= 1;
                d >>= 1;
            }
            while w > 1 {
                S::forward_step(s, 0, w, 1, work)?;
                w >>= 1;
            }
            while d > 1 {
                S::forward_step(s, 0, d, slicestride, work)?;
                d >>= 1;
            }
        } else if w == 1 {
            while h > 1 && d > 1 {
                forward3d_2dstep::<S>(s, h, d, rowstride, slicestride, work)?;
                h >>= 1;
                d >>= 1;
            }
            while h > 1 {
                S::forward_step(s, 0, h, rowstride, work)?;
                h >>= 1;
            }
            while d > 1 {
                S::forward_step(s, 0, d, slicestride, work)?;
                d >>= 1;
            }
        }
    }

    Ok(())
}

pub(crate) fn inverse3d<S: Step1D>(
    s: &mut [f64],
    width: usize,
    height: usize,
    depth: usize,
    rowstride: usize,
    slicestride: usize,
    work: &mut [f64],
    subtile: bool,
) -> Result<(), WaveletError> {
    require_power_of_two(width)?;
    require_power_of_two(height)?;
    require_power_of_two(depth)?;
    require_work_at_least(work.len(), width.max(height).max(depth))?;

    let mut w = width;
    let mut h = height;
    let mut d = depth;
    let mut levels = 0usize;

    while w > 2 && h > 2 && d > 2 {
        levels += 1;
        w >>= 1;
        h >>= 1;
        d >>= 1;
    }

    let mut whlevels = 0usize;
    let mut wdlevels = 0usize;
    let mut hdlevels = 0usize;

    if !subtile {
        while w > 2 && h > 2 {
            whlevels += 1;
            w >>= 1;
            h >>= 1;
        }
        while w > 2 && d > 2 {
            wdlevels += 1;
            w >>= 1;
            d >>= 1;
        }
        while h > 2 && d > 2 {
            hdlevels += 1;
            h >>= 1;
            d >>= 1;
        }

        let mut wlevels = 0usize;
        while w > 2 {
            wlevels += 1;
            w >>= 1;
        }
        let mut hlevels = 0usize;
        while h > 2 {
            hlevels += 1;
            h >>= 1;
        }
        let mut dlevels = 0usize;
        while d > 2 {
            dlevels += 1;
            d >>= 1;
        }

        // Pure-1D expansion for the still-singleton axes.
        for _ in 0..wlevels {
            S::inverse_step(s, 0, w, 1, work)?;
            w <<= 1;
        }
        for _ in 0..hlevels {
            S::inverse_step(s, 0, h, rowstride, work)?;
            h <<= 1;
        }
        for _ in 0..dlevels {
            S::inverse_step(s, 0, d, slicestride, work)?;
            d <<= 1;
        }

        // 2D expansion for the axis pairs that jointly descended.
        for _ in 0..whlevels {
            inverse3d_2dstep::<S>(s, w, h, 1, rowstride, work)?;
            w <<= 1;
            h <<= 1;
        }
        for _ in 0..wdlevels {
            inverse3d_2dstep::<S>(s, w, d, 1, slicestride, work)?;
            w <<= 1;
            d <<= 1;
        }
        for _ in 0..hdlevels {
            inverse3d_2dstep::<S>(s, h, d, rowstride, slicestride, work)?;
            h <<= 1;
            d <<= 1;
        }
    }

    // Joint 3D expansion: `levels + 1` steps. The forward loop over-halves
    // by one relative to this strict-`>2` count, so the inverse needs the
    // extra pass to land back on the original extent.
    for _ in 0..=levels {
        inverse3d_step::<S>(s, w, h, d, rowstride, slicestride, work)?;
        w <<= 1;
        h <<= 1;
        d <<= 1;
    }

    Ok(())
}
