//! Pure index-folding functions used by the DWT (direct convolution)
//! kernels to resolve out-of-range taps. Lifting kernels fold boundary
//! handling inline with `%` arithmetic on the same periodic policy and do
//! not call into this module.

/// Maps `i` into `[0, width)` under periodic (modulo) wraparound.
///
/// `periodic(i, w) == ((i % w) + w) % w` for every `i`, including
/// negative values and values several periods outside `[0, w)`.
pub fn periodic(i: i64, width: usize) -> usize {
    let w = width as i64;
    (((i % w) + w) % w) as usize
}

/// Maps `i` into `[0, width)` by mirroring at both boundaries, without
/// repeating the endpoint sample.
///
/// `reflect` is an involution on its fundamental domain: folding an
/// already in-range index is a no-op, and folding from either side of the
/// boundary lands on the same index a true mirror would.
pub fn reflect(i: i64, width: usize) -> usize {
    if width == 1 {
        // The two-sided mirror `2*(w-1) - idx` degenerates to `-idx` when
        // `w == 1`, which never converges for an out-of-range `idx`; the
        // only in-bounds index at this width is 0 regardless of `i`.
        return 0;
    }
    let w = width as i64;
    let mut idx = i;
    loop {
        if idx < 0 {
            idx = -idx;
        } else if idx >= w {
            idx = 2 * (w - 1) - idx;
        } else {
            return idx as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodic_matches_double_mod_definition() {
        for width in [1usize, 2, 3, 7, 32] {
            for i in -2 * width as i64..=2 * width as i64 {
                let w = width as i64;
                let expected = (((i % w) + w) % w) as usize;
                assert_eq!(periodic(i, width), expected, "i={i} width={width}");
            }
        }
    }

    #[test]
    fn periodic_is_identity_in_range() {
        for width in [4usize, 16, 32] {
            for i in 0..width {
                assert_eq!(periodic(i as i64, width), i);
            }
        }
    }

    #[test]
    fn reflect_stays_in_bounds() {
        for width in [1usize, 2, 5, 8, 32] {
            for i in -3 * width as i64..=3 * width as i64 {
                let j = reflect(i, width);
                assert!(j < width, "reflect({i}, {width}) = {j} out of bounds");
            }
        }
    }

    #[test]
    fn reflect_is_involution_in_fundamental_domain() {
        for width in [4usize, 8, 16] {
            for i in 0..width {
                assert_eq!(reflect(i as i64, width), i);
            }
        }
    }

    #[test]
    fn reflect_mirrors_at_left_boundary() {
        assert_eq!(reflect(-1, 8), 1);
        assert_eq!(reflect(-2, 8), 2);
    }

    #[test]
    fn reflect_mirrors_at_right_boundary() {
        // width=8: valid indices 0..8, reflect(8) -> 2*7-8 = 6
        assert_eq!(reflect(8, 8), 6);
        assert_eq!(reflect(9, 8), 5);
    }

    #[test]
    fn reflect_at_width_one_is_always_zero() {
        for i in -3i64..=3 {
            assert_eq!(reflect(i, 1), 0);
        }
    }
}
