//! Randomized round-trip, finiteness, and boundary-folding checks over
//! pseudo-random vectors, gated behind the `internal-tests` feature.

#![cfg(feature = "internal-tests")]

use liftwave::wavelet::{cdf97, daub4_dwt, daub4_lift, daub8_dwt, haar};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

proptest! {
    #[test]
    fn haar_roundtrip_is_identity_and_finite(seed in any::<u64>()) {
        let input = random_vec(seed, 64);
        let mut s = input.clone();
        let mut work = vec![0.0; 64];
        haar::forward1d(&mut s, 64, 1, &mut work).unwrap();
        for v in &s {
            prop_assert!(v.is_finite());
        }
        haar::inverse1d(&mut s, 64, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn daub4_lift_roundtrip_is_identity_and_finite(seed in any::<u64>()) {
        let input = random_vec(seed, 64);
        let mut s = input.clone();
        let mut work = vec![0.0; 64];
        daub4_lift::forward1d(&mut s, 64, 1, &mut work).unwrap();
        for v in &s {
            prop_assert!(v.is_finite());
        }
        daub4_lift::inverse1d(&mut s, 64, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn daub4_dwt_roundtrip_is_identity_and_finite(seed in any::<u64>()) {
        let input = random_vec(seed, 64);
        let mut s = input.clone();
        let mut work = vec![0.0; 64];
        daub4_dwt::forward1d(&mut s, 64, 1, &mut work).unwrap();
        for v in &s {
            prop_assert!(v.is_finite());
        }
        daub4_dwt::inverse1d(&mut s, 64, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn daub8_dwt_roundtrip_is_identity_and_finite(seed in any::<u64>()) {
        let input = random_vec(seed, 128);
        let mut s = input.clone();
        let mut work = vec![0.0; 128];
        daub8_dwt::forward1d(&mut s, 128, 1, &mut work).unwrap();
        for v in &s {
            prop_assert!(v.is_finite());
        }
        daub8_dwt::inverse1d(&mut s, 128, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn cdf97_roundtrip_is_identity_and_finite(seed in any::<u64>()) {
        let input = random_vec(seed, 64);
        let mut s = input.clone();
        let mut work = vec![0.0; 64];
        cdf97::forward1d(&mut s, 64, 1, &mut work).unwrap();
        for v in &s {
            prop_assert!(v.is_finite());
        }
        cdf97::inverse1d(&mut s, 64, 1, &mut work).unwrap();
        for (a, b) in input.iter().zip(s.iter()) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn boundary_periodic_matches_double_mod_for_any_i(i in -1000i64..1000, width in 1usize..64) {
        let w = width as i64;
        let expected = (((i % w) + w) % w) as usize;
        prop_assert_eq!(liftwave::wavelet::periodic(i, width), expected);
    }

    #[test]
    fn boundary_reflect_stays_in_bounds_for_any_i(i in -1000i64..1000, width in 1usize..64) {
        prop_assert!(liftwave::wavelet::reflect(i, width) < width);
    }
}
