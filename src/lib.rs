#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ohist;
pub mod spherical;
pub mod ttree;
pub mod wavelet;

#[cfg(feature = "std")]
pub mod tracking;

#[cfg(test)]
mod tests {
    use crate::wavelet::haar;

    #[test]
    fn smoke_roundtrip() {
        let mut s = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let orig = s;
        let mut work = [0.0; 8];
        haar::forward1d(&mut s, 8, 1, &mut work).unwrap();
        haar::inverse1d(&mut s, 8, 1, &mut work).unwrap();
        for (a, b) in orig.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
