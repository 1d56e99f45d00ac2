use liftwave::wavelet::{cdf97, daub4_lift, haar};

fn main() {
    let mut signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let mut work = [0.0; 8];

    haar::forward1d(&mut signal, 8, 1, &mut work).unwrap();
    println!("Haar coefficients: {:?}", signal);
    haar::inverse1d(&mut signal, 8, 1, &mut work).unwrap();
    println!("Haar reconstruction: {:?}", signal);

    let mut signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    daub4_lift::forward1d(&mut signal, 8, 1, &mut work).unwrap();
    println!("Daub4 (lifting) coefficients: {:?}", signal);
    daub4_lift::inverse1d(&mut signal, 8, 1, &mut work).unwrap();
    println!("Daub4 (lifting) reconstruction: {:?}", signal);

    let mut plane = [0.0; 16 * 8];
    for (i, v) in plane.iter_mut().enumerate() {
        *v = (i as f64 * 0.1).sin();
    }
    let mut work2d = [0.0; 16];
    cdf97::forward2d(&mut plane, 16, 8, 16, &mut work2d, false).unwrap();
    cdf97::inverse2d(&mut plane, 16, 8, 16, &mut work2d, false).unwrap();
    println!("CDF 9/7 2D round-trip first row: {:?}", &plane[..16]);
}
