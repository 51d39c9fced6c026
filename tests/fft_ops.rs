//! Integration tests for the discrete Fourier transforms

mod common;

use common::{assert_allclose_f32, assert_allclose_f64, create_cpu_client};
use tensr::prelude::*;

#[test]
fn test_fft_of_real_signal() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[4], &device).unwrap();
    let spectrum = client.fft(&a, 0).unwrap();
    assert_eq!(spectrum.shape(), &[4, 2]);
    assert_allclose_f64(
        &spectrum.to_vec::<f64>().unwrap(),
        &[10.0, 0.0, -2.0, 2.0, -2.0, 0.0, -2.0, -2.0],
        1e-12,
        1e-12,
        "fft",
    );
}

#[test]
fn test_fft_ifft_round_trip() {
    let (client, device) = create_cpu_client();
    // Odd length exercises the direct transform
    let signal: Vec<f32> = (0..5).map(|i| (i as f32 * 0.7).sin()).collect();
    let a = Tensor::from_slice(&signal, &[5], &device).unwrap();
    let back = client.ifft(&client.fft(&a, 0).unwrap(), 0).unwrap();
    assert_eq!(back.dtype(), DType::F32);

    let values = back.to_vec::<f32>().unwrap();
    let re: Vec<f32> = values.iter().step_by(2).copied().collect();
    let im: Vec<f32> = values.iter().skip(1).step_by(2).copied().collect();
    assert_allclose_f32(&re, &signal, 1e-5, 1e-5, "real part");
    assert_allclose_f32(&im, &[0.0; 5], 1e-5, 1e-5, "imaginary part");
}

#[test]
fn test_fft_along_rows() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, -1.0], &[2, 4], &device)
        .unwrap();
    let f = client.fft(&a, 1).unwrap();
    assert_eq!(f.shape(), &[2, 4, 2]);
    let v = f.to_vec::<f64>().unwrap();
    // Constant row: all energy in the DC bin
    assert_allclose_f64(&v[..8], &[4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-12, 1e-12, "row 0");
    // sin(pi n / 2): bins 1 and 3 carry -2i and 2i
    assert_allclose_f64(&v[8..], &[0.0, 0.0, 0.0, -2.0, 0.0, 0.0, 0.0, 2.0], 1e-12, 1e-12, "row 1");
}

#[test]
fn test_fft2_and_inverse() {
    let (client, device) = create_cpu_client();
    let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let a = Tensor::from_slice(&data, &[2, 3], &device).unwrap();
    let f = client.fft2(&a).unwrap();
    assert_eq!(f.shape(), &[2, 3, 2]);
    // DC term is the sum of all elements
    assert!((f.get(&[0, 0, 0]).unwrap() - 21.0).abs() < 1e-12);

    let back = client.ifft2(&f).unwrap();
    let re: Vec<f64> = back.to_vec::<f64>().unwrap().into_iter().step_by(2).collect();
    assert_allclose_f64(&re, &data, 1e-12, 1e-12, "ifft2(fft2)");
}

#[test]
fn test_fft_errors() {
    let (client, device) = create_cpu_client();
    let ints = Tensor::from_slice(&[1i32, 2], &[2], &device).unwrap();
    assert!(matches!(client.fft(&ints, 0), Err(Error::UnsupportedOperation { .. })));

    let a = Tensor::zeros(&[4], DType::F64, &device).unwrap();
    assert!(matches!(client.fft(&a, 1), Err(Error::InvalidAxis { .. })));
    assert!(matches!(client.ifft(&a, 0), Err(Error::ShapeMismatch { .. })));
    assert!(client.fft2(&a).is_err());
}
