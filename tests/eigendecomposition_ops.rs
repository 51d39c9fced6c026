//! Integration tests for eigendecomposition

mod common;

use common::create_cpu_client;
use tensr::prelude::*;

/// Check `A v = lambda v` for every eigenpair
fn assert_eigenpairs(a: &[f64], n: usize, eig: &EigenDecomposition, tol: f64) {
    let values = eig.values.to_vec::<f64>().unwrap();
    let vectors = eig.vectors.to_vec::<f64>().unwrap();
    for (j, &lambda) in values.iter().enumerate() {
        let norm: f64 = (0..n).map(|i| vectors[i * n + j].powi(2)).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < tol, "eigenvector {} has norm {}", j, norm);
        for i in 0..n {
            let av: f64 = (0..n).map(|k| a[i * n + k] * vectors[k * n + j]).sum();
            let lv = lambda * vectors[i * n + j];
            assert!((av - lv).abs() < tol, "pair {}: row {} gives {} vs {}", j, i, av, lv);
        }
    }
}

#[test]
fn test_symmetric_eig() {
    let (client, device) = create_cpu_client();
    let data = [2.0f64, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0];
    let a = Tensor::from_slice(&data, &[3, 3], &device).unwrap();
    let eig = client.eig(&a).unwrap();

    let values = eig.values.to_vec::<f64>().unwrap();
    let s2 = std::f64::consts::SQRT_2;
    let expected = [2.0 + s2, 2.0, 2.0 - s2];
    for (v, e) in values.iter().zip(expected.iter()) {
        assert!((v - e).abs() < 1e-10, "{:?}", values);
    }
    assert_eigenpairs(&data, 3, &eig, 1e-10);
}

#[test]
fn test_nonsymmetric_eig() {
    let (client, device) = create_cpu_client();
    let data = [4.0f64, 1.0, 2.0, 3.0];
    let a = Tensor::from_slice(&data, &[2, 2], &device).unwrap();
    let eig = client.eig(&a).unwrap();
    let values = eig.values.to_vec::<f64>().unwrap();
    assert!((values[0] - 5.0).abs() < 1e-10);
    assert!((values[1] - 2.0).abs() < 1e-10);
    assert_eigenpairs(&data, 2, &eig, 1e-9);
}

#[test]
fn test_nonsymmetric_eig_3x3() {
    let (client, device) = create_cpu_client();
    // Upper triangular with distinct diagonal
    let data = [1.0f64, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0, 0.0, -6.0];
    let a = Tensor::from_slice(&data, &[3, 3], &device).unwrap();
    let eig = client.eig(&a).unwrap();
    let values = eig.values.to_vec::<f64>().unwrap();
    let expected = [-6.0, 4.0, 1.0];
    for (v, e) in values.iter().zip(expected.iter()) {
        assert!((v - e).abs() < 1e-9, "{:?}", values);
    }
    assert_eigenpairs(&data, 3, &eig, 1e-8);
}

#[test]
fn test_eig_f32_output_dtype() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[3.0f32, 0.0, 0.0, 1.0], &[2, 2], &device).unwrap();
    let eig = client.eig(&a).unwrap();
    assert_eq!(eig.values.dtype(), DType::F32);
    assert_eq!(eig.vectors.shape(), &[2, 2]);
    assert_eq!(eig.values.to_vec::<f32>().unwrap(), vec![3.0, 1.0]);
}

#[test]
fn test_eig_errors() {
    let (client, device) = create_cpu_client();
    let rect = Tensor::zeros(&[2, 3], DType::F64, &device).unwrap();
    assert!(matches!(client.eig(&rect), Err(Error::ShapeMismatch { .. })));

    let rotation = Tensor::from_slice(&[0.0f64, -1.0, 1.0, 0.0], &[2, 2], &device).unwrap();
    assert!(matches!(client.eig(&rotation), Err(Error::InvalidArgument { .. })));

    let ints = Tensor::from_slice(&[1i64, 0, 0, 1], &[2, 2], &device).unwrap();
    assert!(matches!(client.eig(&ints), Err(Error::UnsupportedOperation { .. })));
}
