//! Integration tests for the singular value decomposition

mod common;

use common::{assert_allclose_f64, create_cpu_client, matmul_ref};
use tensr::prelude::*;

fn reconstruct(svd: &SvdDecomposition, m: usize, n: usize) -> Vec<f64> {
    let k = svd.s.numel();
    let u = svd.u.to_vec::<f64>().unwrap();
    let s = svd.s.to_vec::<f64>().unwrap();
    let vt = svd.vt.to_vec::<f64>().unwrap();
    let mut us = u.clone();
    for i in 0..m {
        for j in 0..k {
            us[i * k + j] *= s[j];
        }
    }
    matmul_ref(&us, &vt, m, k, n)
}

fn assert_orthonormal_columns(q: &[f64], rows: usize, cols: usize, msg: &str) {
    for a in 0..cols {
        for b in 0..cols {
            let dot: f64 = (0..rows).map(|i| q[i * cols + a] * q[i * cols + b]).sum();
            let expected = if a == b { 1.0 } else { 0.0 };
            assert!((dot - expected).abs() < 1e-10, "{}: <{}, {}> = {}", msg, a, b, dot);
        }
    }
}

#[test]
fn test_svd_tall_matrix() {
    let (client, device) = create_cpu_client();
    let data = [2.0f64, 0.0, 1.0, 3.0, 0.0, 1.0, 4.0, -1.0];
    let a = Tensor::from_slice(&data, &[4, 2], &device).unwrap();
    let svd = client.svd(&a).unwrap();

    assert_eq!(svd.u.shape(), &[4, 2]);
    assert_eq!(svd.s.shape(), &[2]);
    assert_eq!(svd.vt.shape(), &[2, 2]);

    let s = svd.s.to_vec::<f64>().unwrap();
    assert!(s[0] >= s[1] && s[1] >= 0.0);

    assert_allclose_f64(&reconstruct(&svd, 4, 2), &data, 1e-10, 1e-10, "U S Vt");
    assert_orthonormal_columns(&svd.u.to_vec::<f64>().unwrap(), 4, 2, "U");
}

#[test]
fn test_svd_wide_matrix() {
    let (client, device) = create_cpu_client();
    let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let a = Tensor::from_slice(&data, &[2, 3], &device).unwrap();
    let svd = client.svd(&a).unwrap();

    assert_eq!(svd.u.shape(), &[2, 2]);
    assert_eq!(svd.vt.shape(), &[2, 3]);
    assert_allclose_f64(&reconstruct(&svd, 2, 3), &data, 1e-10, 1e-10, "U S Vt");
}

#[test]
fn test_singular_values_of_diagonal() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, 0.0, 0.0, 0.0, -5.0, 0.0, 0.0, 0.0, 3.0], &[3, 3], &device)
        .unwrap();
    let s = client.svd(&a).unwrap().s.to_vec::<f64>().unwrap();
    assert_allclose_f64(&s, &[5.0, 3.0, 1.0], 1e-12, 1e-12, "singular values");
}

#[test]
fn test_svd_rank_deficient_has_orthonormal_u() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, 1.0, 1.0, 1.0], &[2, 2], &device).unwrap();
    let svd = client.svd(&a).unwrap();
    let s = svd.s.to_vec::<f64>().unwrap();
    assert!((s[0] - 2.0).abs() < 1e-12);
    assert!(s[1].abs() < 1e-12);
    assert_orthonormal_columns(&svd.u.to_vec::<f64>().unwrap(), 2, 2, "U");
}

#[test]
fn test_svd_f32() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[3.0f32, 0.0, 4.0, 5.0], &[2, 2], &device).unwrap();
    let svd = client.svd(&a).unwrap();
    assert_eq!(svd.s.dtype(), DType::F32);
    let s = svd.s.to_vec::<f32>().unwrap();
    // Singular values of [[3, 0], [4, 5]] are 3*sqrt(5) and sqrt(5)
    assert!((s[0] - 6.708_204).abs() < 1e-4, "{:?}", s);
    assert!((s[1] - 2.236_068).abs() < 1e-4, "{:?}", s);
}

#[test]
fn test_svd_sweep_budget() {
    let device = Device::cpu();
    let client = CpuClient::with_config(device, ClientConfig::default().with_max_jacobi_sweeps(0));
    let a = Tensor::from_slice(&[2.0f64, 1.0, 1.0, 3.0], &[2, 2], &device).unwrap();
    assert!(matches!(
        client.svd(&a),
        Err(Error::NoConvergence { op: "svd", .. })
    ));
}

#[test]
fn test_svd_rejects_non_matrix() {
    let (client, device) = create_cpu_client();
    let v = Tensor::ones(&[3], DType::F64, &device).unwrap();
    assert!(matches!(client.svd(&v), Err(Error::InvalidArgument { .. })));
}
