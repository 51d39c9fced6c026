//! Integration tests for element-wise arithmetic, math, comparison and logic

mod common;

use common::{assert_allclose_f32, assert_allclose_f64, create_cpu_client};
use tensr::prelude::*;

#[test]
fn test_binary_ops_f32() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[4], &device).unwrap();
    let b = Tensor::from_slice(&[5.0f32, 6.0, 7.0, 8.0], &[4], &device).unwrap();

    let add = client.add(&a, &b).unwrap();
    assert_eq!(add.to_vec::<f32>().unwrap(), vec![6.0, 8.0, 10.0, 12.0]);

    let sub = client.sub(&a, &b).unwrap();
    assert_eq!(sub.to_vec::<f32>().unwrap(), vec![-4.0; 4]);

    let mul = client.mul(&a, &b).unwrap();
    assert_eq!(mul.to_vec::<f32>().unwrap(), vec![5.0, 12.0, 21.0, 32.0]);

    let div = client.div(&b, &a).unwrap();
    assert_allclose_f32(
        &div.to_vec::<f32>().unwrap(),
        &[5.0, 3.0, 7.0 / 3.0, 2.0],
        1e-6,
        1e-6,
        "div",
    );
}

#[test]
fn test_binary_ops_integers() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[7i64, -7, 9], &[3], &device).unwrap();
    let b = Tensor::from_slice(&[2i64, 2, 3], &[3], &device).unwrap();
    let q = client.div(&a, &b).unwrap();
    assert_eq!(q.to_vec::<i64>().unwrap(), vec![3, -3, 3]);

    let zero = Tensor::zeros(&[3], DType::I64, &device).unwrap();
    assert!(matches!(
        client.div(&a, &zero),
        Err(Error::InvalidArgument { .. })
    ));

    let x = Tensor::from_slice(&[250u8, 3], &[2], &device).unwrap();
    let y = Tensor::from_slice(&[10u8, 4], &[2], &device).unwrap();
    assert_eq!(client.add(&x, &y).unwrap().to_vec::<u8>().unwrap(), vec![4, 7]);
}

#[test]
fn test_float_division_by_zero() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, -1.0, 0.0], &[3], &device).unwrap();
    let z = Tensor::zeros(&[3], DType::F64, &device).unwrap();
    let r = client.div(&a, &z).unwrap().to_vec::<f64>().unwrap();
    assert_eq!(r[0], f64::INFINITY);
    assert_eq!(r[1], f64::NEG_INFINITY);
    assert!(r[2].is_nan());
}

#[test]
fn test_binary_ops_on_views() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], &device).unwrap();
    let at = a.transpose(None).unwrap();
    let b = Tensor::ones(&[3, 2], DType::F64, &device).unwrap();
    let c = client.add(&at, &b).unwrap();
    assert_eq!(c.shape(), &[3, 2]);
    assert_eq!(
        c.to_vec::<f64>().unwrap(),
        vec![2.0, 5.0, 3.0, 6.0, 4.0, 7.0]
    );
}

#[test]
fn test_binary_mismatches() {
    let (client, device) = create_cpu_client();
    let a = Tensor::zeros(&[3], DType::F32, &device).unwrap();
    let b = Tensor::zeros(&[4], DType::F32, &device).unwrap();
    assert!(matches!(client.add(&a, &b), Err(Error::ShapeMismatch { .. })));

    let c = Tensor::zeros(&[3], DType::F64, &device).unwrap();
    assert!(matches!(
        client.mul(&a, &c),
        Err(Error::DTypeMismatch {
            lhs: DType::F32,
            rhs: DType::F64
        })
    ));

    let flags = Tensor::from_bools(&[true, false, true], &[3], &device).unwrap();
    assert!(matches!(
        client.add(&flags, &flags),
        Err(Error::UnsupportedOperation { .. })
    ));
}

#[test]
fn test_unary_math_f64() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[0.25f64, 1.0, 4.0], &[3], &device).unwrap();

    let sqrt = client.sqrt(&a).unwrap().to_vec::<f64>().unwrap();
    assert_allclose_f64(&sqrt, &[0.5, 1.0, 2.0], 1e-12, 1e-12, "sqrt");

    let log = client.log(&client.exp(&a).unwrap()).unwrap().to_vec::<f64>().unwrap();
    assert_allclose_f64(&log, &[0.25, 1.0, 4.0], 1e-12, 1e-12, "log(exp)");

    let pow = client.pow(&a, 2.0).unwrap().to_vec::<f64>().unwrap();
    assert_allclose_f64(&pow, &[0.0625, 1.0, 16.0], 1e-12, 1e-12, "pow");

    let neg = client.neg(&a).unwrap();
    let abs = client.abs(&neg).unwrap();
    assert_eq!(abs.to_vec::<f64>().unwrap(), vec![0.25, 1.0, 4.0]);
}

#[test]
fn test_trigonometry_f32() {
    let (client, device) = create_cpu_client();
    let x = Tensor::from_slice(&[0.0f32, 0.5, 1.0], &[3], &device).unwrap();
    let expected = [0.0f32, 0.5, 1.0];

    let asin = client.arcsin(&client.sin(&x).unwrap()).unwrap();
    assert_allclose_f32(&asin.to_vec::<f32>().unwrap(), &expected, 1e-6, 1e-6, "arcsin(sin)");

    let acos = client.arccos(&client.cos(&x).unwrap()).unwrap();
    assert_allclose_f32(&acos.to_vec::<f32>().unwrap(), &expected, 1e-5, 1e-5, "arccos(cos)");

    let atan = client.arctan(&client.tan(&x).unwrap()).unwrap();
    assert_allclose_f32(&atan.to_vec::<f32>().unwrap(), &expected, 1e-6, 1e-6, "arctan(tan)");

    // Out of domain yields NaN rather than an error
    let two = Tensor::full(&[1], 2.0, DType::F32, &device).unwrap();
    assert!(client.arcsin(&two).unwrap().item::<f32>().unwrap().is_nan());
}

#[test]
fn test_unary_on_integers() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[-3i32, 0, 5], &[3], &device).unwrap();
    assert_eq!(client.abs(&a).unwrap().to_vec::<i32>().unwrap(), vec![3, 0, 5]);
    assert_eq!(client.neg(&a).unwrap().to_vec::<i32>().unwrap(), vec![3, 0, -5]);
    assert!(matches!(
        client.exp(&a),
        Err(Error::UnsupportedOperation { op: "exp", dtype: DType::I32 })
    ));
}

#[test]
fn test_comparisons_produce_bool() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[1i32, 5, 3], &[3], &device).unwrap();
    let b = Tensor::from_slice(&[2i32, 5, 1], &[3], &device).unwrap();

    let cases: [(Tensor, [u8; 3]); 6] = [
        (client.equal(&a, &b).unwrap(), [0, 1, 0]),
        (client.not_equal(&a, &b).unwrap(), [1, 0, 1]),
        (client.greater(&a, &b).unwrap(), [0, 0, 1]),
        (client.less(&a, &b).unwrap(), [1, 0, 0]),
        (client.greater_equal(&a, &b).unwrap(), [0, 1, 1]),
        (client.less_equal(&a, &b).unwrap(), [1, 1, 0]),
    ];
    for (result, expected) in cases {
        assert_eq!(result.dtype(), DType::Bool);
        assert_eq!(result.to_vec::<u8>().unwrap(), expected.to_vec());
    }
}

#[test]
fn test_nan_comparisons() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_slice(&[f64::NAN], &[1], &device).unwrap();
    assert_eq!(client.equal(&a, &a).unwrap().to_vec::<u8>().unwrap(), vec![0]);
    assert_eq!(client.not_equal(&a, &a).unwrap().to_vec::<u8>().unwrap(), vec![1]);
}

#[test]
fn test_logical_ops() {
    let (client, device) = create_cpu_client();
    let a = Tensor::from_bools(&[true, true, false, false], &[4], &device).unwrap();
    let b = Tensor::from_bools(&[true, false, true, false], &[4], &device).unwrap();

    let and = client.logical_and(&a, &b).unwrap();
    assert_eq!(and.to_vec::<u8>().unwrap(), vec![1, 0, 0, 0]);
    let or = client.logical_or(&a, &b).unwrap();
    assert_eq!(or.to_vec::<u8>().unwrap(), vec![1, 1, 1, 0]);
    let not = client.logical_not(&a).unwrap();
    assert_eq!(not.to_vec::<u8>().unwrap(), vec![0, 0, 1, 1]);

    let ints = Tensor::ones(&[4], DType::I32, &device).unwrap();
    assert!(matches!(
        client.logical_and(&ints, &b),
        Err(Error::UnsupportedOperation { .. })
    ));
}
