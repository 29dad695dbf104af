//! Validating wrappers: bad views are rejected before anything is written

use dspcore::error::Error;
use dspcore::kernels::{MatMut, MatRef};
use dspcore::ops::checked;

#[test]
fn test_valid_calls_match_glue() {
    let a = [1i16, 2, 0, 3, 4, 0];
    let b = [10i16, 20, 0, 30, 40, 0];
    let mut y = [0i16; 4];
    checked::mat_add_stride(
        MatRef::new(&a, 2, 2, 3),
        MatRef::new(&b, 2, 2, 3),
        MatMut::contiguous(&mut y, 2, 2),
    )
    .unwrap();
    assert_eq!(y, [11, 22, 33, 44]);

    assert_eq!(checked::dot_prod(&[1i32, 2, 3], &[4, 5, 6], 0), Ok(32));
    assert_eq!(checked::min(&[7i16, -3, 5, -3, 9]), -3);
}

#[test]
fn test_stride_smaller_than_width() {
    let a = [0i32; 8];
    let mut y = [9i32; 8];
    let err = checked::mat_copy_stride(MatRef::new(&a, 2, 4, 3), MatMut::new(&mut y, 2, 4, 4));
    assert_eq!(err, Err(Error::StrideTooSmall { stride: 3, cols: 4 }));
    assert_eq!(y, [9; 8]);
}

#[test]
fn test_short_source_buffer() {
    let a = [0f32; 5];
    let mut y = [0f32; 6];
    let err = checked::mat_scale_stride(
        MatRef::new(&a, 2, 3, 3),
        2.0,
        0,
        MatMut::contiguous(&mut y, 2, 3),
    );
    assert_eq!(
        err,
        Err(Error::BufferTooShort {
            required: 6,
            len: 5
        })
    );
}

#[test]
fn test_operand_shape_mismatch() {
    let a = [0i8; 6];
    let mut y = [0i8; 6];
    let err = checked::mat_sub_stride(
        MatRef::contiguous(&a, 2, 3),
        MatRef::contiguous(&a, 3, 2),
        MatMut::contiguous(&mut y, 2, 3),
    );
    assert_eq!(err, Err(Error::shape_mismatch((2, 3), (3, 2))));
}

#[test]
fn test_mat_mult_shapes() {
    let a = [1i16; 6];
    let b = [1i16; 6];

    let mut wrong_dst = [0i16; 6];
    let err = checked::mat_mult_stride_q(
        MatRef::contiguous(&a, 2, 3),
        MatRef::contiguous(&b, 3, 2),
        0,
        MatMut::contiguous(&mut wrong_dst, 3, 2),
    );
    assert_eq!(err, Err(Error::shape_mismatch((2, 2), (3, 2))));

    let mut y = [0i16; 4];
    checked::mat_mult_stride_q(
        MatRef::contiguous(&a, 2, 3),
        MatRef::contiguous(&b, 3, 2),
        1,
        MatMut::contiguous(&mut y, 2, 2),
    )
    .unwrap();
    assert_eq!(y, [1; 4]);
}

#[test]
fn test_fill_validates_destination() {
    let mut y = [0i32; 3];
    assert!(checked::mat_fill_stride(1, MatMut::new(&mut y, 2, 2, 2)).is_err());
    assert!(checked::mat_fill_stride(1, MatMut::new(&mut y, 1, 2, 2)).is_ok());
    assert_eq!(y, [1, 1, 0]);
}

#[test]
fn test_error_messages() {
    let err = Error::StrideTooSmall { stride: 3, cols: 4 };
    assert_eq!(err.to_string(), "Stride 3 is smaller than the row width 4");
    let err = Error::InvalidCoreCount { cores: 0, max: 16 };
    assert_eq!(err.to_string(), "Invalid core count 0: expected 1..=16");
}
