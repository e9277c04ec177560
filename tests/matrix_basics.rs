//! Basic tests for construction, element access, comparison and formatting

use squaremat::{MatrixError, SquareMatrix};

#[test]
fn test_constructors_and_access() {
    let z = SquareMatrix::default();
    assert_eq!(z.order(), 0);

    let a = SquareMatrix::new(3, 7.0).unwrap();
    assert!((a[2][2] - 7.0).abs() < 1e-12);

    let b = SquareMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(b[1][0], 3.0);

    // Invalid: not square
    assert!(matches!(
        SquareMatrix::from_rows(vec![vec![1.0, 2.0, 3.0]]),
        Err(MatrixError::InvalidArgument(_))
    ));

    // Invalid row access
    assert!(matches!(b.row(5), Err(MatrixError::OutOfRange(_))));
}

#[test]
fn test_empty_matrix_scenario() {
    let z = SquareMatrix::new(0, 0.0).unwrap();
    assert_eq!(z.order(), 0);
    assert!(matches!(z.power(3), Err(MatrixError::LogicError(_))));
    assert!(matches!(z.determinant(), Err(MatrixError::LogicError(_))));
    assert!(matches!(
        SquareMatrix::new(0, 2.0),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn test_element_mutation() {
    let mut a = SquareMatrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
        .unwrap();

    a[0][1] = 42.0;
    a.row_mut(2).unwrap()[0] = -7.0;

    assert_eq!(a.row(0).unwrap(), &[1.0, 42.0, 3.0]);
    assert_eq!(a.row(2).unwrap(), &[-7.0, 8.0, 9.0]);
}

#[test]
fn test_sum() {
    let a = SquareMatrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
        .unwrap();
    let b = SquareMatrix::from_rows([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]])
        .unwrap();

    assert!((a.sum() - 45.0).abs() < 1e-12);
    assert!((b.sum() - 45.0).abs() < 1e-12);
    assert!(((&a + &b).sum() - 90.0).abs() < 1e-12);
    assert!((&a - &b).sum().abs() < 1e-12);
}

#[test]
fn test_comparisons_are_sum_based() {
    let a = SquareMatrix::from_rows([[1.0, 1.0], [1.0, 1.0]]).unwrap(); // sum = 4
    let b = SquareMatrix::from_rows([[2.0, 2.0], [2.0, 0.0]]).unwrap(); // sum = 6

    assert!(a < b);
    assert!(b > a);
    assert!(a != b);

    // Different order, same sum: equal by definition
    let c = SquareMatrix::from_rows([[2.0, 1.0, 1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]])
        .unwrap();
    assert!(a == c);
    assert!(a <= c && a >= c);
}

#[test]
fn test_comparison_tolerance() {
    let a = SquareMatrix::new(1, 1.0).unwrap();
    let b = SquareMatrix::new(1, 1.0 + 1e-12).unwrap();
    let c = SquareMatrix::new(1, 1.0 + 1e-6).unwrap();

    assert!(a == b);
    assert!(!(a < b));
    assert!(a < c);
}

#[test]
fn test_display_output() {
    let a = SquareMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(a.to_string(), "[ 1, 2 ]\n[ 3, 4 ]\n");

    let mut buf = Vec::new();
    a.write_to(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), a.to_string());
}
