use crate::utils::{
    UtilsError, divisors_in_range, operand_count, operand_range, validate_count,
    validate_difficulty, validate_operand_count,
};

#[test]
fn test_operand_range_by_difficulty() {
    assert_eq!(operand_range(1), Some(0..=9));
    assert_eq!(operand_range(2), Some(10..=99));
    assert_eq!(operand_range(3), Some(100..=999));
    assert_eq!(operand_range(4), Some(1000..=9999));
    assert_eq!(operand_range(6), Some(100_000..=999_999));
}

#[test]
fn test_operand_range_beyond_i64() {
    assert_eq!(
        operand_range(18),
        Some(100_000_000_000_000_000..=999_999_999_999_999_999)
    );
    assert_eq!(operand_range(19), None);
    assert_eq!(operand_range(u32::MAX), None);
}

#[test]
fn test_operand_count_is_monotonic_and_clamped() {
    assert_eq!(operand_count(1, 2, 5), 2);
    assert_eq!(operand_count(2, 2, 5), 3);
    assert_eq!(operand_count(4, 2, 5), 5);
    assert_eq!(operand_count(6, 2, 5), 5);
    assert_eq!(operand_count(1, 3, 5), 3);

    let counts: Vec<usize> = (1..=6).map(|d| operand_count(d, 2, 6)).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_divisors_in_range() {
    assert_eq!(divisors_in_range(12, &(0..=9)), vec![1, 2, 3, 4, 6]);
    assert_eq!(divisors_in_range(-12, &(0..=9)), vec![1, 2, 3, 4, 6]);
    assert_eq!(divisors_in_range(110, &(10..=99)), vec![10, 11, 22, 55]);
    assert_eq!(divisors_in_range(7, &(10..=99)), Vec::<i64>::new());
    assert_eq!(divisors_in_range(0, &(0..=9)), Vec::<i64>::new());
}

#[test]
fn test_divisors_in_range_large_value() {
    let value = 999_999_i128.pow(6);
    let divisors = divisors_in_range(value, &(100_000..=999_999));
    assert!(divisors.contains(&999_999));
    assert!(divisors.iter().all(|&d| value % i128::from(d) == 0));
}

#[test]
fn test_validate_difficulty() {
    assert_eq!(validate_difficulty(1, 4), Ok(1));
    assert_eq!(validate_difficulty(4, 4), Ok(4));
    for bad in [0, -1, 5, i64::MAX] {
        assert_eq!(
            validate_difficulty(bad, 4),
            Err(UtilsError::InvalidDifficulty {
                difficulty: bad,
                max: 4
            })
        );
    }
}

#[test]
fn test_validate_count() {
    assert!(validate_count(1).is_ok());
    assert!(validate_count(1000).is_ok());
    assert_eq!(validate_count(0), Err(UtilsError::InvalidCount(0)));
}

#[test]
fn test_validate_operand_count() {
    assert!(validate_operand_count(2, 2, 5).is_ok());
    assert!(validate_operand_count(5, 2, 5).is_ok());
    assert!(validate_operand_count(1, 2, 5).is_err());
    assert!(validate_operand_count(0, 2, 5).is_err());
    assert!(validate_operand_count(6, 2, 5).is_err());
}
