use crate::types::Fraction;

#[test]
fn test_reduced_is_exact() {
    assert_eq!(Fraction::new(6, 3).reduced(), Fraction::new(2, 1));
    assert_eq!(Fraction::new(1001, -24000).reduced(), Fraction::new(-1001, 24000));
    assert_eq!(Fraction::new(5, 0).reduced(), Fraction::new(5, 0));
}

#[test]
fn test_reduced_by_common_factors_only_strips_tens_and_twos() {
    assert_eq!(
        Fraction::new(48_000, 24_000).reduced_by_common_factors(),
        Fraction::new(6, 3)
    );
    assert_eq!(
        Fraction::new(1001, 30_000).reduced_by_common_factors(),
        Fraction::new(1001, 30_000)
    );
    assert_eq!(
        Fraction::new(2002, 60_000).reduced_by_common_factors(),
        Fraction::new(1001, 30_000)
    );
    // 3 is never divided out
    assert_eq!(
        Fraction::new(6, 3).reduced_by_common_factors(),
        Fraction::new(6, 3)
    );
    assert_eq!(
        Fraction::new(60, 24).reduced_by_common_factors(),
        Fraction::new(15, 6)
    );
    assert_eq!(
        Fraction::new(0, 24_000).reduced_by_common_factors(),
        Fraction::new(0, 3)
    );
}

#[test]
fn test_value_equality() {
    assert!(Fraction::new(1, 2).is_value_equal(&Fraction::new(40, 80)));
    assert_ne!(Fraction::new(1, 2), Fraction::new(40, 80));
    assert!(!Fraction::new(1, 2).is_value_equal(&Fraction::new(1, 3)));
}

#[test]
fn test_sign_and_double() {
    assert!(Fraction::new(-1, 2).is_negative());
    assert!(Fraction::new(1, -2).is_negative());
    assert!(!Fraction::new(-1, -2).is_negative());
    assert!(!Fraction::new(0, -2).is_negative());
    assert!((Fraction::new(3, 4).double_value() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_display() {
    assert_eq!(Fraction::new(1001, 30000).to_string(), "1001/30000");
}
