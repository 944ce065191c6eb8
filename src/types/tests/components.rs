use crate::types::{Components, TimecodeField};

#[test]
fn test_zero_and_default() {
    assert_eq!(Components::default(), Components::ZERO);
    assert!(Components::ZERO.is_zero());
    assert!(!Components::hmsf(0, 0, 0, 1).is_zero());
}

#[test]
fn test_get_and_set() {
    let mut c = Components::new(1, 2, 3, 4, 5, 6);
    for (field, expected) in TimecodeField::ALL.iter().zip(1..=6) {
        assert_eq!(c.get(*field), expected);
    }
    c.set(TimecodeField::Minute, 59);
    assert_eq!(c.minute, 59);
}

#[test]
fn test_is_negative() {
    assert!(!Components::hmsf(1, 1, 5, 0).is_negative());
    assert!(
        Components {
            hour: -1,
            minute: 1,
            second: 5,
            ..Components::ZERO
        }
        .is_negative()
    );
    assert!(
        Components {
            frame: -1,
            ..Components::ZERO
        }
        .is_negative()
    );
}

#[test]
fn test_mixed_signs_are_not_sign_normalized() {
    let mixed = Components::hmsf(1, 0, 0, -1);
    assert!(!mixed.is_sign_normalized());
    assert!(!mixed.is_negative());
    assert!(!Components::hmsf(-1, 0, -2, 0).is_sign_normalized());
    assert!(Components::hmsf(-1, 0, 0, 5).is_sign_normalized());
    assert!(Components::hmsf(0, 0, 0, -5).is_sign_normalized());
    assert!(Components::ZERO.is_sign_normalized());
}

#[test]
fn test_magnitude_saturates_at_min() {
    let c = Components::new(i64::MIN, 0, 0, 0, 0, -3);
    assert_eq!(c.magnitude(), Components::new(i64::MAX, 0, 0, 0, 0, 3));
    assert_eq!(c.negated_leading().day, i64::MAX);
}

#[test]
fn test_negated_leading_only_touches_first_nonzero_field() {
    let c = Components::hmsf(1, 1, 5, 0).negated_leading();
    assert_eq!(
        c,
        Components {
            hour: -1,
            minute: 1,
            second: 5,
            ..Components::ZERO
        }
    );
    assert_eq!(c.magnitude(), Components::hmsf(1, 1, 5, 0));
    assert_eq!(Components::ZERO.negated_leading(), Components::ZERO);

    let frames_only = Components::hmsf(0, 0, 0, 12).negated_leading();
    assert_eq!(frames_only.frame, -12);
}

#[test]
fn test_ordering_is_lexicographic() {
    let a = Components::new(0, 1, 59, 59, 23, 79);
    let b = Components::new(0, 2, 0, 0, 0, 0);
    let c = Components::new(1, 0, 0, 0, 0, 0);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_array_conversion() {
    let c = Components::from([1, 2, 3, 4, 5, 6]);
    let back: [i64; 6] = c.into();
    assert_eq!(back, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_serde_round_trip() {
    let c = Components::new(2, 10, 20, 30, 12, 40);
    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains("\"hour\":10"));
    let back: Components = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
