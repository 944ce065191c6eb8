use crate::error::TimecodeError;
use crate::rate::{FrameRate, UpperLimit};
use crate::types::{Components, FrameCount, TimecodeField, TimecodeProperties};
use crate::validation::policy::{clamped, clamped_components, wrapped};
use crate::validation::{Validation, is_valid, validate, validate_frame_count};

fn hours(hour: i64) -> Components {
    Components {
        hour,
        ..Components::ZERO
    }
}

// ===== Exact =====

#[test]
fn test_exact_accepts_valid() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    let c = Components::hmsf(1, 2, 3, 4);
    assert_eq!(validate(c, &p, Validation::Exact).unwrap(), c);
}

#[test]
fn test_exact_rejects_out_of_range() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    let err = validate(hours(25), &p, Validation::Exact).unwrap_err();
    assert_eq!(
        err,
        TimecodeError::OutOfBounds {
            fields: vec![TimecodeField::Hour]
        }
    );
}

// ===== Clamp =====

#[test]
fn test_clamp_whole_vs_clamp_each() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    assert_eq!(
        validate(hours(25), &p, Validation::Clamp).unwrap(),
        Components::hmsf(23, 59, 59, 23)
    );
    assert_eq!(
        validate(hours(25), &p, Validation::ClampComponents).unwrap(),
        Components::hmsf(23, 0, 0, 0)
    );
}

#[test]
fn test_clamp_whole_negative_goes_to_zero() {
    let p = TimecodeProperties::new(FrameRate::Fps29_97Drop);
    let c = Components {
        minute: -5,
        ..Components::ZERO
    };
    assert_eq!(clamped(&c, &p), Components::ZERO);
}

#[test]
fn test_clamp_whole_carries_overflowing_fields() {
    let p = TimecodeProperties::new(FrameRate::Fps25);
    let c = Components::hmsf(1, 59, 59, 30);
    assert_eq!(clamped(&c, &p), Components::hmsf(2, 0, 0, 5));
}

#[test]
fn test_clamp_whole_100_days() {
    let p = TimecodeProperties::builder()
        .frame_rate(FrameRate::Fps59_94Drop)
        .upper_limit(UpperLimit::Max100Days)
        .build();
    let c = Components::new(150, 0, 0, 0, 0, 0);
    assert_eq!(clamped(&c, &p), Components::new(99, 23, 59, 59, 59, 0));
}

#[test]
fn test_clamp_each_field() {
    let p = TimecodeProperties::new(FrameRate::Fps29_97Drop);
    let c = Components::new(3, -2, 75, 0, 0, 200);
    // minute clamps to 59, so frame 0 at second 0 is a dropped number
    assert_eq!(
        clamped_components(&c, &p),
        Components::new(0, 0, 59, 0, 2, 79)
    );
    assert!(is_valid(&clamped_components(&c, &p), &p));
}

// ===== Wrap =====

#[test]
fn test_wrap_negative_frame() {
    for rate in FrameRate::ALL {
        let p = TimecodeProperties::new(rate);
        let c = Components {
            frame: -1,
            ..Components::ZERO
        };
        assert_eq!(
            validate(c, &p, Validation::Wrap).unwrap(),
            Components::hmsf(23, 59, 59, rate.max_frames() - 1),
            "{rate}"
        );
    }
}

#[test]
fn test_wrap_overflow() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    assert_eq!(wrapped(&hours(25), &p), hours(1));
    assert_eq!(wrapped(&hours(24), &p), Components::ZERO);
    assert_eq!(wrapped(&hours(-1), &p), hours(23));
}

#[test]
fn test_wrap_100_days() {
    let p = TimecodeProperties::builder()
        .frame_rate(FrameRate::Fps30)
        .upper_limit(UpperLimit::Max100Days)
        .build();
    let c = Components::new(101, 2, 0, 0, 0, 0);
    assert_eq!(wrapped(&c, &p), Components::new(1, 2, 0, 0, 0, 0));
}

// ===== Allow invalid =====

#[test]
fn test_allow_invalid_stores_verbatim() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    let c = Components::new(7, 99, -3, 88, 1_000, -1);
    assert_eq!(validate(c, &p, Validation::AllowInvalid).unwrap(), c);
}

// ===== Frame counts =====

#[test]
fn test_validate_frame_count() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    let past_end = FrameCount::frames(2_073_600, p.sub_frames_base);

    assert!(validate_frame_count(&past_end, &p, Validation::Exact).is_err());
    assert_eq!(
        validate_frame_count(&past_end, &p, Validation::Clamp).unwrap(),
        Components::hmsf(23, 59, 59, 23)
    );
    assert_eq!(
        validate_frame_count(&past_end, &p, Validation::Wrap).unwrap(),
        Components::ZERO
    );
    assert_eq!(
        validate_frame_count(&past_end, &p, Validation::AllowInvalid).unwrap(),
        Components::new(1, 0, 0, 0, 0, 0)
    );

    let inside_last_frame = FrameCount::split(2_073_599, 40, p.sub_frames_base);
    assert_eq!(
        validate_frame_count(&inside_last_frame, &p, Validation::Clamp).unwrap(),
        Components::new(0, 23, 59, 59, 23, 40)
    );
}
