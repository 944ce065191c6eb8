use crate::rate::{FrameRate, SubFramesBase, UpperLimit};
use crate::types::{Components, TimecodeField, TimecodeProperties};
use crate::validation::{invalid_fields, is_valid, valid_range};

#[test]
fn test_valid_components() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    assert!(is_valid(&Components::ZERO, &p));
    assert!(is_valid(&Components::new(0, 23, 59, 59, 23, 79), &p));
}

#[test]
fn test_invalid_fields_are_listed_most_significant_first() {
    let p = TimecodeProperties::new(FrameRate::Fps24);
    let c = Components::new(1, 24, 60, 60, 24, 80);
    assert_eq!(invalid_fields(&c, &p), TimecodeField::ALL.to_vec());

    let c = Components {
        minute: -1,
        frame: 30,
        ..Components::ZERO
    };
    assert_eq!(
        invalid_fields(&c, &p),
        vec![TimecodeField::Minute, TimecodeField::Frame]
    );
}

#[test]
fn test_day_range_follows_upper_limit() {
    let day = Components::new(99, 0, 0, 0, 0, 0);
    let p = TimecodeProperties::new(FrameRate::Fps25);
    assert_eq!(invalid_fields(&day, &p), vec![TimecodeField::Day]);

    let p = TimecodeProperties::builder()
        .frame_rate(FrameRate::Fps25)
        .upper_limit(UpperLimit::Max100Days)
        .build();
    assert!(is_valid(&day, &p));
    assert!(!is_valid(&Components::new(100, 0, 0, 0, 0, 0), &p));
}

#[test]
fn test_sub_frame_range_follows_base() {
    let c = Components::new(0, 0, 0, 0, 0, 99);
    let p = TimecodeProperties::new(FrameRate::Fps24);
    assert_eq!(invalid_fields(&c, &p), vec![TimecodeField::SubFrame]);

    let p = TimecodeProperties::builder()
        .sub_frames_base(SubFramesBase::Max100SubFrames)
        .build();
    assert!(is_valid(&c, &p));
}

#[test]
fn test_drop_frame_skipped_numbers_are_invalid() {
    let p = TimecodeProperties::new(FrameRate::Fps29_97Drop);
    assert_eq!(
        invalid_fields(&Components::hmsf(0, 1, 0, 0), &p),
        vec![TimecodeField::Frame]
    );
    assert!(!is_valid(&Components::hmsf(0, 1, 0, 1), &p));
    assert!(is_valid(&Components::hmsf(0, 1, 0, 2), &p));
    assert!(is_valid(&Components::hmsf(0, 10, 0, 0), &p));
    assert!(is_valid(&Components::hmsf(0, 1, 1, 0), &p));

    let p = TimecodeProperties::new(FrameRate::Fps59_94Drop);
    assert!(!is_valid(&Components::hmsf(0, 1, 0, 3), &p));
    assert!(is_valid(&Components::hmsf(0, 1, 0, 4), &p));
}

#[test]
fn test_valid_range_per_field() {
    let p = TimecodeProperties::new(FrameRate::Fps120Drop);
    let c = Components::hmsf(0, 1, 0, 0);
    assert_eq!(valid_range(TimecodeField::Hour, &c, &p), 0..=23);
    assert_eq!(valid_range(TimecodeField::Frame, &c, &p), 8..=119);
    assert_eq!(
        valid_range(TimecodeField::Frame, &Components::ZERO, &p),
        0..=119
    );
}
